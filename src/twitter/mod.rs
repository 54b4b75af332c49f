//! Twitter/X payload decoding module.
//!
//! This module contains the value objects for tweets and their inline
//! entities, and the functions that decode them from parsed JSON.

mod decode;
mod entities;
mod extended_tweet;
mod parsing;
mod tweet;

// Re-export public API
pub use decode::{decode_extended_tweet, decode_extended_tweet_with};
pub use entities::{
    decode_entities, Entities, HashtagEntity, MediaEntity, MentionEntity, TickerSymbolEntity,
    UrlEntity,
};
pub use extended_tweet::ExtendedTweet;
pub use parsing::{extract_ticker_symbols, ticker_search_url};
pub use tweet::{decode_tweet, decode_tweet_str, decode_tweet_with, Tweet};
