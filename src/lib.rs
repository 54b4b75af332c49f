//! # Tweetbind Library
//!
//! Bindings for Twitter/X API payloads. The library decodes the `extended_tweet`
//! object the platform sends when a post is longer than the legacy truncation
//! length, together with the inline entities attached to the text.
//!
//! Decoding is pure: callers hand in a parsed [`serde_json::Value`] and get a
//! populated value object back. No requests are made and nothing is cached.
//!
//! ## Features
//!
//! - `ExtendedTweet` value object with a validated display text range
//! - Entity decoding for hashtags, mentions, URLs, media and cashtags
//! - Local extraction of `$SYMBOL` ticker entities from the full text
//! - Structured errors and logging through the `log` facade
//!
//! ## Configuration
//!
//! The following environment variables are read by [`DecoderConfig::from_env`]:
//! - `TWEETBIND_EXTRACT_TICKER_SYMBOLS`: Whether to extract cashtags (defaults to true)
//! - `TWEETBIND_LOG_TEXT_MAX_LEN`: Truncation length for logged text (defaults to 100)

pub mod config;
pub mod error;
pub mod twitter;

// Re-export commonly used types and functions
pub use config::DecoderConfig;
pub use error::{DecodeError, InvalidArgument};
pub use twitter::{decode_extended_tweet, decode_tweet, ExtendedTweet, Tweet};
