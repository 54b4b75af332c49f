//! The enclosing tweet object.
//!
//! This module decodes the subset of a v1.1 tweet payload that carries text:
//! the possibly truncated `text`, its entities, and the `extended_tweet`
//! holding the full body when the post was truncated.

use log::debug;
use serde::Serialize;
use serde_json::Value;

use crate::config::DecoderConfig;
use crate::error::DecodeError;

use super::decode::{
    decode_display_text_range, decode_entities_with_tickers, decode_extended_tweet_with,
    value_as_text,
};
use super::entities::Entities;
use super::extended_tweet::ExtendedTweet;

/// A tweet, with its extended body when the platform truncated it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Tweet {
    pub id: String,
    pub text: String,
    pub truncated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_text_range: Option<[u32; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Entities>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended_tweet: Option<ExtendedTweet>,
}

impl Tweet {
    /// Returns the untruncated text: the extended body when present,
    /// otherwise `text`.
    pub fn full_text(&self) -> &str {
        self.extended_tweet
            .as_ref()
            .and_then(ExtendedTweet::full_text)
            .unwrap_or(self.text.as_str())
    }
}

/// Decodes a tweet JSON object using the default configuration.
///
/// # Returns
///
/// - `Ok(Some(Tweet))`: The decoded tweet
/// - `Ok(None)`: If the node is absent or `null`
/// - `Err(DecodeError)`: If a display range or an entities object is malformed,
///   here or inside `extended_tweet`
pub fn decode_tweet(node: Option<&Value>) -> Result<Option<Tweet>, DecodeError> {
    decode_tweet_with(node, &DecoderConfig::default())
}

/// Decodes a tweet JSON object with an explicit configuration.
pub fn decode_tweet_with(
    node: Option<&Value>,
    config: &DecoderConfig,
) -> Result<Option<Tweet>, DecodeError> {
    let Some(node) = node.filter(|n| !n.is_null()) else {
        return Ok(None);
    };

    let id = node
        .get("id_str")
        .and_then(Value::as_str)
        .map(str::to_string)
        .or_else(|| node.get("id").and_then(value_as_text))
        .unwrap_or_default();
    debug!("Decoding tweet {}", id);

    let text = node
        .get("text")
        .filter(|v| !v.is_null())
        .or_else(|| node.get("full_text"))
        .and_then(value_as_text)
        .unwrap_or_default();

    let truncated = node
        .get("truncated")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    let display_text_range = decode_display_text_range(node.get("display_text_range"))?;
    let entities = decode_entities_with_tickers(node, Some(text.as_str()), config)?;
    let extended_tweet = decode_extended_tweet_with(node.get("extended_tweet"), config)?;

    Ok(Some(Tweet {
        id,
        text,
        truncated,
        display_text_range,
        entities,
        extended_tweet,
    }))
}

/// Parses raw JSON and decodes it as a tweet.
///
/// # Errors
///
/// Returns [`DecodeError::Json`] if `raw` is not valid JSON, or any error
/// [`decode_tweet`] can return.
///
/// # Example
///
/// ```rust
/// use tweetbind::twitter::decode_tweet_str;
///
/// let raw = r#"{
///     "id_str": "1",
///     "text": "Long post about $TSLA…",
///     "truncated": true,
///     "extended_tweet": { "full_text": "Long post about $TSLA and more", "entities": {} }
/// }"#;
/// let tweet = decode_tweet_str(raw).unwrap().unwrap();
/// assert_eq!(tweet.full_text(), "Long post about $TSLA and more");
/// ```
pub fn decode_tweet_str(raw: &str) -> Result<Option<Tweet>, DecodeError> {
    let node: Value = serde_json::from_str(raw)?;
    decode_tweet(Some(&node))
}
