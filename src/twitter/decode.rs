//! Decoding of `extended_tweet` payloads.
//!
//! The decoder is a plain function over a parsed [`serde_json::Value`], so it
//! can be driven from a raw API response, from a serde `Deserialize` impl, or
//! from a test fixture alike.

use log::{debug, info, warn};
use serde::de::{self, Deserialize, Deserializer};
use serde_json::Value;

use crate::config::DecoderConfig;
use crate::error::DecodeError;

use super::entities::{decode_entities, Entities};
use super::extended_tweet::ExtendedTweet;
use super::parsing::{extract_ticker_symbols, sanitize_for_logging};

/// Decodes an `extended_tweet` JSON object using the default configuration.
///
/// # Parameters
///
/// - `node`: The `extended_tweet` value, or `None` if the key was missing
///
/// # Returns
///
/// - `Ok(Some(ExtendedTweet))`: The decoded value
/// - `Ok(None)`: If the node is absent or `null`
/// - `Err(DecodeError)`: If `display_text_range` does not hold exactly two
///   elements, or the nested `entities` object is malformed
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use tweetbind::twitter::decode_extended_tweet;
///
/// let node = json!({
///     "full_text": "Buy $AAPL now",
///     "display_text_range": [0, 13],
///     "entities": {}
/// });
/// let tweet = decode_extended_tweet(Some(&node)).unwrap().unwrap();
/// assert_eq!(tweet.display_text_range(), Some([0, 13]));
/// assert_eq!(tweet.entities().unwrap().ticker_symbols[0].symbol, "AAPL");
/// ```
pub fn decode_extended_tweet(node: Option<&Value>) -> Result<Option<ExtendedTweet>, DecodeError> {
    decode_extended_tweet_with(node, &DecoderConfig::default())
}

/// Decodes an `extended_tweet` JSON object with an explicit configuration.
///
/// Unrecognized keys are ignored. A missing or `null` `full_text` leaves the
/// text absent, and a `display_text_range` that is not an array leaves the
/// range absent.
///
/// # Errors
///
/// - [`DecodeError::DisplayTextRangeSize`] if `display_text_range` is an array
///   whose length is not two
/// - [`DecodeError::Json`] if `entities` does not match the entities shape
pub fn decode_extended_tweet_with(
    node: Option<&Value>,
    config: &DecoderConfig,
) -> Result<Option<ExtendedTweet>, DecodeError> {
    let Some(node) = node.filter(|n| !n.is_null()) else {
        debug!("No extended_tweet in payload");
        return Ok(None);
    };

    debug!("Decoding extended_tweet");
    let mut tweet = ExtendedTweet::new();

    if let Some(full_text) = node.get("full_text") {
        let text = value_as_text(full_text);
        if let Some(text) = &text {
            debug!(
                "full_text: {}",
                sanitize_for_logging(text, config.log_text_max_len)
            );
        }
        tweet.set_full_text(text);
    }

    tweet.set_display_text_pair(decode_display_text_range(node.get("display_text_range"))?);

    if let Some(entities) = decode_entities_with_tickers(node, tweet.full_text(), config)? {
        tweet.set_entities(Some(entities));
    }

    Ok(Some(tweet))
}

/// Reads a `display_text_range` array into a `(start, end)` pair.
///
/// Anything other than an array decodes as absent; an array of any length
/// other than two is an error.
pub(crate) fn decode_display_text_range(
    node: Option<&Value>,
) -> Result<Option<[u32; 2]>, DecodeError> {
    let Some(items) = node.and_then(Value::as_array) else {
        return Ok(None);
    };

    match items.as_slice() {
        [start, end] => {
            let range = [value_as_offset(start), value_as_offset(end)];
            debug!("display_text_range: {:?}", range);
            Ok(Some(range))
        }
        _ => {
            warn!(
                "Rejecting display_text_range with {} elements",
                items.len()
            );
            Err(DecodeError::DisplayTextRangeSize(items.len()))
        }
    }
}

/// Decodes the `entities` key of a tweet-like object and appends ticker
/// symbols found in `text` to it.
///
/// Returns `Ok(None)` when the key is missing or `null`.
pub(crate) fn decode_entities_with_tickers(
    node: &Value,
    text: Option<&str>,
    config: &DecoderConfig,
) -> Result<Option<Entities>, DecodeError> {
    let Some(entities_node) = node.get("entities").filter(|n| !n.is_null()) else {
        return Ok(None);
    };

    let mut entities = decode_entities(entities_node)?;
    debug!("Decoded {} platform entities", entities.len());

    if let Some(text) = text.filter(|_| config.extract_ticker_symbols) {
        let symbols = extract_ticker_symbols(text);
        if !symbols.is_empty() {
            info!("Extracted {} ticker symbols from text", symbols.len());
        }
        entities.ticker_symbols.extend(symbols);
    }

    Ok(Some(entities))
}

/// Reads a JSON value as text: strings as-is, numbers and booleans as their
/// JSON form, anything else as absent.
pub(crate) fn value_as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Coerces a JSON value to a non-negative character offset.
///
/// Negative numbers clamp to zero and oversized ones saturate; floats are
/// truncated, numeric strings parsed, and anything else reads as zero.
fn value_as_offset(value: &Value) -> u32 {
    let clamp = |n: i64| n.clamp(0, i64::from(u32::MAX)) as u32;
    match value {
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                u32::try_from(u).unwrap_or(u32::MAX)
            } else if let Some(i) = n.as_i64() {
                clamp(i)
            } else {
                // `as` saturates and maps NaN to zero
                n.as_f64().map_or(0, |f| f as u32)
            }
        }
        Value::String(s) => s.trim().parse::<i64>().map_or(0, clamp),
        _ => 0,
    }
}

impl<'de> Deserialize<'de> for ExtendedTweet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let node = Value::deserialize(deserializer)?;
        decode_extended_tweet(Some(&node))
            .map_err(de::Error::custom)?
            .ok_or_else(|| de::Error::custom("extended_tweet is null"))
    }
}
