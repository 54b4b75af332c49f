//! Inline entities attached to tweet text.
//!
//! This module contains the entity types the platform reports alongside a
//! tweet (hashtags, mentions, URLs, media and cashtags) and the decoder that
//! maps an `entities` JSON object onto them.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

use crate::error::DecodeError;

use super::parsing::ticker_search_url;

/// A `#hashtag` occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HashtagEntity {
    pub text: String,
    pub indices: [u32; 2],
}

/// An `@screen_name` occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MentionEntity {
    #[serde(default)]
    pub id: i64,
    pub screen_name: String,
    #[serde(default)]
    pub name: String,
    pub indices: [u32; 2],
}

/// A shortened link in the text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UrlEntity {
    pub url: String,
    #[serde(default)]
    pub expanded_url: Option<String>,
    #[serde(default)]
    pub display_url: Option<String>,
    pub indices: [u32; 2],
}

/// An attached photo, video or animated GIF.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MediaEntity {
    #[serde(default)]
    pub id: i64,
    pub url: String,
    #[serde(default)]
    pub media_url_https: Option<String>,
    #[serde(default)]
    pub display_url: Option<String>,
    #[serde(default)]
    pub expanded_url: Option<String>,
    #[serde(rename = "type", default)]
    pub media_type: Option<String>,
    pub indices: [u32; 2],
}

/// A `$SYMBOL` cashtag occurrence.
///
/// The platform reports these under `symbols` as `{ "text", "indices" }`; the
/// search `url` is always derived from the symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawTickerSymbol")]
pub struct TickerSymbolEntity {
    /// The symbol without its leading `$`
    #[serde(rename = "text")]
    pub symbol: String,
    pub url: String,
    /// Start and end (exclusive) character offsets of `$SYMBOL` in the text
    pub indices: [u32; 2],
}

impl TickerSymbolEntity {
    /// Creates a cashtag entity, deriving its search URL from the symbol.
    pub fn new(symbol: impl Into<String>, indices: [u32; 2]) -> Self {
        let symbol = symbol.into();
        let url = ticker_search_url(&symbol);
        Self {
            symbol,
            url,
            indices,
        }
    }
}

#[derive(Deserialize)]
struct RawTickerSymbol {
    text: String,
    indices: [u32; 2],
}

impl From<RawTickerSymbol> for TickerSymbolEntity {
    fn from(raw: RawTickerSymbol) -> Self {
        Self::new(raw.text, raw.indices)
    }
}

/// The entities collection of a tweet.
///
/// Every list is empty when the platform omits its key or sends `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entities {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub hashtags: Vec<HashtagEntity>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub user_mentions: Vec<MentionEntity>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub urls: Vec<UrlEntity>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub media: Vec<MediaEntity>,
    #[serde(rename = "symbols", default, deserialize_with = "null_as_empty")]
    pub ticker_symbols: Vec<TickerSymbolEntity>,
}

impl Entities {
    /// Total number of entities across all lists.
    pub fn len(&self) -> usize {
        self.hashtags.len()
            + self.user_mentions.len()
            + self.urls.len()
            + self.media.len()
            + self.ticker_symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Entities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Entities{{hashtags={}, user_mentions={}, urls={}, media={}, ticker_symbols=[",
            self.hashtags.len(),
            self.user_mentions.len(),
            self.urls.len(),
            self.media.len(),
        )?;
        for (i, symbol) in self.ticker_symbols.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(
                f,
                "${}@{}..{}",
                symbol.symbol, symbol.indices[0], symbol.indices[1]
            )?;
        }
        f.write_str("]}")
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decodes an `entities` JSON object into an [`Entities`] collection.
///
/// # Errors
///
/// Returns [`DecodeError::Json`] if an entity list has the wrong shape, for
/// example when an entity's `indices` is not a pair of integers.
pub fn decode_entities(node: &Value) -> Result<Entities, DecodeError> {
    Ok(Entities::deserialize(node)?)
}
