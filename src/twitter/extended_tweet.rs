//! The extended tweet value object.
//!
//! The platform sends an `extended_tweet` object when a post is longer than the
//! legacy truncation length. It carries the untruncated text separately from
//! the truncated copy on the enclosing tweet.

use serde::Serialize;
use std::fmt;

use crate::error::InvalidArgument;

use super::entities::Entities;

/// The untruncated body of a tweet, with its display range and entities.
///
/// Two values are equal (and hash equally) when all three fields are equal;
/// the display range is compared element-wise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ExtendedTweet {
    #[serde(skip_serializing_if = "Option::is_none")]
    full_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_text_range: Option<[u32; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    entities: Option<Entities>,
}

impl ExtendedTweet {
    /// Creates an extended tweet with every field absent.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn full_text(&self) -> Option<&str> {
        self.full_text.as_deref()
    }

    pub fn set_full_text(&mut self, full_text: Option<String>) {
        self.full_text = full_text;
    }

    /// Returns a copy of the `(start, end)` display range, if one was set.
    ///
    /// `None` means the whole of the full text is meant for display.
    pub fn display_text_range(&self) -> Option<[u32; 2]> {
        self.display_text_range
    }

    /// Sets or clears the display range.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] if `range` is present and does not hold
    /// exactly two elements. The stored range is left untouched in that case.
    pub fn set_display_text_range(&mut self, range: Option<&[u32]>) -> Result<(), InvalidArgument> {
        self.display_text_range = match range {
            None => None,
            Some(&[start, end]) => Some([start, end]),
            Some(other) => return Err(InvalidArgument { len: other.len() }),
        };
        Ok(())
    }

    /// Sets or clears the display range from an already well-formed pair.
    pub fn set_display_text_pair(&mut self, range: Option<[u32; 2]>) {
        self.display_text_range = range;
    }

    pub fn entities(&self) -> Option<&Entities> {
        self.entities.as_ref()
    }

    pub fn set_entities(&mut self, entities: Option<Entities>) {
        self.entities = entities;
    }

    /// Returns the part of the full text selected by the display range.
    ///
    /// Offsets are counted in characters and clamped to the text length; an
    /// inverted range selects nothing. Without a range the whole text is
    /// returned.
    pub fn display_text(&self) -> Option<&str> {
        let text = self.full_text.as_deref()?;
        let Some([start, end]) = self.display_text_range else {
            return Some(text);
        };

        let byte_offset = |chars: u32| {
            text.char_indices()
                .nth(chars as usize)
                .map_or(text.len(), |(i, _)| i)
        };
        let start = byte_offset(start);
        let end = byte_offset(end);
        if start >= end {
            return Some("");
        }
        Some(&text[start..end])
    }
}

impl fmt::Display for ExtendedTweet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ExtendedTweet{full_text=")?;
        match &self.full_text {
            Some(text) => write!(f, "'{}'", text)?,
            None => f.write_str("null")?,
        }
        f.write_str(", display_text_range=")?;
        match self.display_text_range {
            Some([start, end]) => write!(f, "[{}, {}]", start, end)?,
            None => f.write_str("null")?,
        }
        f.write_str(", entities=")?;
        match &self.entities {
            Some(entities) => write!(f, "{}", entities)?,
            None => f.write_str("null")?,
        }
        f.write_str("}")
    }
}
