//! Configuration module for the tweet decoder.
//!
//! This module contains the decoder settings and the environment variable
//! handling used to load them.

use log::{debug, info, warn};
use std::env;

/// Environment variable toggling ticker symbol extraction.
pub const EXTRACT_TICKER_SYMBOLS_VAR: &str = "TWEETBIND_EXTRACT_TICKER_SYMBOLS";

/// Environment variable setting the maximum length of tweet text in log output.
pub const LOG_TEXT_MAX_LEN_VAR: &str = "TWEETBIND_LOG_TEXT_MAX_LEN";

const DEFAULT_LOG_TEXT_MAX_LEN: usize = 100;

/// Settings that control how tweet payloads are decoded.
///
/// The defaults reproduce the platform-compatible behavior: ticker symbols are
/// extracted from the full text and appended to the decoded entities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Whether `$SYMBOL` runs in the text are turned into ticker symbol entities
    pub extract_ticker_symbols: bool,
    /// Tweet text longer than this is truncated before it is logged
    pub log_text_max_len: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            extract_ticker_symbols: true,
            log_text_max_len: DEFAULT_LOG_TEXT_MAX_LEN,
        }
    }
}

impl DecoderConfig {
    /// Loads the decoder configuration from environment variables.
    ///
    /// Reads `TWEETBIND_EXTRACT_TICKER_SYMBOLS` and `TWEETBIND_LOG_TEXT_MAX_LEN`.
    /// Unset variables fall back to their defaults; values that cannot be parsed
    /// are logged and also fall back to their defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tweetbind::DecoderConfig;
    ///
    /// // With no TWEETBIND_* variables set
    /// let config = DecoderConfig::from_env();
    /// assert!(config.extract_ticker_symbols);
    /// ```
    pub fn from_env() -> Self {
        let config = Self::from_lookup(|key| env::var(key).ok());
        info!(
            "Decoder configuration loaded (extract_ticker_symbols: {}, log_text_max_len: {})",
            config.extract_ticker_symbols, config.log_text_max_len
        );
        config
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Decoupled from the process environment so the parsing rules can be
    /// exercised with a plain map.
    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let extract_ticker_symbols = match lookup(EXTRACT_TICKER_SYMBOLS_VAR) {
            Some(raw) => parse_flag(&raw).unwrap_or_else(|| {
                warn!(
                    "Invalid value '{}' for {}, using default {}",
                    raw, EXTRACT_TICKER_SYMBOLS_VAR, defaults.extract_ticker_symbols
                );
                defaults.extract_ticker_symbols
            }),
            None => {
                debug!("{} not set, using default", EXTRACT_TICKER_SYMBOLS_VAR);
                defaults.extract_ticker_symbols
            }
        };

        let log_text_max_len = match lookup(LOG_TEXT_MAX_LEN_VAR) {
            Some(raw) => raw.trim().parse::<usize>().unwrap_or_else(|e| {
                warn!(
                    "Invalid value '{}' for {} ({}), using default {}",
                    raw, LOG_TEXT_MAX_LEN_VAR, e, defaults.log_text_max_len
                );
                defaults.log_text_max_len
            }),
            None => {
                debug!("{} not set, using default", LOG_TEXT_MAX_LEN_VAR);
                defaults.log_text_max_len
            }
        };

        Self {
            extract_ticker_symbols,
            log_text_max_len,
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = DecoderConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, DecoderConfig::default());
        assert!(config.extract_ticker_symbols);
        assert_eq!(config.log_text_max_len, 100);
    }

    #[test]
    fn test_reads_overrides() {
        let config = DecoderConfig::from_lookup(lookup_from(&[
            (EXTRACT_TICKER_SYMBOLS_VAR, "No"),
            (LOG_TEXT_MAX_LEN_VAR, " 40 "),
        ]));
        assert!(!config.extract_ticker_symbols);
        assert_eq!(config.log_text_max_len, 40);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = DecoderConfig::from_lookup(lookup_from(&[
            (EXTRACT_TICKER_SYMBOLS_VAR, "maybe"),
            (LOG_TEXT_MAX_LEN_VAR, "-3"),
        ]));
        assert_eq!(config, DecoderConfig::default());
    }
}
