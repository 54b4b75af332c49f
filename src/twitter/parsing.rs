//! Text parsing and extraction utilities for Twitter content.
//!
//! This module contains functions for scanning tweet text for inline entities
//! the platform does not report itself, and for preparing text for log output.

use regex::Regex;
use std::sync::LazyLock;

use super::entities::TickerSymbolEntity;

/// A `$` immediately followed by one or more ASCII letters.
static TICKER_SYMBOL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$[A-Za-z]+").expect("valid regex"));

/// Builds the search link the platform uses for a cashtag.
///
/// The `$` is sent URL-encoded as `%24`; the symbol itself only ever contains
/// ASCII letters and is appended verbatim.
///
/// # Example
///
/// ```rust
/// use tweetbind::twitter::ticker_search_url;
///
/// assert_eq!(
///     ticker_search_url("AAPL"),
///     "https://twitter.com/search?q=%24AAPL&src=ctag"
/// );
/// ```
pub fn ticker_search_url(symbol: &str) -> String {
    format!("https://twitter.com/search?q=%24{}&src=ctag", symbol)
}

/// Extracts ticker symbol entities ("cashtags") from tweet text.
///
/// Scans the text left to right for non-overlapping `$LETTERS` runs. Each match
/// produces one entity whose symbol is the run without its `$`, and whose
/// indices span the whole run (end exclusive), counted in characters.
/// Offsets count Unicode scalar values, not UTF-16 code units, so a character
/// outside the Basic Multilingual Plane such as `𝕏` advances them by one.
/// Letters are kept as written; no case folding is applied.
///
/// # Parameters
///
/// - `text`: The tweet text to scan
///
/// # Returns
///
/// The entities in the order they occur in the text. Text without any
/// cashtags yields an empty vector.
///
/// # Example
///
/// ```rust
/// use tweetbind::twitter::extract_ticker_symbols;
///
/// let symbols = extract_ticker_symbols("Buy $AAPL and $msft now");
/// assert_eq!(symbols[0].symbol, "AAPL");
/// assert_eq!(symbols[0].indices, [4, 9]);
/// assert_eq!(symbols[1].symbol, "msft");
/// assert_eq!(symbols[1].indices, [14, 19]);
/// ```
pub fn extract_ticker_symbols(text: &str) -> Vec<TickerSymbolEntity> {
    let mut symbols = Vec::new();

    // Regex offsets are in bytes; walk forward once to convert them to chars
    let mut byte_pos = 0;
    let mut char_pos = 0;

    for mat in TICKER_SYMBOL_RE.find_iter(text) {
        char_pos += text[byte_pos..mat.start()].chars().count();
        let start = char_pos;
        // The match is ASCII only, so its byte length is its char length
        let end = start + mat.len();
        byte_pos = mat.end();
        char_pos = end;

        let symbol = &mat.as_str()[1..];
        symbols.push(TickerSymbolEntity::new(
            symbol,
            [saturate(start), saturate(end)],
        ));
    }

    symbols
}

fn saturate(offset: usize) -> u32 {
    u32::try_from(offset).unwrap_or(u32::MAX)
}

/// Sanitizes text for safe logging by truncating and escaping control characters.
///
/// This function:
/// - Replaces newlines and tabs with spaces to prevent log injection
/// - Replaces any other control character with `?`
/// - Truncates on a character boundary once `max_len` characters are reached
///
/// # Parameters
///
/// - `text`: The text to sanitize
/// - `max_len`: Maximum number of characters before truncation
///
/// # Returns
///
/// A sanitized string safe for logging
pub(crate) fn sanitize_for_logging(text: &str, max_len: usize) -> String {
    let sanitized: String = text
        .chars()
        .map(|c| match c {
            '\n' | '\r' | '\t' => ' ',
            c if c.is_control() => '?',
            c => c,
        })
        .collect();

    match sanitized.char_indices().nth(max_len) {
        Some((cut, _)) => format!(
            "{}... [truncated, {} total chars]",
            &sanitized[..cut],
            text.chars().count()
        ),
        None => sanitized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_symbols_in_order() {
        let symbols = extract_ticker_symbols("Buy $AAPL and $msft now");
        assert_eq!(symbols.len(), 2);

        assert_eq!(symbols[0].symbol, "AAPL");
        assert_eq!(
            symbols[0].url,
            "https://twitter.com/search?q=%24AAPL&src=ctag"
        );
        assert_eq!(symbols[0].indices, [4, 9]);

        assert_eq!(symbols[1].symbol, "msft");
        assert_eq!(
            symbols[1].url,
            "https://twitter.com/search?q=%24msft&src=ctag"
        );
        assert_eq!(symbols[1].indices, [14, 19]);
    }

    #[test]
    fn test_no_symbols() {
        assert!(extract_ticker_symbols("").is_empty());
        assert!(extract_ticker_symbols("no cashtags here").is_empty());
        // A bare dollar sign or a price is not a cashtag
        assert!(extract_ticker_symbols("costs $ 5 or $10").is_empty());
    }

    #[test]
    fn test_match_stops_at_non_letter() {
        let symbols = extract_ticker_symbols("$BRK.B and $GOOG2");
        let found: Vec<&str> = symbols.iter().map(|s| s.symbol.as_str()).collect();
        assert_eq!(found, vec!["BRK", "GOOG"]);
        assert_eq!(symbols[0].indices, [0, 4]);
        assert_eq!(symbols[1].indices, [11, 16]);
    }

    #[test]
    fn test_adjacent_symbols_do_not_overlap() {
        let symbols = extract_ticker_symbols("$A$B$$C");
        let found: Vec<(&str, [u32; 2])> = symbols
            .iter()
            .map(|s| (s.symbol.as_str(), s.indices))
            .collect();
        assert_eq!(found, vec![("A", [0, 2]), ("B", [2, 4]), ("C", [5, 7])]);
    }

    #[test]
    fn test_indices_span_the_match() {
        let text = "x $TSLA y $nvda";
        for symbol in extract_ticker_symbols(text) {
            let [start, end] = symbol.indices;
            let run: String = text
                .chars()
                .skip(start as usize)
                .take((end - start) as usize)
                .collect();
            assert_eq!(run, format!("${}", symbol.symbol));
        }
    }

    #[test]
    fn test_indices_count_characters_not_bytes() {
        // "é" is two bytes and the emoji four; both count as one character
        let symbols = extract_ticker_symbols("café 🚀 $ETH");
        assert_eq!(symbols.len(), 1);
        assert_eq!(symbols[0].symbol, "ETH");
        assert_eq!(symbols[0].indices, [7, 11]);

        // Astral characters count once, not as a surrogate pair
        let symbols = extract_ticker_symbols("𝕏 $Q\0$R");
        let found: Vec<(&str, [u32; 2])> = symbols
            .iter()
            .map(|s| (s.symbol.as_str(), s.indices))
            .collect();
        assert_eq!(found, vec![("Q", [2, 4]), ("R", [5, 7])]);
    }

    #[test]
    fn test_letters_are_ascii_only() {
        let symbols = extract_ticker_symbols("$ÄBC $abcÿ");
        let found: Vec<&str> = symbols.iter().map(|s| s.symbol.as_str()).collect();
        assert_eq!(found, vec!["abc"]);
    }

    #[test]
    fn test_sanitize_for_logging() {
        assert_eq!(sanitize_for_logging("a\nb\tc\u{7}", 100), "a b c?");
        assert_eq!(
            sanitize_for_logging("héllo wörld", 5),
            "héllo... [truncated, 11 total chars]"
        );
        assert_eq!(sanitize_for_logging("short", 5), "short");
    }
}
