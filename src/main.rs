//! # Tweetbind
//!
//! A command-line tool that decodes a tweet payload and prints the result as
//! JSON. Useful for inspecting what the library makes of a captured API
//! response.
//!
//! ## Usage
//!
//! ```bash
//! # Decode a full tweet from a file
//! tweetbind tweet.json
//!
//! # Decode a bare extended_tweet object from stdin
//! cat extended.json | tweetbind --extended
//!
//! # Show decoder logging
//! RUST_LOG=debug tweetbind tweet.json
//! ```
//!
//! ## Environment Variables
//!
//! - `TWEETBIND_EXTRACT_TICKER_SYMBOLS`: Whether to extract cashtags (defaults to true)
//! - `TWEETBIND_LOG_TEXT_MAX_LEN`: Truncation length for logged text (defaults to 100)

use clap::Parser;
use log::{error, info};
use std::io::{self, Read};
use std::path::PathBuf;

use tweetbind::twitter::{decode_extended_tweet_with, decode_tweet_with};
use tweetbind::{DecodeError, DecoderConfig};

#[derive(Debug, Parser)]
#[command(name = "tweetbind")]
#[command(about = "Decode a tweet payload and print it as JSON")]
struct Cli {
    /// Treat the payload as a bare `extended_tweet` object
    #[arg(long)]
    extended: bool,
    /// File holding the payload; stdin is read when omitted
    path: Option<PathBuf>,
}

/// Decodes a raw payload and renders the result as pretty JSON.
///
/// A payload of `null` renders as `null`.
fn render_payload(
    raw: &str,
    extended: bool,
    config: &DecoderConfig,
) -> Result<String, DecodeError> {
    let node: serde_json::Value = serde_json::from_str(raw)?;

    let json = if extended {
        serde_json::to_string_pretty(&decode_extended_tweet_with(Some(&node), config)?)?
    } else {
        serde_json::to_string_pretty(&decode_tweet_with(Some(&node), config)?)?
    };
    Ok(json)
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize the logging system
    env_logger::init();

    let cli = Cli::parse();

    let raw = match &cli.path {
        Some(path) => {
            info!("Reading payload from {}", path.display());
            std::fs::read_to_string(path)?
        }
        None => {
            info!("Reading payload from stdin");
            let mut raw = String::new();
            io::stdin().read_to_string(&mut raw)?;
            raw
        }
    };

    let config = DecoderConfig::from_env();
    match render_payload(&raw, cli.extended, &config) {
        Ok(json) => {
            println!("{}", json);
            Ok(())
        }
        Err(e) => {
            error!("Failed to decode payload: {}", e);
            Err(e.into())
        }
    }
}
