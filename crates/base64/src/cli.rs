//! Core logic of the `b64-encode` command-line tool.
//!
//! The ruleset is resolved in layers: the standard ruleset, then an optional
//! JSON ruleset file, then individual flags.

use std::path::PathBuf;

use clap::Parser;
use log::debug;
use thiserror::Error;

use crate::{encode_to_string, EncodeError, Ruleset};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("invalid ruleset file: {0}")]
    Config(#[from] serde_json::Error),
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error("symbol {0:?} is not a single ASCII character")]
    InvalidSymbol(char),
}

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about = "Encode bytes as base64 text", long_about = None)]
pub struct Args {
    /// File to encode (reads stdin when omitted)
    pub input: Option<PathBuf>,
    /// Insert CRLF every N output characters, N a multiple of 4 (0 disables wrapping)
    #[arg(short, long)]
    pub wrap: Option<usize>,
    /// Symbol for sextet value 62
    #[arg(long)]
    pub char62: Option<char>,
    /// Symbol for sextet value 63
    #[arg(long)]
    pub char63: Option<char>,
    /// Padding symbol
    #[arg(long)]
    pub pad: Option<char>,
    /// JSON file holding a ruleset; flags override its values
    #[arg(long)]
    pub ruleset: Option<PathBuf>,
    /// Verbosity (-v for debug logs)
    #[arg(short, long, action = clap::ArgAction::SetTrue)]
    pub verbose: bool,
}

impl Args {
    /// Builds the effective ruleset from the ruleset file and the flags.
    pub fn resolve_ruleset(&self) -> Result<Ruleset, CliError> {
        let mut rules = match &self.ruleset {
            Some(path) => {
                debug!("loading ruleset from {}", path.display());
                parse_ruleset(&std::fs::read_to_string(path)?)?
            }
            None => Ruleset::default(),
        };
        if let Some(c) = self.char62 {
            rules.char62 = ascii_symbol(c)?;
        }
        if let Some(c) = self.char63 {
            rules.char63 = ascii_symbol(c)?;
        }
        if let Some(c) = self.pad {
            rules.pad = ascii_symbol(c)?;
        }
        if let Some(width) = self.wrap {
            rules.line_wrap = width;
        }
        rules.validate()?;
        Ok(rules)
    }
}

/// Parses a JSON ruleset. Missing fields take their standard values.
pub fn parse_ruleset(json: &str) -> Result<Ruleset, CliError> {
    Ok(serde_json::from_str(json)?)
}

/// Encodes `input` with the ruleset described by `args`.
pub fn run(args: &Args, input: &[u8]) -> Result<String, CliError> {
    let rules = args.resolve_ruleset()?;
    debug!("encoding {} bytes with {rules:?}", input.len());
    Ok(encode_to_string(input, &rules)?)
}

fn ascii_symbol(c: char) -> Result<u8, CliError> {
    u8::try_from(c)
        .ok()
        .filter(u8::is_ascii)
        .ok_or(CliError::InvalidSymbol(c))
}
