//! Base64 encoding with configurable rulesets.
//!
//! This crate provides a base64 encoder with support for:
//! - Substitutable symbols for sextet values 62 and 63, and for padding
//! - CR LF line wrapping every N output characters
//! - Encoding into caller-supplied buffers without allocating
//!
//! # Example
//!
//! ```
//! use b64_ruleset::{encode, required_capacity, to_base64, Ruleset};
//!
//! assert_eq!(to_base64(b"Man"), "TWFu");
//!
//! let rules = Ruleset::WRAPPED;
//! let mut out = vec![0u8; required_capacity(100, &rules).unwrap()];
//! let len = encode(&[0u8; 100], &rules, &mut out).unwrap();
//! assert_eq!(&out[64..66], b"\r\n");
//! assert_eq!(len, 140);
//! ```

pub mod cli;
mod constants;
mod create_encoder;
mod encode;
mod encoded_len;
mod ruleset;
mod symbol;
mod to_base64;

pub use constants::{ALPHABET_BYTES, CHAR_62, CHAR_63, CRLF, DEFAULT_LINE_WRAP, PAD};
pub use create_encoder::create_encoder;
pub use encode::encode;
pub use encoded_len::{encoded_len, required_capacity};
pub use ruleset::Ruleset;
pub use to_base64::{encode_to_string, to_base64, to_base64_wrapped};

use thiserror::Error;

/// Error type for base64 encoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Line wrapping is enabled with a width that is not a multiple of 4.
    #[error("line wrap width must be a positive multiple of 4, got {0}")]
    InvalidLineWrap(usize),
    /// A ruleset symbol is outside the ASCII range.
    #[error("ruleset symbol {0:#04x} is not ASCII")]
    NonAsciiSymbol(u8),
    /// The output buffer cannot hold the encoded text and its terminator.
    #[error("output buffer too small: {required} bytes required, {capacity} supplied")]
    BufferTooSmall { required: usize, capacity: usize },
}

/// Broad classification of an [`EncodeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed an unusable ruleset.
    InvalidArgument,
    /// The output buffer is too small.
    Capacity,
}

impl EncodeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EncodeError::InvalidLineWrap(_) | EncodeError::NonAsciiSymbol(_) => {
                ErrorKind::InvalidArgument
            }
            EncodeError::BufferTooSmall { .. } => ErrorKind::Capacity,
        }
    }
}
