//! Encoding rulesets: substitutable symbols, padding and line wrapping.

use serde::{Deserialize, Serialize};

use crate::constants::{CHAR_62, CHAR_63, DEFAULT_LINE_WRAP, PAD};
use crate::EncodeError;

/// Parameters of one base64 encoding.
///
/// The fixed part of the alphabet (`A-Z`, `a-z`, `0-9`) is not configurable;
/// a ruleset only chooses the symbols for sextet values 62 and 63, the padding
/// symbol, and whether a CR LF pair is inserted every `line_wrap` output
/// characters.
///
/// In serialized form every field is optional and falls back to the standard
/// value, and symbols are written as one-character strings:
///
/// ```
/// use b64_ruleset::Ruleset;
///
/// let rules: Ruleset = serde_json::from_str(r#"{"char62": "-", "char63": "_"}"#).unwrap();
/// assert_eq!(rules, Ruleset::new(b'-', b'_', b'='));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Ruleset {
    /// Symbol emitted for sextet value 62.
    #[serde(with = "symbol_serde")]
    pub char62: u8,
    /// Symbol emitted for sextet value 63.
    #[serde(with = "symbol_serde")]
    pub char63: u8,
    /// Symbol used to pad the final quartet.
    #[serde(with = "symbol_serde")]
    pub pad: u8,
    /// Number of output characters between line breaks. `0` disables wrapping.
    pub line_wrap: usize,
}

impl Ruleset {
    /// `+`, `/`, `=` and no line wrapping.
    pub const STANDARD: Ruleset = Ruleset::new(CHAR_62, CHAR_63, PAD);

    /// `+`, `/`, `=` with a line break every 64 characters.
    pub const WRAPPED: Ruleset = Ruleset::STANDARD.with_line_wrap(DEFAULT_LINE_WRAP);

    /// Creates a ruleset without line wrapping.
    pub const fn new(char62: u8, char63: u8, pad: u8) -> Self {
        Self {
            char62,
            char63,
            pad,
            line_wrap: 0,
        }
    }

    /// Returns a copy of this ruleset that wraps lines every `width` characters.
    pub const fn with_line_wrap(self, width: usize) -> Self {
        Self {
            line_wrap: width,
            ..self
        }
    }

    /// Returns `true` when a line wrap width is set.
    pub const fn wraps(&self) -> bool {
        self.line_wrap != 0
    }

    /// Checks that the ruleset can be used for encoding.
    ///
    /// # Errors
    ///
    /// - [`EncodeError::InvalidLineWrap`] if wrapping is enabled and the width
    ///   is not a multiple of 4.
    /// - [`EncodeError::NonAsciiSymbol`] if any of the three symbols is not
    ///   ASCII.
    pub fn validate(&self) -> Result<(), EncodeError> {
        if self.wraps() && self.line_wrap % 4 != 0 {
            return Err(EncodeError::InvalidLineWrap(self.line_wrap));
        }
        for symbol in [self.char62, self.char63, self.pad] {
            if !symbol.is_ascii() {
                return Err(EncodeError::NonAsciiSymbol(symbol));
            }
        }
        Ok(())
    }
}

impl Default for Ruleset {
    fn default() -> Self {
        Ruleset::STANDARD
    }
}

mod symbol_serde {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(symbol: &u8, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(char::from(*symbol))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
        let c = char::deserialize(deserializer)?;
        u8::try_from(c)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| D::Error::custom(format!("symbol {c:?} is not ASCII")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_standard() {
        assert_eq!(Ruleset::default(), Ruleset::STANDARD);
        assert_eq!(Ruleset::STANDARD.line_wrap, 0);
        assert!(!Ruleset::STANDARD.wraps());
    }

    #[test]
    fn wrapped_uses_64_columns() {
        assert_eq!(Ruleset::WRAPPED.line_wrap, 64);
        assert_eq!(Ruleset::WRAPPED.pad, b'=');
        assert!(Ruleset::WRAPPED.wraps());
    }

    #[test]
    fn validate_line_wrap() {
        for width in [0, 4, 8, 64, 76] {
            assert_eq!(Ruleset::STANDARD.with_line_wrap(width).validate(), Ok(()));
        }
        for width in [1, 2, 3, 5, 10, 65] {
            assert_eq!(
                Ruleset::STANDARD.with_line_wrap(width).validate(),
                Err(EncodeError::InvalidLineWrap(width))
            );
        }
    }

    #[test]
    fn validate_rejects_non_ascii_symbols() {
        let rules = Ruleset::new(b'-', 0xB5, b'=');
        assert_eq!(rules.validate(), Err(EncodeError::NonAsciiSymbol(0xB5)));
    }

    #[test]
    fn deserialize_partial_json() {
        let rules: Ruleset = serde_json::from_str(r#"{"line_wrap": 76}"#).unwrap();
        assert_eq!(rules, Ruleset::STANDARD.with_line_wrap(76));

        let rules: Ruleset = serde_json::from_str("{}").unwrap();
        assert_eq!(rules, Ruleset::STANDARD);
    }

    #[test]
    fn deserialize_rejects_non_ascii_symbol() {
        let result: Result<Ruleset, _> = serde_json::from_str(r#"{"pad": "é"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn serialize_symbols_as_strings() {
        let json = serde_json::to_value(Ruleset::WRAPPED).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"char62": "+", "char63": "/", "pad": "=", "line_wrap": 64})
        );
    }
}
