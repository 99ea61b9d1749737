//! Allocating encoders returning `String`.

use crate::encode::encode_unchecked;
use crate::{encoded_len, EncodeError, Ruleset};

/// Encodes `data` into a newly allocated string according to `rules`.
///
/// # Errors
///
/// Returns the ruleset's validation error, see [`Ruleset::validate`].
///
/// # Example
///
/// ```
/// use b64_ruleset::{encode_to_string, Ruleset};
///
/// let rules = Ruleset::STANDARD.with_line_wrap(8);
/// assert_eq!(encode_to_string(b"hello world", &rules).unwrap(), "aGVsbG8g\r\nd29ybGQ=");
/// ```
pub fn encode_to_string(data: &[u8], rules: &Ruleset) -> Result<String, EncodeError> {
    rules.validate()?;
    Ok(encode_validated(data, rules))
}

/// Encodes `data` with the standard ruleset (`+`, `/`, `=`, no wrapping).
///
/// # Example
///
/// ```
/// use b64_ruleset::to_base64;
///
/// assert_eq!(to_base64(b"hello world"), "aGVsbG8gd29ybGQ=");
/// ```
pub fn to_base64(data: &[u8]) -> String {
    encode_validated(data, &Ruleset::STANDARD)
}

/// Encodes `data` with the standard symbols and a CR LF every 64 characters.
pub fn to_base64_wrapped(data: &[u8]) -> String {
    encode_validated(data, &Ruleset::WRAPPED)
}

fn encode_validated(data: &[u8], rules: &Ruleset) -> String {
    let mut out = vec![0u8; encoded_len(data.len(), rules)];
    let len = encode_unchecked(data, rules, &mut out);
    // Validated rulesets only produce ASCII.
    out[..len].iter().map(|&b| char::from(b)).collect()
}
