//! Sextet to symbol mapping.

use crate::constants::PAD_CODE;
use crate::Ruleset;

/// Returns the output symbol for a sextet value, or the padding symbol for
/// [`PAD_CODE`]. Any other code has no symbol.
pub(crate) const fn symbol(code: u8, rules: &Ruleset) -> Option<u8> {
    match code {
        0..=25 => Some(b'A' + code),
        26..=51 => Some(b'a' + (code - 26)),
        52..=61 => Some(b'0' + (code - 52)),
        62 => Some(rules.char62),
        63 => Some(rules.char63),
        PAD_CODE => Some(rules.pad),
        _ => None,
    }
}
