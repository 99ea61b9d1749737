//! Output size calculations.

use crate::{EncodeError, Ruleset};

/// Number of bytes [`encode`](crate::encode) writes for `data_len` input bytes,
/// not counting the terminator.
///
/// Line breaks are only inserted between lines, so an output that exactly
/// fills its last line has no trailing CR LF.
///
/// # Example
///
/// ```
/// use b64_ruleset::{encoded_len, Ruleset};
///
/// assert_eq!(encoded_len(3, &Ruleset::STANDARD), 4);
/// assert_eq!(encoded_len(48, &Ruleset::WRAPPED), 64);
/// assert_eq!(encoded_len(49, &Ruleset::WRAPPED), 70);
/// ```
pub fn encoded_len(data_len: usize, rules: &Ruleset) -> usize {
    let groups = data_len.div_ceil(3);
    let raw = groups.saturating_mul(4);
    if !rules.wraps() || groups == 0 {
        return raw;
    }
    let breaks = (groups - 1).saturating_mul(4) / rules.line_wrap;
    raw.saturating_add(breaks.saturating_mul(2))
}

/// Minimum output buffer size accepted by [`encode`](crate::encode) for
/// `data_len` input bytes.
///
/// This is `4 * ceil(data_len / 3)`, plus two bytes per full line when
/// wrapping, plus one byte for the terminator. When the output exactly fills
/// its last line the bound is two bytes larger than what gets written.
///
/// # Errors
///
/// Returns the ruleset's validation error, see [`Ruleset::validate`].
pub fn required_capacity(data_len: usize, rules: &Ruleset) -> Result<usize, EncodeError> {
    rules.validate()?;
    let mut len = data_len.div_ceil(3).saturating_mul(4);
    if rules.wraps() {
        len = len.saturating_add((len / rules.line_wrap).saturating_mul(2));
    }
    Ok(len.saturating_add(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwrapped_lengths() {
        let expected = [0, 4, 4, 4, 8, 8, 8, 12];
        for (len, &want) in expected.iter().enumerate() {
            assert_eq!(encoded_len(len, &Ruleset::STANDARD), want);
            assert_eq!(required_capacity(len, &Ruleset::STANDARD), Ok(want + 1));
        }
    }

    #[test]
    fn wrapped_lengths() {
        let rules = Ruleset::STANDARD.with_line_wrap(8);
        // 6 bytes: exactly one full line, no break.
        assert_eq!(encoded_len(6, &rules), 8);
        assert_eq!(required_capacity(6, &rules), Ok(11));
        // 7 bytes: one break before the third quartet.
        assert_eq!(encoded_len(7, &rules), 14);
        assert_eq!(required_capacity(7, &rules), Ok(15));
    }

    #[test]
    fn empty_input() {
        assert_eq!(encoded_len(0, &Ruleset::WRAPPED), 0);
        assert_eq!(required_capacity(0, &Ruleset::WRAPPED), Ok(1));
    }

    #[test]
    fn invalid_ruleset() {
        let rules = Ruleset::STANDARD.with_line_wrap(10);
        assert_eq!(
            required_capacity(5, &rules),
            Err(EncodeError::InvalidLineWrap(10))
        );
    }

    #[test]
    fn huge_lengths_saturate() {
        assert_eq!(
            required_capacity(usize::MAX, &Ruleset::STANDARD.with_line_wrap(4)),
            Ok(usize::MAX)
        );
    }
}
