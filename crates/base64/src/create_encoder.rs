//! Factory for encoders bound to a fixed ruleset.

use crate::{encode, EncodeError, Ruleset};

/// Validates `rules` once and returns an encoder that writes into a mutable
/// byte slice, returning the number of bytes written (terminator excluded).
///
/// The returned closure behaves exactly like [`encode`] with `rules`; it can
/// still fail with [`EncodeError::BufferTooSmall`].
///
/// # Errors
///
/// Returns the ruleset's validation error, see [`Ruleset::validate`].
///
/// # Example
///
/// ```
/// use b64_ruleset::{create_encoder, Ruleset};
///
/// let encode = create_encoder(Ruleset::new(b'-', b'_', b'=')).unwrap();
/// let mut dest = [0u8; 16];
/// let len = encode(&[0xfb, 0xff, 0xbf], &mut dest).unwrap();
/// assert_eq!(&dest[..len], b"-_-_");
/// ```
pub fn create_encoder(
    rules: Ruleset,
) -> Result<impl Fn(&[u8], &mut [u8]) -> Result<usize, EncodeError>, EncodeError> {
    rules.validate()?;
    Ok(move |data: &[u8], dest: &mut [u8]| encode(data, &rules, dest))
}
