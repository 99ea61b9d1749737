//! In-place base64 encoding into a caller-supplied buffer.

use log::{debug, trace};

use crate::constants::{CRLF, PAD_CODE};
use crate::symbol::symbol;
use crate::{required_capacity, EncodeError, Ruleset};

/// Encodes `data` into `out` according to `rules`.
///
/// `out` must hold at least [`required_capacity`] bytes. On success the
/// encoded text occupies `out[..len]`, a `0` terminator is written at
/// `out[len]`, and `len` is returned. Bytes past the terminator are left
/// untouched.
///
/// # Errors
///
/// - [`EncodeError::InvalidLineWrap`] / [`EncodeError::NonAsciiSymbol`] if the
///   ruleset is invalid.
/// - [`EncodeError::BufferTooSmall`] if `out` is shorter than the required
///   capacity. Nothing is written to `out` in that case.
///
/// # Example
///
/// ```
/// use b64_ruleset::{encode, Ruleset};
///
/// let mut out = [0u8; 8];
/// let len = encode(b"Ma", &Ruleset::STANDARD, &mut out).unwrap();
/// assert_eq!(&out[..len], b"TWE=");
/// assert_eq!(out[len], 0);
/// ```
pub fn encode(data: &[u8], rules: &Ruleset, out: &mut [u8]) -> Result<usize, EncodeError> {
    let required = required_capacity(data.len(), rules).map_err(|err| {
        debug!("rejected ruleset {rules:?}: {err}");
        err
    })?;
    trace!(
        "encoding {} bytes, capacity {} of {} required",
        data.len(),
        out.len(),
        required
    );

    if out.len() < required {
        let err = EncodeError::BufferTooSmall {
            required,
            capacity: out.len(),
        };
        debug!("{err}");
        return Err(err);
    }

    let len = encode_unchecked(data, rules, out);
    out[len] = 0;
    Ok(len)
}

/// Encoding loop. The ruleset must be valid and `out` must hold at least
/// [`encoded_len`](crate::encoded_len) bytes.
pub(crate) fn encode_unchecked(data: &[u8], rules: &Ruleset, out: &mut [u8]) -> usize {
    let mut written = 0;
    // Line break bytes written so far; `written - offset` counts symbols only.
    let mut offset = 0;

    let chunks = data.chunks_exact(3);
    let tail = tail_quartet(chunks.remainder());

    for (i, quartet) in chunks.map(full_quartet).chain(tail).enumerate() {
        if rules.wraps() && i > 0 && (written - offset) % rules.line_wrap == 0 {
            out[written..written + 2].copy_from_slice(CRLF);
            written += 2;
            offset += 2;
        }
        for code in quartet {
            out[written] = match symbol(code, rules) {
                Some(c) => c,
                None => unreachable!("sextet code {code} out of range"),
            };
            written += 1;
        }
    }

    written
}

fn full_quartet(chunk: &[u8]) -> [u8; 4] {
    let (b0, b1, b2) = (chunk[0], chunk[1], chunk[2]);
    [
        b0 >> 2,
        ((b0 & 0x03) << 4) | (b1 >> 4),
        ((b1 & 0x0f) << 2) | (b2 >> 6),
        b2 & 0x3f,
    ]
}

fn tail_quartet(remainder: &[u8]) -> Option<[u8; 4]> {
    match *remainder {
        [b0] => Some([b0 >> 2, (b0 & 0x03) << 4, PAD_CODE, PAD_CODE]),
        [b0, b1] => Some([
            b0 >> 2,
            ((b0 & 0x03) << 4) | (b1 >> 4),
            (b1 & 0x0f) << 2,
            PAD_CODE,
        ]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_vec(data: &[u8], rules: &Ruleset) -> Vec<u8> {
        let mut out = vec![0xAA; required_capacity(data.len(), rules).unwrap()];
        let len = encode(data, rules, &mut out).unwrap();
        out.truncate(len);
        out
    }

    #[test]
    fn padding_variants() {
        assert_eq!(encode_vec(b"M", &Ruleset::STANDARD), b"TQ==");
        assert_eq!(encode_vec(b"Ma", &Ruleset::STANDARD), b"TWE=");
        assert_eq!(encode_vec(b"Man", &Ruleset::STANDARD), b"TWFu");
    }

    #[test]
    fn writes_terminator() {
        let mut out = [0xAA; 6];
        let len = encode(b"M", &Ruleset::STANDARD, &mut out).unwrap();
        assert_eq!(len, 4);
        assert_eq!(out, [b'T', b'Q', b'=', b'=', 0, 0xAA]);
    }

    #[test]
    fn substituted_symbols() {
        let rules = Ruleset::new(b'-', b'_', b'.');
        assert_eq!(encode_vec(&[0xfb, 0xff], &rules), b"-_8.");
    }

    #[test]
    fn wraps_between_lines_only() {
        let rules = Ruleset::STANDARD.with_line_wrap(4);
        assert_eq!(encode_vec(b"Man", &rules), b"TWFu");
        assert_eq!(encode_vec(b"ManMa", &rules), b"TWFu\r\nTWE=");
        assert_eq!(encode_vec(b"ManManM", &rules), b"TWFu\r\nTWFu\r\nTQ==");
    }

    #[test]
    fn too_small_buffer_is_untouched() {
        let mut out = [0xAA; 4];
        assert_eq!(
            encode(b"M", &Ruleset::STANDARD, &mut out),
            Err(EncodeError::BufferTooSmall {
                required: 5,
                capacity: 4
            })
        );
        assert_eq!(out, [0xAA; 4]);
    }

    #[test]
    fn invalid_wrap_is_checked_before_capacity() {
        let mut out: [u8; 0] = [];
        assert_eq!(
            encode(b"M", &Ruleset::STANDARD.with_line_wrap(3), &mut out),
            Err(EncodeError::InvalidLineWrap(3))
        );
    }
}
