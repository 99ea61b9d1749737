/// Standard base64 alphabet as a byte array.
pub const ALPHABET_BYTES: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Standard symbol for sextet value 62.
pub const CHAR_62: u8 = b'+';

/// Standard symbol for sextet value 63.
pub const CHAR_63: u8 = b'/';

/// Padding character.
pub const PAD: u8 = b'=';

/// Line width used by [`Ruleset::WRAPPED`](crate::Ruleset::WRAPPED).
pub const DEFAULT_LINE_WRAP: usize = 64;

/// Line break inserted between wrapped lines.
pub const CRLF: &[u8; 2] = b"\r\n";

/// Symbol code that maps to the ruleset's padding character.
pub(crate) const PAD_CODE: u8 = 64;
