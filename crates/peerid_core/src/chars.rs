//! Byte classification and the fixed symbol tables peer ids are built from.

pub const UPPER_LETTERS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWER_LETTERS: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &[u8; 10] = b"0123456789";
pub const OTHER_CHARS: &[u8; 31] = b"!\"#$%&'()*+,-./:;<=>?@[]^_`{|}~";

/// The Shadow style version alphabet. A symbol's position is the number it encodes:
/// '0'=0, ..., '9'=9, 'A'=10, ..., 'Z'=35, 'a'=36, ..., 'z'=61, '.'=62, '-'=63.
///
/// Every Shadow style peer id in the wild depends on this order.
pub const SHADOW_STYLE_VERSION_CHARS: &[u8; 64] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz.-";

/// Letters, digits and [`OTHER_CHARS`].
pub const VISIBLE_CHARS: [u8; 93] = {
    let mut out = [0u8; 93];
    let mut i = 0;
    while i < 26 {
        out[i] = UPPER_LETTERS[i];
        out[26 + i] = LOWER_LETTERS[i];
        i += 1;
    }
    i = 0;
    while i < 10 {
        out[52 + i] = DIGITS[i];
        i += 1;
    }
    i = 0;
    while i < 31 {
        out[62 + i] = OTHER_CHARS[i];
        i += 1;
    }
    out
};

/// Characters random peer id filler is drawn from: [`VISIBLE_CHARS`] without `%`.
///
/// A `%` followed by two hex digits would make the text form of a generated peer id
/// read as percent-encoded.
pub const FILLER_CHARS: [u8; 92] = {
    let mut out = [0u8; 92];
    let mut i = 0;
    let mut j = 0;
    while i < VISIBLE_CHARS.len() {
        if VISIBLE_CHARS[i] != b'%' {
            out[j] = VISIBLE_CHARS[i];
            j += 1;
        }
        i += 1;
    }
    out
};

pub const fn is_upper_case_letter(c: u8) -> bool {
    matches!(c, b'A'..=b'Z')
}

pub const fn is_lower_case_letter(c: u8) -> bool {
    matches!(c, b'a'..=b'z')
}

pub const fn is_letter(c: u8) -> bool {
    is_upper_case_letter(c) || is_lower_case_letter(c)
}

pub const fn is_digit(c: u8) -> bool {
    matches!(c, b'0'..=b'9')
}

/// Printable ASCII, 32 to 126 inclusive.
pub const fn is_visible(c: u8) -> bool {
    matches!(c, 32..=126)
}

pub const fn is_shadow_version_char(c: u8) -> bool {
    shadow_version_value(c).is_some()
}

/// Returns `None` for bytes that aren't alphanumeric, `.` or `-`.
pub const fn shadow_version_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'A'..=b'Z' => Some(c - b'A' + 10),
        b'a'..=b'z' => Some(c - b'a' + 36),
        b'.' => Some(62),
        b'-' => Some(63),
        _ => None,
    }
}

/// Returns `None` for values of 64 and above.
pub fn shadow_version_char(value: u32) -> Option<u8> {
    SHADOW_STYLE_VERSION_CHARS.get(value as usize).copied()
}
