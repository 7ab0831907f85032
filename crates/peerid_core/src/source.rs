use std::borrow::Cow;

use tracing::trace;

use crate::token::PeerToken;

/// A peer id as callers have it: raw bytes off the wire, or text that may be
/// "%nn" escaped as in a tracker announce URL.
#[derive(Debug, Clone, Copy)]
pub enum PeerIdSource<'a> {
    Bytes(&'a [u8]),
    Text(&'a str),
}

impl<'a> PeerIdSource<'a> {
    /// The raw bytes of the peer id. Escaped text is percent-decoded.
    pub fn into_bytes(self) -> Cow<'a, [u8]> {
        match self {
            PeerIdSource::Bytes(b) => Cow::Borrowed(b),
            PeerIdSource::Text(s) if is_url_encoded(s) => {
                trace!(source = s, "percent-decoding peer id");
                urlencoding::decode_binary(s.as_bytes())
            }
            PeerIdSource::Text(s) => Cow::Borrowed(s.as_bytes()),
        }
    }
}

/// True if `source` contains a `%` directly followed by an ASCII letter or digit.
pub fn is_url_encoded(source: &str) -> bool {
    let bytes = source.as_bytes();
    memchr::memchr_iter(b'%', bytes).any(|pos| {
        bytes
            .get(pos + 1)
            .is_some_and(|c| c.is_ascii_alphanumeric())
    })
}

impl<'a> From<&'a [u8]> for PeerIdSource<'a> {
    fn from(value: &'a [u8]) -> Self {
        PeerIdSource::Bytes(value)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for PeerIdSource<'a> {
    fn from(value: &'a [u8; N]) -> Self {
        PeerIdSource::Bytes(value)
    }
}

impl<'a> From<&'a Vec<u8>> for PeerIdSource<'a> {
    fn from(value: &'a Vec<u8>) -> Self {
        PeerIdSource::Bytes(value)
    }
}

impl<'a> From<&'a PeerToken> for PeerIdSource<'a> {
    fn from(value: &'a PeerToken) -> Self {
        PeerIdSource::Bytes(value.as_bytes())
    }
}

impl<'a> From<&'a str> for PeerIdSource<'a> {
    fn from(value: &'a str) -> Self {
        PeerIdSource::Text(value)
    }
}

impl<'a> From<&'a String> for PeerIdSource<'a> {
    fn from(value: &'a String) -> Self {
        PeerIdSource::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_url_encoded() {
        for s in [
            "%2", "%24", "%2B", "%B", "%BD", "%B4", "%Bd", "%b4", "%ba21", "%tesd%ss",
        ] {
            assert!(is_url_encoded(s), "{s}");
        }
        for s in ["%^a2", "^%^a2", "", "100%", "%%", "%-1"] {
            assert!(!is_url_encoded(s), "{s}");
        }
    }

    #[test]
    fn test_into_bytes() {
        let raw = [0x00u8, 0xff, b'A'];
        assert_eq!(&*PeerIdSource::from(&raw).into_bytes(), &raw);

        assert_eq!(
            &*PeerIdSource::from("-AZ2060-4f2f1f2f1f2f").into_bytes(),
            b"-AZ2060-4f2f1f2f1f2f"
        );

        let decoded = PeerIdSource::from("-AZ2060-%00%FF%20abcdefghi").into_bytes();
        assert_eq!(decoded.len(), 20);
        assert_eq!(&decoded[8..11], &[0x00, 0xff, b' ']);
    }
}
