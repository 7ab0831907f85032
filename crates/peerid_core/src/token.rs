use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    chars::is_visible,
    error::{Error, Result},
};

pub const PEER_ID_LEN: usize = 20;

/// The 20 bytes of a peer id, as sent in the handshake and in tracker requests.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PeerToken([u8; PEER_ID_LEN]);

impl PeerToken {
    pub const fn new(from: [u8; PEER_ID_LEN]) -> PeerToken {
        PeerToken(from)
    }

    /// Take the first 20 bytes of `source`, ignoring the rest.
    pub fn from_prefix(source: &[u8]) -> Result<PeerToken> {
        match source.get(..PEER_ID_LEN) {
            Some(prefix) => PeerToken::try_from(prefix),
            None => Err(Error::InvalidLength {
                expected: PEER_ID_LEN,
                actual: source.len(),
            }),
        }
    }

    pub fn from_hex(s: &str) -> Result<PeerToken> {
        let mut out = [0u8; PEER_ID_LEN];
        if s.len() != PEER_ID_LEN * 2 {
            return Err(Error::InvalidLength {
                expected: PEER_ID_LEN * 2,
                actual: s.len(),
            });
        }
        hex::decode_to_slice(s, &mut out)?;
        Ok(PeerToken(out))
    }

    pub const fn as_bytes(&self) -> &[u8; PEER_ID_LEN] {
        &self.0
    }

    pub const fn into_bytes(self) -> [u8; PEER_ID_LEN] {
        self.0
    }

    /// Hex representation, 40 characters.
    pub fn as_string(&self) -> String {
        hex::encode(self.0)
    }

    /// The "%nn" escaped form used in tracker announce query strings.
    pub fn url_encoded(&self) -> String {
        urlencoding::encode_binary(&self.0).into_owned()
    }

    pub fn is_visible(&self) -> bool {
        self.0.iter().copied().all(is_visible)
    }
}

impl From<[u8; PEER_ID_LEN]> for PeerToken {
    fn from(value: [u8; PEER_ID_LEN]) -> Self {
        PeerToken(value)
    }
}

impl TryFrom<&[u8]> for PeerToken {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self> {
        let buf = <[u8; PEER_ID_LEN]>::try_from(value).map_err(|_| Error::InvalidLength {
            expected: PEER_ID_LEN,
            actual: value.len(),
        })?;
        Ok(PeerToken(buf))
    }
}

impl AsRef<[u8]> for PeerToken {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Display for PeerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&String::from_utf8_lossy(&self.0), f)
    }
}

impl std::fmt::Debug for PeerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<")?;
        for byte in self.0 {
            write!(f, "{}", std::ascii::escape_default(byte))?;
        }
        write!(f, ">")?;
        Ok(())
    }
}

impl Serialize for PeerToken {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if !serializer.is_human_readable() {
            return serializer.serialize_bytes(&self.0);
        }
        if self.is_visible() {
            serializer.collect_str(self)
        } else {
            serializer.serialize_str(&self.as_string())
        }
    }
}

impl<'de> Deserialize<'de> for PeerToken {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct Visitor;
        impl serde::de::Visitor<'_> for Visitor {
            type Value = PeerToken;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(
                    formatter,
                    "20 bytes, a 20 character string or a 40 character hex string"
                )
            }

            fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                match v.len() {
                    PEER_ID_LEN => PeerToken::try_from(v.as_bytes()).map_err(E::custom),
                    40 => PeerToken::from_hex(v).map_err(E::custom),
                    _ => Err(E::invalid_length(v.len(), &self)),
                }
            }

            fn visit_bytes<E>(self, v: &[u8]) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                PeerToken::try_from(v).map_err(|_| E::invalid_length(v.len(), &self))
            }
        }
        deserializer.deserialize_any(Visitor)
    }
}
