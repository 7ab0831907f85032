use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    chars::{is_digit, shadow_version_char, shadow_version_value},
    error::{Error, Result},
};

pub const AZ_STYLE_VERSION_LEN: usize = 4;
pub const SHADOW_STYLE_VERSION_LEN: usize = 3;

const AZ_STYLE_MAX_MAJOR: u32 = 9;
const AZ_STYLE_MAX_MINOR: u32 = 9;
const AZ_STYLE_MAX_PATCH: u32 = 99;
const SHADOW_STYLE_MAX_COMPONENT: u32 = 63;

/// A `major.minor.patch` client version.
///
/// This is the common form both peer id styles decode into. Whether a version can be
/// encoded depends on the style: Azureus style fits `9.9.99`, Shadow style `63.63.63`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct SemanticVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl SemanticVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    pub fn to_az_style_string(&self) -> Result<String> {
        Ok(semantic_to_az_style(self)?.iter().map(|c| *c as char).collect())
    }

    pub fn to_shadow_style_string(&self) -> Result<String> {
        Ok(semantic_to_shadow_style(self)?
            .iter()
            .map(|c| *c as char)
            .collect())
    }
}

fn split_components(s: &str) -> Option<[&str; 3]> {
    let mut it = s.split('.');
    let out = [it.next()?, it.next()?, it.next()?];
    if it.next().is_some() {
        return None;
    }
    if out
        .iter()
        .any(|c| c.is_empty() || !c.bytes().all(is_digit))
    {
        return None;
    }
    Some(out)
}

fn parse_component(component: &'static str, digits: &str) -> Result<u32> {
    // Digits were checked already, so the only way to fail is overflow.
    let value = digits.parse::<u64>().unwrap_or(u64::MAX);
    u32::try_from(value).map_err(|_| Error::OutOfRange {
        component,
        value,
        max: u32::MAX,
    })
}

impl FromStr for SemanticVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let [major, minor, patch] =
            split_components(s).ok_or_else(|| Error::InvalidVersion(s.to_owned()))?;
        Ok(Self {
            major: parse_component("major", major)?,
            minor: parse_component("minor", minor)?,
            patch: parse_component("patch", patch)?,
        })
    }
}

impl std::fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl Serialize for SemanticVersion {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SemanticVersion {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// True if `version` is three dot-separated decimal numbers, e.g. "1.0.11".
pub fn is_semantic_version(version: &str) -> bool {
    split_components(version).is_some()
}

/// True if `version` is exactly four ASCII digits, e.g. "2060".
pub fn is_az_style_version(version: &str) -> bool {
    version.len() == AZ_STYLE_VERSION_LEN && version.bytes().all(is_digit)
}

/// True if `version` is exactly three symbols of the Shadow version alphabet, e.g. "20-".
pub fn is_shadow_style_version(version: &str) -> bool {
    shadow_style_to_semantic(version.as_bytes()).is_ok()
}

fn check_max(component: &'static str, value: u32, max: u32) -> Result<u32> {
    if value > max {
        return Err(Error::OutOfRange {
            component,
            value: value.into(),
            max,
        });
    }
    Ok(value)
}

/// `2.0.60` -> `b"2060"`: one digit each for major and minor, two for patch.
pub fn semantic_to_az_style(version: &SemanticVersion) -> Result<[u8; AZ_STYLE_VERSION_LEN]> {
    let major = check_max("major", version.major, AZ_STYLE_MAX_MAJOR)? as u8;
    let minor = check_max("minor", version.minor, AZ_STYLE_MAX_MINOR)? as u8;
    let patch = check_max("patch", version.patch, AZ_STYLE_MAX_PATCH)? as u8;
    Ok([
        b'0' + major,
        b'0' + minor,
        b'0' + patch / 10,
        b'0' + patch % 10,
    ])
}

pub fn az_style_to_semantic(code: &[u8]) -> Result<SemanticVersion> {
    if code.len() != AZ_STYLE_VERSION_LEN || !code.iter().copied().all(is_digit) {
        return Err(Error::InvalidFormat(
            "azureus style version must be 4 ASCII digits",
        ));
    }
    let digit = |i: usize| (code[i] - b'0') as u32;
    Ok(SemanticVersion {
        major: digit(0),
        minor: digit(1),
        patch: digit(2) * 10 + digit(3),
    })
}

/// Map each component through [`crate::chars::SHADOW_STYLE_VERSION_CHARS`].
///
/// The result is not padded; padding to five characters is part of the peer id layout.
pub fn semantic_to_shadow_style(
    version: &SemanticVersion,
) -> Result<[u8; SHADOW_STYLE_VERSION_LEN]> {
    let mut out = [0u8; SHADOW_STYLE_VERSION_LEN];
    for (slot, (component, value)) in out.iter_mut().zip([
        ("major", version.major),
        ("minor", version.minor),
        ("patch", version.patch),
    ]) {
        *slot = shadow_version_char(value).ok_or(Error::OutOfRange {
            component,
            value: value.into(),
            max: SHADOW_STYLE_MAX_COMPONENT,
        })?;
    }
    Ok(out)
}

/// Decode three Shadow alphabet symbols.
///
/// A `-` decodes as 63 wherever it appears. The format can't tell padding apart from
/// an explicit 63, so `20-` is `2.0.63`.
pub fn shadow_style_to_semantic(code: &[u8]) -> Result<SemanticVersion> {
    const ERR: Error = Error::InvalidFormat("shadow style version must be 3 alphabet symbols");
    let [major, minor, patch] =
        <[u8; SHADOW_STYLE_VERSION_LEN]>::try_from(code).map_err(|_| ERR)?;
    let value = |c: u8| shadow_version_value(c).map(u32::from).ok_or(ERR);
    Ok(SemanticVersion {
        major: value(major)?,
        minor: value(minor)?,
        patch: value(patch)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> SemanticVersion {
        s.parse().unwrap()
    }

    #[test]
    fn test_is_semantic_version() {
        for s in [
            "0.0.0", "1.0.0", "0.0.1", "1.0.11", "1.11.0", "11.0.0", "1.11.11", "11.11.11",
        ] {
            assert!(is_semantic_version(s), "{s}");
        }
        for s in [
            "",
            "1",
            "1.0",
            "1.0.0.",
            "1..0",
            "a.b.c",
            "1.0.0-alpha.",
            "1.0.0-alpha..1",
            "1.0.0-alpha.1.1",
            "1.0.0-alpha.1+001",
        ] {
            assert!(!is_semantic_version(s), "{s}");
            assert!(matches!(
                s.parse::<SemanticVersion>(),
                Err(Error::InvalidVersion(_))
            ));
        }
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(v("2.0.60"), SemanticVersion::new(2, 0, 60));
        assert_eq!(v("02.00.060").to_string(), "2.0.60");
        assert!(matches!(
            "1.0.99999999999".parse::<SemanticVersion>(),
            Err(Error::OutOfRange {
                component: "patch",
                ..
            })
        ));
    }

    #[test]
    fn test_semantic_to_az_style() {
        assert_eq!(&semantic_to_az_style(&v("2.0.60")).unwrap(), b"2060");
        assert_eq!(&semantic_to_az_style(&v("0.0.1")).unwrap(), b"0001");
        assert_eq!(&semantic_to_az_style(&v("9.9.99")).unwrap(), b"9999");
        assert_eq!(v("1.2.3").to_az_style_string().unwrap(), "1203");

        for (s, component) in [("10.0.0", "major"), ("0.10.0", "minor"), ("0.0.100", "patch")] {
            match semantic_to_az_style(&v(s)) {
                Err(Error::OutOfRange { component: c, .. }) => assert_eq!(c, component),
                other => panic!("expected out of range for {s}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_az_style_to_semantic() {
        assert_eq!(az_style_to_semantic(b"2060").unwrap(), v("2.0.60"));
        assert_eq!(az_style_to_semantic(b"2001").unwrap().to_string(), "2.0.1");
        assert_eq!(az_style_to_semantic(b"0000").unwrap(), v("0.0.0"));
        for bad in [&b"206"[..], b"20600", b"20a0", b""] {
            assert!(matches!(
                az_style_to_semantic(bad),
                Err(Error::InvalidFormat(_))
            ));
        }
    }

    #[test]
    fn test_is_az_style_version() {
        for s in ["2060", "0000", "1000", "1100", "1110", "1111"] {
            assert!(is_az_style_version(s));
        }
        for s in ["206", "20600", "2o60"] {
            assert!(!is_az_style_version(s));
        }
    }

    #[test]
    fn test_shadow_style() {
        assert_eq!(&semantic_to_shadow_style(&v("5.8.11")).unwrap(), b"58B");
        assert_eq!(&semantic_to_shadow_style(&v("63.62.36")).unwrap(), b"-.a");
        assert_eq!(v("0.0.0").to_shadow_style_string().unwrap(), "000");
        assert!(matches!(
            semantic_to_shadow_style(&v("5.64.0")),
            Err(Error::OutOfRange {
                component: "minor",
                value: 64,
                max: 63
            })
        ));

        assert_eq!(shadow_style_to_semantic(b"58B").unwrap(), v("5.8.11"));
        assert_eq!(shadow_style_to_semantic(b"20-").unwrap(), v("2.0.63"));
        assert_eq!(shadow_style_to_semantic(b"20.").unwrap(), v("2.0.62"));
        assert!(matches!(
            shadow_style_to_semantic(b"2060"),
            Err(Error::InvalidFormat(_))
        ));
        assert!(matches!(
            shadow_style_to_semantic(b"2_0"),
            Err(Error::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_is_shadow_style_version() {
        assert!(is_shadow_style_version("20-"));
        assert!(is_shadow_style_version("20."));
        assert!(is_shadow_style_version("206"));
        assert!(!is_shadow_style_version(""));
        assert!(!is_shadow_style_version("20"));
        assert!(!is_shadow_style_version("2060"));
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&v("2.0.60")).unwrap();
        assert_eq!(json, "\"2.0.60\"");
        let back: SemanticVersion = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v("2.0.60"));
        assert!(serde_json::from_str::<SemanticVersion>("\"2.0\"").is_err());
    }
}
