use std::str::FromStr;

use rand::Rng;
use serde::Serialize;

use crate::{
    chars::{is_digit, is_letter, is_shadow_version_char, is_visible},
    clients::{azureus_client_name, shadow_client_name},
    error::{Error, Result},
    filler::fill_visible,
    token::{PEER_ID_LEN, PeerToken},
    version::{
        SemanticVersion, az_style_to_semantic, semantic_to_az_style, semantic_to_shadow_style,
        shadow_style_to_semantic,
    },
};

/// Length of the "-CC1234-" header of an Azureus style peer id.
const AZ_STYLE_HEADER_LEN: usize = 8;
/// Length of the "C123-----" header of a Shadow style peer id.
const SHADOW_STYLE_HEADER_LEN: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// `-CC1234-` followed by random bytes.
    #[serde(rename = "az")]
    Azureus,
    /// `C123-----` followed by random bytes, version digits from the 64 symbol alphabet.
    Shadow,
}

impl FromStr for Style {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "az" | "azureus" => Ok(Style::Azureus),
            "shadow" => Ok(Style::Shadow),
            _ => Err(Error::InvalidStyle(s.to_owned())),
        }
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Style::Azureus => "az",
            Style::Shadow => "shadow",
        })
    }
}

/// What a peer id says about the client that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Client {
    pub code: String,
    pub name: Option<&'static str>,
    pub version: SemanticVersion,
    pub style: Style,
}

impl PeerToken {
    /// `-`, two visible characters, four ASCII digits, `-`.
    pub fn is_az_style(&self) -> bool {
        let p = self.as_bytes();
        p[0] == b'-'
            && p[7] == b'-'
            && p[1..3].iter().copied().all(is_visible)
            && p[3..7].iter().copied().all(is_digit)
    }

    /// An ASCII letter followed by three version alphabet symbols.
    pub fn is_shadow_style(&self) -> bool {
        let p = self.as_bytes();
        is_letter(p[0]) && p[1..4].iter().copied().all(is_shadow_version_char)
    }

    pub fn extract_az_style_client(&self) -> Result<Client> {
        if !self.is_az_style() {
            return Err(Error::NotThisStyle(Style::Azureus));
        }
        let p = self.as_bytes();
        let code = &p[1..3];
        Ok(Client {
            code: String::from_utf8_lossy(code).into_owned(),
            name: azureus_client_name(code),
            version: az_style_to_semantic(&p[3..7])?,
            style: Style::Azureus,
        })
    }

    pub fn extract_shadow_style_client(&self) -> Result<Client> {
        if !self.is_shadow_style() {
            return Err(Error::NotThisStyle(Style::Shadow));
        }
        let p = self.as_bytes();
        let code = &p[..1];
        Ok(Client {
            code: String::from_utf8_lossy(code).into_owned(),
            name: shadow_client_name(code),
            version: shadow_style_to_semantic(&p[1..4])?,
            style: Style::Shadow,
        })
    }
}

/// Fails with [`Error::InvalidLength`] unless `peer_id` is exactly 20 bytes.
pub fn is_az_style(peer_id: &[u8]) -> Result<bool> {
    Ok(PeerToken::try_from(peer_id)?.is_az_style())
}

/// Fails with [`Error::InvalidLength`] unless `peer_id` is exactly 20 bytes.
pub fn is_shadow_style(peer_id: &[u8]) -> Result<bool> {
    Ok(PeerToken::try_from(peer_id)?.is_shadow_style())
}

fn finish_token<R: Rng + ?Sized>(header: &[u8], rng: &mut R) -> PeerToken {
    let mut peer_id = [0u8; PEER_ID_LEN];
    peer_id[..header.len()].copy_from_slice(header);
    fill_visible(rng, &mut peer_id[header.len()..]);
    PeerToken::new(peer_id)
}

/// Build `-CC1234-` and pad it to 20 bytes with random visible characters.
///
/// `code` must be two visible ASCII characters.
pub fn build_az_style_token<R: Rng + ?Sized>(
    code: &str,
    version: &SemanticVersion,
    rng: &mut R,
) -> Result<PeerToken> {
    let code_bytes = code.as_bytes();
    if code_bytes.len() != 2 || !code_bytes.iter().copied().all(is_visible) {
        return Err(Error::InvalidCode {
            style: Style::Azureus,
            code: code.to_owned(),
        });
    }
    let mut header = [b'-'; AZ_STYLE_HEADER_LEN];
    header[1..3].copy_from_slice(code_bytes);
    header[3..7].copy_from_slice(&semantic_to_az_style(version)?);
    Ok(finish_token(&header, rng))
}

/// Build `C123--` + `---` and pad it to 20 bytes with random visible characters.
///
/// The three version symbols are padded to five with `-`, then followed by three
/// literal `-`. `code` must be a single ASCII letter.
pub fn build_shadow_style_token<R: Rng + ?Sized>(
    code: &str,
    version: &SemanticVersion,
    rng: &mut R,
) -> Result<PeerToken> {
    let code_bytes = code.as_bytes();
    if code_bytes.len() != 1 || !is_letter(code_bytes[0]) {
        return Err(Error::InvalidCode {
            style: Style::Shadow,
            code: code.to_owned(),
        });
    }
    let mut header = [b'-'; SHADOW_STYLE_HEADER_LEN];
    header[0] = code_bytes[0];
    header[1..4].copy_from_slice(&semantic_to_shadow_style(version)?);
    Ok(finish_token(&header, rng))
}
