use rand::Rng;
use tracing::{debug, trace};

use crate::{
    error::Result,
    source::PeerIdSource,
    style::{Client, Style, build_az_style_token, build_shadow_style_token},
    token::PeerToken,
    version::SemanticVersion,
};

/// Work out which client produced a peer id.
///
/// Only the first 20 bytes are looked at; fewer than that is an error. A peer id that
/// follows neither the Azureus nor the Shadow convention is `Ok(None)`.
pub fn decode<'a>(source: impl Into<PeerIdSource<'a>>) -> Result<Option<Client>> {
    let bytes = source.into().into_bytes();
    let token = PeerToken::from_prefix(&bytes)?;
    try_decode_peer_id(&token)
}

pub fn try_decode_peer_id(token: &PeerToken) -> Result<Option<Client>> {
    // Azureus goes first, its "-" sentinels are the stricter match.
    if token.is_az_style() {
        trace!(?token, "azureus style peer id");
        return token.extract_az_style_client().map(Some);
    }
    if token.is_shadow_style() {
        trace!(?token, "shadow style peer id");
        return token.extract_shadow_style_client().map(Some);
    }
    trace!(?token, "unrecognized peer id");
    Ok(None)
}

/// Generate a peer id for client `code` at `version` in the given `style` ("az" or "shadow").
pub fn encode(code: &str, version: &str, style: &str) -> Result<PeerToken> {
    let version: SemanticVersion = version.parse()?;
    let style: Style = style.parse()?;
    encode_with_rng(code, &version, style, &mut rand::rng())
}

pub fn encode_with_rng<R: Rng + ?Sized>(
    code: &str,
    version: &SemanticVersion,
    style: Style,
    rng: &mut R,
) -> Result<PeerToken> {
    let token = match style {
        Style::Azureus => build_az_style_token(code, version, rng)?,
        Style::Shadow => build_shadow_style_token(code, version, rng)?,
    };
    debug!(code, %version, %style, ?token, "generated peer id");
    Ok(token)
}

pub fn encode_az_style(code: &str, version: &str) -> Result<PeerToken> {
    encode_with_rng(code, &version.parse()?, Style::Azureus, &mut rand::rng())
}

pub fn encode_shadow_style(code: &str, version: &str) -> Result<PeerToken> {
    encode_with_rng(code, &version.parse()?, Style::Shadow, &mut rand::rng())
}
