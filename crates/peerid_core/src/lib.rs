//! Decoding and generation of BitTorrent peer ids.
//!
//! Two client conventions are understood, see <https://wiki.theory.org/BitTorrentSpecification#peer_id>:
//! Azureus style (`-AZ2060-...`) and Shadow style (`S58B-----...`).
//!
//! ```
//! let client = peerid_core::decode("-AZ2060-4f2f1f2f1f2f").unwrap().unwrap();
//! assert_eq!(client.version.to_string(), "2.0.60");
//!
//! let peer_id = peerid_core::encode("S", "5.8.11", "shadow").unwrap();
//! assert_eq!(&peer_id.as_bytes()[..9], b"S58B-----");
//! ```

pub mod chars;
pub mod clients;
pub mod error;
pub mod filler;
pub mod peer_id;
pub mod source;
pub mod style;
pub mod token;
pub mod version;

pub use error::{Error, Result};
pub use peer_id::{decode, encode, encode_az_style, encode_shadow_style, encode_with_rng};
pub use source::PeerIdSource;
pub use style::{Client, Style};
pub use token::PeerToken;
pub use version::SemanticVersion;
