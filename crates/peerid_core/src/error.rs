use crate::style::Style;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("peer id must be {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("invalid compact version: {0}")]
    InvalidFormat(&'static str),
    #[error("invalid semantic version {0:?}: expected major.minor.patch")]
    InvalidVersion(String),
    #[error("version {component} {value} out of range, max is {max}")]
    OutOfRange {
        component: &'static str,
        value: u64,
        max: u32,
    },
    #[error("invalid {style} client code {code:?}")]
    InvalidCode { style: Style, code: String },
    #[error("unknown peer id style {0:?}, expected \"az\" or \"shadow\"")]
    InvalidStyle(String),
    #[error("peer id is not {0} style")]
    NotThisStyle(Style),
    #[error(transparent)]
    InvalidHex(#[from] hex::FromHexError),
}

pub type Result<T> = std::result::Result<T, Error>;
