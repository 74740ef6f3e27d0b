use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid address")]
    InvalidAddress,
    #[error("Invalid hex string: '{0}'")]
    InvalidHex(String),
    #[error("Invalid block tag: '{0}'")]
    InvalidBlockTag(String),
}
