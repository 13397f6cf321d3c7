//! Shared error type for configuration and setup

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading or resolving run settings
#[derive(Error, Debug)]
pub enum Error {
    /// Reading a config file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file unparsable, or a required setting is missing
    #[error("Configuration error: {0}")]
    Config(String),

    /// A setting was given but has an unusable value
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
