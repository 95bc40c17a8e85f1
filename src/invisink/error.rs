use crate::stream::StreamOperation;
use thiserror::Error;

/// Why a string could not be read back as alphabet symbols.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SymbolError {
    #[error("odd number of symbols: {count}")]
    OddLength { count: usize },

    #[error("unrecognised symbol U+{:04X} at position {position}", u32::from(*.symbol))]
    UnknownSymbol { position: usize, symbol: char },
}

/// Failures inside the codec pipeline.
///
/// The `Option` facade in [`crate::codec`] collapses these into `None`, but the
/// `try_*` variants return them so callers can tell which stage failed.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("failed to initialise {operation} stream: {reason}")]
    StreamInitFailed {
        operation: StreamOperation,
        reason: String,
    },

    #[error("{operation} stream failed: {reason}")]
    StreamProcessingFailed {
        operation: StreamOperation,
        reason: String,
    },

    #[error("failed to tear down {operation} stream: {reason}")]
    StreamTeardownFailed {
        operation: StreamOperation,
        reason: String,
    },

    #[error("invalid symbol sequence: {0}")]
    InvalidScalarSequence(#[from] SymbolError),

    #[error("decoded payload is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

#[derive(Error, Debug)]
pub enum InvisinkError {
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, InvisinkError>;
