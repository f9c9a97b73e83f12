//! Defines the error types for the `openpgp-bridge` crate.
//!
//! Operations fail through exactly two disjoint channels:
//!
//! - [`EngineError`]: the external engine ran the operation and reported a
//!   semantic failure in the response's error field.
//! - [`TransportError`]: the call never completed against the engine
//!   (channel missing, native call failed, wire mismatch).
//!
//! [`Error`] carries one or the other and never converts between them.

use crate::transport::TransportError;
use crate::wire::WireError;
use thiserror::Error;

/// A failure reported by the external engine itself.
///
/// The engine's error text is kept verbatim and is available through
/// [`EngineError::cause`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("openpgp engine error: {cause}")]
pub struct EngineError {
    cause: String,
}

impl EngineError {
    pub fn new(cause: impl Into<String>) -> Self {
        Self {
            cause: cause.into(),
        }
    }

    /// The error text exactly as the engine returned it.
    pub fn cause(&self) -> &str {
        &self.cause
    }
}

/// The main error type for bridge operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl Error {
    /// Returns `true` if the engine executed the call and reported a failure.
    pub fn is_engine(&self) -> bool {
        matches!(self, Error::Engine(_))
    }

    /// Returns `true` if the call never completed against the engine.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// The engine's error text, if this is a domain failure.
    pub fn engine_cause(&self) -> Option<&str> {
        match self {
            Error::Engine(err) => Some(err.cause()),
            Error::Transport(_) => None,
        }
    }
}

// 编解码失败属于基础设施错误，归入传输通道
impl From<WireError> for Error {
    fn from(err: WireError) -> Self {
        Error::Transport(TransportError::Wire(err))
    }
}

/// Errors raised while loading a [`BridgeConfig`](crate::config::BridgeConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    #[error("Serialization error (JSON)")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
