//! Call transports to the external engine.
//!
//! Both transports take an operation name plus a request buffer and return
//! the response buffer. Which one is used is decided once by the
//! [`Dispatcher`](crate::dispatcher::Dispatcher).

pub mod channel;
pub mod native;
#[cfg(feature = "registry")]
pub mod registry;

pub use self::channel::{ChannelTransport, HostChannel};
pub use self::native::{NativeBinding, NativeTransport};
#[cfg(feature = "registry")]
pub use self::registry::{ChannelRegistry, FnHandler, MethodHandler};

use crate::operation::Operation;
use crate::wire::WireError;
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Infrastructure failures: the call did not complete against the engine.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("no host channel registered under '{0}'")]
    ChannelNotRegistered(String),

    #[error("method '{method}' not implemented on channel '{channel}'")]
    MethodNotImplemented { channel: String, method: String },

    #[error("host channel call failed: {0}")]
    Channel(String),

    #[error("native binding call failed: {0}")]
    Native(String),

    #[error("wire format error")]
    Wire(#[from] WireError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    Native,
    Channel,
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportKind::Native => f.write_str("native"),
            TransportKind::Channel => f.write_str("channel"),
        }
    }
}

/// A single way of reaching the engine.
#[async_trait]
pub trait Transport: Send + Sync {
    fn kind(&self) -> TransportKind;

    /// Delivers one request and waits for its response.
    async fn send(&self, operation: Operation, payload: &[u8]) -> Result<Vec<u8>, TransportError>;
}
