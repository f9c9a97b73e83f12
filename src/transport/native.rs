//! In-process native binding transport.

use crate::operation::Operation;
use crate::transport::{Transport, TransportError, TransportKind};
use async_trait::async_trait;
use std::sync::Arc;

/// An in-process entry point into the engine.
///
/// `is_available` is the capability query used by the one-time probe;
/// `call` is synchronous and is wrapped by [`NativeTransport`].
pub trait NativeBinding: Send + Sync {
    fn is_available(&self) -> bool;

    fn call(&self, name: &str, payload: &[u8]) -> Result<Vec<u8>, TransportError>;
}

pub struct NativeTransport {
    binding: Arc<dyn NativeBinding>,
}

impl NativeTransport {
    pub fn new(binding: Arc<dyn NativeBinding>) -> Self {
        Self { binding }
    }
}

#[async_trait]
impl Transport for NativeTransport {
    fn kind(&self) -> TransportKind {
        TransportKind::Native
    }

    async fn send(&self, operation: Operation, payload: &[u8]) -> Result<Vec<u8>, TransportError> {
        self.binding.call(operation.as_str(), payload)
    }
}
