//! Asynchronous host-channel transport, the fallback when no native binding
//! is available.

use crate::operation::Operation;
use crate::transport::{Transport, TransportError, TransportKind};
use async_trait::async_trait;
use std::sync::Arc;

/// A named asynchronous message channel provided by the host.
#[async_trait]
pub trait HostChannel: Send + Sync {
    async fn invoke_method(
        &self,
        channel: &str,
        method: &str,
        payload: &[u8],
    ) -> Result<Vec<u8>, TransportError>;
}

/// Sends every operation over one fixed channel, using the operation name
/// as the method.
pub struct ChannelTransport {
    host: Arc<dyn HostChannel>,
    channel_name: String,
}

impl ChannelTransport {
    pub fn new(host: Arc<dyn HostChannel>, channel_name: impl Into<String>) -> Self {
        Self {
            host,
            channel_name: channel_name.into(),
        }
    }
}

#[async_trait]
impl Transport for ChannelTransport {
    fn kind(&self) -> TransportKind {
        TransportKind::Channel
    }

    async fn send(&self, operation: Operation, payload: &[u8]) -> Result<Vec<u8>, TransportError> {
        self.host
            .invoke_method(&self.channel_name, operation.as_str(), payload)
            .await
    }
}
