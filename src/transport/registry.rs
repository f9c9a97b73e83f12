//! In-process host channel registry.
//!
//! Hosts that embed the engine in the same process register a handler per
//! channel name; the registry then acts as the [`HostChannel`].

use crate::transport::{HostChannel, TransportError};
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// Handles every method sent to one channel.
#[async_trait]
pub trait MethodHandler: Send + Sync {
    async fn handle(&self, method: &str, payload: &[u8]) -> Result<Vec<u8>, TransportError>;
}

/// Adapts a synchronous closure into a [`MethodHandler`].
pub struct FnHandler<F> {
    f: F,
}

impl<F> FnHandler<F>
where
    F: Fn(&str, &[u8]) -> Result<Vec<u8>, TransportError> + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

#[async_trait]
impl<F> MethodHandler for FnHandler<F>
where
    F: Fn(&str, &[u8]) -> Result<Vec<u8>, TransportError> + Send + Sync,
{
    async fn handle(&self, method: &str, payload: &[u8]) -> Result<Vec<u8>, TransportError> {
        (self.f)(method, payload)
    }
}

#[derive(Default)]
pub struct ChannelRegistry {
    channels: DashMap<String, Arc<dyn MethodHandler>>,
}

impl ChannelRegistry {
    pub fn new() -> Self {
        Default::default()
    }

    /// Registers `handler` under `name`, returning the handler it replaced.
    pub fn register(
        &self,
        name: impl Into<String>,
        handler: Arc<dyn MethodHandler>,
    ) -> Option<Arc<dyn MethodHandler>> {
        self.channels.insert(name.into(), handler)
    }

    pub fn unregister(&self, name: &str) -> Option<Arc<dyn MethodHandler>> {
        self.channels.remove(name).map(|(_, handler)| handler)
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.channels.contains_key(name)
    }
}

#[async_trait]
impl HostChannel for ChannelRegistry {
    async fn invoke_method(
        &self,
        channel: &str,
        method: &str,
        payload: &[u8],
    ) -> Result<Vec<u8>, TransportError> {
        // 在 await 之前释放分片锁
        let handler = self
            .channels
            .get(channel)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| TransportError::ChannelNotRegistered(channel.to_string()))?;

        handler.handle(method, payload).await
    }
}
