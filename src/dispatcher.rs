//! 传输分发器
//!
//! 首次使用时探测原生绑定是否可用，并把选中的传输缓存到进程生命周期结束。
//! 之后每次调用只读取缓存的选择，不会重新探测，也不支持按调用切换传输。

use crate::config::{BridgeConfig, NativeMode};
use crate::operation::Operation;
use crate::transport::{
    ChannelTransport, HostChannel, NativeBinding, NativeTransport, Transport, TransportError,
    TransportKind,
};
use std::sync::{Arc, OnceLock};
use uuid::Uuid;

pub struct Dispatcher {
    config: BridgeConfig,
    native: Option<Arc<dyn NativeBinding>>,
    channel: Arc<dyn HostChannel>,
    /// 探测结果；并发的首次调用由 `OnceLock` 收敛为同一个值
    route: OnceLock<Arc<dyn Transport>>,
}

impl Dispatcher {
    /// 创建以宿主通道为回退的分发器
    pub fn new(config: BridgeConfig, channel: Arc<dyn HostChannel>) -> Self {
        Self {
            config,
            native: None,
            channel,
            route: OnceLock::new(),
        }
    }

    /// 附加一个待探测的原生绑定
    pub fn with_native(mut self, binding: Arc<dyn NativeBinding>) -> Self {
        self.native = Some(binding);
        self
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn is_probed(&self) -> bool {
        self.route.get().is_some()
    }

    /// 当前使用的传输种类；尚未探测时会触发探测
    pub fn transport_kind(&self) -> TransportKind {
        self.route().kind()
    }

    fn route(&self) -> &Arc<dyn Transport> {
        self.route.get_or_init(|| self.probe())
    }

    fn probe(&self) -> Arc<dyn Transport> {
        let native = match (self.config.native, &self.native) {
            (NativeMode::Auto, Some(binding)) if binding.is_available() => Some(binding.clone()),
            _ => None,
        };

        let transport: Arc<dyn Transport> = match native {
            Some(binding) => Arc::new(NativeTransport::new(binding)),
            None => Arc::new(ChannelTransport::new(
                self.channel.clone(),
                self.config.channel_name.clone(),
            )),
        };

        tracing::debug!(
            transport = %transport.kind(),
            native_mode = ?self.config.native,
            "probed engine transport"
        );
        transport
    }

    /// 把一次请求交给选中的传输，失败原样返回
    pub async fn dispatch(
        &self,
        operation: Operation,
        payload: &[u8],
    ) -> Result<Vec<u8>, TransportError> {
        let transport = self.route();
        let call_id = Uuid::new_v4();
        tracing::trace!(
            %call_id,
            %operation,
            transport = %transport.kind(),
            request_len = payload.len(),
            "dispatching engine call"
        );

        match transport.send(operation, payload).await {
            Ok(response) => {
                tracing::trace!(%call_id, response_len = response.len(), "engine call completed");
                Ok(response)
            }
            Err(err) => {
                tracing::warn!(%call_id, %operation, error = %err, "engine transport failed");
                Err(err)
            }
        }
    }
}
