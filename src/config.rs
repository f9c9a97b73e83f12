//!
//! # 桥接配置
//!
//! 决定宿主通道名称以及是否探测原生绑定。
//! 配置在构造 `Dispatcher` 时读取一次，之后不再改变。
//!
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 所有操作共享的宿主通道名称
pub const DEFAULT_CHANNEL_NAME: &str = "openpgp";

/// 原生绑定的使用方式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NativeMode {
    /// 首次调用时探测原生绑定，可用则优先使用
    #[default]
    Auto,
    /// 不探测，始终走宿主通道
    Disabled,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BridgeConfig {
    /// 宿主通道名称
    pub channel_name: String,
    /// 原生绑定策略
    pub native: NativeMode,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            channel_name: DEFAULT_CHANNEL_NAME.to_string(),
            native: NativeMode::Auto,
        }
    }
}

impl BridgeConfig {
    pub fn with_channel_name(mut self, name: impl Into<String>) -> Self {
        self.channel_name = name.into();
        self
    }

    pub fn with_native(mut self, native: NativeMode) -> Self {
        self.native = native;
        self
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 从 JSON 文件加载配置
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.channel_name.trim().is_empty() {
            return Err(ConfigError::Invalid("channelName must not be empty".into()));
        }
        Ok(())
    }
}
