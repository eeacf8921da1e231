//! 通知渠道供给 - 容量探测 + 幂等创建
//!
//! 渠道是平台侧的持久分组（重要级/震动/提示音共享配置）。部分旧平台
//! 没有渠道概念，注册表通过能力探测报告支持情况；不支持时供给为 no-op。

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use tracing::{debug, error, info};

/// 默认渠道 id
pub const DEFAULT_CHANNEL_ID: &str = "push_notifications";
/// 默认渠道显示名
pub const DEFAULT_CHANNEL_NAME: &str = "Push Notifications";
/// 默认渠道描述
pub const DEFAULT_CHANNEL_DESCRIPTION: &str = "Incoming push notifications";

/// 固定 9 段震动序列（毫秒）
pub const VIBRATION_PATTERN: [u64; 9] = [100, 200, 300, 400, 500, 400, 300, 200, 400];

/// 渠道重要级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Importance {
    High,
    Default,
    Low,
}

/// 渠道描述 - 固定视觉/声音属性
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelSpec {
    pub id: String,
    pub name: String,
    pub description: String,
    pub importance: Importance,
    pub vibration_enabled: bool,
    pub lights_enabled: bool,
    pub vibration_pattern: Vec<u64>,
}

impl ChannelSpec {
    /// 创建渠道描述（重要级固定为 High，震动/灯光开启）
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            importance: Importance::High,
            vibration_enabled: true,
            lights_enabled: true,
            vibration_pattern: VIBRATION_PATTERN.to_vec(),
        }
    }
}

impl Default for ChannelSpec {
    fn default() -> Self {
        Self::new(
            DEFAULT_CHANNEL_ID,
            DEFAULT_CHANNEL_NAME,
            DEFAULT_CHANNEL_DESCRIPTION,
        )
    }
}

/// 平台渠道注册表 trait
///
/// 实现方是平台的通知管理能力；`create_channel` 的 upsert 语义由平台
/// 文档保证（相同 id 重复创建为 no-op）。
pub trait ChannelRegistry: Send + Sync {
    /// 平台是否支持渠道（旧平台返回 false）
    fn supports_channels(&self) -> bool;

    /// 创建（或幂等重建）渠道
    fn create_channel(&self, spec: &ChannelSpec) -> Result<()>;
}

/// 渠道供给器 - 每次分发前调用，保证渠道存在
///
/// 除平台自身的 upsert 语义外，进程内再记录一份已供给 id 集合，
/// 重复调用不会再次触达注册表。
pub struct ChannelProvisioner {
    registry: Arc<dyn ChannelRegistry>,
    provisioned: Mutex<HashSet<String>>,
}

impl ChannelProvisioner {
    pub fn new(registry: Arc<dyn ChannelRegistry>) -> Self {
        Self {
            registry,
            provisioned: Mutex::new(HashSet::new()),
        }
    }

    /// 幂等地保证渠道存在
    ///
    /// 注册表不可用属于非致命错误：记日志后返回，后续 present 调用
    /// 自行失败并在分发边界被捕获。
    pub fn ensure_channel(&self, spec: &ChannelSpec) {
        if !self.registry.supports_channels() {
            debug!(channel = %spec.id, "Platform has no channel support, skipping provisioning");
            return;
        }

        {
            let provisioned = self.provisioned.lock().unwrap_or_else(|e| e.into_inner());
            if provisioned.contains(&spec.id) {
                return;
            }
        }

        match self.registry.create_channel(spec) {
            Ok(()) => {
                info!(channel = %spec.id, "Notification channel provisioned");
                self.provisioned
                    .lock()
                    .unwrap_or_else(|e| e.into_inner())
                    .insert(spec.id.clone());
            }
            Err(e) => {
                // 非致命：分发继续，present 会自行失败并被上层捕获
                error!(channel = %spec.id, error = %e, "Failed to provision notification channel");
            }
        }
    }
}
