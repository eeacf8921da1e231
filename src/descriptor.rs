//! Notification descriptor and the presentation seam
//!
//! A descriptor is built fresh per dispatch, handed to the `Presenter` once,
//! and never mutated afterwards. The navigation action always targets the
//! host app's root entry point with clear-top semantics: the payload carries
//! no addressable resource, so there is nothing deeper to link to.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::channel::VIBRATION_PATTERN;

/// 点按通知后的导航动作
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationAction {
    /// 打开宿主应用入口，clear-top 语义（复用既有实例，清除中间页面）
    OpenAppRoot { clear_top: bool },
}

impl NavigationAction {
    pub fn open_app_root() -> Self {
        Self::OpenAppRoot { clear_top: true }
    }
}

/// 通知优先级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Default,
}

/// 构造完成、待提交的通知
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationDescriptor {
    /// 已加转换标记的标题
    pub title: String,
    /// 正文
    pub body: String,
    /// 所属渠道 id
    pub channel_id: String,
    /// 点按动作
    pub action: NavigationAction,
    pub priority: Priority,
    /// 展开显示完整正文
    pub big_text_style: bool,
    /// 点按后自动消除
    pub auto_cancel: bool,
    /// 提交时震动序列
    pub vibration_pattern: Vec<u64>,
}

impl NotificationDescriptor {
    /// 按固定展示属性构造描述
    pub fn new(title: impl Into<String>, body: impl Into<String>, channel_id: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            channel_id: channel_id.into(),
            action: NavigationAction::open_app_root(),
            priority: Priority::High,
            big_text_style: true,
            auto_cancel: true,
            vibration_pattern: VIBRATION_PATTERN.to_vec(),
        }
    }
}

/// 展示边界 trait - 平台渲染服务
///
/// `present` 可能失败（能力不可用等），调用方负责捕获并记日志，
/// 失败永不穿透分发路径。
pub trait Presenter: Send + Sync {
    fn present(&self, id: i32, descriptor: &NotificationDescriptor) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_fixed_attributes() {
        let d = NotificationDescriptor::new("t", "b", "ch");
        assert_eq!(d.action, NavigationAction::OpenAppRoot { clear_top: true });
        assert_eq!(d.priority, Priority::High);
        assert!(d.big_text_style);
        assert!(d.auto_cancel);
        assert_eq!(d.vibration_pattern, VIBRATION_PATTERN.to_vec());
    }
}
