//! 入站消息结构 - 传输层投递的推送消息
//!
//! 消息由外部推送传输层构造并只读传入；一条消息可以同时携带
//! notification payload 和 data payload，两者互不排斥。

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 推送消息中的 notification payload（标题/正文对）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationPayload {
    /// 标题（可缺失或为空串）
    pub title: Option<String>,
    /// 正文（可缺失或为空串）
    pub body: Option<String>,
}

impl NotificationPayload {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            body: Some(body.into()),
        }
    }
}

/// 传输层投递的入站消息
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InboundMessage {
    /// 发送方标识
    pub from: Option<String>,
    /// notification payload（可选）
    pub notification: Option<NotificationPayload>,
    /// data payload（可选，string -> string 映射）
    #[serde(default)]
    pub data: HashMap<String, String>,
}

impl InboundMessage {
    /// 创建空消息
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置发送方
    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// 设置 notification payload
    pub fn with_notification(mut self, payload: NotificationPayload) -> Self {
        self.notification = Some(payload);
        self
    }

    /// 追加一个 data 键值对
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// 是否携带 notification payload
    pub fn has_notification(&self) -> bool {
        self.notification.is_some()
    }

    /// 是否携带 data payload
    pub fn has_data(&self) -> bool {
        !self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_chain() {
        let msg = InboundMessage::new()
            .with_from("sender-1")
            .with_notification(NotificationPayload::new("Hello", "World"))
            .with_data("title", "Data title");

        assert_eq!(msg.from, Some("sender-1".to_string()));
        assert!(msg.has_notification());
        assert!(msg.has_data());
        assert_eq!(msg.data.get("title"), Some(&"Data title".to_string()));
    }

    #[test]
    fn test_empty_message() {
        let msg = InboundMessage::new();
        assert!(!msg.has_notification());
        assert!(!msg.has_data());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let msg = InboundMessage::new()
            .with_notification(NotificationPayload::new("t", "b"))
            .with_data("message", "fallback body");

        let json = serde_json::to_string(&msg).unwrap();
        let back: InboundMessage = serde_json::from_str(&json).unwrap();

        assert_eq!(back.notification.unwrap().title, Some("t".to_string()));
        assert_eq!(back.data.get("message"), Some(&"fallback body".to_string()));
    }

    #[test]
    fn test_deserialize_missing_data_defaults_empty() {
        let msg: InboundMessage = serde_json::from_str(r#"{"from": "x"}"#).unwrap();
        assert!(!msg.has_data());
        assert!(msg.notification.is_none());
    }
}
