//! Title/body derivation for rendered notifications
//!
//! Each payload kind carries its own fallback rules:
//! - notification payload: empty or missing fields fall back to fixed literals
//! - data payload: `title` key, then `body` key with `message` as second
//!   choice, falling back to the same literals
//!
//! Every derived title gets a fixed marker suffix before display. The marker
//! is intentional domain behavior, not debug residue: it is the visible proof
//! that the notification was rendered locally rather than by the platform.

use std::collections::HashMap;

use crate::message::NotificationPayload;

/// Fallback title when the payload carries none
pub const FALLBACK_TITLE: &str = "Notification";
/// Fallback body when the payload carries none
pub const FALLBACK_BODY: &str = "You have a new message";
/// Marker appended to every locally converted title
pub const CONVERTED_MARKER: &str = "+++ (converted)";

/// 渲染内容（标题尚未加标记）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedContent {
    pub title: String,
    pub body: String,
}

impl RenderedContent {
    /// 从 notification payload 提取标题/正文（空串视同缺失）
    pub fn from_notification(payload: &NotificationPayload) -> Self {
        let title = payload
            .title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(FALLBACK_TITLE)
            .to_string();
        let body = payload
            .body
            .as_deref()
            .filter(|b| !b.is_empty())
            .unwrap_or(FALLBACK_BODY)
            .to_string();
        Self { title, body }
    }

    /// 从 data payload 提取标题/正文
    ///
    /// 正文优先级严格为 `body` 先于 `message`。
    pub fn from_data(data: &HashMap<String, String>) -> Self {
        let title = data
            .get("title")
            .cloned()
            .unwrap_or_else(|| FALLBACK_TITLE.to_string());
        let body = data
            .get("body")
            .or_else(|| data.get("message"))
            .cloned()
            .unwrap_or_else(|| FALLBACK_BODY.to_string());
        Self { title, body }
    }
}

/// Append the converted marker to a derived title.
///
/// Called exactly once per dispatch; the title passed in comes straight from
/// payload extraction and never carries the marker already.
pub fn convert_title(title: &str) -> String {
    format!("{}{}", title, CONVERTED_MARKER)
}

/// Recover the original title from a converted one, for diagnostics.
///
/// Longest prefix before the first marker occurrence; titles without the
/// marker are returned unchanged.
pub fn original_title(converted: &str) -> &str {
    match converted.find(CONVERTED_MARKER) {
        Some(idx) => &converted[..idx],
        None => converted,
    }
}
