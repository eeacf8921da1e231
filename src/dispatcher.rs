//! 分发管线 - 入站消息到本地通知
//!
//! 一条消息可携带 notification payload、data payload、两者或都不带；
//! 每种在场的 payload 独立走一遍管线，各自产生一次提交（不去重）。
//! 分发永不把错误抛回传输层：失败被捕获、记日志并折算为
//! `DispatchResult::Suppressed`。

use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::channel::{ChannelProvisioner, ChannelSpec};
use crate::descriptor::{NotificationDescriptor, Presenter};
use crate::formatter::{convert_title, original_title, RenderedContent};
use crate::identity::IdSource;
use crate::message::InboundMessage;
use crate::uploader::TokenUploader;

/// 单次 payload 分发的结果
///
/// 只用于观测与测试；传输层回调方不检查返回值。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchResult {
    /// 已提交展示边界
    Delivered { id: i32 },
    /// 被抑制（含原因），错误已记日志
    Suppressed(String),
}

/// 分发器 - 传输层回调的接收方
pub struct Dispatcher {
    presenter: Arc<dyn Presenter>,
    provisioner: ChannelProvisioner,
    id_source: Arc<dyn IdSource>,
    uploader: Option<Arc<dyn TokenUploader>>,
    channel_spec: ChannelSpec,
}

impl Dispatcher {
    pub(crate) fn new(
        presenter: Arc<dyn Presenter>,
        provisioner: ChannelProvisioner,
        id_source: Arc<dyn IdSource>,
        uploader: Option<Arc<dyn TokenUploader>>,
        channel_spec: ChannelSpec,
    ) -> Self {
        Self {
            presenter,
            provisioner,
            id_source,
            uploader,
            channel_spec,
        }
    }

    /// 入站消息回调
    ///
    /// 每种在场的 payload 独立产生一次提交；同一条消息带两种 payload
    /// 时会展示两条通知。调用方（传输层）不观察返回值，返回值仅供
    /// 观测与测试。
    pub fn on_inbound_message(&self, msg: &InboundMessage) -> Vec<DispatchResult> {
        debug!(
            from = ?msg.from,
            has_notification = msg.has_notification(),
            has_data = msg.has_data(),
            "Inbound push message received"
        );

        let mut results = Vec::new();

        if let Some(payload) = &msg.notification {
            debug!(title = ?payload.title, "Processing notification payload");
            results.push(self.dispatch_one(RenderedContent::from_notification(payload)));
        }

        if msg.has_data() {
            debug!(keys = msg.data.len(), "Processing data payload");
            results.push(self.dispatch_one(RenderedContent::from_data(&msg.data)));
        }

        if results.is_empty() {
            debug!("Message carried no payload, nothing to present");
        }

        results
    }

    /// 单个 payload 的分发：转换标题、供给渠道、生成 id、提交展示
    fn dispatch_one(&self, content: RenderedContent) -> DispatchResult {
        match self.present_content(content) {
            Ok(id) => DispatchResult::Delivered { id },
            Err(e) => {
                // 展示失败是静默降级，传输层没有重试契约
                warn!(error = %e, "Notification suppressed");
                DispatchResult::Suppressed(e.to_string())
            }
        }
    }

    fn present_content(&self, content: RenderedContent) -> Result<i32> {
        let converted = convert_title(&content.title);
        debug!(
            original = original_title(&converted),
            converted = %converted,
            body = %content.body,
            "Converted push payload to local notification"
        );

        self.provisioner.ensure_channel(&self.channel_spec);

        let id = self.id_source.next_id();
        let descriptor =
            NotificationDescriptor::new(converted, content.body, &self.channel_spec.id);

        self.presenter.present(id, &descriptor)?;
        debug!(id, "Local notification presented");
        Ok(id)
    }

    /// token 轮换回调 - 转发给注册上传方（fire-and-forget）
    pub fn on_new_token(&self, token: &str) {
        info!("Registration token rotated");
        match &self.uploader {
            Some(uploader) => {
                if let Err(e) = uploader.upload_async(token) {
                    warn!(error = %e, "Failed to hand token to uploader");
                }
            }
            None => debug!("No uploader configured, token not forwarded"),
        }
    }

    /// 发送确认回调 - 仅记日志
    pub fn on_message_sent(&self, msg_id: &str) {
        info!(msg_id = %msg_id, "Upstream message sent");
    }

    /// 发送失败回调 - 仅记日志
    pub fn on_send_error(&self, msg_id: &str, cause: &str) {
        error!(msg_id = %msg_id, cause = %cause, "Upstream message send failed");
    }

    /// 消息清除回调 - 仅记日志
    pub fn on_messages_purged(&self) {
        info!("Pending messages purged by the transport");
    }
}
