//! Push Notify - 把推送传输层投递的消息转换为本地渲染的通知
//!
//! 作为宿主应用内的后台监听库运行：传输层调用 [`Dispatcher`] 的回调，
//! 分发管线负责分类 payload、派生标题/正文、保证渠道存在、生成通知
//! id 并提交给展示边界。平台侧协作方（展示、渠道注册表、注册上传）
//! 全部以 trait 注入。

pub mod builder;
pub mod channel;
pub mod descriptor;
pub mod dispatcher;
pub mod formatter;
pub mod identity;
pub mod message;
pub mod uploader;

pub use builder::DispatcherBuilder;
pub use channel::{ChannelProvisioner, ChannelRegistry, ChannelSpec, Importance};
pub use descriptor::{NavigationAction, NotificationDescriptor, Presenter, Priority};
pub use dispatcher::{DispatchResult, Dispatcher};
pub use formatter::{convert_title, original_title, CONVERTED_MARKER, FALLBACK_BODY, FALLBACK_TITLE};
pub use identity::{IdSource, SequentialIdSource, WallClockIdSource};
pub use message::{InboundMessage, NotificationPayload};
pub use uploader::{HttpTokenUploader, TokenUploader, UploaderConfig};
