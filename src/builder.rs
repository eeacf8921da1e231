//! 分发器构建器 - 组装展示边界、渠道注册表与上传方

use std::sync::Arc;

use crate::channel::{ChannelProvisioner, ChannelRegistry, ChannelSpec};
use crate::descriptor::Presenter;
use crate::dispatcher::Dispatcher;
use crate::identity::{IdSource, WallClockIdSource};
use crate::uploader::TokenUploader;

/// 分发器构建器
///
/// 展示边界与渠道注册表必填；id 来源默认墙钟毫秒，上传方可缺省
/// （缺省时 token 轮换只记日志）。
pub struct DispatcherBuilder {
    presenter: Option<Arc<dyn Presenter>>,
    registry: Option<Arc<dyn ChannelRegistry>>,
    id_source: Arc<dyn IdSource>,
    uploader: Option<Arc<dyn TokenUploader>>,
    channel_spec: ChannelSpec,
}

impl DispatcherBuilder {
    pub fn new() -> Self {
        Self {
            presenter: None,
            registry: None,
            id_source: Arc::new(WallClockIdSource),
            uploader: None,
            channel_spec: ChannelSpec::default(),
        }
    }

    /// 设置展示边界
    pub fn presenter(mut self, presenter: Arc<dyn Presenter>) -> Self {
        self.presenter = Some(presenter);
        self
    }

    /// 设置渠道注册表
    pub fn channel_registry(mut self, registry: Arc<dyn ChannelRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// 覆盖 id 来源（默认墙钟毫秒）
    pub fn id_source(mut self, id_source: Arc<dyn IdSource>) -> Self {
        self.id_source = id_source;
        self
    }

    /// 设置 token 上传方
    pub fn uploader(mut self, uploader: Arc<dyn TokenUploader>) -> Self {
        self.uploader = Some(uploader);
        self
    }

    /// 覆盖渠道描述（默认固定 id/名称/描述）
    pub fn channel_spec(mut self, spec: ChannelSpec) -> Self {
        self.channel_spec = spec;
        self
    }

    /// 构建分发器
    pub fn build(self) -> Result<Dispatcher, &'static str> {
        let presenter = self.presenter.ok_or("presenter is required")?;
        let registry = self.registry.ok_or("channel registry is required")?;

        Ok(Dispatcher::new(
            presenter,
            ChannelProvisioner::new(registry),
            self.id_source,
            self.uploader,
            self.channel_spec,
        ))
    }
}

impl Default for DispatcherBuilder {
    fn default() -> Self {
        Self::new()
    }
}
