//! 设备注册上传 - 把轮换后的 token 交给注册端点
//!
//! fire-and-forget：上传在 spawn 出的任务里进行，分发回调从不等待，
//! 失败由任务自己记日志。重试与持久化由注册端点一侧负责。

use anyhow::Result;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

/// 注册端点配置
#[derive(Debug, Clone)]
pub struct UploaderConfig {
    /// 注册端点 URL
    pub endpoint_url: String,
    /// Bearer token（可为空，空则不带认证头）
    pub auth_token: String,
    /// 超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for UploaderConfig {
    fn default() -> Self {
        Self {
            endpoint_url: "http://localhost:9080/register".to_string(),
            auth_token: String::new(),
            timeout_secs: 30,
        }
    }
}

/// 上传请求载荷
#[derive(Debug, Serialize)]
struct RegistrationPayload<'a> {
    token: &'a str,
}

/// token 上传 trait
///
/// `upload_async` 必须立即返回；实现方自行异步执行。
pub trait TokenUploader: Send + Sync {
    fn upload_async(&self, token: &str) -> Result<()>;
}

/// HTTP 注册上传客户端
#[derive(Debug)]
pub struct HttpTokenUploader {
    client: Client,
    config: UploaderConfig,
}

impl HttpTokenUploader {
    /// 创建上传客户端
    pub fn new(config: UploaderConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }
}

impl TokenUploader for HttpTokenUploader {
    fn upload_async(&self, token: &str) -> Result<()> {
        let client = self.client.clone();
        let url = self.config.endpoint_url.clone();
        let auth = self.config.auth_token.clone();
        let token = token.to_string();

        // 分发回调可能不在运行时线程上，拿不到 runtime 时只能放弃这次上传
        let handle = match tokio::runtime::Handle::try_current() {
            Ok(h) => h,
            Err(_) => {
                warn!("No async runtime available, skipping token upload");
                return Ok(());
            }
        };

        handle.spawn(async move {
            let mut request = client.post(&url).json(&RegistrationPayload { token: &token });
            if !auth.is_empty() {
                request = request.header("Authorization", format!("Bearer {}", auth));
            }

            match request.send().await {
                Ok(response) if response.status().is_success() => {
                    debug!(url = %url, "Registration token uploaded");
                }
                Ok(response) => {
                    warn!(url = %url, status = %response.status(), "Registration endpoint rejected token");
                }
                Err(e) => {
                    warn!(url = %url, error = %e, "Failed to upload registration token");
                }
            }
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uploader_config_default() {
        let config = UploaderConfig::default();
        assert_eq!(config.timeout_secs, 30);
        assert!(config.auth_token.is_empty());
    }

    #[test]
    fn test_payload_shape() {
        let json = serde_json::to_string(&RegistrationPayload { token: "abc" }).unwrap();
        assert_eq!(json, r#"{"token":"abc"}"#);
    }

    #[tokio::test]
    async fn test_upload_async_returns_immediately() {
        // 端点不存在也不阻塞调用方；失败在任务内记日志
        let uploader = HttpTokenUploader::new(UploaderConfig {
            endpoint_url: "http://127.0.0.1:1/register".to_string(),
            ..Default::default()
        })
        .unwrap();

        uploader.upload_async("token-1").unwrap();
    }
}
