//! 改写服务 API 客户端
//!
//! 封装所有与改写服务相关的 HTTP 调用

use std::time::Duration;

use futures::future::BoxFuture;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::AttemptError;
use crate::infrastructure::ParaphraseTransport;
use crate::models::{ApiStatus, ModeInfo, ParaphraseRequest, ParaphraseResponse};

/// 改写服务客户端
///
/// 每个请求都带超时：服务端接受连接后不响应时，请求也会在限定时间内失败
#[derive(Clone)]
pub struct ParaphraseClient {
    http: reqwest::Client,
    base_url: String,
    request_timeout: Duration,
    status_timeout: Duration,
}

impl ParaphraseClient {
    /// 创建新的改写服务客户端
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            request_timeout: config.request_timeout(),
            status_timeout: config.status_timeout(),
        }
    }

    /// 使用指定服务地址和默认超时创建客户端
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::new(&Config {
            base_url: base_url.into(),
            ..Config::default()
        })
    }

    /// 发送改写请求
    ///
    /// # 参数
    /// - `request`: 改写请求
    ///
    /// # 返回
    /// 返回改写后的文本；非 2xx 状态码或响应中的 `error` 字段都视为错误
    pub async fn send_paraphrase(&self, request: &ParaphraseRequest) -> Result<String, AttemptError> {
        let url = self.endpoint("paraphrase");
        debug!(
            "POST {} (mode: {}, force_local: {}, 文本长度: {})",
            url,
            request.mode,
            request.force_local,
            request.text.chars().count()
        );

        let response = self
            .http
            .post(&url)
            .timeout(self.request_timeout)
            .json(request)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // 错误响应体里可能带有 error 字段，优先使用
            let message = serde_json::from_str::<ParaphraseResponse>(&body)
                .ok()
                .and_then(|r| r.error)
                .unwrap_or_else(|| format!("HTTP error {}", status.as_u16()));
            return Err(AttemptError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ParaphraseResponse = serde_json::from_str(&body)
            .map_err(|e| AttemptError::InvalidResponse(e.to_string()))?;

        if let Some(error) = parsed.error.filter(|e| !e.is_empty()) {
            return Err(AttemptError::Service(error));
        }

        parsed
            .result
            .ok_or_else(|| AttemptError::InvalidResponse("响应缺少 result 字段".to_string()))
    }

    /// 查询服务端 API 状态
    pub async fn fetch_api_status(&self) -> Result<ApiStatus, AttemptError> {
        let url = self.endpoint("api-status");
        debug!("GET {}", url);

        // 状态检查只在启动时执行一次，超时要短
        let status = self
            .http
            .get(&url)
            .timeout(self.status_timeout)
            .send()
            .await?
            .error_for_status()?
            .json::<ApiStatus>()
            .await?;

        Ok(status)
    }

    /// 检查远程 API 是否可用
    ///
    /// 任何失败都视为不可用，不会中断初始化
    pub async fn check_api_status(&self) -> bool {
        match self.fetch_api_status().await {
            Ok(status) => {
                debug!("API 状态: {:?}", status);
                status.api_configured
            }
            Err(e) => {
                warn!("无法检查 API 状态: {}", e);
                false
            }
        }
    }

    /// 获取服务端支持的模式列表
    pub async fn fetch_modes(&self) -> Result<Vec<ModeInfo>, AttemptError> {
        let url = self.endpoint("modes");
        debug!("GET {}", url);

        let modes = self
            .http
            .get(&url)
            .timeout(self.request_timeout)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<ModeInfo>>()
            .await?;

        Ok(modes)
    }

    /// 构建接口地址
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl ParaphraseTransport for ParaphraseClient {
    fn paraphrase<'a>(
        &'a self,
        request: &'a ParaphraseRequest,
    ) -> BoxFuture<'a, Result<String, AttemptError>> {
        Box::pin(self.send_paraphrase(request))
    }
}
