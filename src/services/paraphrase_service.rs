//! 改写服务 - 业务能力层
//!
//! 只负责"带重试地完成一次改写"，不关心超时竞速和界面状态

use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::AttemptError;
use crate::infrastructure::ParaphraseTransport;
use crate::models::{Mode, ParaphraseRequest};

/// 改写服务
///
/// 重试规则：
/// - 最多重试 `max_retries` 次，每次间隔 `retry_delay`
/// - 最后一次重试强制走本地路径
/// - 当前请求已是本地模式，或遇到网络错误时，立即失败
pub struct ParaphraseService {
    transport: Arc<dyn ParaphraseTransport>,
    max_retries: usize,
    retry_delay: Duration,
}

impl ParaphraseService {
    /// 创建新的改写服务
    pub fn new(transport: Arc<dyn ParaphraseTransport>, config: &Config) -> Self {
        Self::with_policy(transport, config.max_retries, config.retry_delay())
    }

    /// 使用自定义重试策略创建
    pub fn with_policy(
        transport: Arc<dyn ParaphraseTransport>,
        max_retries: usize,
        retry_delay: Duration,
    ) -> Self {
        Self {
            transport,
            max_retries,
            retry_delay,
        }
    }

    /// 带重试地发送改写请求
    ///
    /// # 参数
    /// - `text`: 待改写文本（调用方已校验）
    /// - `mode`: 改写模式
    /// - `force_local`: 首次请求是否强制本地处理
    ///
    /// # 返回
    /// 返回改写结果；所有尝试都失败时返回最后一次的错误
    pub async fn paraphrase_with_retry(
        &self,
        text: &str,
        mode: &Mode,
        force_local: bool,
    ) -> Result<String, AttemptError> {
        let mut force_local = force_local;
        let mut retry_count = 0;
        let total_attempts = self.max_retries + 1;

        loop {
            let request = ParaphraseRequest::new(text, mode.clone(), force_local);
            debug!(
                "发送改写请求 (尝试 {}/{}, force_local: {})",
                retry_count + 1,
                total_attempts,
                force_local
            );

            let error = match self.transport.paraphrase(&request).await {
                Ok(result) => return Ok(result),
                Err(e) => e,
            };

            retry_count += 1;
            warn!(
                "改写请求失败 (尝试 {}/{}): {}",
                retry_count, total_attempts, error
            );

            if force_local || retry_count > self.max_retries || !error.is_retryable() {
                return Err(error);
            }

            // 最后一次重试改用本地处理
            if retry_count == self.max_retries {
                info!("🔁 最后一次重试，使用本地兜底");
                force_local = true;
            }

            sleep(self.retry_delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::scripted::ScriptedTransport;
    use tokio::time::Instant;
    use tokio_test::{assert_err, assert_ok};

    fn service(transport: &Arc<ScriptedTransport>) -> ParaphraseService {
        ParaphraseService::with_policy(transport.clone(), 2, Duration::from_secs(1))
    }

    fn rate_limited() -> AttemptError {
        AttemptError::Service("rate limited".to_string())
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_attempt_success_no_retry() {
        let transport = Arc::new(ScriptedTransport::new().ok("Hi there"));

        let result = service(&transport)
            .paraphrase_with_retry("Hello world", &Mode::Fluency, false)
            .await;

        assert_eq!(assert_ok!(result), "Hi there");
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_final_retry_forces_local() {
        let transport = Arc::new(
            ScriptedTransport::new()
                .err(rate_limited())
                .err(rate_limited())
                .ok("local result"),
        );
        let start = Instant::now();

        let result = service(&transport)
            .paraphrase_with_retry("Hello world", &Mode::Academic, false)
            .await;

        assert_eq!(assert_ok!(result), "local result");
        let flags: Vec<bool> = transport.requests().iter().map(|r| r.force_local).collect();
        assert_eq!(flags, vec![false, false, true]);
        // 两次重试间隔
        assert!(start.elapsed() >= Duration::from_secs(2));
        assert!(start.elapsed() < Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_all_attempts_fail() {
        let transport = Arc::new(
            ScriptedTransport::new()
                .err(rate_limited())
                .err(rate_limited())
                .err(AttemptError::Service("still broken".to_string())),
        );

        let result = service(&transport)
            .paraphrase_with_retry("Hello world", &Mode::Fluency, false)
            .await;

        assert_eq!(
            assert_err!(result),
            AttemptError::Service("still broken".to_string())
        );
        assert_eq!(transport.requests().len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_local_request_is_not_retried() {
        let transport = Arc::new(ScriptedTransport::new().err(rate_limited()).ok("unused"));

        let result = service(&transport)
            .paraphrase_with_retry("Hello world", &Mode::Fluency, true)
            .await;

        assert_err!(result);
        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].force_local);
    }

    #[tokio::test(start_paused = true)]
    async fn test_network_error_is_not_retried() {
        let transport = Arc::new(
            ScriptedTransport::new()
                .err(AttemptError::Network("connection refused".to_string()))
                .ok("unused"),
        );

        let result = service(&transport)
            .paraphrase_with_retry("Hello world", &Mode::Fluency, false)
            .await;

        assert!(matches!(result, Err(AttemptError::Network(_))));
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_retries_single_attempt() {
        let transport = Arc::new(ScriptedTransport::new().err(rate_limited()).ok("unused"));
        let service = ParaphraseService::with_policy(transport.clone(), 0, Duration::from_secs(1));

        let result = service
            .paraphrase_with_retry("Hello world", &Mode::Simple, false)
            .await;

        assert_err!(result);
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_mode_is_sent_unchanged() {
        let transport = Arc::new(ScriptedTransport::new().ok("ok"));

        let result = service(&transport)
            .paraphrase_with_retry("Hello", &Mode::parse("pirate"), false)
            .await;

        assert_ok!(result);
        assert_eq!(transport.requests()[0].mode.id(), "pirate");
    }
}
