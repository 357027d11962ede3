//! 改写请求流程 - 流程层
//!
//! 核心职责：定义"一次改写"的完整流程
//!
//! 流程顺序：
//! 1. 启动超时计时器
//! 2. 主请求链（带重试，最后一次重试强制本地）
//! 3. 超时后并行发起本地兜底请求，与主请求链竞速
//! 4. 先结束的一方为最终结果，另一方被丢弃

use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::error::AttemptError;
use crate::infrastructure::ParaphraseTransport;
use crate::models::{Mode, Outcome};
use crate::services::ParaphraseService;
use crate::utils::logging::truncate_text;
use crate::workflow::observer::FlowObserver;

/// 哪一条请求链先结束
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Winner {
    Primary,
    Fallback,
}

/// 改写请求流程
///
/// - 每次 `run` 只产生一个 Outcome
/// - 所有错误都折叠进 Outcome，不向外传播
/// - 不持有界面状态，不校验输入
pub struct ParaphraseFlow {
    service: ParaphraseService,
    timeout: Duration,
}

impl ParaphraseFlow {
    /// 创建新的改写流程
    pub fn new(transport: Arc<dyn ParaphraseTransport>, config: &Config) -> Self {
        Self::with_service(ParaphraseService::new(transport, config), config.timeout())
    }

    pub fn with_service(service: ParaphraseService, timeout: Duration) -> Self {
        Self { service, timeout }
    }

    /// 执行一次改写
    ///
    /// # 参数
    /// - `text`: 已去除首尾空白、长度合法的文本
    /// - `mode`: 改写模式
    /// - `api_available`: 远程 API 是否可用；不可用时首个请求直接走本地
    /// - `observer`: 状态通知
    ///
    /// # 返回
    /// 返回最终结果
    pub async fn run(
        &self,
        text: &str,
        mode: &Mode,
        api_available: bool,
        observer: &mut dyn FlowObserver,
    ) -> Outcome {
        observer.on_started();
        info!(
            "✍️ 开始改写 (模式: {}, API: {}): {}",
            mode,
            if api_available { "在线" } else { "本地" },
            truncate_text(text, 40)
        );

        let primary = self
            .service
            .paraphrase_with_retry(text, mode, !api_available);
        tokio::pin!(primary);

        // 计时器随 timeout 一起被丢弃，结果先到时即取消
        let (winner, result) = match timeout(self.timeout, &mut primary).await {
            Ok(result) => (Winner::Primary, result),
            Err(_) => {
                warn!(
                    "⏱️ 请求超过 {} 毫秒未完成，启动本地兜底",
                    self.timeout.as_millis()
                );
                observer.on_fallback_engaged();

                let fallback = self.service.paraphrase_with_retry(text, mode, true);
                tokio::select! {
                    biased;
                    result = &mut primary => (Winner::Primary, result),
                    result = fallback => (Winner::Fallback, result),
                }
            }
        };

        let outcome = self.settle(winner, result);
        observer.on_settled(&outcome);
        outcome
    }

    /// 把请求结果转换为 Outcome，错误细节只写日志
    fn settle(&self, winner: Winner, result: Result<String, AttemptError>) -> Outcome {
        match result {
            Ok(text) => {
                info!(
                    "✓ 改写完成 ({:?}): {}",
                    winner,
                    truncate_text(&text, 40)
                );
                Outcome::success(text)
            }
            Err(e) => {
                error!("❌ 改写失败 ({:?}): {}", winner, e);
                Outcome::failure()
            }
        }
    }
}
