//! 请求传输 - 基础设施层
//!
//! 只暴露"发送一次改写请求"的能力

use futures::future::BoxFuture;

use crate::error::AttemptError;
use crate::models::ParaphraseRequest;

/// 改写请求传输
///
/// 职责：
/// - 发送单个请求并返回结果文本
/// - 不关心重试、超时和兜底
/// - 所有错误都以 `AttemptError` 返回，不 panic
pub trait ParaphraseTransport: Send + Sync {
    fn paraphrase<'a>(
        &'a self,
        request: &'a ParaphraseRequest,
    ) -> BoxFuture<'a, Result<String, AttemptError>>;
}
