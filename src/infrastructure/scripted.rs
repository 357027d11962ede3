//! 测试用的脚本化传输：按调用顺序返回预设结果

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use futures::future::BoxFuture;

use crate::error::AttemptError;
use crate::infrastructure::ParaphraseTransport;
use crate::models::ParaphraseRequest;

struct Step {
    delay: Duration,
    result: Result<String, AttemptError>,
}

#[derive(Default)]
pub(crate) struct ScriptedTransport {
    steps: Mutex<VecDeque<Step>>,
    requests: Mutex<Vec<ParaphraseRequest>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn ok(self, text: &str) -> Self {
        self.delayed_ok(Duration::ZERO, text)
    }

    pub(crate) fn err(self, error: AttemptError) -> Self {
        self.delayed_err(Duration::ZERO, error)
    }

    pub(crate) fn delayed_ok(self, delay: Duration, text: &str) -> Self {
        self.push(delay, Ok(text.to_string()))
    }

    pub(crate) fn delayed_err(self, delay: Duration, error: AttemptError) -> Self {
        self.push(delay, Err(error))
    }

    fn push(self, delay: Duration, result: Result<String, AttemptError>) -> Self {
        self.steps.lock().unwrap().push_back(Step { delay, result });
        self
    }

    /// 已收到的请求（按发送顺序）
    pub(crate) fn requests(&self) -> Vec<ParaphraseRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl ParaphraseTransport for ScriptedTransport {
    fn paraphrase<'a>(
        &'a self,
        request: &'a ParaphraseRequest,
    ) -> BoxFuture<'a, Result<String, AttemptError>> {
        self.requests.lock().unwrap().push(request.clone());
        let step = self.steps.lock().unwrap().pop_front().unwrap_or(Step {
            delay: Duration::ZERO,
            result: Err(AttemptError::Service("unscripted request".to_string())),
        });

        Box::pin(async move {
            tokio::time::sleep(step.delay).await;
            step.result
        })
    }
}
