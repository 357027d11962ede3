use crate::models::Outcome;

/// 改写流程的状态通知
///
/// 流程本身不修改界面，只通过这里通知调用方：
/// `on_started` → (`on_fallback_engaged`) → `on_settled`
pub trait FlowObserver {
    /// 流程开始
    fn on_started(&mut self) {}

    /// 超时，已启动本地兜底请求
    fn on_fallback_engaged(&mut self) {}

    /// 流程结束，每次流程只调用一次
    fn on_settled(&mut self, _outcome: &Outcome) {}
}

impl FlowObserver for () {}
