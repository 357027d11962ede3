//! 改写会话 - 编排层
//!
//! 持有界面状态（输入、输出、模式、忙碌标记），负责发起改写前的校验，
//! 并把改写流程的通知反映到界面状态上

use tracing::{debug, info};

use crate::config::Config;
use crate::error::SubmitError;
use crate::models::{Mode, Outcome};
use crate::workflow::{FlowObserver, ParaphraseFlow};

/// 处理中时输出框显示的占位文本
pub const PROCESSING_PLACEHOLDER: &str = "Paraphrasing...";

/// 界面状态
///
/// 由调用方持有，改写流程只通过 `FlowObserver` 通知它
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    /// 输入文本（原样保存，未去除空白）
    pub input: String,
    /// 输出文本
    pub output: String,
    /// 当前模式
    pub mode: Mode,
    /// 远程 API 是否可用
    pub api_available: bool,
    /// 是否正在处理（处理中禁止再次提交）
    pub busy: bool,
    /// 是否显示加载动画
    pub loading: bool,
    /// 本次改写是否启用了本地兜底
    pub fallback_engaged: bool,
    /// 字数限制
    pub char_limit: usize,
}

impl UiState {
    pub fn new(config: &Config, api_available: bool) -> Self {
        Self {
            input: String::new(),
            output: String::new(),
            mode: config.default_mode.clone(),
            api_available,
            busy: false,
            loading: false,
            fallback_engaged: false,
            char_limit: config.max_chars,
        }
    }

    /// 输入字数
    pub fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    /// 输出字数
    pub fn output_char_count(&self) -> usize {
        self.output.chars().count()
    }

    pub fn is_over_limit(&self) -> bool {
        self.char_count() > self.char_limit
    }

    /// 改写按钮是否可用
    pub fn can_submit(&self) -> bool {
        let count = self.char_count();
        count > 0 && count <= self.char_limit && !self.busy
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
        debug!("输入已清空");
    }

    pub fn clear_output(&mut self) {
        self.output.clear();
        debug!("输出已清空");
    }

    /// 填入当前模式的示例文本
    pub fn insert_sample(&mut self) {
        self.input = self.mode.sample_text().to_string();
    }

    pub fn select_mode(&mut self, mode: Mode) {
        info!("🎛️ 切换模式: {} -> {}", self.mode, mode);
        self.mode = mode;
    }
}

impl FlowObserver for UiState {
    fn on_started(&mut self) {
        self.loading = true;
        self.fallback_engaged = false;
        self.output = PROCESSING_PLACEHOLDER.to_string();
    }

    fn on_fallback_engaged(&mut self) {
        self.fallback_engaged = true;
    }

    fn on_settled(&mut self, outcome: &Outcome) {
        self.loading = false;
        self.output = outcome.text().to_string();
    }
}

/// 改写会话
pub struct Session {
    flow: ParaphraseFlow,
    state: UiState,
}

impl Session {
    pub fn new(flow: ParaphraseFlow, state: UiState) -> Self {
        Self { flow, state }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut UiState {
        &mut self.state
    }

    /// 校验当前输入
    ///
    /// # 返回
    /// 返回去除首尾空白后的待改写文本
    pub fn validate(&self) -> Result<String, SubmitError> {
        if self.state.busy {
            return Err(SubmitError::Busy);
        }

        let text = self.state.input.trim();
        if text.is_empty() {
            return Err(SubmitError::EmptyInput);
        }

        if self.state.is_over_limit() {
            return Err(SubmitError::OverLimit {
                count: self.state.char_count(),
                limit: self.state.char_limit,
            });
        }

        Ok(text.to_string())
    }

    /// 对当前输入执行一次改写
    ///
    /// 校验失败时不会发起请求；改写本身的失败体现在返回的 Outcome 中。
    /// 返回的 future 被中途丢弃时，忙碌标记同样会被清除
    pub async fn paraphrase(&mut self) -> Result<Outcome, SubmitError> {
        let text = self.validate()?;

        let mode = self.state.mode.clone();
        let api_available = self.state.api_available;
        let mut busy = BusyGuard::acquire(&mut self.state);

        let outcome = self
            .flow
            .run(&text, &mode, api_available, &mut *busy.state)
            .await;

        Ok(outcome)
    }
}

/// 持有期间界面处于忙碌状态，释放时（包括被取消时）恢复
struct BusyGuard<'a> {
    state: &'a mut UiState,
}

impl<'a> BusyGuard<'a> {
    fn acquire(state: &'a mut UiState) -> Self {
        state.busy = true;
        Self { state }
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.state.busy = false;
        self.state.loading = false;
    }
}
