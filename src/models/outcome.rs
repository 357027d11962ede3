/// 改写失败时展示给用户的固定提示
pub const FAILURE_MESSAGE: &str =
    "Sorry, we couldn't paraphrase your text. Please try again with a shorter or simpler text.";

/// 一次改写流程的最终结果
///
/// 每次流程只产生一个 Outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// 改写成功
    Success { result_text: String },
    /// 改写失败（message 为固定的用户提示，不含内部错误细节）
    Failure { message: String },
}

impl Outcome {
    pub fn success(result_text: impl Into<String>) -> Self {
        Outcome::Success {
            result_text: result_text.into(),
        }
    }

    /// 构造使用固定提示的失败结果
    pub fn failure() -> Self {
        Outcome::Failure {
            message: FAILURE_MESSAGE.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// 展示给用户的文本
    pub fn text(&self) -> &str {
        match self {
            Outcome::Success { result_text } => result_text,
            Outcome::Failure { message } => message,
        }
    }
}
