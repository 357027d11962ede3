//! 与改写服务交互的数据结构

use serde::{Deserialize, Serialize};

use super::mode::Mode;

/// 改写请求
///
/// 发出后不可修改；每次尝试都会构造一个新的请求。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParaphraseRequest {
    pub text: String,
    pub mode: Mode,
    pub force_local: bool,
}

impl ParaphraseRequest {
    pub fn new(text: impl Into<String>, mode: Mode, force_local: bool) -> Self {
        Self {
            text: text.into(),
            mode,
            force_local,
        }
    }
}

/// `POST /paraphrase` 的响应体
///
/// 成功时包含 `result`，失败时包含 `error`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParaphraseResponse {
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// `GET /api-status` 的响应体
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ApiStatus {
    #[serde(default)]
    pub api_configured: bool,
    #[serde(default)]
    pub using_local_fallback: Option<bool>,
}
