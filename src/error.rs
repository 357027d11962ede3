use thiserror::Error;

/// 单次改写尝试的错误
///
/// 分类：
/// - `Network`：无法建立连接（断网等），不重试
/// - 其余：服务端错误（非 2xx、`{error}` 响应、响应无法解析、请求超时等），可重试
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttemptError {
    /// 网络不可达
    #[error("网络错误: {0}")]
    Network(String),
    /// 服务端返回非 2xx 状态码
    #[error("服务端错误 (HTTP {status}): {message}")]
    Status { status: u16, message: String },
    /// 服务端在响应体中返回 `{error}`
    #[error("服务端返回错误: {0}")]
    Service(String),
    /// 请求在限定时间内没有完成
    #[error("请求超时: {0}")]
    Timeout(String),
    /// 响应无法解析或缺少 result
    #[error("响应无效: {0}")]
    InvalidResponse(String),
    /// 其他请求错误
    #[error("请求失败: {0}")]
    Request(String),
}

impl AttemptError {
    /// 是否允许重试
    pub fn is_retryable(&self) -> bool {
        !matches!(self, AttemptError::Network(_))
    }
}

impl From<reqwest::Error> for AttemptError {
    fn from(err: reqwest::Error) -> Self {
        // 连接阶段超时也算超时，可以重试
        if err.is_timeout() {
            AttemptError::Timeout(err.to_string())
        } else if err.is_connect() {
            AttemptError::Network(err.to_string())
        } else if err.is_decode() {
            AttemptError::InvalidResponse(err.to_string())
        } else if let Some(status) = err.status() {
            AttemptError::Status {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            AttemptError::Request(err.to_string())
        }
    }
}

/// 发起改写前的校验错误（由调用方负责）
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// 输入为空
    #[error("输入文本为空")]
    EmptyInput,
    /// 超出字数限制
    #[error("文本长度 {count} 超出限制 {limit}")]
    OverLimit { count: usize, limit: usize },
    /// 上一次改写尚未完成
    #[error("正在处理中，请稍候")]
    Busy,
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 读取配置文件失败
    #[error("读取配置文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}
