use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::models::Mode;

/// 程序配置
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 改写服务地址
    pub base_url: String,
    /// 最大字符数
    pub max_chars: usize,
    /// 超时时间（毫秒），超时后启动本地兜底请求
    pub timeout_ms: u64,
    /// 单个 HTTP 请求的超时时间（毫秒）
    pub request_timeout_ms: u64,
    /// API 状态检查的超时时间（毫秒）
    pub status_timeout_ms: u64,
    /// 最大重试次数（不含首次请求）
    pub max_retries: usize,
    /// 重试间隔（毫秒）
    pub retry_delay_ms: u64,
    /// 默认改写模式
    pub default_mode: Mode,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            max_chars: 1500,
            timeout_ms: 20_000,
            request_timeout_ms: 30_000,
            status_timeout_ms: 5_000,
            max_retries: 2,
            retry_delay_ms: 1_000,
            default_mode: Mode::Fluency,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 从 TOML 文件加载配置，缺失的字段使用默认值
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_toml_str(&content).map_err(|source| ConfigError::TomlParseFailed {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// 加载配置：先读文件（如果提供），再用环境变量覆盖
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let base = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(base.with_env_overrides())
    }

    fn with_env_overrides(self) -> Self {
        Self {
            base_url: std::env::var("PARAPHRASER_BASE_URL").unwrap_or(self.base_url),
            max_chars: parse_env("PARAPHRASER_MAX_CHARS").unwrap_or(self.max_chars),
            timeout_ms: parse_env("PARAPHRASER_TIMEOUT_MS").unwrap_or(self.timeout_ms),
            request_timeout_ms: parse_env("PARAPHRASER_REQUEST_TIMEOUT_MS")
                .unwrap_or(self.request_timeout_ms),
            status_timeout_ms: parse_env("PARAPHRASER_STATUS_TIMEOUT_MS")
                .unwrap_or(self.status_timeout_ms),
            max_retries: parse_env("PARAPHRASER_MAX_RETRIES").unwrap_or(self.max_retries),
            retry_delay_ms: parse_env("PARAPHRASER_RETRY_DELAY_MS").unwrap_or(self.retry_delay_ms),
            default_mode: std::env::var("PARAPHRASER_MODE")
                .map(Mode::from)
                .unwrap_or(self.default_mode),
            verbose_logging: parse_env("VERBOSE_LOGGING").unwrap_or(self.verbose_logging),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn status_timeout(&self) -> Duration {
        Duration::from_millis(self.status_timeout_ms)
    }
}

fn parse_env<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.max_chars, 1500);
        assert_eq!(config.timeout(), Duration::from_secs(20));
        assert_eq!(config.retry_delay(), Duration::from_secs(1));
        assert_eq!(config.max_retries, 2);
        assert_eq!(config.default_mode, Mode::Fluency);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.status_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = Config::from_toml_str(
            r#"
            base_url = "http://paraphrase.local:8080"
            timeout_ms = 5000
            default_mode = "academic"
            "#,
        )
        .unwrap();

        assert_eq!(config.base_url, "http://paraphrase.local:8080");
        assert_eq!(config.timeout_ms, 5000);
        assert_eq!(config.default_mode, Mode::Academic);
        assert_eq!(config.max_chars, 1500);
        assert_eq!(config.retry_delay_ms, 1000);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(Config::from_toml_str("max_chars = \"many\"").is_err());
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = Config::from_file(Path::new("/nonexistent/paraphraser.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFailed { .. }));
    }

    // 环境变量是进程级的，所有覆盖规则都放在这一个测试里
    #[test]
    fn test_env_overrides_file_and_ignores_invalid_numbers() {
        let file = Config::from_toml_str(
            r#"
            timeout_ms = 9000
            max_retries = 4
            default_mode = "academic"
            "#,
        )
        .unwrap();

        std::env::set_var("PARAPHRASER_TIMEOUT_MS", "500");
        std::env::set_var("PARAPHRASER_MAX_RETRIES", "abc");
        std::env::set_var("PARAPHRASER_MAX_CHARS", "lots");
        std::env::set_var("PARAPHRASER_MODE", "Shakespeare");

        let config = file.with_env_overrides();

        std::env::remove_var("PARAPHRASER_TIMEOUT_MS");
        std::env::remove_var("PARAPHRASER_MAX_RETRIES");
        std::env::remove_var("PARAPHRASER_MAX_CHARS");
        std::env::remove_var("PARAPHRASER_MODE");

        // 合法值覆盖文件
        assert_eq!(config.timeout_ms, 500);
        // 非法值被忽略：保留文件中的值，文件未设置时保留默认值
        assert_eq!(config.max_retries, 4);
        assert_eq!(config.max_chars, 1500);
        // 未知模式原样保留
        assert_eq!(config.default_mode, Mode::Other("Shakespeare".to_string()));
        assert_eq!(config.retry_delay_ms, 1000);
    }
}
