//! 应用入口 - 编排层
//!
//! ## 职责
//!
//! 1. **应用初始化**：创建客户端、检查 API 状态、输出启动信息
//! 2. **会话创建**：为每次用户操作创建带界面状态的 `Session`
//! 3. **单次运行**：命令行模式下完成一次改写并输出统计
//!
//! API 状态检查失败不会中断初始化，只会让首个请求直接走本地路径

use std::sync::Arc;

use anyhow::Result;
use tokio::time::Instant;
use tracing::{info, warn};

use crate::clients::ParaphraseClient;
use crate::config::Config;
use crate::models::{Mode, ModeInfo, Outcome};
use crate::orchestrator::session::{Session, UiState};
use crate::utils::logging::{log_startup, print_final_stats};
use crate::workflow::ParaphraseFlow;

/// 应用主结构
pub struct App {
    config: Config,
    client: ParaphraseClient,
    api_available: bool,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Self {
        let client = ParaphraseClient::new(&config);

        info!("🔍 正在检查 API 状态...");
        let api_available = client.check_api_status().await;

        log_startup(&config, api_available);

        Self {
            config,
            client,
            api_available,
        }
    }

    pub fn api_available(&self) -> bool {
        self.api_available
    }

    /// 创建新的改写会话
    pub fn session(&self) -> Session {
        let flow = ParaphraseFlow::new(Arc::new(self.client.clone()), &self.config);
        Session::new(flow, UiState::new(&self.config, self.api_available))
    }

    /// 获取可用模式列表，服务端不可用时使用内置列表
    pub async fn list_modes(&self) -> Vec<ModeInfo> {
        match self.client.fetch_modes().await {
            Ok(modes) if !modes.is_empty() => modes,
            Ok(_) => {
                warn!("服务端返回的模式列表为空，使用内置列表");
                Mode::builtin_infos()
            }
            Err(e) => {
                warn!("获取模式列表失败: {}，使用内置列表", e);
                Mode::builtin_infos()
            }
        }
    }

    /// 执行一次改写
    ///
    /// # 参数
    /// - `text`: 待改写文本，`None` 时使用当前模式的示例文本
    /// - `mode`: 改写模式，`None` 时使用配置中的默认模式
    ///
    /// # 返回
    /// 返回改写结果；输入校验失败时返回错误
    pub async fn run(&self, text: Option<String>, mode: Option<Mode>) -> Result<Outcome> {
        let mut session = self.session();

        if let Some(mode) = mode {
            session.state_mut().select_mode(mode);
        }

        match text {
            Some(text) => session.state_mut().set_input(text),
            None => session.state_mut().insert_sample(),
        }

        let start = Instant::now();
        let outcome = session.paraphrase().await?;

        let state = session.state();
        print_final_stats(
            outcome.is_success(),
            state.fallback_engaged,
            state.output_char_count(),
            start.elapsed(),
        );

        Ok(outcome)
    }
}
