//! # Paraphraser
//!
//! 文本改写服务的客户端控制器
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - `ParaphraseTransport`，只暴露"发送一次请求"的能力
//! - `clients/` - 基于 reqwest 的 HTTP 实现（`/paraphrase`、`/api-status`、`/modes`）
//!
//! ### ② 业务能力层（Services）
//! - `ParaphraseService` - 重试、退避，最后一次重试强制本地
//!
//! ### ③ 流程层（Workflow）
//! - `ParaphraseFlow` - 超时计时、本地兜底竞速，保证只产生一个结果
//! - `FlowObserver` - 状态通知（开始 / 启用兜底 / 结束）
//!
//! ### ④ 编排层（Orchestration）
//! - `Session` / `UiState` - 界面状态与输入校验
//! - `App` - 应用初始化与单次运行
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::ParaphraseClient;
pub use config::Config;
pub use error::{AttemptError, ConfigError, SubmitError};
pub use infrastructure::ParaphraseTransport;
pub use models::{Mode, ModeInfo, Outcome, ParaphraseRequest, FAILURE_MESSAGE};
pub use orchestrator::{App, Session, UiState};
pub use services::ParaphraseService;
pub use workflow::{FlowObserver, ParaphraseFlow};
