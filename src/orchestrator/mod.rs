//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `app` - 应用入口
//! - 创建客户端，启动时检查一次 API 状态
//! - 创建会话，执行单次改写，输出统计
//!
//! ### `session` - 改写会话
//! - 持有界面状态（输入、输出、模式、忙碌标记）
//! - 发起改写前校验输入（非空、字数限制、非忙碌）
//! - 接收流程通知并更新界面状态
//!
//! ## 层次关系
//!
//! ```text
//! app (应用生命周期)
//!     ↓
//! session (界面状态 + 输入校验)
//!     ↓
//! workflow::ParaphraseFlow (超时竞速，单一结果)
//!     ↓
//! services::ParaphraseService (重试 + 本地兜底)
//!     ↓
//! infrastructure::ParaphraseTransport (发送单个请求)
//! ```

pub mod app;
pub mod session;

pub use app::App;
pub use session::{Session, UiState, PROCESSING_PLACEHOLDER};
