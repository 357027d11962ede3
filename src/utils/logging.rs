/// 日志工具模块
///
/// 提供日志初始化和输出的辅助函数
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// 初始化日志
///
/// 优先使用 `RUST_LOG`，否则根据 `verbose` 选择 debug 或 info 级别；
/// 重复调用不会报错
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `config`: 配置
/// - `api_available`: 远程 API 是否可用
pub fn log_startup(config: &Config, api_available: bool) {
    info!("{}", "=".repeat(60));
    info!(
        "🚀 程序启动 - {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("🌐 服务地址: {}", config.base_url);
    info!(
        "📡 API: {}",
        if api_available { "Connected" } else { "Local Mode" }
    );
    info!("📏 字数限制: {}", config.max_chars);
    info!("{}", "=".repeat(60));
}

/// 打印最终统计信息
///
/// # 参数
/// - `success`: 是否成功
/// - `fallback_engaged`: 是否启用了本地兜底
/// - `output_chars`: 输出字数
/// - `elapsed`: 耗时
pub fn print_final_stats(
    success: bool,
    fallback_engaged: bool,
    output_chars: usize,
    elapsed: std::time::Duration,
) {
    info!("{}", "─".repeat(60));
    info!("{} 改写{}", if success { "✅" } else { "❌" }, if success { "成功" } else { "失败" });
    if success {
        info!("📝 输出字数: {}", output_chars);
    }
    if fallback_engaged {
        info!("⚠️ 本次改写启用了本地兜底");
    }
    info!("⏱️ 耗时: {:.2} 秒", elapsed.as_secs_f64());
    info!("{}", "─".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
