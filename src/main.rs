use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::AsyncReadExt;

use paraphraser::utils::logging;
use paraphraser::{App, Config, Mode};

/// 文本改写客户端
#[derive(Parser, Debug)]
#[command(name = "paraphraser", version)]
struct Cli {
    /// 待改写文本（不提供时从标准输入读取）
    text: Option<String>,

    /// 改写模式：fluency / academic / simple / creative
    #[arg(short, long)]
    mode: Option<Mode>,

    /// 使用当前模式的示例文本
    #[arg(long, conflicts_with = "text")]
    sample: bool,

    /// 列出可用模式
    #[arg(long)]
    list_modes: bool,

    /// TOML 配置文件路径
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 显示详细日志
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // 加载配置
    let mut config = Config::load(cli.config.as_deref())?;
    if cli.verbose {
        config.verbose_logging = true;
    }

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化应用
    let app = App::initialize(config).await;

    if cli.list_modes {
        for mode in app.list_modes().await {
            println!("{:<10} {:<10} {}", mode.id, mode.name, mode.description);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let text = if cli.sample {
        None
    } else {
        match cli.text {
            Some(text) => Some(text),
            None => Some(read_stdin().await?),
        }
    };

    let outcome = app.run(text, cli.mode).await?;
    println!("{}", outcome.text());

    if outcome.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

async fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    tokio::io::stdin()
        .read_to_string(&mut buffer)
        .await
        .context("无法读取标准输入")?;
    Ok(buffer)
}
