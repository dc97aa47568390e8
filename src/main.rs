//! envenc 主程序入口
//!
//! 设计原则：
//! - 输出：stdout 只有一行命令（或 JSON）
//! - 日志：全部写到 stderr
//! - 错误处理：详细/安静错误模式，通过 --verbose 切换

use clap::Parser;
use envenc::cli::Cli;
use envenc::utils::logger;
use envenc::{AppConfig, Result};

fn main() {
    let cli = Cli::parse();

    logger::setup_logger(cli.verbose);

    if let Err(e) = run(&cli) {
        e.report(cli.verbose);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config = AppConfig::resolve(&cli.overrides(), &cwd)?;
    log::debug!("配置: {:?}", config);

    let output = envenc::run(&config)?;
    println!("{}", output);
    Ok(())
}
