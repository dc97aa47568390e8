//! 日志初始化
//!
//! stdout 只输出生成的命令，日志全部写到 stderr。

use std::io;

use chrono::Local;
use fern::Dispatch;
use log::LevelFilter;

/// 日志级别环境变量
pub const LOG_ENV: &str = "ENVENC_LOG";

/// 解析日志级别：环境变量优先，其次 --verbose
pub fn logging_level(env_value: Option<&str>, verbose: bool) -> LevelFilter {
    match env_value {
        Some("trace") => LevelFilter::Trace,
        Some("debug") => LevelFilter::Debug,
        Some("info") => LevelFilter::Info,
        Some("warn") => LevelFilter::Warn,
        Some("error") => LevelFilter::Error,
        Some("off") => LevelFilter::Off,
        _ if verbose => LevelFilter::Debug,
        _ => LevelFilter::Warn,
    }
}

pub fn setup_logger(verbose: bool) {
    let env_value = std::env::var(LOG_ENV).ok();
    let level_filter = logging_level(env_value.as_deref(), verbose);

    if let Err(e) = Dispatch::new()
        .format(move |out, message, record| match level_filter {
            LevelFilter::Debug | LevelFilter::Trace => {
                out.finish(format_args!(
                    "[{}][{}]: {} <{}:{}>",
                    Local::now().format("%b-%d-%Y %H:%M:%S.%f"),
                    record.level(),
                    message,
                    record.file().unwrap_or("unknown_file"),
                    record.line().unwrap_or(0),
                ));
            }
            _ => {
                out.finish(format_args!("[{}]: {}", record.level(), message));
            }
        })
        .level(level_filter)
        .chain(io::stderr())
        .apply()
    {
        eprintln!("日志初始化失败: {e}");
    }
    log::debug!("Enabled log {level_filter}.");
}
