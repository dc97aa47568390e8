//! envenc - .env 文件转 dokku config:set 命令
//!
//! 读取 `KEY=value` 行，对值做 base64 编码，拼成
//! `dokku config:set <APP> --encoded KEY=<b64> ...`。

// 错误类型
pub mod error;

// 数据结构
pub mod types;

// 配置与输入格式
pub mod config;

// 编码引擎
pub mod core;

// 工具
pub mod utils;

// CLI 定义
pub mod cli;

pub use crate::config::{AppConfig, Overrides};
pub use crate::core::EnvEncoder;
pub use error::{EnvError, Result};
pub use types::{Charset, CommandLine, EncodedEntry, EnvEntry, OutputFormat};

/// 按配置执行一次完整转换，返回待打印的文本
///
/// # Errors
///
/// 输入文件缺失、编码失败或序列化失败
pub fn run(config: &AppConfig) -> Result<String> {
    let encoder = EnvEncoder::new(config.charset);
    let command = encoder.encode_file(&config.app_name, &config.input_path)?;
    command.render(config.format)
}
