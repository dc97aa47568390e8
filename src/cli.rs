//! CLI 参数定义

use crate::config::Overrides;
use crate::types::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// envenc - 把 .env 文件转成 dokku config:set --encoded 命令
#[derive(Parser, Debug)]
#[command(
    name = "envenc",
    version,
    about = "把 .env 文件转成 dokku config:set 命令",
    long_about = "读取 .env 文件，对每个值做 base64 编码，输出一条 dokku config:set <APP> --encoded 命令。只打印，不执行。"
)]
pub struct Cli {
    /// 输入的 .env 文件（默认 .env）
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// 目标 dokku 应用（默认 export-service-only）
    #[arg(short, long, value_name = "NAME")]
    pub app: Option<String>,

    /// 允许非 ASCII 值，按 UTF-8 字节编码
    #[arg(long)]
    pub utf8: bool,

    /// 输出格式
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// 配置文件路径（默认查找 ./envenc.toml）
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// 详细输出模式
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// 转换为配置覆盖项
    #[must_use]
    pub fn overrides(&self) -> Overrides {
        Overrides {
            config_path: self.config.clone(),
            input_path: self.file.clone(),
            app_name: self.app.clone(),
            utf8: self.utf8,
            format: self.format,
        }
    }
}
