//! 核心数据结构定义 (表达原则：用数据结构表达逻辑)

use serde::{Deserialize, Serialize};
use std::fmt;

/// dokku 命令前缀
pub const DOKKU_CONFIG_SET: &str = "dokku config:set";

/// 解析后的环境变量条目
///
/// 键和值都保留原始字节，字符集检查留到编码阶段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvEntry {
    /// 第一个 `=` 之前的内容，非空
    pub key: Vec<u8>,
    /// 第一个 `=` 之后的内容，不含换行
    pub value: Vec<u8>,
    /// 所在行号（从 1 开始）
    pub line: usize,
}

impl EnvEntry {
    #[must_use]
    pub fn new(key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>, line: usize) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            line,
        }
    }
}

/// 编码后的条目：KEY=<base64>
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedEntry {
    pub key: String,
    pub encoded: String,
}

impl fmt::Display for EncodedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.encoded)
    }
}

/// 最终输出的 dokku 命令
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandLine {
    pub app_name: String,
    pub entries: Vec<EncodedEntry>,
}

impl fmt::Display for CommandLine {
    /// 没有条目时保留 `--encoded` 后的空格
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} --encoded ", DOKKU_CONFIG_SET, self.app_name)?;
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", entry)?;
        }
        Ok(())
    }
}

impl CommandLine {
    /// 按输出格式渲染
    ///
    /// # Errors
    ///
    /// JSON 序列化失败时返回错误
    pub fn render(&self, format: OutputFormat) -> crate::error::Result<String> {
        match format {
            OutputFormat::Command => Ok(self.to_string()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

/// 输出格式类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// dokku config:set 命令行
    #[default]
    Command,
    /// JSON
    Json,
}

/// 值编码前允许的字符集
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Charset {
    /// 仅 7 位 ASCII，其他字节报错
    #[default]
    Ascii,
    /// 不做检查，按原始字节编码（UTF-8 或其他编码均可）
    Utf8,
}
