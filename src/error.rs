//! 错误处理模块 (修复原则：明确抛出异常)

use std::error::Error;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnvError {
    #[error("输入文件不存在: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("文件IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("变量 {key} (第 {line} 行) 含有非 ASCII 字节，可使用 --utf8 按原始字节编码")]
    Encoding { key: String, line: usize },

    #[error("第 {line} 行的键名不是有效的 UTF-8")]
    KeyEncoding { line: usize },

    #[error("配置错误: {0}")]
    Config(String),

    #[error("JSON序列化错误: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<toml::de::Error> for EnvError {
    fn from(err: toml::de::Error) -> Self {
        EnvError::Config(err.to_string())
    }
}

/// 详细的错误报告函数 (透明原则)
impl EnvError {
    /// 报告错误，支持详细/安静模式
    /// verbose = true: 详细错误链
    /// verbose = false: 关键信息，安静模式
    pub fn report(&self, verbose: bool) {
        if verbose {
            eprintln!("❌ 错误: {}", self);

            if let Some(source) = self.source() {
                eprintln!("  └─ 原因: {}", source);
                let mut current = source.source();
                while let Some(next) = current {
                    eprintln!("     └─ {}", next);
                    current = next.source();
                }
            }
        } else {
            match self {
                EnvError::InputNotFound(path) => eprintln!("文件不存在: {}", path.display()),
                EnvError::Io(err) => eprintln!("文件错误: {}", err),
                _ => eprintln!("错误: {}", self),
            }
        }
    }

    /// 把读取输入文件时的 IO 错误归类
    pub fn from_read(err: std::io::Error, path: PathBuf) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => EnvError::InputNotFound(path),
            _ => EnvError::Io(err),
        }
    }
}

/// 简化 Result 类型别名
pub type Result<T> = std::result::Result<T, EnvError>;
