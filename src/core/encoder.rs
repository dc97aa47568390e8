//! 编码引擎：.env 内容 -> dokku config:set 命令

use crate::config::format::DotenvParser;
use crate::error::{EnvError, Result};
use crate::types::{Charset, CommandLine, EncodedEntry, EnvEntry};
use crate::utils::paths;
use base64::{Engine as _, engine::general_purpose};
use std::path::Path;

/// 单次运行、无状态的编码器
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvEncoder {
    charset: Charset,
}

impl EnvEncoder {
    #[must_use]
    pub fn new(charset: Charset) -> Self {
        Self { charset }
    }

    /// 编码单个条目
    ///
    /// # Errors
    ///
    /// - 键名不是 UTF-8 时返回 `EnvError::KeyEncoding`
    /// - ASCII 模式下值含有非 ASCII 字节时返回 `EnvError::Encoding`
    pub fn encode_entry(&self, entry: &EnvEntry) -> Result<EncodedEntry> {
        let key = std::str::from_utf8(&entry.key)
            .map_err(|_| EnvError::KeyEncoding { line: entry.line })?;

        if self.charset == Charset::Ascii && !entry.value.is_ascii() {
            return Err(EnvError::Encoding {
                key: key.to_string(),
                line: entry.line,
            });
        }

        Ok(EncodedEntry {
            key: key.to_string(),
            encoded: general_purpose::STANDARD.encode(&entry.value),
        })
    }

    /// 编码整个 .env 内容，保持输入顺序
    pub fn encode_content(
        &self,
        app_name: &str,
        content: impl AsRef<[u8]>,
    ) -> Result<CommandLine> {
        let entries = DotenvParser::parse(content)
            .iter()
            .map(|entry| self.encode_entry(entry))
            .collect::<Result<Vec<_>>>()?;

        log::debug!("已编码 {} 个变量", entries.len());

        Ok(CommandLine {
            app_name: app_name.to_string(),
            entries,
        })
    }

    /// 读取文件并编码
    ///
    /// # Errors
    ///
    /// 文件不存在、无法读取或编码失败
    pub fn encode_file(&self, app_name: &str, path: &Path) -> Result<CommandLine> {
        log::debug!("读取输入文件: {}", path.display());
        let content = paths::read_bytes(path)?;
        self.encode_content(app_name, content)
    }
}
