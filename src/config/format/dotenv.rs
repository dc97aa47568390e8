//! .env 格式解析器 (简单原则：透明的文本解析)
//!
//! 按字节解析：注释行和被跳过的行不做任何字符集检查。

use crate::types::EnvEntry;

/// .env 格式解析器
pub struct DotenvParser;

impl DotenvParser {
    /// 解析 .env 文件内容
    ///
    /// 规则：
    /// - 以 # 开头的行是注释
    /// - 不含 = 的行忽略
    /// - 只按第一个 = 切分，后面的 = 属于 VALUE
    /// - 不去除 KEY、VALUE 两侧的空白
    /// - 不支持引号、多行值和转义
    #[must_use]
    pub fn parse(content: impl AsRef<[u8]>) -> Vec<EnvEntry> {
        content
            .as_ref()
            .split(|b| *b == b'\n')
            .enumerate()
            .filter_map(|(idx, line)| Self::parse_line(line, idx + 1))
            .collect()
    }

    /// 解析单行，跳过的行返回 None
    #[must_use]
    pub fn parse_line(line: impl AsRef<[u8]>, line_no: usize) -> Option<EnvEntry> {
        let line = line.as_ref();
        if line.first() == Some(&b'#') {
            return None;
        }

        let line = line.strip_suffix(b"\n").unwrap_or(line);
        let line = line.strip_suffix(b"\r").unwrap_or(line);

        let split = line.iter().position(|b| *b == b'=')?;
        let (key, value) = (&line[..split], &line[split + 1..]);
        if key.is_empty() {
            // 空键名：静默跳过
            log::trace!("跳过第 {line_no} 行: 空的键名");
            return None;
        }

        Some(EnvEntry::new(key, value, line_no))
    }
}

impl Default for DotenvParser {
    fn default() -> Self {
        Self
    }
}
