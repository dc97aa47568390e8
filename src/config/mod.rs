//! 配置管理
//!
//! 优先级（后者覆盖前者）：内置默认值 < TOML 配置文件 < 命令行参数

pub mod format;

use crate::error::Result;
use crate::types::{Charset, OutputFormat};
use crate::utils::paths;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// 默认输入文件
pub const DEFAULT_INPUT_PATH: &str = ".env";

/// 默认目标应用
pub const DEFAULT_APP_NAME: &str = "export-service-only";

/// 应用程序配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// .env 文件路径
    pub input_path: PathBuf,
    /// dokku 应用名称
    pub app_name: String,
    pub charset: Charset,
    pub format: OutputFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            app_name: DEFAULT_APP_NAME.to_string(),
            charset: Charset::default(),
            format: OutputFormat::default(),
        }
    }
}

/// 配置文件内容，所有字段可选
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub input_path: Option<PathBuf>,
    pub app_name: Option<String>,
    pub charset: Option<Charset>,
    pub format: Option<OutputFormat>,
}

impl FileConfig {
    /// 从 TOML 文本解析
    ///
    /// # Errors
    ///
    /// TOML 语法错误或出现未知字段
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// 读取并解析配置文件
    pub fn load(path: &Path) -> Result<Self> {
        let content = paths::read_file(path)?;
        let config = Self::from_toml(&content)?;
        log::debug!("已加载配置文件: {}", path.display());
        Ok(config)
    }
}

/// 命令行覆盖项
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub config_path: Option<PathBuf>,
    pub input_path: Option<PathBuf>,
    pub app_name: Option<String>,
    pub utf8: bool,
    pub format: Option<OutputFormat>,
}

impl AppConfig {
    /// 合并配置文件中出现的字段
    #[must_use]
    pub fn merge_file(mut self, file: FileConfig) -> Self {
        if let Some(input_path) = file.input_path {
            self.input_path = input_path;
        }
        if let Some(app_name) = file.app_name {
            self.app_name = app_name;
        }
        if let Some(charset) = file.charset {
            self.charset = charset;
        }
        if let Some(format) = file.format {
            self.format = format;
        }
        self
    }

    /// 合并命令行参数
    #[must_use]
    pub fn merge_overrides(mut self, overrides: &Overrides) -> Self {
        if let Some(input_path) = &overrides.input_path {
            self.input_path = input_path.clone();
        }
        if let Some(app_name) = &overrides.app_name {
            self.app_name = app_name.clone();
        }
        if overrides.utf8 {
            self.charset = Charset::Utf8;
        }
        if let Some(format) = overrides.format {
            self.format = format;
        }
        self
    }

    /// 按优先级解析最终配置
    ///
    /// # Errors
    ///
    /// 显式配置文件缺失或配置文件无法解析
    pub fn resolve(overrides: &Overrides, cwd: &Path) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = paths::find_config_file(overrides.config_path.as_deref(), cwd)? {
            config = config.merge_file(FileConfig::load(&path)?);
        }

        Ok(config.merge_overrides(overrides))
    }
}
