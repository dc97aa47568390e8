//! 跨平台路径处理工具 (传统原则：常识性接口设计)

use crate::error::{EnvError, Result};
use std::path::{Path, PathBuf};

/// 工作目录下的配置文件名
pub const LOCAL_CONFIG_FILE: &str = "envenc.toml";

/// 获取用户配置目录：<config_dir>/envenc
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("envenc"))
}

/// 检查文件是否存在
pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}

/// 查找配置文件
///
/// 顺序：显式指定 > `<cwd>/envenc.toml` > `<config_dir>/envenc/config.toml`。
/// 显式指定的文件必须存在，其余位置缺失时返回 None。
pub fn find_config_file(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        if !file_exists(path) {
            return Err(EnvError::Config(format!(
                "配置文件不存在: {}",
                path.display()
            )));
        }
        return Ok(Some(path.to_path_buf()));
    }

    let local = cwd.join(LOCAL_CONFIG_FILE);
    if file_exists(&local) {
        return Ok(Some(local));
    }

    Ok(get_config_dir()
        .map(|dir| dir.join("config.toml"))
        .filter(|path| file_exists(path)))
}

/// 读取文本文件（配置文件），文件句柄在返回前释放
pub fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| EnvError::from_read(e, path.to_path_buf()))
}

/// 按原始字节读取输入文件，不做 UTF-8 校验
pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| EnvError::from_read(e, path.to_path_buf()))
}
