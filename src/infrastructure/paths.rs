//! 路径管理工具

use crate::domain::error::{DomainError, Result};
use std::path::PathBuf;

/// 获取配置目录 ~/.dynamo-env
pub fn get_config_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|h| h.join(".dynamo-env"))
        .ok_or_else(|| DomainError::Config("无法确定主目录".to_string()))
}

/// 默认配置文件路径 ~/.dynamo-env/config.toml
pub fn default_config_file() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.toml"))
}
