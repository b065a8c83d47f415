//! TOML 配置文件加载
//!
//! ```toml
//! table = "app-config"
//! region = "eu-west-1"
//! endpoint_url = "http://localhost:8000"
//! profile = "staging"
//! ```

use crate::domain::error::{DomainError, Result};
use crate::infrastructure::paths;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// 配置文件内容（所有字段可选）
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub table: Option<String>,
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
    pub profile: Option<String>,
}

impl FileConfig {
    /// 解析 TOML 文本
    pub fn parse(content: &str, origin: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            DomainError::Config(format!("解析配置文件 {} 失败: {}", origin.display(), e))
        })
    }

    /// 加载配置文件
    ///
    /// - 显式指定的路径必须存在
    /// - 未指定时读取 ~/.dynamo-env/config.toml，不存在则返回空配置
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let (path, required): (PathBuf, bool) = match explicit {
            Some(p) => (p.to_path_buf(), true),
            None => match paths::default_config_file() {
                Ok(p) => (p, false),
                Err(_) => return Ok(Self::default()),
            },
        };

        if !path.is_file() {
            if required {
                return Err(DomainError::Config(format!(
                    "配置文件不存在: {}",
                    path.display()
                )));
            }
            tracing::debug!(path = %path.display(), "未找到默认配置文件");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| {
            DomainError::Config(format!("读取配置文件 {} 失败: {}", path.display(), e))
        })?;
        tracing::debug!(path = %path.display(), "已加载配置文件");
        Self::parse(&content, &path)
    }
}
