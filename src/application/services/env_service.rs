//! 环境解析应用服务

use super::EnvComposer;
use crate::domain::error::Result;
use crate::domain::models::{ComposedEnvironment, NameValuePair};
use crate::domain::provider::KeyValueProvider;
use std::ffi::OsString;
use std::sync::Arc;

/// 环境解析请求
#[derive(Debug, Clone, Default)]
pub struct ResolveRequest {
    /// 远程表名
    pub table: String,
    /// 继承的环境快照
    pub inherited: Vec<OsString>,
    /// 是否忽略继承环境
    pub ignore_inherited: bool,
    /// 命令行覆盖变量
    pub overrides: Vec<NameValuePair>,
}

/// 环境服务
pub struct EnvService {
    provider: Arc<dyn KeyValueProvider>,
}

impl EnvService {
    pub fn new(provider: Arc<dyn KeyValueProvider>) -> Self {
        Self { provider }
    }

    /// 拉取远程配置并组合最终环境
    ///
    /// 拉取失败时整体失败，不返回部分环境
    pub async fn resolve(&self, request: &ResolveRequest) -> Result<ComposedEnvironment> {
        let provider_pairs = self.provider.fetch_all(&request.table).await?;
        tracing::info!(
            table = %request.table,
            count = provider_pairs.len(),
            "已拉取远程配置"
        );

        Ok(EnvComposer::compose(
            &request.inherited,
            request.ignore_inherited,
            &provider_pairs,
            &request.overrides,
        ))
    }
}
