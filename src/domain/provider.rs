//! 键值源接口定义（输出端口）

use crate::domain::error::ProviderError;
use crate::domain::models::NameValuePair;
use async_trait::async_trait;

/// 远程键值源
///
/// 返回结果按到达顺序排列，不保证任何排序；失败时整体失败，不返回部分结果
#[async_trait]
pub trait KeyValueProvider: Send + Sync {
    /// 拉取指定源（表）中的全部键值对
    async fn fetch_all(&self, source_name: &str)
    -> std::result::Result<Vec<NameValuePair>, ProviderError>;
}
