//! Domain Layer - 核心业务逻辑
//!
//! 包含：
//! - models: 领域实体
//! - provider: 键值源接口（输出端口）
//! - error: 领域错误类型与退出码

pub mod error;
pub mod models;
pub mod provider;

pub use error::{DomainError, ExitCode, ProviderError, Result};
pub use models::{ComposedEnvironment, ExecutionRequest, NameValuePair};
pub use provider::KeyValueProvider;
