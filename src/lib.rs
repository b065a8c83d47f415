//! dynamo-env - 从 DynamoDB 表注入环境变量
//!
//! 代码结构遵循 Clean Architecture 原则

// 领域层
pub mod domain;

// 应用层
pub mod application;

// 基础设施层
pub mod infrastructure;

// 命令层
pub mod commands;

// CLI 定义
pub mod cli;

// 应用程序容器
pub mod app;

#[cfg(test)]
pub(crate) mod test_utils;

// 重新导出常用类型
pub use domain::{
    ComposedEnvironment, DomainError, ExecutionRequest, ExitCode, KeyValueProvider,
    NameValuePair, ProviderError, Result,
};
