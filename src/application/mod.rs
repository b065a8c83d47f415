//! Application Layer - 应用服务
//!
//! 包含：
//! - services: 参数切分、环境组合、环境解析用例

pub mod services;

pub use services::{ArgPartitioner, EnvComposer, EnvService, ResolveRequest};
