//! Infrastructure Layer - 技术实现
//!
//! 包含：
//! - dynamo: DynamoDB 键值源（AWS SDK）
//! - config_file: TOML 配置文件
//! - executor: 子进程启动器
//! - paths: 路径工具

pub mod config_file;
pub mod dynamo;
pub mod executor;
pub mod paths;

pub use config_file::FileConfig;
pub use dynamo::{DynamoConfig, DynamoProvider};
pub use executor::ProcessLauncher;
