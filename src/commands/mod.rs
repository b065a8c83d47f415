//! 命令处理器
//!
//! 两种模式各一个模块，实现 CommandHandler trait：
//! - print: 未给出命令时打印最终环境
//! - exec: 以最终环境运行命令

use crate::domain::error::Result;
use async_trait::async_trait;

pub mod exec;
pub mod print;

pub use exec::ExecCommand;
pub use print::PrintCommand;

/// 命令上下文
#[derive(Debug)]
pub struct CommandContext {
    pub verbose: bool,
}

/// 命令处理器 trait
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// 执行命令，返回进程退出码
    async fn execute(&self, ctx: &CommandContext) -> Result<i32>;
}
