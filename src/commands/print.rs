//! 打印模式：每行输出一个 name=value

use super::{CommandContext, CommandHandler};
use crate::domain::error::{ExitCode, Result};
use crate::domain::models::ComposedEnvironment;
use async_trait::async_trait;
use std::io::Write;

/// print 命令
pub struct PrintCommand {
    environment: ComposedEnvironment,
}

impl PrintCommand {
    pub fn new(environment: ComposedEnvironment) -> Self {
        Self { environment }
    }

    /// 写出全部环境条目
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        for entry in self.environment.entries() {
            out.write_all(entry.as_encoded_bytes())?;
            out.write_all(b"\n")?;
        }
        out.flush()?;
        Ok(())
    }
}

#[async_trait]
impl CommandHandler for PrintCommand {
    async fn execute(&self, _ctx: &CommandContext) -> Result<i32> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        self.write_to(&mut handle)?;

        tracing::debug!(count = self.environment.len(), "已输出环境");
        Ok(ExitCode::Success.as_i32())
    }
}
