//! 运行模式：以组合后的环境运行命令，透传退出码

use super::{CommandContext, CommandHandler};
use crate::domain::error::Result;
use crate::domain::models::{ComposedEnvironment, ExecutionRequest};
use crate::infrastructure::ProcessLauncher;
use async_trait::async_trait;

/// exec 命令
pub struct ExecCommand {
    environment: ComposedEnvironment,
    request: ExecutionRequest,
}

impl ExecCommand {
    pub fn new(environment: ComposedEnvironment, request: ExecutionRequest) -> Self {
        Self {
            environment,
            request,
        }
    }
}

#[async_trait]
impl CommandHandler for ExecCommand {
    async fn execute(&self, _ctx: &CommandContext) -> Result<i32> {
        tracing::debug!(
            command = %self.request.command,
            args = ?self.request.arguments,
            vars = self.environment.len(),
            "运行命令"
        );

        let status = ProcessLauncher::run(&self.environment, &self.request).await?;
        Ok(ProcessLauncher::exit_code(&status))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_exec_returns_child_code() {
        let command = ExecCommand::new(
            ComposedEnvironment::new(vec!["CODE=5".into()]),
            ExecutionRequest {
                command: "/bin/sh".to_string(),
                arguments: vec!["-c".to_string(), "exit $CODE".to_string()],
            },
        );

        let code = command
            .execute(&CommandContext { verbose: false })
            .await
            .unwrap();
        assert_eq!(code, 5);
    }
}
