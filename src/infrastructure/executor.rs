//! 子进程启动器
//!
//! 子进程直接继承 stdin/stdout/stderr，环境完全替换为组合后的环境。
//! 等待期间订阅中断信号：信号由进程组直接送达子进程，这里只记录并继续等待，
//! 保证一定能拿到子进程的退出状态

use crate::domain::error::{DomainError, Result};
use crate::domain::models::{ComposedEnvironment, ExecutionRequest};
use std::process::{ExitStatus, Stdio};
use tokio::process::{Child, Command};

/// 子进程启动器
pub struct ProcessLauncher;

impl ProcessLauncher {
    /// 启动命令并等待其退出
    ///
    /// # 返回
    /// 子进程的退出状态；命令无法启动时返回 `DomainError::Launch`
    pub async fn run(
        environment: &ComposedEnvironment,
        request: &ExecutionRequest,
    ) -> Result<ExitStatus> {
        let mut cmd = Command::new(&request.command);
        cmd.args(&request.arguments);

        // 不继承当前进程环境，只使用组合结果
        cmd.env_clear();
        for (key, value) in environment.vars() {
            if key.is_empty() {
                tracing::debug!("跳过名称为空的环境条目");
                continue;
            }
            cmd.env(key, value);
        }

        // 继承标准流
        cmd.stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let mut child = cmd.spawn().map_err(|source| DomainError::Launch {
            command: request.command.clone(),
            source,
        })?;
        tracing::debug!(command = %request.command, pid = ?child.id(), "子进程已启动");

        let status = Self::wait_with_interrupts(&mut child).await?;
        tracing::debug!(command = %request.command, %status, "子进程已退出");
        Ok(status)
    }

    /// 等待子进程退出，期间持有中断订阅
    ///
    /// 订阅随 select 分支一起释放，无论等待成功与否
    async fn wait_with_interrupts(child: &mut Child) -> Result<ExitStatus> {
        loop {
            tokio::select! {
                status = child.wait() => return status.map_err(DomainError::Wait),
                signal = tokio::signal::ctrl_c() => match signal {
                    Ok(()) => tracing::info!("收到中断信号，等待子进程退出"),
                    Err(e) => {
                        tracing::warn!(error = %e, "无法订阅中断信号");
                        return child.wait().await.map_err(DomainError::Wait);
                    }
                },
            }
        }
    }

    /// 将退出状态转换为本进程的退出码
    ///
    /// 被信号终止时返回 128 + 信号编号（shell 约定）
    pub fn exit_code(status: &ExitStatus) -> i32 {
        if let Some(code) = status.code() {
            return code;
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return 128 + signal;
            }
        }

        1
    }
}
