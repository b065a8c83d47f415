//! 领域层错误类型与退出码

use miette::Diagnostic;
use std::error::Error as _;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DomainError>;

/// 进程退出码
///
/// 脚本可以据此区分 "配置源不可达" 与 "用法错误"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// 成功
    Success = 0,
    /// 通用运行时错误（启动失败、IO）
    GeneralError = 1,
    /// 命令行用法错误
    UsageError = 12,
    /// 远程键值源错误
    ProviderError = 13,
}

impl ExitCode {
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// 远程键值源错误
#[derive(Error, Debug, Diagnostic)]
pub enum ProviderError {
    #[error("认证失败: {0}")]
    #[diagnostic(code(dynamo_env::provider::auth), help("检查 AWS 凭证与区域是否正确"))]
    Auth(String),

    #[error("表不存在: {0}")]
    #[diagnostic(code(dynamo_env::provider::table_not_found), help("确认 --table 与 --region"))]
    TableNotFound(String),

    #[error("DynamoDB 请求失败 ({status}): {error_type}: {message}")]
    #[diagnostic(code(dynamo_env::provider::api))]
    Api {
        status: u16,
        error_type: String,
        message: String,
    },

    #[error("DynamoDB 请求未完成: {0}")]
    #[diagnostic(
        code(dynamo_env::provider::request),
        help("检查网络与端点，以及 AWS 凭证来源（环境变量、~/.aws/config、SSO、容器或实例角色）")
    )]
    Request(String),

    #[error("第 {index} 条记录缺少字符串字段 {field}")]
    #[diagnostic(
        code(dynamo_env::provider::malformed_record),
        help("表中每条记录都必须有字符串类型的 Name 和 Value 属性")
    )]
    MalformedRecord { index: usize, field: &'static str },
}

/// 领域层错误类型
#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("{0}")]
    #[diagnostic(code(dynamo_env::usage))]
    Usage(String),

    #[error("配置错误: {0}")]
    #[diagnostic(code(dynamo_env::config))]
    Config(String),

    #[error("拉取配置失败: {0}")]
    #[diagnostic(transparent)]
    Provider(#[from] ProviderError),

    #[error("命令启动失败: {command}: {source}")]
    #[diagnostic(code(dynamo_env::launch), help("确保命令在 PATH 中或使用完整路径"))]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("等待子进程失败: {0}")]
    #[diagnostic(code(dynamo_env::wait))]
    Wait(#[source] std::io::Error),

    #[error("IO 错误: {0}")]
    #[diagnostic(code(dynamo_env::io))]
    Io(#[from] std::io::Error),
}

impl DomainError {
    /// 错误对应的进程退出码
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        match self {
            DomainError::Usage(_) | DomainError::Config(_) => ExitCode::UsageError,
            DomainError::Provider(_) => ExitCode::ProviderError,
            DomainError::Launch { .. } | DomainError::Wait(_) | DomainError::Io(_) => {
                ExitCode::GeneralError
            }
        }
    }

    /// 报告错误到 stderr
    ///
    /// verbose = true: 打印完整错误链
    /// verbose = false: 只打印关键信息
    pub fn report(&self, verbose: bool) {
        eprintln!("dynamo-env: {}", self);

        if verbose {
            let mut current = self.source();
            while let Some(cause) = current {
                eprintln!("  └─ 原因: {}", cause);
                current = cause.source();
            }
        }

        if let Some(help) = self.help() {
            eprintln!("提示: {}", help);
        }
    }
}
