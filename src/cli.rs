//! CLI 参数定义

use crate::domain::error::ExitCode;
use clap::{ArgAction, Parser};
use clap::error::ErrorKind;
use std::path::PathBuf;

/// dynamo-env - 从 DynamoDB 表注入环境变量
#[derive(Parser, Debug, Clone)]
#[command(
    name = "dynamo-env",
    version,
    disable_version_flag = true,
    about = "从 DynamoDB 表注入环境变量，然后打印环境或运行命令",
    long_about = "读取 DynamoDB 表中的 Name/Value 记录，与当前环境和命令行 NAME=VALUE 合并后，\
                  打印最终环境（未给出命令时）或以该环境运行命令",
    override_usage = "dynamo-env [-i] [--table dynamo_table] [name=value ...] [utility [argument ...]]"
)]
pub struct Cli {
    /// DynamoDB 表名
    #[arg(short, long, env = "DYNAMO_ENV_TABLE")]
    pub table: Option<String>,

    /// 表所在的 AWS 区域 [默认: us-east-1]
    #[arg(short, long, env = "AWS_REGION")]
    pub region: Option<String>,

    /// 忽略继承的环境变量
    #[arg(short, long)]
    pub ignore: bool,

    /// 自定义 DynamoDB 端点（如 DynamoDB Local）
    #[arg(long, env = "DYNAMO_ENV_ENDPOINT")]
    pub endpoint_url: Option<String>,

    /// AWS 凭证 profile [默认: default]
    #[arg(long, env = "AWS_PROFILE")]
    pub profile: Option<String>,

    /// 配置文件路径 [默认: ~/.dynamo-env/config.toml]
    #[arg(long = "config", env = "DYNAMO_ENV_CONFIG")]
    pub config_path: Option<PathBuf>,

    /// 详细输出模式
    #[arg(short, long)]
    pub verbose: bool,

    /// 打印版本号
    #[arg(long, action = ArgAction::Version)]
    pub version: Option<bool>,

    /// NAME=VALUE 覆盖变量，之后是要运行的命令及其参数
    #[arg(value_name = "ARGS", trailing_var_arg = true)]
    pub args: Vec<String>,
}

/// clap 错误对应的退出码
///
/// --help / --version 视为成功，其余都是用法错误
pub fn exit_code_for(err: &clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => ExitCode::Success,
        _ => ExitCode::UsageError,
    }
}
