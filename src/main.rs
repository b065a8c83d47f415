//! dynamo-env 主程序入口
//!
//! 设计原则：
//! - 模块化：入口代码简洁，逻辑委托给 app 容器
//! - 安静模式：日志写 stderr，stdout 只留给环境输出和子进程
//! - 错误处理：详细/安静错误模式，通过 --verbose 切换

use clap::{CommandFactory, Parser};
use dynamo_env::app::{AppConfig, Application};
use dynamo_env::cli::{self, Cli};
use dynamo_env::domain::error::{DomainError, Result};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // 解析 CLI 参数（--help / --version 以 0 退出，其余用法错误以 12 退出）
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = cli::exit_code_for(&e);
            let _ = e.print();
            std::process::exit(code.as_i32());
        }
    };

    init_tracing(cli.verbose);
    let verbose = cli.verbose;

    match run(cli).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            e.report(verbose);
            if matches!(e, DomainError::Usage(_)) {
                eprintln!();
                eprint!("{}", Cli::command().render_help());
            }
            std::process::exit(e.exit_code().as_i32());
        }
    }
}

/// 构建配置与应用，执行一次调用
async fn run(cli: Cli) -> Result<i32> {
    let config = AppConfig::from_cli(cli)?;
    let app = Application::new(config).await;
    app.run().await
}

/// 初始化日志（输出到 stderr）
///
/// RUST_LOG 优先；否则默认 warn，--verbose 时本 crate 为 debug
fn init_tracing(verbose: bool) {
    let default = if verbose { "warn,dynamo_env=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
