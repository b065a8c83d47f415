//! 应用程序容器
//!
//! 负责配置分层、依赖注入和一次调用的完整流程：
//! 切分参数 -> 拉取远程配置 -> 组合环境 -> 打印或运行命令

use crate::application::{ArgPartitioner, EnvComposer, EnvService, ResolveRequest};
use crate::cli::Cli;
use crate::commands::{CommandContext, CommandHandler, ExecCommand, PrintCommand};
use crate::domain::error::{DomainError, Result};
use crate::domain::models::ExecutionRequest;
use crate::domain::provider::KeyValueProvider;
use crate::infrastructure::{DynamoConfig, DynamoProvider, FileConfig};
use std::sync::Arc;

pub const DEFAULT_REGION: &str = "us-east-1";

/// 应用程序配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub table: String,
    pub region: String,
    pub endpoint_url: Option<String>,
    /// 未指定时交给 AWS SDK（AWS_PROFILE 或 default）
    pub profile: Option<String>,
    pub ignore_inherited: bool,
    pub verbose: bool,
    /// 尾部参数：NAME=VALUE ... [utility [argument ...]]
    pub args: Vec<String>,
}

impl AppConfig {
    /// 从命令行构建配置（会读取配置文件）
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let file = FileConfig::load(cli.config_path.as_deref())?;
        Self::resolve(cli, file)
    }

    /// 配置分层：命令行/环境变量 > 配置文件 > 默认值
    pub fn resolve(cli: Cli, file: FileConfig) -> Result<Self> {
        let non_empty = |v: Option<String>| v.filter(|s| !s.trim().is_empty());

        let table = non_empty(cli.table)
            .or_else(|| non_empty(file.table))
            .ok_or_else(|| DomainError::Usage("缺少必需参数 --table".to_string()))?;

        Ok(Self {
            table,
            region: non_empty(cli.region)
                .or_else(|| non_empty(file.region))
                .unwrap_or_else(|| DEFAULT_REGION.to_string()),
            endpoint_url: non_empty(cli.endpoint_url).or_else(|| non_empty(file.endpoint_url)),
            profile: non_empty(cli.profile).or_else(|| non_empty(file.profile)),
            ignore_inherited: cli.ignore,
            verbose: cli.verbose,
            args: cli.args,
        })
    }
}

/// 应用程序容器
pub struct Application {
    config: AppConfig,
    env_service: EnvService,
}

impl Application {
    /// 创建使用 DynamoDB 的应用实例
    ///
    /// 凭证由 SDK 在第一次请求时解析
    pub async fn new(config: AppConfig) -> Self {
        let dynamo = DynamoConfig {
            region: config.region.clone(),
            endpoint_url: config.endpoint_url.clone(),
            profile: config.profile.clone(),
        };
        let provider = DynamoProvider::connect(&dynamo).await;
        tracing::debug!(
            region = %dynamo.region,
            endpoint = ?dynamo.endpoint_url,
            profile = ?dynamo.profile,
            "DynamoDB 键值源已就绪"
        );

        Self::with_provider(config, Arc::new(provider))
    }

    /// 使用指定键值源创建应用实例
    pub fn with_provider(config: AppConfig, provider: Arc<dyn KeyValueProvider>) -> Self {
        Self {
            config,
            env_service: EnvService::new(provider),
        }
    }

    /// 执行一次调用，返回进程退出码
    pub async fn run(&self) -> Result<i32> {
        let (overrides, execution) = ArgPartitioner::partition(&self.config.args);

        let request = ResolveRequest {
            table: self.config.table.clone(),
            inherited: EnvComposer::inherited_snapshot(),
            ignore_inherited: self.config.ignore_inherited,
            overrides,
        };
        let environment = self.env_service.resolve(&request).await?;

        let handler: Box<dyn CommandHandler> = match ExecutionRequest::from_tokens(&execution) {
            Some(execution) => Box::new(ExecCommand::new(environment, execution)),
            None => Box::new(PrintCommand::new(environment)),
        };

        let ctx = CommandContext {
            verbose: self.config.verbose,
        };
        handler.execute(&ctx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::ProviderError;
    use crate::domain::models::NameValuePair;
    use crate::test_utils::FakeProvider;

    fn cli(args: &[&str]) -> Cli {
        use clap::Parser;
        Cli::try_parse_from(std::iter::once("dynamo-env").chain(args.iter().copied())).unwrap()
    }

    fn bare_cli() -> Cli {
        Cli {
            table: None,
            region: None,
            ignore: false,
            endpoint_url: None,
            profile: None,
            config_path: None,
            verbose: false,
            version: None,
            args: Vec::new(),
        }
    }

    mod config_tests {
        use super::*;

        #[test]
        fn test_missing_table_is_usage_error() {
            let result = AppConfig::resolve(bare_cli(), FileConfig::default());
            assert!(matches!(result, Err(DomainError::Usage(_))));
        }

        #[test]
        fn test_blank_table_is_usage_error() {
            let mut c = bare_cli();
            c.table = Some("  ".to_string());
            assert!(AppConfig::resolve(c, FileConfig::default()).is_err());
        }

        #[test]
        fn test_defaults() {
            let mut c = bare_cli();
            c.table = Some("app".to_string());
            let config = AppConfig::resolve(c, FileConfig::default()).unwrap();
            assert_eq!(config.region, DEFAULT_REGION);
            assert_eq!(config.profile, None);
            assert_eq!(config.endpoint_url, None);
        }

        #[test]
        fn test_file_fills_gaps_cli_wins() {
            let mut c = bare_cli();
            c.region = Some("ap-south-1".to_string());
            let file = FileConfig {
                table: Some("from-file".to_string()),
                region: Some("eu-west-1".to_string()),
                endpoint_url: Some("http://localhost:8000".to_string()),
                profile: Some("staging".to_string()),
            };

            let config = AppConfig::resolve(c, file).unwrap();
            assert_eq!(config.table, "from-file");
            assert_eq!(config.region, "ap-south-1");
            assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:8000"));
            assert_eq!(config.profile.as_deref(), Some("staging"));
        }
    }

    // run() 会读取进程环境快照
    mod run_tests {
        use super::*;
        use serial_test::serial;

        fn config(args: &[&str]) -> AppConfig {
            let mut c = bare_cli();
            c.table = Some("app".to_string());
            c.ignore = true;
            c.args = args.iter().map(|s| s.to_string()).collect();
            AppConfig::resolve(c, FileConfig::default()).unwrap()
        }

        #[tokio::test]
        #[serial]
        async fn test_print_mode_returns_zero() {
            let provider = Arc::new(FakeProvider::with_pairs(vec![NameValuePair::new("A", "1")]));
            let app = Application::with_provider(config(&["B=2"]), provider.clone());

            assert_eq!(app.run().await.unwrap(), 0);
            assert_eq!(provider.requested_tables(), vec!["app".to_string()]);
        }

        #[tokio::test]
        #[serial]
        async fn test_provider_failure_aborts_before_launch() {
            let provider = Arc::new(FakeProvider::failing(|| {
                ProviderError::Auth("denied".to_string())
            }));
            let app = Application::with_provider(config(&["/nonexistent/cmd"]), provider);

            let err = app.run().await.unwrap_err();
            assert!(matches!(err, DomainError::Provider(ProviderError::Auth(_))));
        }

        #[cfg(unix)]
        #[tokio::test]
        #[serial]
        async fn test_exec_mode_propagates_child_exit_code() {
            let provider = Arc::new(FakeProvider::with_pairs(vec![NameValuePair::new(
                "REMOTE", "yes",
            )]));
            let app = Application::with_provider(
                config(&[
                    "LOCAL=1",
                    "/bin/sh",
                    "-c",
                    r#"test "$REMOTE" = yes && test "$LOCAL" = 1 && exit 7"#,
                ]),
                provider,
            );

            assert_eq!(app.run().await.unwrap(), 7);
        }

        #[tokio::test]
        #[serial]
        async fn test_exec_mode_launch_failure() {
            let provider = Arc::new(FakeProvider::with_pairs(vec![]));
            let app = Application::with_provider(
                config(&["/nonexistent/dynamo-env-missing-binary"]),
                provider,
            );

            let err = app.run().await.unwrap_err();
            assert!(matches!(err, DomainError::Launch { .. }));
        }
    }

    #[test]
    fn test_cli_args_flow_into_config() {
        let config = AppConfig::resolve(
            cli(&["-t", "app", "-i", "-v", "FOO=bar", "env"]),
            FileConfig::default(),
        )
        .unwrap();
        assert!(config.ignore_inherited);
        assert!(config.verbose);
        assert_eq!(config.args, vec!["FOO=bar", "env"]);
    }
}
