//! DynamoDB 键值源
//!
//! 凭证、区域与 profile 由 AWS SDK 默认链解析（环境变量、~/.aws/config、
//! SSO、容器与实例角色），`Scan` 按 `LastEvaluatedKey` 自动翻页。
//! 每条记录必须带有字符串类型的 `Name` 和 `Value` 属性

use crate::domain::error::ProviderError;
use crate::domain::models::NameValuePair;
use crate::domain::provider::KeyValueProvider;
use async_trait::async_trait;
use aws_config::retry::RetryConfig;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_dynamodb::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_dynamodb::operation::scan::ScanError;
use aws_sdk_dynamodb::types::AttributeValue;
use std::collections::HashMap;

/// 视为认证失败的错误类型
const AUTH_ERRORS: &[&str] = &[
    "UnrecognizedClientException",
    "InvalidSignatureException",
    "MissingAuthenticationTokenException",
    "IncompleteSignatureException",
    "AccessDeniedException",
    "ExpiredTokenException",
];

/// DynamoDB 连接配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamoConfig {
    pub region: String,
    pub endpoint_url: Option<String>,
    /// 未指定时由 SDK 决定（AWS_PROFILE 或 default）
    pub profile: Option<String>,
}

/// DynamoDB 键值源
pub struct DynamoProvider {
    client: aws_sdk_dynamodb::Client,
}

impl DynamoProvider {
    /// 按配置加载 SDK 设置并创建客户端
    ///
    /// 失败的请求不重试：一次调用只有一次拉取
    pub async fn connect(config: &DynamoConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .retry_config(RetryConfig::disabled());
        if let Some(profile) = &config.profile {
            loader = loader.profile_name(profile);
        }
        if let Some(url) = &config.endpoint_url {
            loader = loader.endpoint_url(url);
        }

        Self::from_sdk_config(&loader.load().await)
    }

    pub fn from_sdk_config(sdk_config: &SdkConfig) -> Self {
        Self {
            client: aws_sdk_dynamodb::Client::new(sdk_config),
        }
    }

    /// 将 SDK 错误映射为 ProviderError
    fn classify_error(table: &str, err: SdkError<ScanError>) -> ProviderError {
        match err {
            SdkError::ServiceError(context) => {
                let status = context.raw().status().as_u16();
                let err = context.into_err();
                if err.is_resource_not_found_exception() {
                    return ProviderError::TableNotFound(table.to_string());
                }

                let error_type = err.code().unwrap_or("Unknown").to_string();
                let message = err.message().unwrap_or_default().to_string();
                if AUTH_ERRORS.contains(&error_type.as_str()) {
                    ProviderError::Auth(if message.is_empty() {
                        error_type
                    } else {
                        format!("{}: {}", error_type, message)
                    })
                } else {
                    ProviderError::Api {
                        status,
                        error_type,
                        message,
                    }
                }
            }
            other => ProviderError::Request(DisplayErrorContext(&other).to_string()),
        }
    }

    /// 从属性值中提取字符串 (`S` 类型)
    fn string_attribute<'v>(
        item: &'v HashMap<String, AttributeValue>,
        field: &str,
    ) -> Option<&'v str> {
        item.get(field)?.as_s().ok().map(String::as_str)
    }

    /// 将一条记录转换为键值对
    fn to_pair(
        index: usize,
        item: &HashMap<String, AttributeValue>,
    ) -> Result<NameValuePair, ProviderError> {
        let name = Self::string_attribute(item, "Name")
            .ok_or(ProviderError::MalformedRecord { index, field: "Name" })?;
        let value = Self::string_attribute(item, "Value")
            .ok_or(ProviderError::MalformedRecord { index, field: "Value" })?;
        Ok(NameValuePair::new(name, value))
    }
}

#[async_trait]
impl KeyValueProvider for DynamoProvider {
    async fn fetch_all(&self, source_name: &str) -> Result<Vec<NameValuePair>, ProviderError> {
        let mut pages = self
            .client
            .scan()
            .table_name(source_name)
            .into_paginator()
            .send();

        let mut pairs = Vec::new();
        let mut page_count = 0usize;
        while let Some(page) = pages.next().await {
            let page = page.map_err(|e| Self::classify_error(source_name, e))?;
            page_count += 1;
            tracing::debug!(
                table = source_name,
                page = page_count,
                items = page.items().len(),
                "Scan 分页完成"
            );

            for item in page.items() {
                pairs.push(Self::to_pair(pairs.len(), item)?);
            }
        }

        Ok(pairs)
    }
}
