//! 测试工具模块
//!
//! 提供内存键值源和环境变量守卫，避免测试之间互相污染

use crate::domain::error::ProviderError;
use crate::domain::models::NameValuePair;
use crate::domain::provider::KeyValueProvider;
use async_trait::async_trait;
use std::collections::HashMap;
use std::env;
use std::sync::Mutex;

/// 环境变量守卫 - 释放时恢复被修改过的变量
#[derive(Default)]
pub struct EnvGuard {
    original_vars: Mutex<HashMap<String, Option<String>>>,
}

impl EnvGuard {
    pub fn new() -> Self {
        Self::default()
    }

    fn remember(&self, key: &str) {
        let mut original = self.original_vars.lock().unwrap();
        original
            .entry(key.to_string())
            .or_insert_with(|| env::var(key).ok());
    }

    /// 设置测试环境变量（自动包装为 unsafe）
    pub fn set_var(&self, key: &str, value: &str) {
        self.remember(key);
        unsafe {
            env::set_var(key, value);
        }
    }

    /// 移除环境变量（自动包装为 unsafe）
    pub fn remove_var(&self, key: &str) {
        self.remember(key);
        unsafe {
            env::remove_var(key);
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        let original = self.original_vars.lock().unwrap();
        for (key, value) in original.iter() {
            unsafe {
                match value {
                    Some(v) => env::set_var(key, v),
                    None => env::remove_var(key),
                }
            }
        }
    }
}

type ErrorFactory = Box<dyn Fn() -> ProviderError + Send + Sync>;

/// 内存键值源
pub struct FakeProvider {
    pairs: Vec<NameValuePair>,
    error: Option<ErrorFactory>,
    requested: Mutex<Vec<String>>,
}

impl FakeProvider {
    pub fn with_pairs(pairs: Vec<NameValuePair>) -> Self {
        Self {
            pairs,
            error: None,
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn failing<F>(factory: F) -> Self
    where
        F: Fn() -> ProviderError + Send + Sync + 'static,
    {
        Self {
            pairs: Vec::new(),
            error: Some(Box::new(factory)),
            requested: Mutex::new(Vec::new()),
        }
    }

    /// 被请求过的表名
    pub fn requested_tables(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl KeyValueProvider for FakeProvider {
    async fn fetch_all(&self, source_name: &str) -> Result<Vec<NameValuePair>, ProviderError> {
        self.requested.lock().unwrap().push(source_name.to_string());
        match &self.error {
            Some(factory) => Err(factory()),
            None => Ok(self.pairs.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_guard_restores_values() {
        {
            let guard = EnvGuard::new();
            guard.set_var("DYNAMO_ENV_TEST_GUARD", "value");
            assert_eq!(env::var("DYNAMO_ENV_TEST_GUARD").unwrap(), "value");
        }
        assert!(env::var("DYNAMO_ENV_TEST_GUARD").is_err());
    }

    #[tokio::test]
    async fn test_fake_provider_records_requests() {
        let provider = FakeProvider::with_pairs(vec![NameValuePair::new("A", "1")]);
        let pairs = provider.fetch_all("table").await.unwrap();
        assert_eq!(pairs.len(), 1);
        assert_eq!(provider.requested_tables(), vec!["table".to_string()]);
    }
}
