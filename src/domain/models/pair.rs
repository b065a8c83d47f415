//! 键值对与执行请求实体模型

use serde::{Deserialize, Serialize};
use std::ffi::{OsStr, OsString};
use std::fmt;

/// 环境变量键值对（不可变值类型）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NameValuePair {
    name: String,
    value: String,
}

impl NameValuePair {
    /// 创建新的键值对
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// 从 `NAME=VALUE` 文本解析，按第一个 `=` 切分
    ///
    /// 没有 `=` 时返回 `None`
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        token
            .split_once('=')
            .map(|(name, value)| Self::new(name, value))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// 渲染为环境变量条目 `name=value`
    #[must_use]
    pub fn to_entry(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for NameValuePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// 待执行的命令及其参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionRequest {
    pub command: String,
    pub arguments: Vec<String>,
}

impl ExecutionRequest {
    /// 从命令序列构建，空序列返回 `None`（打印模式）
    #[must_use]
    pub fn from_tokens(tokens: &[String]) -> Option<Self> {
        let (command, arguments) = tokens.split_first()?;
        Some(Self {
            command: command.clone(),
            arguments: arguments.to_vec(),
        })
    }
}

/// 组合后的最终环境（有序 `name=value` 序列）
///
/// 条目保持为 `OsString`，继承来的非 UTF-8 值原样传给子进程
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComposedEnvironment {
    entries: Vec<OsString>,
}

impl ComposedEnvironment {
    #[must_use]
    pub fn new(entries: Vec<OsString>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[OsString] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 按第一个 `=` 拆分为 (名称, 值)，无 `=` 的条目值为空
    pub fn vars(&self) -> impl Iterator<Item = (&OsStr, &OsStr)> {
        self.entries.iter().map(|entry| split_entry(entry))
    }

    /// 查找变量当前值
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&OsStr> {
        self.vars().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    /// 查找变量所在位置
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.vars().position(|(n, _)| n == name)
    }
}

/// 在第一个 `=` 处拆分环境条目
pub fn split_entry(entry: &OsStr) -> (&OsStr, &OsStr) {
    let bytes = entry.as_encoded_bytes();
    match bytes.iter().position(|&b| b == b'=') {
        // SAFETY: 两段都以 ASCII `=` 为边界，仍是合法的编码字节
        Some(i) => unsafe {
            (
                OsStr::from_encoded_bytes_unchecked(&bytes[..i]),
                OsStr::from_encoded_bytes_unchecked(&bytes[i + 1..]),
            )
        },
        None => (entry, OsStr::new("")),
    }
}
