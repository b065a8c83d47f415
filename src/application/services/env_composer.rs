//! 环境变量组合器
//!
//! 应用顺序（从低到高）：
//! 1. 继承的进程环境（可通过 --ignore 跳过）
//! 2. 远程键值源
//! 3. 命令行 NAME=VALUE（最高）
//!
//! 已存在的变量原位覆盖，新变量按到达顺序追加，保证多次输出可直接 diff

use crate::domain::models::{ComposedEnvironment, NameValuePair, split_entry};
use std::collections::HashMap;
use std::ffi::{OsStr, OsString};

/// 环境变量组合器
pub struct EnvComposer;

impl EnvComposer {
    /// 组合最终环境
    pub fn compose(
        inherited: &[OsString],
        ignore_inherited: bool,
        provider_pairs: &[NameValuePair],
        cli_pairs: &[NameValuePair],
    ) -> ComposedEnvironment {
        let mut entries: Vec<OsString> = Vec::new();
        let mut index: HashMap<OsString, usize> = HashMap::new();

        if !ignore_inherited {
            entries = inherited.to_vec();
            for (position, entry) in entries.iter().enumerate() {
                // 无 `=` 的异常条目整体作为名称
                let (name, _) = split_entry(entry);
                index.insert(name.to_os_string(), position);
            }
        }

        for pair in provider_pairs.iter().chain(cli_pairs) {
            match index.get(OsStr::new(pair.name())) {
                Some(&position) => entries[position] = pair.to_entry().into(),
                None => {
                    index.insert(pair.name().into(), entries.len());
                    entries.push(pair.to_entry().into());
                }
            }
        }

        tracing::debug!(
            inherited = if ignore_inherited { 0 } else { inherited.len() },
            provider = provider_pairs.len(),
            cli = cli_pairs.len(),
            total = entries.len(),
            "环境组合完成"
        );

        ComposedEnvironment::new(entries)
    }

    /// 当前进程的环境快照（`name=value` 形式，字节原样保留）
    pub fn inherited_snapshot() -> Vec<OsString> {
        std::env::vars_os()
            .map(|(mut entry, value)| {
                entry.push("=");
                entry.push(value);
                entry
            })
            .collect()
    }
}
