//! 命令行尾部参数切分器
//!
//! `NAME=VALUE ... [utility [argument ...]]`：
//! 第一个不含 `=` 的参数起，之后全部属于要执行的命令（即使含 `=`）

use crate::domain::models::NameValuePair;

/// 参数切分器
pub struct ArgPartitioner;

impl ArgPartitioner {
    /// 切分为 (覆盖变量, 执行序列)
    ///
    /// # 输入
    /// `["foo=bar", "taco=burrito", "command", "arg"]`
    ///
    /// # 输出
    /// `([foo=bar, taco=burrito], ["command", "arg"])`
    pub fn partition(tokens: &[String]) -> (Vec<NameValuePair>, Vec<String>) {
        let split = tokens
            .iter()
            .position(|token| !token.contains('='))
            .unwrap_or(tokens.len());

        let (pairs, execution) = tokens.split_at(split);
        let overrides = pairs
            .iter()
            .filter_map(|token| NameValuePair::parse(token))
            .collect();

        (overrides, execution.to_vec())
    }
}
