//! 阻塞规则数据模型
//! 构造后不可变，只在一次SQL生成期间存在

use serde::Serialize;

/// 一条已注册的阻塞规则
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockingRule {
    predicate: String,
    match_key: usize,
    /// 构造时拍下的快照：此前注册的所有谓词
    previous_rules: Vec<String>,
    salting_partitions: u32,
    salt_variants: Vec<String>,
}

impl BlockingRule {
    /// 创建规则，match_key 等于此前规则的数量
    pub fn new(
        predicate: impl Into<String>,
        previous_rules: &[String],
        salting_partitions: u32,
        salt_column: &str,
    ) -> Self {
        let predicate = predicate.into();
        let salt_variants = salt_variants(&predicate, salting_partitions, salt_column);
        Self {
            predicate,
            match_key: previous_rules.len(),
            previous_rules: previous_rules.to_vec(),
            salting_partitions: salting_partitions.max(1),
            salt_variants,
        }
    }

    pub fn predicate(&self) -> &str {
        &self.predicate
    }

    pub fn match_key(&self) -> usize {
        self.match_key
    }

    pub fn previous_rules(&self) -> &[String] {
        &self.previous_rules
    }

    pub fn salting_partitions(&self) -> u32 {
        self.salting_partitions
    }

    pub fn salt_variants(&self) -> &[String] {
        &self.salt_variants
    }

    pub fn is_salted(&self) -> bool {
        self.salting_partitions > 1
    }
}

/// 生成加盐变体：S>1 时为 S 个分区谓词，否则为原谓词本身
/// 原谓词先加括号，避免其中的 OR 越过分区条件
fn salt_variants(predicate: &str, salting_partitions: u32, salt_column: &str) -> Vec<String> {
    if salting_partitions > 1 {
        (1..=salting_partitions)
            .map(|n| format!("({}) and l.{} = {}", predicate, salt_column, n))
            .collect()
    } else {
        vec![predicate.to_string()]
    }
}
