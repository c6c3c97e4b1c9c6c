//! 阻塞规则输入定义
//! 兼容两种配置写法：裸字符串 或 带 salting_partitions 的对象

use serde::{Deserialize, Serialize};

/// 单条阻塞规则的调用方输入
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawRuleSpec")]
pub struct BlockingRuleSpec {
    /// 基于 `l` / `r` 别名的布尔SQL表达式
    pub blocking_rule: String,
    /// 加盐分区数（<=1 表示不加盐）
    pub salting_partitions: u32,
}

impl BlockingRuleSpec {
    pub fn new(blocking_rule: impl Into<String>) -> Self {
        Self {
            blocking_rule: blocking_rule.into(),
            salting_partitions: 1,
        }
    }

    pub fn with_salting(mut self, salting_partitions: u32) -> Self {
        self.salting_partitions = salting_partitions;
        self
    }
}

impl From<&str> for BlockingRuleSpec {
    fn from(rule: &str) -> Self {
        Self::new(rule)
    }
}

impl From<String> for BlockingRuleSpec {
    fn from(rule: String) -> Self {
        Self::new(rule)
    }
}

// ======== 反序列化中间结构 ========
#[derive(Deserialize)]
#[serde(untagged)]
enum RawRuleSpec {
    Plain(String),
    Detailed {
        blocking_rule: String,
        #[serde(default = "default_salting_partitions")]
        salting_partitions: u32,
    },
}

fn default_salting_partitions() -> u32 {
    1
}

impl From<RawRuleSpec> for BlockingRuleSpec {
    fn from(raw: RawRuleSpec) -> Self {
        match raw {
            RawRuleSpec::Plain(blocking_rule) => Self::new(blocking_rule),
            RawRuleSpec::Detailed { blocking_rule, salting_partitions } => Self {
                blocking_rule,
                salting_partitions,
            },
        }
    }
}
