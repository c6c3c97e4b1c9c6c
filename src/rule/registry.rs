//! 规则注册表
//! 只追加的有序构建器：按输入顺序分配 match_key 并记录此前的谓词快照

use std::fmt;
use tracing::debug;

use super::model::BlockingRule;
use super::spec::BlockingRuleSpec;
use crate::error::RspResult;
use crate::utils::validate_identifier;

/// 未提供任何阻塞规则时使用的恒真谓词（等价于全量笛卡尔积）
pub const NO_BLOCKING_PREDICATE: &str = "1=1";

/// 规则在集合中的不透明键
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleKey(usize);

impl fmt::Display for RuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rule_{}", self.0)
    }
}

/// 规则注册表
#[derive(Debug, Clone)]
pub struct RuleRegistry {
    salt_column: String,
    rules: Vec<BlockingRule>,
}

impl RuleRegistry {
    pub fn new(salt_column: &str) -> RspResult<Self> {
        validate_identifier(salt_column)?;
        Ok(Self {
            salt_column: salt_column.to_string(),
            rules: Vec::new(),
        })
    }

    /// 注册一条规则，返回构造好的规则
    pub fn register(&mut self, spec: BlockingRuleSpec) -> &BlockingRule {
        let previous: Vec<String> = self
            .rules
            .iter()
            .map(|r| r.predicate().to_string())
            .collect();
        let rule = BlockingRule::new(
            spec.blocking_rule,
            &previous,
            spec.salting_partitions,
            &self.salt_column,
        );
        self.rules.push(rule);
        &self.rules[self.rules.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// 完成注册；若没有任何规则则生成 `1=1` 哨兵规则
    pub fn finish(mut self) -> BlockingRuleSet {
        let sentinel = self.is_empty();
        if sentinel {
            self.register(BlockingRuleSpec::new(NO_BLOCKING_PREDICATE));
        }

        debug!(
            "规则注册完成：{}条规则，加盐规则{}条，哨兵={}",
            self.rules.len(),
            self.rules.iter().filter(|r| r.is_salted()).count(),
            sentinel
        );

        BlockingRuleSet {
            rules: self.rules,
            sentinel,
        }
    }
}

/// 有序规则集合（保持输入顺序）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockingRuleSet {
    rules: Vec<BlockingRule>,
    sentinel: bool,
}

impl BlockingRuleSet {
    pub fn get(&self, key: RuleKey) -> Option<&BlockingRule> {
        self.rules.get(key.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (RuleKey, &BlockingRule)> {
        self.rules.iter().enumerate().map(|(i, r)| (RuleKey(i), r))
    }

    pub fn rules(&self) -> &[BlockingRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// 是否为“无阻塞规则”哨兵集合
    pub fn is_sentinel(&self) -> bool {
        self.sentinel
    }

    /// 所有规则加盐展开后的SELECT块总数
    pub fn block_count(&self) -> usize {
        self.rules.iter().map(|r| r.salt_variants().len()).sum()
    }
}

/// 由一组规则输入构建规则集合
pub fn generate_blocking_rules<I, S>(specs: I, salt_column: &str) -> RspResult<BlockingRuleSet>
where
    I: IntoIterator<Item = S>,
    S: Into<BlockingRuleSpec>,
{
    let mut registry = RuleRegistry::new(salt_column)?;
    for spec in specs {
        registry.register(spec.into());
    }
    Ok(registry.finish())
}
