//! 规则模块：负责阻塞规则的输入定义、注册编号与常用规则构造
pub mod spec;
pub mod model;
pub mod registry;
pub mod library;

// 导出核心接口
pub use self::spec::BlockingRuleSpec;
pub use self::model::BlockingRule;
pub use self::registry::{
    BlockingRuleSet, RuleKey, RuleRegistry, generate_blocking_rules, NO_BLOCKING_PREDICATE
};
pub use self::library::{block_on_columns, exact_match_rule};
