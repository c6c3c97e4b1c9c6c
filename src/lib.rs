//! rsplink - 概率记录链接的候选配对阻塞引擎
//! 将有序阻塞规则编译为去重的 UNION ALL SQL，不物化全量笛卡尔积

// 导出全局错误类型
pub use self::error::{RsplinkError, RspResult};

// 导出配置模块
pub use self::config::{GlobalConfig, ConfigManager, CustomConfigBuilder};

// 导出链接模块核心接口
pub use self::linkage::{LinkType, LinkageContext, composite_unique_id_sql};

// 导出规则模块核心接口
pub use self::rule::{
    BlockingRule, BlockingRuleSpec, BlockingRuleSet, RuleKey, RuleRegistry,
    generate_blocking_rules, block_on_columns, exact_match_rule
};

// 导出编译模块核心接口
pub use self::compiler::{
    BlockingPlan, CompiledBlock, BlockingSqlCompiler, anti_duplicate_clause,
    add_unique_id_and_source_dataset_cols_sql
};

// 导出设置模块核心接口
pub use self::settings::{Settings, SettingsLoader};

// 导出工具模块核心接口
pub use self::utils::SqlDialect;

pub use self::blocking::{BlockingOptions, block_using_rules_sql};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod linkage;
pub mod rule;
pub mod compiler;
pub mod settings;
pub mod utils;
pub mod blocking;

#[cfg(test)]
mod test_util;
