//! 阻塞SQL编译器核心
//! 将有序规则集合 + 链接上下文编译为去重后的 UNION ALL 语句
//! 纯函数：无IO、无共享可变状态，可在多个调用方之间并发使用

use std::time::Instant;
use tracing::debug;

use super::plan::{BlockingPlan, CompiledBlock};
use crate::config::GlobalConfig;
use crate::error::{RspResult, RsplinkError};
use crate::linkage::LinkageContext;
use crate::rule::{BlockingRule, BlockingRuleSet};
use crate::utils::sql_preview;

/// 阻塞SQL编译器
#[derive(Debug, Clone)]
pub struct BlockingSqlCompiler {
    config: GlobalConfig,
}

impl BlockingSqlCompiler {
    pub fn new(config: GlobalConfig) -> RspResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GlobalConfig {
        &self.config
    }

    /// 编译为阻塞计划
    ///
    /// `needs_match_key_column` 在生成任何文本之前确定；
    /// 哨兵规则集合（未提供规则）始终不输出 match_key 列
    pub fn compile(
        &self,
        rules: &BlockingRuleSet,
        context: &LinkageContext,
        output_columns: &[String],
        needs_match_key_column: bool,
    ) -> RspResult<BlockingPlan> {
        let start = Instant::now();

        if output_columns.is_empty() {
            return Err(RsplinkError::InvalidInput(
                "at least one output column is required".to_string(),
            ));
        }

        // 1. 排序谓词（只计算一次）
        let ordering_clause = context.ordering_predicate(self.config.dialect)?;

        // 2. 是否输出 match_key 列
        let match_key_column = (needs_match_key_column && !rules.is_sentinel())
            .then(|| self.config.match_key_column.clone());

        // 3. 逐规则、逐加盐变体生成块
        let mut stats = CompileStats::default();
        let mut blocks = Vec::with_capacity(rules.block_count());
        for rule in rules.rules() {
            Self::compile_rule(rule, &mut blocks, &mut stats);
        }

        let (left_table, right_table) = self.config.input_tables(context.link_type);
        let plan = BlockingPlan {
            left_table: left_table.to_string(),
            right_table: right_table.to_string(),
            select_expr: output_columns.join(", "),
            ordering_clause,
            match_key_column,
            blocks,
        };

        debug!("✅ 阻塞SQL编译完成，总耗时{:?}", start.elapsed());
        debug!(
            "📊 编译统计：链接模式{}、规则{}条、加盐规则{}条、SELECT块{}个、match_key列={}",
            context.link_type,
            stats.rule_count,
            stats.salted_rule_count,
            stats.block_count,
            plan.match_key_column.is_some()
        );

        Ok(plan)
    }

    /// 编译并直接输出SQL文本
    pub fn compile_sql(
        &self,
        rules: &BlockingRuleSet,
        context: &LinkageContext,
        output_columns: &[String],
        needs_match_key_column: bool,
    ) -> RspResult<String> {
        let sql = self
            .compile(rules, context, output_columns, needs_match_key_column)?
            .to_sql();
        if self.config.verbose {
            debug!("生成SQL：{}", sql_preview(&sql, 240));
        }
        Ok(sql)
    }

    /// 编译单条规则：每个加盐变体一个块，共享同一个反重复子句
    fn compile_rule(rule: &BlockingRule, blocks: &mut Vec<CompiledBlock>, stats: &mut CompileStats) {
        let anti_duplicate_clause = anti_duplicate_clause(rule.previous_rules());

        for variant in rule.salt_variants() {
            blocks.push(CompiledBlock {
                match_key: rule.match_key(),
                join_predicate: variant.clone(),
                anti_duplicate_clause: anti_duplicate_clause.clone(),
            });
        }

        stats.rule_count += 1;
        stats.block_count += rule.salt_variants().len();
        if rule.is_salted() {
            stats.salted_rule_count += 1;
        }
    }
}

/// 反重复子句：排除任一此前规则已匹配的配对
///
/// 必须用 `coalesce(..., false)` 包裹：此前谓词结果为 NULL 时视为“未匹配”，
/// 否则含 NULL 的比较会让 `NOT (...)` 也为 NULL，从而错误地丢掉本应由当前规则产生的配对
pub fn anti_duplicate_clause(previous_rules: &[String]) -> String {
    if previous_rules.is_empty() {
        return String::new();
    }

    let or_clauses = previous_rules
        .iter()
        .map(|r| format!("coalesce(({}), false)", r))
        .collect::<Vec<_>>()
        .join(" OR ");
    format!("AND NOT ({})", or_clauses)
}

/// 编译统计信息
#[derive(Debug, Clone, Default)]
struct CompileStats {
    rule_count: usize,
    salted_rule_count: usize,
    block_count: usize,
}
