//! 常用阻塞规则构造函数
//! 按方言引用列名，生成精确匹配规则

use super::spec::BlockingRuleSpec;
use crate::error::{RspResult, RsplinkError};
use crate::utils::{SqlDialect, validate_identifier};

/// 单列精确匹配：`l.col = r.col`
pub fn exact_match_rule(column: &str, dialect: SqlDialect) -> RspResult<String> {
    validate_identifier(column)?;
    Ok(format!(
        "{} = {}",
        dialect.qualified("l", column),
        dialect.qualified("r", column)
    ))
}

/// 多列同时精确匹配，可指定加盐分区数
pub fn block_on_columns<S: AsRef<str>>(
    columns: &[S],
    salting_partitions: u32,
    dialect: SqlDialect,
) -> RspResult<BlockingRuleSpec> {
    if columns.is_empty() {
        return Err(RsplinkError::EmptyColumnList);
    }

    let rules = columns
        .iter()
        .map(|c| exact_match_rule(c.as_ref(), dialect))
        .collect::<RspResult<Vec<_>>>()?;

    Ok(BlockingRuleSpec::new(rules.join(" AND ")).with_salting(salting_partitions))
}
