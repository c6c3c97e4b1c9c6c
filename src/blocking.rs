//! 由链接设置直接生成阻塞SQL的便捷接口

use tracing::info;

use crate::compiler::BlockingSqlCompiler;
use crate::config::GlobalConfig;
use crate::error::RspResult;
use crate::rule::generate_blocking_rules;
use crate::settings::Settings;

/// 流水线标志
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockingOptions {
    /// 左右两侧为两个独立的输入表
    pub two_dataset_link_only: bool,
    /// 表与自身链接
    pub self_link: bool,
}

/// 按设置中的阻塞规则生成候选配对SQL
/// 多条规则时SQL中包含去重逻辑，不会产生重复配对
pub fn block_using_rules_sql(
    settings: &Settings,
    config: &GlobalConfig,
    options: BlockingOptions,
) -> RspResult<String> {
    let context = settings.linkage_context(options.two_dataset_link_only, options.self_link)?;
    let output_columns = settings.columns_to_select_for_blocking(config.dialect)?;
    let rules = generate_blocking_rules(
        settings.active_blocking_rules().iter().cloned(),
        &config.salt_column,
    )?;

    let compiler = BlockingSqlCompiler::new(config.clone())?;
    let sql = compiler.compile_sql(
        &rules,
        &context,
        &output_columns,
        settings.needs_match_key_column(),
    )?;

    info!(
        "阻塞SQL已生成：链接模式{}，规则{}条，SELECT块{}个",
        context.link_type,
        rules.len(),
        rules.block_count()
    );
    Ok(sql)
}
