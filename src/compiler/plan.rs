//! 编译后的阻塞计划模型
//! 每个子句独立保存，最后通过一次模板化步骤生成SQL文本

use std::fmt::{self, Write};
use serde::Serialize;

/// 单个 SELECT 块（一条规则的一个加盐变体）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompiledBlock {
    pub match_key: usize,
    /// 加盐变体谓词（未加盐时为原谓词）
    pub join_predicate: String,
    /// 排除此前规则已产生配对的子句，第一条规则为空
    pub anti_duplicate_clause: String,
}

/// 完整的阻塞计划
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockingPlan {
    pub left_table: String,
    pub right_table: String,
    /// 逗号拼接后的输出列表达式
    pub select_expr: String,
    /// 排序谓词（与规则无关）
    pub ordering_clause: String,
    /// 为 None 时不输出 match_key 列
    pub match_key_column: Option<String>,
    pub blocks: Vec<CompiledBlock>,
}

impl BlockingPlan {
    /// 生成最终SQL：所有块以 UNION ALL 连接
    pub fn to_sql(&self) -> String {
        self.to_string()
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// 谓词单独成行，末尾的 `--` 注释不会吞掉右括号
    fn render_block<W: Write>(&self, block: &CompiledBlock, out: &mut W) -> fmt::Result {
        writeln!(out, "select")?;
        write!(out, "{}", self.select_expr)?;
        if let Some(col) = &self.match_key_column {
            write!(out, ", '{}' as {}", block.match_key, col)?;
        }
        writeln!(out)?;
        writeln!(out, "from {} as l", self.left_table)?;
        writeln!(out, "inner join {} as r", self.right_table)?;
        writeln!(out, "on")?;
        writeln!(out, "(")?;
        writeln!(out, "{}", block.join_predicate)?;
        writeln!(out, ")")?;
        if !block.anti_duplicate_clause.is_empty() {
            writeln!(out, "{}", block.anti_duplicate_clause)?;
        }
        write!(out, "where {}", self.ordering_clause)
    }
}

impl fmt::Display for BlockingPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, block) in self.blocks.iter().enumerate() {
            if idx > 0 {
                f.write_str("\nunion all\n")?;
            }
            self.render_block(block, f)?;
        }
        Ok(())
    }
}
