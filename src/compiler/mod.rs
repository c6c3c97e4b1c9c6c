//! 编译模块：将阻塞规则集合编译为去重后的候选配对SQL
pub mod plan;
pub mod compiler;
pub mod new_records;

pub use self::plan::{BlockingPlan, CompiledBlock};
pub use self::compiler::{BlockingSqlCompiler, anti_duplicate_clause};
pub use self::new_records::{
    add_unique_id_and_source_dataset_cols_sql, NEW_RECORDS_BEFORE_UID_FIX
};
