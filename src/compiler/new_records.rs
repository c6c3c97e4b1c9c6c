//! 新记录预处理SQL
//! 与已有数据匹配新记录前，为缺失唯一标识/来源数据集列的输入补上字面量列

use crate::error::RspResult;
use crate::utils::validate_identifier;

/// 补列前的新记录表
pub const NEW_RECORDS_BEFORE_UID_FIX: &str = "__splink__df_new_records_with_tf_before_uid_fix";

const NEW_RECORD_SOURCE_DATASET: &str = "new_record";
const NEW_RECORD_UNIQUE_ID: &str = "id";

/// 生成补列SQL，每个缺失列只补一次
pub fn add_unique_id_and_source_dataset_cols_sql<S: AsRef<str>>(
    existing_columns: &[S],
    unique_id_column: &str,
    source_dataset_column: &str,
) -> RspResult<String> {
    validate_identifier(unique_id_column)?;
    validate_identifier(source_dataset_column)?;

    let has = |name: &str| existing_columns.iter().any(|c| c.as_ref() == name);

    let mut extra = String::new();
    if !has(source_dataset_column) {
        extra.push_str(&format!(", '{}' as {}", NEW_RECORD_SOURCE_DATASET, source_dataset_column));
    }
    if !has(unique_id_column) {
        extra.push_str(&format!(", '{}' as {}", NEW_RECORD_UNIQUE_ID, unique_id_column));
    }

    Ok(format!("select *{}\nfrom {}", extra, NEW_RECORDS_BEFORE_UID_FIX))
}
