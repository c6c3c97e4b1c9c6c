//! 复合唯一标识表达式
//! 多个唯一标识列用固定分隔符拼接后比较，单列直接输出

use crate::utils::SqlDialect;

/// 复合唯一标识的拼接分隔符
pub const UNIQUE_ID_SEPARATOR: &str = " || '-__-' || ";

/// 生成复合唯一标识SQL表达式
/// `alias` 为 None 时不加表别名前缀
pub fn composite_unique_id_sql(
    unique_id_columns: &[String],
    alias: Option<&str>,
    dialect: SqlDialect,
) -> String {
    unique_id_columns
        .iter()
        .map(|col| match alias {
            Some(a) => dialect.qualified(a, col),
            None => dialect.quote_identifier(col),
        })
        .collect::<Vec<_>>()
        .join(UNIQUE_ID_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_column() {
        let cols = vec!["unique_id".to_string()];
        assert_eq!(composite_unique_id_sql(&cols, Some("l"), SqlDialect::Generic), "l.unique_id");
    }

    #[test]
    fn test_multi_column_concat() {
        let cols = vec!["source_dataset".to_string(), "unique_id".to_string()];
        assert_eq!(
            composite_unique_id_sql(&cols, Some("r"), SqlDialect::DuckDb),
            "r.\"source_dataset\" || '-__-' || r.\"unique_id\""
        );
    }

    #[test]
    fn test_without_alias() {
        let cols = vec!["source_dataset".to_string(), "unique_id".to_string()];
        assert_eq!(
            composite_unique_id_sql(&cols, None, SqlDialect::Generic),
            "source_dataset || '-__-' || unique_id"
        );
    }
}
