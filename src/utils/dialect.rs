//! SQL方言与标识符工具
//! 只负责列名/表名的校验与引用，谓词文本不经过这里

use std::fmt;
use std::str::FromStr;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{RspResult, RsplinkError};

/// 目标SQL方言（决定标识符的引用方式）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SqlDialect {
    /// 不加引号，直接输出
    #[default]
    Generic,
    DuckDb,
    Spark,
    Athena,
    Sqlite,
    Postgres,
}

impl SqlDialect {
    /// 按方言引用标识符
    pub fn quote_identifier(&self, ident: &str) -> String {
        match self {
            SqlDialect::Generic => ident.to_string(),
            SqlDialect::Spark => format!("`{}`", ident),
            SqlDialect::DuckDb | SqlDialect::Athena | SqlDialect::Sqlite | SqlDialect::Postgres => {
                format!("\"{}\"", ident)
            }
        }
    }

    /// 带表别名的列引用，例如 `l."first_name"`
    pub fn qualified(&self, alias: &str, column: &str) -> String {
        format!("{}.{}", alias, self.quote_identifier(column))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SqlDialect::Generic => "generic",
            SqlDialect::DuckDb => "duckdb",
            SqlDialect::Spark => "spark",
            SqlDialect::Athena => "athena",
            SqlDialect::Sqlite => "sqlite",
            SqlDialect::Postgres => "postgres",
        }
    }
}

impl fmt::Display for SqlDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SqlDialect {
    type Err = RsplinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "generic" => Ok(SqlDialect::Generic),
            "duckdb" => Ok(SqlDialect::DuckDb),
            "spark" => Ok(SqlDialect::Spark),
            "athena" => Ok(SqlDialect::Athena),
            "sqlite" => Ok(SqlDialect::Sqlite),
            "postgres" | "postgresql" => Ok(SqlDialect::Postgres),
            other => Err(RsplinkError::InvalidInput(format!("unknown sql dialect: {}", other))),
        }
    }
}

/// 校验列名/表名，防止拼接进SQL时注入
pub fn validate_identifier(ident: &str) -> RspResult<()> {
    static IDENT_REGEX: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap()
    });

    if IDENT_REGEX.is_match(ident) {
        Ok(())
    } else {
        Err(RsplinkError::InvalidIdentifier(ident.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_identifier_per_dialect() {
        assert_eq!(SqlDialect::Generic.quote_identifier("dob"), "dob");
        assert_eq!(SqlDialect::DuckDb.quote_identifier("dob"), "\"dob\"");
        assert_eq!(SqlDialect::Athena.quote_identifier("dob"), "\"dob\"");
        assert_eq!(SqlDialect::Spark.quote_identifier("dob"), "`dob`");
    }

    #[test]
    fn test_qualified_column() {
        assert_eq!(SqlDialect::Postgres.qualified("l", "surname"), "l.\"surname\"");
        assert_eq!(SqlDialect::Generic.qualified("r", "surname"), "r.surname");
    }

    #[test]
    fn test_dialect_from_str() {
        assert_eq!("DuckDB".parse::<SqlDialect>().unwrap(), SqlDialect::DuckDb);
        assert_eq!("postgresql".parse::<SqlDialect>().unwrap(), SqlDialect::Postgres);
        assert!("oracle".parse::<SqlDialect>().is_err());
    }

    #[test]
    fn test_validate_identifier() {
        assert!(validate_identifier("unique_id").is_ok());
        assert!(validate_identifier("_col2").is_ok());
        assert!(validate_identifier("").is_err());
        assert!(validate_identifier("2col").is_err());
        assert!(validate_identifier("a; drop table x").is_err());
        assert!(validate_identifier("a\"b").is_err());
    }
}
