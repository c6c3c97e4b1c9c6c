//! 全局配置管理,存储编译阻塞SQL时的所有可配置项

use serde::{Deserialize, Serialize};

use crate::error::RspResult;
use crate::linkage::LinkType;
use crate::utils::{SqlDialect, validate_identifier};

/// 加盐分区列默认名
pub const DEFAULT_SALT_COLUMN: &str = "__splink_salt";
/// match_key 输出列默认名
pub const DEFAULT_MATCH_KEY_COLUMN: &str = "match_key";
/// 拼接后的输入表
pub const DEFAULT_INPUT_TABLE: &str = "__splink__df_concat_with_tf";
pub const DEFAULT_INPUT_TABLE_LEFT: &str = "__splink__df_concat_with_tf_left";
pub const DEFAULT_INPUT_TABLE_RIGHT: &str = "__splink__df_concat_with_tf_right";

/// 全局配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    // 目标SQL方言
    pub dialect: SqlDialect,
    // 加盐分区列
    pub salt_column: String,
    // match_key 输出列名
    pub match_key_column: String,
    // 单表模式下左右两侧共用的输入表
    pub input_table: String,
    // two_dataset_link_only 模式下的左右输入表
    pub input_table_left: String,
    pub input_table_right: String,
    // 是否启用详细日志
    pub verbose: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            dialect: SqlDialect::default(),
            salt_column: DEFAULT_SALT_COLUMN.to_string(),
            match_key_column: DEFAULT_MATCH_KEY_COLUMN.to_string(),
            input_table: DEFAULT_INPUT_TABLE.to_string(),
            input_table_left: DEFAULT_INPUT_TABLE_LEFT.to_string(),
            input_table_right: DEFAULT_INPUT_TABLE_RIGHT.to_string(),
            verbose: false,
        }
    }
}

impl GlobalConfig {
    /// 按链接模式选择左右输入表
    pub fn input_tables(&self, link_type: LinkType) -> (&str, &str) {
        match link_type {
            LinkType::TwoDatasetLinkOnly => (&self.input_table_left, &self.input_table_right),
            _ => (&self.input_table, &self.input_table),
        }
    }

    /// 校验所有会被拼进SQL的标识符
    pub fn validate(&self) -> RspResult<()> {
        for ident in [
            &self.salt_column,
            &self.match_key_column,
            &self.input_table,
            &self.input_table_left,
            &self.input_table_right,
        ] {
            validate_identifier(ident)?;
        }
        Ok(())
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> GlobalConfig {
        GlobalConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: GlobalConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GlobalConfig::default(),
        }
    }

    pub fn dialect(mut self, dialect: SqlDialect) -> Self {
        self.config.dialect = dialect;
        self
    }

    pub fn salt_column(mut self, column: impl Into<String>) -> Self {
        self.config.salt_column = column.into();
        self
    }

    pub fn match_key_column(mut self, column: impl Into<String>) -> Self {
        self.config.match_key_column = column.into();
        self
    }

    pub fn input_table(mut self, table: impl Into<String>) -> Self {
        self.config.input_table = table.into();
        self
    }

    pub fn input_tables_for_two_dataset_link(
        mut self,
        left: impl Into<String>,
        right: impl Into<String>,
    ) -> Self {
        self.config.input_table_left = left.into();
        self.config.input_table_right = right.into();
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> GlobalConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConfigManager::get_default();
        assert_eq!(config.salt_column, "__splink_salt");
        assert_eq!(config.match_key_column, "match_key");
        assert_eq!(config.dialect, SqlDialect::Generic);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_input_tables_per_link_type() {
        let config = ConfigManager::get_default();
        assert_eq!(
            config.input_tables(LinkType::DedupeOnly),
            ("__splink__df_concat_with_tf", "__splink__df_concat_with_tf")
        );
        assert_eq!(
            config.input_tables(LinkType::TwoDatasetLinkOnly),
            ("__splink__df_concat_with_tf_left", "__splink__df_concat_with_tf_right")
        );
    }

    #[test]
    fn test_builder() {
        let config = ConfigManager::custom()
            .dialect(SqlDialect::Spark)
            .salt_column("__salt")
            .input_table("people")
            .verbose(true)
            .build();
        assert_eq!(config.dialect, SqlDialect::Spark);
        assert_eq!(config.salt_column, "__salt");
        assert_eq!(config.input_tables(LinkType::SelfLink), ("people", "people"));
        assert!(config.verbose);
    }

    #[test]
    fn test_invalid_table_name() {
        let config = ConfigManager::custom().input_table("people; --").build();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GlobalConfig = serde_json::from_str(r#"{"dialect": "duckdb"}"#).unwrap();
        assert_eq!(config.dialect, SqlDialect::DuckDb);
        assert_eq!(config.input_table, DEFAULT_INPUT_TABLE);
    }
}
