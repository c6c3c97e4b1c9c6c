//! 链接上下文：链接模式 + 唯一标识列 + 来源数据集列
//! 由外部流水线提供，编译器只读

use serde::{Deserialize, Serialize};

use super::link_type::LinkType;
use super::unique_id::composite_unique_id_sql;
use crate::error::{RspResult, RsplinkError};
use crate::utils::{SqlDialect, validate_identifier};

/// 不施加任何排序约束的恒真谓词
pub const TAUTOLOGY: &str = "1=1";

/// 链接上下文
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkageContext {
    pub link_type: LinkType,
    /// 共同构成记录唯一标识的有序列
    pub unique_id_columns: Vec<String>,
    /// 区分来源数据集的列（link_only 必填）
    #[serde(default)]
    pub source_dataset_column: Option<String>,
}

impl LinkageContext {
    pub fn new(link_type: LinkType, unique_id_columns: Vec<String>) -> Self {
        Self {
            link_type,
            unique_id_columns,
            source_dataset_column: None,
        }
    }

    pub fn with_source_dataset_column(mut self, column: impl Into<String>) -> Self {
        self.source_dataset_column = Some(column.into());
        self
    }

    /// 校验当前模式所需的列元数据是否齐全、合法
    pub fn validate(&self) -> RspResult<()> {
        for col in &self.unique_id_columns {
            validate_identifier(col)?;
        }
        if let Some(sds) = &self.source_dataset_column {
            validate_identifier(sds)?;
        }

        if self.link_type.requires_unique_id() && self.unique_id_columns.is_empty() {
            return Err(RsplinkError::MissingUniqueIdColumns(self.link_type));
        }
        if self.link_type == LinkType::LinkOnly && self.source_dataset_column.is_none() {
            return Err(RsplinkError::MissingSourceDatasetColumn(self.link_type));
        }
        Ok(())
    }

    /// 计算排序谓词（与具体规则无关，只需计算一次）
    /// 既避免配对与其镜像同时出现，也在 link_only 下禁止同源配对
    pub fn ordering_predicate(&self, dialect: SqlDialect) -> RspResult<String> {
        self.validate()?;
        let predicate = match self.link_type {
            LinkType::TwoDatasetLinkOnly | LinkType::SelfLink => no_ordering(),
            LinkType::DedupeOnly | LinkType::LinkAndDedupe => {
                id_ordering(&self.unique_id_columns, dialect)
            }
            LinkType::LinkOnly => {
                // validate() 已保证存在
                let sds = self
                    .source_dataset_column
                    .as_deref()
                    .ok_or(RsplinkError::MissingSourceDatasetColumn(self.link_type))?;
                cross_source_ordering(&self.unique_id_columns, sds, dialect)
            }
        };
        Ok(predicate)
    }
}

fn no_ordering() -> String {
    TAUTOLOGY.to_string()
}

fn id_ordering(unique_id_columns: &[String], dialect: SqlDialect) -> String {
    format!(
        "{} < {}",
        composite_unique_id_sql(unique_id_columns, Some("l"), dialect),
        composite_unique_id_sql(unique_id_columns, Some("r"), dialect),
    )
}

fn cross_source_ordering(unique_id_columns: &[String], sds: &str, dialect: SqlDialect) -> String {
    format!(
        "{} and {} != {}",
        id_ordering(unique_id_columns, dialect),
        dialect.qualified("l", sds),
        dialect.qualified("r", sds),
    )
}
