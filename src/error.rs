//! 全局错误类型定义
//! 编译期只产生配置类错误，谓词文本本身不做校验（交由下游SQL引擎在执行时报错）

use thiserror::Error;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;

use crate::linkage::LinkType;

#[derive(Error, Debug)]
pub enum RsplinkError {
    // ===================== 配置相关错误 =====================
    /// 无法识别的链接模式
    #[error("Unknown link type: {0}")]
    UnknownLinkType(String),

    /// 当前链接模式需要唯一标识列，但未提供
    #[error("Link type {0} requires at least one unique id column")]
    MissingUniqueIdColumns(LinkType),

    /// link_only 需要区分数据来源的列
    #[error("Link type {0} requires a source dataset column")]
    MissingSourceDatasetColumn(LinkType),

    /// 非法的列名/表名
    #[error("Invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    /// 按列阻塞时列清单为空
    #[error("Cannot build a blocking rule from an empty column list")]
    EmptyColumnList,

    // ===================== 序列化/IO 错误 =====================
    #[error("Settings parse failed: {0}")]
    SettingsParseError(#[from] SerdeJsonError),

    #[error("IO operation failed: {0}")]
    IoError(#[from] IoError),

    // ===================== 基础错误 =====================
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl RsplinkError {
    /// 是否属于配置错误（在生成SQL之前就必须暴露给调用方）
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownLinkType(_)
                | Self::MissingUniqueIdColumns(_)
                | Self::MissingSourceDatasetColumn(_)
                | Self::InvalidIdentifier(_)
                | Self::EmptyColumnList
        )
    }
}

// 全局Result类型
pub type RspResult<T> = Result<T, RsplinkError>;
