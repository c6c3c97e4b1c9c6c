//! 工具模块：SQL方言/标识符处理、日志格式化
pub mod dialect;
pub mod log_format;

pub use self::dialect::{SqlDialect, validate_identifier};
pub use self::log_format::{SqlPreview, sql_preview};
