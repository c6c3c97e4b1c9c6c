//! 链接模块：链接模式、链接上下文、复合唯一标识与排序谓词
pub mod link_type;
pub mod context;
pub mod unique_id;

pub use self::link_type::LinkType;
pub use self::context::{LinkageContext, TAUTOLOGY};
pub use self::unique_id::{composite_unique_id_sql, UNIQUE_ID_SEPARATOR};
