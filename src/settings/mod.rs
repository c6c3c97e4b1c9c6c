//! 设置模块：链接设置的数据模型与加载
pub mod model;
pub mod loader;

pub use self::model::Settings;
pub use self::loader::SettingsLoader;
