//! 设置加载
//! 从本地JSON文件或字符串读取链接设置

use std::path::Path;
use tracing::debug;

use super::model::Settings;
use crate::error::RspResult;

/// 设置加载器
pub struct SettingsLoader;

impl SettingsLoader {
    /// 从JSON字符串解析设置，并提前校验链接模式
    pub fn from_json_str(json: &str) -> RspResult<Settings> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.link_type()?;

        debug!(
            "设置解析成功，链接模式：{}，预测规则数：{}，训练规则：{}",
            settings.link_type,
            settings.blocking_rules_to_generate_predictions.len(),
            settings.blocking_rule_for_training.is_some()
        );
        Ok(settings)
    }

    /// 从本地文件加载设置
    pub async fn from_file(path: impl AsRef<Path>) -> RspResult<Settings> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await?;
        debug!("读取设置文件：{}，大小{}字节", path.display(), json.len());
        Self::from_json_str(&json)
    }
}
