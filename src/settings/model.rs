//! 链接设置数据模型
//! 对应设置文档中与阻塞相关的部分，并派生出编译器需要的上下文

use std::slice;
use serde::{Deserialize, Serialize};

use crate::error::{RspResult, RsplinkError};
use crate::linkage::{LinkType, LinkageContext};
use crate::rule::BlockingRuleSpec;
use crate::utils::{SqlDialect, validate_identifier};

fn default_unique_id_column_name() -> String {
    "unique_id".to_string()
}

fn default_source_dataset_column_name() -> String {
    "source_dataset".to_string()
}

/// 链接设置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// dedupe_only | link_only | link_and_dedupe
    pub link_type: String,
    #[serde(default = "default_unique_id_column_name")]
    pub unique_id_column_name: String,
    #[serde(default = "default_source_dataset_column_name")]
    pub source_dataset_column_name: String,
    #[serde(default)]
    pub blocking_rules_to_generate_predictions: Vec<BlockingRuleSpec>,
    /// 训练阶段使用的阻塞规则；设置后替代预测规则
    #[serde(default)]
    pub blocking_rule_for_training: Option<BlockingRuleSpec>,
    /// 比较所用的输入列
    #[serde(default)]
    pub comparison_columns: Vec<String>,
    #[serde(default)]
    pub additional_columns_to_retain: Vec<String>,
}

impl Settings {
    pub fn new(link_type: LinkType) -> Self {
        Self {
            link_type: link_type.as_str().to_string(),
            unique_id_column_name: default_unique_id_column_name(),
            source_dataset_column_name: default_source_dataset_column_name(),
            blocking_rules_to_generate_predictions: Vec::new(),
            blocking_rule_for_training: None,
            comparison_columns: Vec::new(),
            additional_columns_to_retain: Vec::new(),
        }
    }

    /// 解析链接模式，无法识别时返回配置错误
    pub fn link_type(&self) -> RspResult<LinkType> {
        self.link_type.parse()
    }

    /// 记录的唯一标识列：多数据集模式下为 [来源数据集列, 唯一标识列]
    pub fn unique_id_input_columns(&self) -> RspResult<Vec<String>> {
        let link_type = self.link_type()?;
        let mut cols = Vec::with_capacity(2);
        if link_type.has_source_dataset() {
            cols.push(self.source_dataset_column_name.clone());
        }
        cols.push(self.unique_id_column_name.clone());
        Ok(cols)
    }

    /// 构建链接上下文，流水线标志可覆盖配置中的链接模式
    pub fn linkage_context(
        &self,
        two_dataset_link_only: bool,
        self_link: bool,
    ) -> RspResult<LinkageContext> {
        let base = self.link_type()?;
        let mut context = LinkageContext::new(
            base.resolve(two_dataset_link_only, self_link),
            self.unique_id_input_columns()?,
        );
        if base.has_source_dataset() {
            context = context.with_source_dataset_column(self.source_dataset_column_name.clone());
        }
        Ok(context)
    }

    /// 本次编译生效的规则：训练规则优先
    pub fn active_blocking_rules(&self) -> &[BlockingRuleSpec] {
        match &self.blocking_rule_for_training {
            Some(rule) => slice::from_ref(rule),
            None => &self.blocking_rules_to_generate_predictions,
        }
    }

    /// 切换到训练或预测阶段
    /// 训练阶段要求存在训练规则；预测阶段清除训练规则，使预测规则生效
    pub fn select_phase(&mut self, training: bool) -> RspResult<()> {
        if !training {
            self.blocking_rule_for_training = None;
            return Ok(());
        }
        if self.blocking_rule_for_training.is_none() {
            return Err(RsplinkError::InvalidInput(
                "training phase requires blocking_rule_for_training".to_string(),
            ));
        }
        Ok(())
    }

    /// 是否需要输出 match_key 列
    /// 训练阶段不需要；预测阶段只要配置了规则就需要
    pub fn needs_match_key_column(&self) -> bool {
        self.blocking_rule_for_training.is_none()
            && !self.blocking_rules_to_generate_predictions.is_empty()
    }

    /// 阻塞阶段需要保留的输入列（去重，保持顺序）
    pub fn columns_to_retain(&self) -> RspResult<Vec<String>> {
        let mut cols: Vec<String> = Vec::new();
        let candidates = self
            .unique_id_input_columns()?
            .into_iter()
            .chain(self.comparison_columns.iter().cloned())
            .chain(self.additional_columns_to_retain.iter().cloned());
        for col in candidates {
            validate_identifier(&col)?;
            if !cols.contains(&col) {
                cols.push(col);
            }
        }
        Ok(cols)
    }

    /// 阻塞SELECT的输出列：每列展开为 `l.x as x_l, r.x as x_r`
    pub fn columns_to_select_for_blocking(&self, dialect: SqlDialect) -> RspResult<Vec<String>> {
        let cols = self.columns_to_retain()?;
        Ok(cols
            .iter()
            .flat_map(|c| {
                [
                    format!("{} as {}", dialect.qualified("l", c), dialect.quote_identifier(&format!("{}_l", c))),
                    format!("{} as {}", dialect.qualified("r", c), dialect.quote_identifier(&format!("{}_r", c))),
                ]
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_json(link_type: &str) -> String {
        format!(
            r#"{{
                "link_type": "{}",
                "blocking_rules_to_generate_predictions": [
                    "l.first_name = r.first_name",
                    {{"blocking_rule": "l.dob = r.dob", "salting_partitions": 2}}
                ],
                "comparison_columns": ["first_name", "dob"],
                "additional_columns_to_retain": ["city", "dob"]
            }}"#,
            link_type
        )
    }

    #[test]
    fn test_defaults() {
        let s: Settings = serde_json::from_str(r#"{"link_type": "dedupe_only"}"#).unwrap();
        assert_eq!(s.unique_id_column_name, "unique_id");
        assert_eq!(s.source_dataset_column_name, "source_dataset");
        assert!(s.active_blocking_rules().is_empty());
        assert!(!s.needs_match_key_column());
    }

    #[test]
    fn test_unique_id_columns_per_link_type() {
        let dedupe: Settings = serde_json::from_str(&settings_json("dedupe_only")).unwrap();
        assert_eq!(dedupe.unique_id_input_columns().unwrap(), vec!["unique_id"]);

        let link: Settings = serde_json::from_str(&settings_json("link_only")).unwrap();
        assert_eq!(
            link.unique_id_input_columns().unwrap(),
            vec!["source_dataset", "unique_id"]
        );
    }

    #[test]
    fn test_unknown_link_type() {
        let s: Settings = serde_json::from_str(&settings_json("dedupe")).unwrap();
        assert!(s.link_type().unwrap_err().is_config_error());
    }

    #[test]
    fn test_linkage_context_overrides() {
        let s: Settings = serde_json::from_str(&settings_json("link_only")).unwrap();
        let ctx = s.linkage_context(false, false).unwrap();
        assert_eq!(ctx.link_type, LinkType::LinkOnly);
        assert_eq!(ctx.source_dataset_column.as_deref(), Some("source_dataset"));

        assert_eq!(s.linkage_context(true, false).unwrap().link_type, LinkType::TwoDatasetLinkOnly);
        assert_eq!(s.linkage_context(false, true).unwrap().link_type, LinkType::SelfLink);
    }

    #[test]
    fn test_training_rule_overrides_prediction_rules() {
        let mut s: Settings = serde_json::from_str(&settings_json("dedupe_only")).unwrap();
        assert_eq!(s.active_blocking_rules().len(), 2);
        assert!(s.needs_match_key_column());

        s.blocking_rule_for_training = Some(BlockingRuleSpec::new("l.surname = r.surname"));
        assert_eq!(s.active_blocking_rules(), [BlockingRuleSpec::new("l.surname = r.surname")]);
        assert!(!s.needs_match_key_column());
    }

    #[test]
    fn test_prediction_phase_clears_training_rule() {
        // 设置文件同时包含训练规则时，预测阶段仍使用预测规则
        let mut s: Settings = serde_json::from_str(&settings_json("dedupe_only")).unwrap();
        s.blocking_rule_for_training = Some(BlockingRuleSpec::new("l.surname = r.surname"));

        s.select_phase(false).unwrap();
        assert!(s.blocking_rule_for_training.is_none());
        assert_eq!(s.active_blocking_rules().len(), 2);
        assert!(s.needs_match_key_column());
    }

    #[test]
    fn test_training_phase_keeps_training_rule() {
        let mut s: Settings = serde_json::from_str(&settings_json("dedupe_only")).unwrap();
        s.blocking_rule_for_training = Some(BlockingRuleSpec::new("l.surname = r.surname"));

        s.select_phase(true).unwrap();
        assert_eq!(s.active_blocking_rules(), [BlockingRuleSpec::new("l.surname = r.surname")]);
        assert!(!s.needs_match_key_column());
    }

    #[test]
    fn test_training_phase_without_rule_rejected() {
        let mut s: Settings = serde_json::from_str(&settings_json("dedupe_only")).unwrap();
        let err = s.select_phase(true).unwrap_err();
        assert!(matches!(err, RsplinkError::InvalidInput(_)));
    }

    #[test]
    fn test_columns_to_select_for_blocking() {
        let s: Settings = serde_json::from_str(&settings_json("dedupe_only")).unwrap();
        assert_eq!(
            s.columns_to_select_for_blocking(SqlDialect::Generic).unwrap(),
            vec![
                "l.unique_id as unique_id_l",
                "r.unique_id as unique_id_r",
                "l.first_name as first_name_l",
                "r.first_name as first_name_r",
                "l.dob as dob_l",
                "r.dob as dob_r",
                "l.city as city_l",
                "r.city as city_r",
            ]
        );
    }

    #[test]
    fn test_columns_to_select_quoted() {
        let mut s = Settings::new(LinkType::DedupeOnly);
        s.comparison_columns = vec!["name".to_string()];
        let cols = s.columns_to_select_for_blocking(SqlDialect::DuckDb).unwrap();
        assert_eq!(cols[2], "l.\"name\" as \"name_l\"");
    }
}
