//! 链接模式定义
//! 封闭枚举，所有分支都通过 match 穷尽处理

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::RsplinkError;

/// 两侧输入关系之间的链接模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkType {
    /// 单数据集内部去重
    DedupeOnly,
    /// 多数据集之间链接，禁止同源配对
    LinkOnly,
    /// 多数据集链接 + 各自内部去重
    LinkAndDedupe,
    /// 两个独立表之间的链接（左右表分别注册）
    TwoDatasetLinkOnly,
    /// 表与自身链接（保留镜像配对）
    SelfLink,
}

impl LinkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkType::DedupeOnly => "dedupe_only",
            LinkType::LinkOnly => "link_only",
            LinkType::LinkAndDedupe => "link_and_dedupe",
            LinkType::TwoDatasetLinkOnly => "two_dataset_link_only",
            LinkType::SelfLink => "self_link",
        }
    }

    /// 用流水线标志覆盖配置中的链接模式
    /// self_link 优先级最高
    pub fn resolve(self, two_dataset_link_only: bool, self_link: bool) -> Self {
        if self_link {
            LinkType::SelfLink
        } else if two_dataset_link_only {
            LinkType::TwoDatasetLinkOnly
        } else {
            self
        }
    }

    /// 该模式的排序谓词是否依赖唯一标识列
    pub fn requires_unique_id(&self) -> bool {
        match self {
            LinkType::DedupeOnly | LinkType::LinkOnly | LinkType::LinkAndDedupe => true,
            LinkType::TwoDatasetLinkOnly | LinkType::SelfLink => false,
        }
    }

    /// 记录的复合唯一标识是否包含来源数据集列
    pub fn has_source_dataset(&self) -> bool {
        match self {
            LinkType::LinkOnly | LinkType::LinkAndDedupe | LinkType::TwoDatasetLinkOnly => true,
            LinkType::DedupeOnly | LinkType::SelfLink => false,
        }
    }
}

impl fmt::Display for LinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LinkType {
    type Err = RsplinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dedupe_only" => Ok(LinkType::DedupeOnly),
            "link_only" => Ok(LinkType::LinkOnly),
            "link_and_dedupe" => Ok(LinkType::LinkAndDedupe),
            "two_dataset_link_only" => Ok(LinkType::TwoDatasetLinkOnly),
            "self_link" => Ok(LinkType::SelfLink),
            other => Err(RsplinkError::UnknownLinkType(other.to_string())),
        }
    }
}
