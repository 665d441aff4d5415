// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 单个类别的排序结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedCategory {
    pub category: String,
    pub urls: Vec<String>,
}

/// 类别 → 有序 URL 列表
///
/// 类别按首次出现的顺序保存；序列化为 JSON 对象时保持该顺序。
/// 不包含空类别。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankedResults {
    categories: Vec<RankedCategory>,
}

impl RankedResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// 由类别列表构造，丢弃空类别
    pub fn from_categories(categories: Vec<RankedCategory>) -> Self {
        Self {
            categories: categories
                .into_iter()
                .filter(|c| !c.urls.is_empty())
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// 类别数量
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// 所有类别中的 URL 总数
    pub fn total_urls(&self) -> usize {
        self.categories.iter().map(|c| c.urls.len()).sum()
    }

    pub fn get(&self, category: &str) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.urls.as_slice())
    }

    pub fn categories(&self) -> &[RankedCategory] {
        &self.categories
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.categories
            .iter()
            .map(|c| (c.category.as_str(), c.urls.as_slice()))
    }
}

impl Serialize for RankedResults {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for category in &self.categories {
            map.serialize_entry(&category.category, &category.urls)?;
        }
        map.end()
    }
}

struct RankedResultsVisitor;

impl<'de> Visitor<'de> for RankedResultsVisitor {
    type Value = RankedResults;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of category to URL list")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut categories = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((category, urls)) = access.next_entry::<String, Vec<String>>()? {
            categories.push(RankedCategory { category, urls });
        }
        Ok(RankedResults::from_categories(categories))
    }
}

impl<'de> Deserialize<'de> for RankedResults {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RankedResultsVisitor)
    }
}
