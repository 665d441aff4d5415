// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

pub use crate::domain::rules::table::DEFAULT_CATEGORY;
use crate::domain::rules::RuleTable;
use crate::utils::url_utils::network_location;

/// 对单个 URL 进行分类
///
/// 匹配的是未经归一化的网络位置。解析失败、主机为空或没有规则命中时返回 `altro`，
/// 从不报错。
pub fn classify<'a>(rules: &'a RuleTable, url: &str) -> &'a str {
    match network_location(url) {
        Some(host) => rules.classify_domain(&host),
        None => DEFAULT_CATEGORY,
    }
}

/// 持有共享规则表的 URL 分类器
#[derive(Debug, Clone)]
pub struct UrlClassifier {
    rules: Arc<RuleTable>,
}

impl UrlClassifier {
    pub fn new(rules: Arc<RuleTable>) -> Self {
        Self { rules }
    }

    pub fn classify(&self, url: &str) -> &str {
        classify(&self.rules, url)
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }
}
