// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::domain::models::ranked::{RankedCategory, RankedResults};
use crate::domain::models::search_result::SearchResult;
use crate::domain::rules::RuleTable;
use crate::utils::domain::base_domain;
use crate::utils::url_utils::network_location;

/// 每个类别默认保留的 URL 数量
pub const DEFAULT_TOP_PER_CATEGORY: usize = 5;

/// 搜索结果排序器
///
/// 处理顺序（逐条）：
/// 1. 跳过空 URL
/// 2. 解析网络位置，解析出错则跳过该条并继续；没有主机部分时网络位置为空串，照常参与后续步骤
/// 3. 排除列表命中则跳过（不占用去重名额）
/// 4. 按基础域名去重，先出现者保留
/// 5. 对原始主机名分类
/// 6. 在所属类别中取第一条命中规则的优先级，未命中为 0
/// 7. 按出现顺序追加到类别
///
/// 最后每个类别按优先级稳定降序排序并截断到 `top_per_category`。
#[derive(Debug, Clone)]
pub struct ResultRanker {
    rules: Arc<RuleTable>,
}

impl ResultRanker {
    pub fn new(rules: Arc<RuleTable>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// 对原始搜索结果进行排除、去重、分类、打分、分组与截断
    pub fn rank(
        &self,
        query: &str,
        results: &[SearchResult],
        top_per_category: usize,
    ) -> RankedResults {
        let mut seen: HashSet<String> = HashSet::new();
        let mut buckets: Vec<(&str, Vec<(&str, i32)>)> = Vec::new();
        let mut skipped = 0usize;

        for result in results {
            let url = result.url.as_str();
            if url.trim().is_empty() {
                skipped += 1;
                continue;
            }

            let Some(host) = network_location(url) else {
                debug!(url, "Skipping unparsable URL");
                skipped += 1;
                continue;
            };

            if self.rules.is_excluded(&host) {
                debug!(url, host = %host, "Skipping excluded domain");
                skipped += 1;
                continue;
            }

            if !seen.insert(base_domain(&host).to_string()) {
                debug!(url, host = %host, "Skipping duplicate base domain");
                skipped += 1;
                continue;
            }

            let category = self.rules.classify_domain(&host);
            let priority = self.rules.priority_for(category, &host);

            match buckets.iter_mut().find(|(name, _)| *name == category) {
                Some((_, entries)) => entries.push((url, priority)),
                None => buckets.push((category, vec![(url, priority)])),
            }
        }

        let categories = buckets
            .into_iter()
            .map(|(category, mut entries)| {
                // sort_by is stable: equal priorities keep their input order
                entries.sort_by(|a, b| b.1.cmp(&a.1));
                entries.truncate(top_per_category);
                RankedCategory {
                    category: category.to_string(),
                    urls: entries.into_iter().map(|(url, _)| url.to_string()).collect(),
                }
            })
            .collect();

        let ranked = RankedResults::from_categories(categories);
        debug!(
            query,
            input = results.len(),
            skipped,
            categories = ranked.len(),
            urls = ranked.total_urls(),
            "Ranked search results"
        );
        ranked
    }
}
