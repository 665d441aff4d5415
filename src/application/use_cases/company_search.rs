// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::domain::models::ranked::RankedResults;
use crate::domain::search::engine::SearchEngine;
use crate::domain::services::ranker::{ResultRanker, DEFAULT_TOP_PER_CATEGORY};
use crate::infrastructure::cache::{RankedResultCache, SearchCacheKey};

/// 默认请求的原始结果数量
pub const DEFAULT_MAX_RESULTS: u32 = 100;

/// 默认搜索超时
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// 公司搜索用例
///
/// 调用搜索引擎获取原始结果，再交给排序器分类、去重和截断。
/// 搜索引擎失败（网络、超时、服务端错误）时返回空映射并记录警告，
/// 不向调用方传播错误。
pub struct CompanySearchService {
    engine: Arc<dyn SearchEngine>,
    ranker: ResultRanker,
    cache: Option<Arc<RankedResultCache>>,
    timeout: Duration,
    default_max_results: u32,
    default_top_per_category: usize,
}

impl CompanySearchService {
    pub fn new(engine: Arc<dyn SearchEngine>, ranker: ResultRanker) -> Self {
        Self {
            engine,
            ranker,
            cache: None,
            timeout: DEFAULT_TIMEOUT,
            default_max_results: DEFAULT_MAX_RESULTS,
            default_top_per_category: DEFAULT_TOP_PER_CATEGORY,
        }
    }

    pub fn with_cache(mut self, cache: Option<Arc<RankedResultCache>>) -> Self {
        self.cache = cache;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_defaults(mut self, max_results: u32, top_per_category: usize) -> Self {
        self.default_max_results = max_results;
        self.default_top_per_category = top_per_category;
        self
    }

    pub fn default_max_results(&self) -> u32 {
        self.default_max_results
    }

    pub fn default_top_per_category(&self) -> usize {
        self.default_top_per_category
    }

    /// 使用默认参数搜索
    pub async fn search(&self, query: &str) -> RankedResults {
        self.search_companies(
            query,
            self.default_max_results,
            self.default_top_per_category,
        )
        .await
    }

    /// 搜索公司并按类别返回排序后的 URL
    pub async fn search_companies(
        &self,
        query: &str,
        max_results: u32,
        top_per_category: usize,
    ) -> RankedResults {
        let key = SearchCacheKey::new(query, max_results, self.timeout, top_per_category);
        if let Some(cached) = self.cache.as_ref().and_then(|cache| cache.get(&key)) {
            return cached;
        }

        let raw = match self.engine.search(query, max_results, self.timeout).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(
                    engine = self.engine.name(),
                    query, "Search failed, returning no results: {}", e
                );
                return RankedResults::new();
            }
        };

        let ranked = self.ranker.rank(query, &raw, top_per_category);
        info!(
            engine = self.engine.name(),
            query,
            raw = raw.len(),
            urls = ranked.total_urls(),
            "Company search completed"
        );

        if let Some(cache) = &self.cache {
            cache.insert(key, ranked.clone());
        }
        ranked
    }
}
