// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::num::NonZeroUsize;
use std::time::Duration;

use lru::LruCache;
use parking_lot::Mutex;
use tracing::debug;

use crate::domain::models::ranked::RankedResults;

/// 缓存键：结果完全由这些参数决定
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchCacheKey {
    pub query: String,
    pub max_results: u32,
    pub timeout: Duration,
    pub top_per_category: usize,
}

impl SearchCacheKey {
    pub fn new(
        query: impl Into<String>,
        max_results: u32,
        timeout: Duration,
        top_per_category: usize,
    ) -> Self {
        Self {
            query: query.into(),
            max_results,
            timeout,
            top_per_category,
        }
    }
}

/// 排序结果缓存
///
/// 有界 LRU，互斥锁只在查找和插入时持有，不跨越网络调用。
/// 只有成功的搜索结果会被写入。
pub struct RankedResultCache {
    entries: Mutex<LruCache<SearchCacheKey, RankedResults>>,
}

impl RankedResultCache {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// 容量为 0 时返回 `None`，表示禁用缓存
    pub fn with_capacity(capacity: usize) -> Option<Self> {
        NonZeroUsize::new(capacity).map(Self::new)
    }

    pub fn get(&self, key: &SearchCacheKey) -> Option<RankedResults> {
        let hit = self.entries.lock().get(key).cloned();
        if hit.is_some() {
            debug!(query = %key.query, "Ranked results served from cache");
        }
        hit
    }

    pub fn insert(&self, key: SearchCacheKey, value: RankedResults) {
        self.entries.lock().put(key, value);
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}
