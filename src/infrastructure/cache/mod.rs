// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 缓存模块
///
/// 提供进程内的排序结果缓存
pub mod result_cache;

pub use result_cache::{RankedResultCache, SearchCacheKey};
