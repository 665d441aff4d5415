// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 搜索服务模块
///
/// 提供搜索引擎的集成实现，目前为 DuckDuckGo HTML 端点
pub mod duckduckgo;

pub use duckduckgo::DuckDuckGoSearchEngine;
