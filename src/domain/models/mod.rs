// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// - 搜索结果（search_result）：搜索引擎返回的原始条目
/// - 排序结果（ranked）：按类别分组并排序后的 URL 列表
/// - 公司数据（company）：VAT 信息与分类 URL 的组合
pub mod company;
pub mod ranked;
pub mod search_result;
