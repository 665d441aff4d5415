// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 分类器（classifier）：将单个 URL 归入某个类别
/// - 排序器（ranker）：排除、去重、分类、打分、分组与截断
/// - VAT 服务（vat_service）：把 VIES 调用结果整理为结构化的 VatInfo
pub mod classifier;
pub mod ranker;
pub mod vat_service;
