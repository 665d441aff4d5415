// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：搜索结果、排序结果与公司数据
/// - 仓库接口（repositories）：结果持久化抽象接口
/// - 规则（rules）：分类规则表与排除列表
/// - 搜索（search）：搜索引擎协作方接口
/// - 服务（services）：分类、排序与 VAT 校验
/// - VAT（vat）：VAT 输入解析与校验协作方接口
///
/// 领域层不依赖于任何外部实现。
pub mod models;
pub mod repositories;
pub mod rules;
pub mod search;
pub mod services;
pub mod vat;
