// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 用例模块
///
/// - 公司搜索（company_search）：搜索并分类公司相关 URL
/// - 公司查询（company_lookup）：VAT 校验后按公司名称搜索
pub mod company_lookup;
pub mod company_search;

pub use company_lookup::CompanyLookupService;
pub use company_search::CompanySearchService;
