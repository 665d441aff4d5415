// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use tracing::info;

use crate::application::use_cases::company_search::CompanySearchService;
use crate::domain::models::company::CompanyData;
use crate::domain::services::vat_service::validate_vat;
use crate::domain::vat::{VatChecker, DEFAULT_COUNTRY};

/// 通过 VAT 号码查询公司
///
/// 先校验 VAT 号码；号码有效且返回了公司名称时按名称搜索，
/// 否则退回使用原始输入搜索。
pub struct CompanyLookupService {
    checker: Arc<dyn VatChecker>,
    search: Arc<CompanySearchService>,
    default_country: String,
}

impl CompanyLookupService {
    pub fn new(checker: Arc<dyn VatChecker>, search: Arc<CompanySearchService>) -> Self {
        Self {
            checker,
            search,
            default_country: DEFAULT_COUNTRY.to_string(),
        }
    }

    pub fn with_default_country(mut self, country: impl Into<String>) -> Self {
        self.default_country = country.into().to_uppercase();
        self
    }

    pub async fn lookup(&self, vat_input: &str) -> CompanyData {
        let vat = validate_vat(self.checker.as_ref(), vat_input, &self.default_country).await;

        let query = vat
            .search_query()
            .map(str::to_string)
            .unwrap_or_else(|| vat_input.trim().to_string());
        info!(
            valid = vat.is_valid,
            by_name = vat.search_query().is_some(),
            "Searching company URLs"
        );

        let urls = self.search.search(&query).await;
        CompanyData::new(vat, urls)
    }
}
