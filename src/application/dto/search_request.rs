// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::ranked::RankedResults;

/// `GET /api/search` 查询参数
///
/// 校验前先调用 `trimmed`，只含空白的查询视为空
#[derive(Debug, Default, Deserialize, Serialize, Validate)]
pub struct SearchQueryDto {
    #[serde(default)]
    #[validate(length(min = 1, message = "Query cannot be empty"))]
    pub query: String,
    #[validate(range(min = 1, max = 200))]
    pub max_results: Option<u32>,
    #[validate(range(min = 1, max = 50))]
    pub top_per_category: Option<usize>,
}

impl SearchQueryDto {
    pub fn trimmed(mut self) -> Self {
        self.query = self.query.trim().to_string();
        self
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponseDto {
    pub results: RankedResults,
    pub total: usize,
}

impl From<RankedResults> for SearchResponseDto {
    fn from(results: RankedResults) -> Self {
        let total = results.total_urls();
        Self { results, total }
    }
}

/// `GET /api/vat` 查询参数
#[derive(Debug, Default, Deserialize, Serialize, Validate)]
pub struct VatQueryDto {
    #[serde(default)]
    #[validate(length(min = 1, message = "VAT number cannot be empty"))]
    pub vat: String,
}

impl VatQueryDto {
    pub fn trimmed(mut self) -> Self {
        self.vat = self.vat.trim().to_string();
        self
    }
}
