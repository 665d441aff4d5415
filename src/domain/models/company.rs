// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ranked::RankedResults;

/// VAT 校验结果
///
/// 调用方通过字段区分三种情况：
/// - 有效：`is_valid == true`
/// - 无效：`is_valid == false` 且 `error` 为空
/// - 出错：`error` 携带可读的错误信息
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VatInfo {
    pub country_code: String,
    pub vat_number: String,
    pub is_valid: bool,
    pub company_name: Option<String>,
    pub company_address: Option<String>,
    pub request_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl VatInfo {
    /// 构造一个出错的结果
    pub fn failed(
        country_code: impl Into<String>,
        vat_number: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            country_code: country_code.into(),
            vat_number: vat_number.into(),
            is_valid: false,
            company_name: None,
            company_address: None,
            request_date: None,
            error: Some(error.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// 用于后续搜索的查询词：有效且返回了名称时使用公司名称
    pub fn search_query(&self) -> Option<&str> {
        if !self.is_valid {
            return None;
        }
        self.company_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// 公司数据：VAT 信息与分类后的 URL
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompanyData {
    pub vat: VatInfo,
    pub urls: RankedResults,
    pub timestamp: DateTime<Utc>,
}

impl CompanyData {
    pub fn new(vat: VatInfo, urls: RankedResults) -> Self {
        Self {
            vat,
            urls,
            timestamp: Utc::now(),
        }
    }
}
