// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// VAT 校验错误
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VatError {
    /// 服务端拒绝：格式错误、成员国服务不可用等
    #[error("VIES fault: {0}")]
    Fault(String),
    /// 传输层错误：网络失败、超时、无法解析的响应
    #[error("Transport error: {0}")]
    Transport(String),
}

/// `checkVat` 调用的原始返回
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VatCheckResponse {
    pub country_code: String,
    pub vat_number: String,
    pub valid: bool,
    pub name: Option<String>,
    pub address: Option<String>,
    pub request_date: Option<DateTime<Utc>>,
}

/// VAT 校验服务协作方
///
/// 显式构造并注入，测试中可替换为假实现
#[async_trait]
pub trait VatChecker: Send + Sync {
    async fn check_vat(
        &self,
        country_code: &str,
        vat_number: &str,
    ) -> Result<VatCheckResponse, VatError>;
}
