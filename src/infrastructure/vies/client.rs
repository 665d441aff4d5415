// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::settings::ViesSettings;
use crate::domain::vat::{VatCheckResponse, VatChecker, VatError};

/// VIES REST 接口根地址
pub const DEFAULT_BASE_URL: &str = "https://ec.europa.eu/taxation_customs/vies/rest-api";

/// VIES 用于表示"无数据"的占位符
const NO_DATA: &str = "---";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckVatRequest<'a> {
    country_code: &'a str,
    vat_number: &'a str,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct CheckVatReply {
    country_code: Option<String>,
    vat_number: Option<String>,
    request_date: Option<String>,
    valid: bool,
    name: Option<String>,
    address: Option<String>,
    user_error: Option<String>,
    action_succeed: Option<bool>,
    error_wrappers: Vec<ErrorWrapper>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ErrorWrapper {
    error: Option<String>,
    message: Option<String>,
}

/// VIES 客户端
///
/// 调用欧盟委员会的 `check-vat-number` REST 接口。服务端拒绝
/// （`errorWrappers`、`userError` 如 `MS_UNAVAILABLE`）映射为 `VatError::Fault`，
/// 网络、超时与无法解析的响应映射为 `VatError::Transport`。
pub struct ViesClient {
    client: reqwest::Client,
    base_url: String,
}

impl Default for ViesClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, Duration::from_secs(10))
    }
}

impl ViesClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_settings(settings: &ViesSettings) -> Self {
        Self::new(settings.base_url.clone(), settings.timeout())
    }

    fn endpoint(&self) -> String {
        format!("{}/check-vat-number", self.base_url)
    }
}

#[async_trait]
impl VatChecker for ViesClient {
    async fn check_vat(
        &self,
        country_code: &str,
        vat_number: &str,
    ) -> Result<VatCheckResponse, VatError> {
        let country = country_code.trim().to_uppercase();
        let mut number = vat_number.trim().to_uppercase();
        if !country.is_empty() && number.starts_with(&country) {
            number = number[country.len()..].to_string();
        }

        debug!(country = %country, "Calling VIES check-vat-number");
        let response = self
            .client
            .post(self.endpoint())
            .json(&CheckVatRequest {
                country_code: &country,
                vat_number: &number,
            })
            .send()
            .await
            .map_err(|e| VatError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| VatError::Transport(e.to_string()))?;

        let reply: CheckVatReply = match serde_json::from_str(&body) {
            Ok(reply) => reply,
            Err(_) if !status.is_success() => {
                return Err(VatError::Transport(format!("HTTP error {}", status)));
            }
            Err(e) => {
                return Err(VatError::Transport(format!("invalid VIES response: {}", e)));
            }
        };

        if let Some(fault) = fault_of(&reply) {
            return Err(VatError::Fault(fault));
        }
        if !status.is_success() {
            return Err(VatError::Transport(format!("HTTP error {}", status)));
        }

        Ok(VatCheckResponse {
            country_code: reply.country_code.unwrap_or(country),
            vat_number: reply.vat_number.unwrap_or(number),
            valid: reply.valid,
            name: meaningful(reply.name),
            address: meaningful(reply.address),
            request_date: reply.request_date.as_deref().and_then(parse_request_date),
        })
    }
}

/// 提取服务端拒绝原因
fn fault_of(reply: &CheckVatReply) -> Option<String> {
    if let Some(wrapper) = reply.error_wrappers.first() {
        return Some(
            wrapper
                .error
                .clone()
                .or_else(|| wrapper.message.clone())
                .unwrap_or_else(|| "UNKNOWN_ERROR".to_string()),
        );
    }
    if reply.action_succeed == Some(false) {
        return Some("UNKNOWN_ERROR".to_string());
    }
    match reply.user_error.as_deref() {
        None | Some("") | Some("VALID") | Some("INVALID") => None,
        Some(code) => Some(code.to_string()),
    }
}

fn meaningful(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && v != NO_DATA)
}

fn parse_request_date(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
