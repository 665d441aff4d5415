// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing::{info, warn};

use crate::domain::models::company::VatInfo;
use crate::domain::vat::{parse_vat_input_with_default, VatChecker, VatError};

/// 校验 VAT 号码
///
/// 从不返回错误：服务端拒绝与传输错误都被整理为带 `error` 字段的 `VatInfo`，
/// 调用方通过检查字段区分有效、无效与出错。
pub async fn validate_vat(
    checker: &dyn VatChecker,
    vat_input: &str,
    default_country: &str,
) -> VatInfo {
    let (country_code, vat_number) = parse_vat_input_with_default(vat_input, default_country);

    match checker.check_vat(&country_code, &vat_number).await {
        Ok(response) => {
            info!(
                country = %country_code,
                valid = response.valid,
                "VAT number checked"
            );
            VatInfo {
                country_code: non_empty_or(response.country_code, country_code),
                vat_number: non_empty_or(response.vat_number, vat_number),
                is_valid: response.valid,
                company_name: response.name,
                company_address: response.address,
                request_date: response.request_date,
                error: None,
            }
        }
        Err(VatError::Fault(message)) => {
            warn!(country = %country_code, "VIES rejected the request: {}", message);
            VatInfo::failed(country_code, vat_number, format!("VIES error: {}", message))
        }
        Err(VatError::Transport(message)) => {
            warn!(country = %country_code, "VIES call failed: {}", message);
            VatInfo::failed(country_code, vat_number, format!("Error: {}", message))
        }
    }
}

fn non_empty_or(value: String, fallback: String) -> String {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}
