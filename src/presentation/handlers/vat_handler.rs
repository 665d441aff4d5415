// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Extension, Json, Query};
use std::sync::Arc;
use validator::Validate;

use crate::application::dto::search_request::VatQueryDto;
use crate::application::use_cases::CompanyLookupService;
use crate::domain::models::company::CompanyData;
use crate::presentation::errors::AppError;

/// 通过 VAT 号码查询公司
///
/// `GET /api/vat?vat=IT00743110157`。VIES 出错时仍返回 200，
/// 错误信息位于 `vat.error` 字段。
pub async fn lookup(
    Extension(service): Extension<Arc<CompanyLookupService>>,
    query: Result<Query<VatQueryDto>, QueryRejection>,
) -> Result<Json<CompanyData>, AppError> {
    let Query(params) = query?;
    let params = params.trimmed();
    params.validate()?;

    Ok(Json(service.lookup(&params.vat).await))
}
