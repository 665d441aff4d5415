// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Extension, Json, Query};
use std::sync::Arc;
use validator::Validate;

use crate::application::dto::search_request::{SearchQueryDto, SearchResponseDto};
use crate::application::use_cases::CompanySearchService;
use crate::presentation::errors::AppError;

/// 处理搜索请求
///
/// `GET /api/search?query=&max_results=&top_per_category=`
///
/// # 错误
///
/// 参数缺失或越界时返回 400。搜索引擎失败不是错误，返回空结果。
pub async fn search(
    Extension(service): Extension<Arc<CompanySearchService>>,
    query: Result<Query<SearchQueryDto>, QueryRejection>,
) -> Result<Json<SearchResponseDto>, AppError> {
    let Query(params) = query?;
    let params = params.trimmed();
    params.validate()?;

    let max_results = params
        .max_results
        .unwrap_or_else(|| service.default_max_results());
    let top_per_category = params
        .top_per_category
        .unwrap_or_else(|| service.default_top_per_category());

    let ranked = service
        .search_companies(&params.query, max_results, top_per_category)
        .await;
    Ok(Json(SearchResponseDto::from(ranked)))
}
