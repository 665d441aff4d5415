// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{http::HeaderValue, routing::get, Extension, Json, Router};
use serde_json::{json, Value};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::application::context::AppContext;
use crate::presentation::handlers::{search_handler, vat_handler};

/// 创建应用路由
///
/// # 返回值
///
/// 返回未挂载服务的路由，服务通过 `Extension` 注入
pub fn routes() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/api/search", get(search_handler::search))
        .route("/api/vat", get(vat_handler::lookup))
}

/// 创建完整应用：路由、服务、CORS 与请求追踪
pub fn app(context: &AppContext, cors_origins: &[String]) -> Router {
    routes()
        .layer(Extension(context.search.clone()))
        .layer(Extension(context.lookup.clone()))
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
}

/// 只允许配置中的前端来源，无法解析的来源被忽略
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin.trim()) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// 根路径
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Woosh API is running",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}
