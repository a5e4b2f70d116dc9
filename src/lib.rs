//! # 产品信息目录服务
//!
//! 通过 HTTP 对产品信息文档提供增删改查：
//! - `app`：产品信息模型、业务服务和处理器
//! - `core`：统一错误处理和中间件
//! - `infrastructure`：日志、数据库连接和文档存储
//! - `config`：启动配置

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

use axum::{middleware, response::Json, routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::app::product_info::{handler, ProductInfoService};
use crate::core::middleware::request_logging_middleware;
use crate::infrastructure::store::ProductInfoStore;

pub use crate::app::product_info::ProductInfo;
pub use crate::core::error::CoreError;
pub use crate::infrastructure::store::{InMemoryStore, StoreError};

/// 组装完整的 HTTP 应用：存储 → 服务 → 路由
pub fn build_app<S: ProductInfoStore>(store: Arc<S>) -> Router {
    let service = ProductInfoService::new(store);

    Router::new()
        .route("/health", get(health_check))
        .merge(handler::routes(service))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                )
                .layer(middleware::from_fn(request_logging_middleware)),
        )
}

/// 健康检查
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
