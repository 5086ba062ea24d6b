//! # 产品目录 CRUD API
//!
//! 模块化分层架构：
//! - `app`: 应用层（产品 CRUD 处理器与存储网关）
//! - `core`: 核心层（错误分类、中间件）
//! - `infrastructure`: 基础设施层（日志）
//! - `config`: 应用配置

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

use std::time::Duration;

use axum::{middleware, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use app::product::{
    self,
    handler::{health_check, AppState},
    service::ProductStore,
};
use config::AppConfig;

/// 组装完整应用路由
pub fn build_app(config: &AppConfig) -> Router {
    let state = AppState {
        store: ProductStore::new(config.store.collection.clone()),
    };

    Router::new()
        .merge(product::routes())
        .route("/health", get(health_check))
        .layer(middleware::from_fn(
            core::middleware::request_logging_middleware,
        ))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.http.timeout_seconds,
        )))
        .with_state(state)
}
