//! 产品处理器
//!
//! 每个处理器都是一条线性管线：解析 → 校验 → 存储操作 → 响应。
//! 任何一步失败都立即以 `?` 短路，不会在失败后继续构造成功响应。

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
};
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use super::model::{validate_payload, DeleteConfirmation, ListProductsResponse, Product};
use super::service::ProductStore;
use crate::core::error::ApiError;

/// 应用状态：各处理器共享的只读上下文
#[derive(Clone)]
pub struct AppState {
    pub store: ProductStore,
}

/// 创建产品
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let Json(value) = payload?;
    let draft = validate_payload(&value).map_err(ApiError::Validation)?;

    // productID 只由服务端生成，调用方提供的一律忽略
    let product = draft.into_product(Uuid::new_v4().to_string());
    state.store.put(product.clone()).await;

    info!("产品创建成功: {}", product.product_id);
    Ok((StatusCode::CREATED, Json(product)))
}

/// 获取特定产品
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let product = state.store.get(&id).await?;
    Ok(Json(product))
}

/// 整体替换产品
///
/// 先校验再取原记录；原记录不存在时返回 404 且不写入任何数据。
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let Json(value) = payload?;
    let draft = validate_payload(&value).map_err(ApiError::Validation)?;

    let existing = state.store.get(&id).await?;

    // 替换记录只保留原 productID，其余字段全部来自新负载
    let replacement = draft.into_product(existing.product_id);
    state.store.put(replacement.clone()).await;

    info!("产品更新成功: {}", replacement.product_id);
    Ok((StatusCode::CREATED, Json(replacement)))
}

/// 删除产品
///
/// 目标必须存在（否则 404）；删除本身是尽力而为，响应回显被删除的记录。
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteConfirmation>, ApiError> {
    let deleted = state.store.get(&id).await?;
    state.store.delete(&id).await;

    info!("产品删除成功: {}", deleted.product_id);
    Ok(Json(DeleteConfirmation {
        message: format!("product {} deleted", deleted.product_id),
        deleted,
    }))
}

/// 获取所有产品，无过滤、无分页
pub async fn list_products(State(state): State<AppState>) -> Json<ListProductsResponse> {
    let result = state.store.scan().await;
    Json(ListProductsResponse {
        items: result.items,
        count: result.count,
    })
}

/// 健康检查
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let count = state.store.count().await;

    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "store": {
            "type": "in-memory",
            "collection": state.store.collection(),
            "products_count": count
        }
    }))
}
