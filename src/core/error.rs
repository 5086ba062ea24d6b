//! 核心错误处理模块
//!
//! API 错误是各组件向 HTTP 层传递失败的唯一载体：
//! 每个变体携带自己的状态码和响应体，由 `IntoResponse` 统一分类。

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use tracing::{error, warn};

/// API 错误类型
#[derive(Debug)]
pub enum ApiError {
    /// 校验失败，携带全部字段级错误消息（不止第一条）
    Validation(Vec<String>),
    /// 请求体无法解析为 JSON
    MalformedPayload(String),
    /// 记录不存在；内部消息仅用于日志，响应体固定
    NotFound(String),
    /// 未分类错误，不得伪装成成功响应
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => {
                warn!("请求校验失败: {:?}", errors);
                (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
            }
            ApiError::MalformedPayload(detail) => {
                warn!("请求体格式错误: {}", detail);
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": format!("Invalid request body format: {}", detail) })),
                )
                    .into_response()
            }
            ApiError::NotFound(detail) => {
                warn!("{}", detail);
                (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" }))).into_response()
            }
            ApiError::Internal(detail) => {
                error!("未分类错误: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "internal server error" })),
                )
                    .into_response()
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedPayload(rejection.body_text())
    }
}
