use actix_web::{HttpRequest, HttpResponse, error, error::InternalError};

use crate::models::{ApiResponse, ErrorCode};

/// 查询参数类型错误统一返回 400
pub fn query_error_handler(err: error::QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::debug!("Query parsing failed for {}: {}", req.path(), err);
    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::BadRequest,
        format!("Invalid query parameters: {err}"),
    ));
    InternalError::from_response(err, response).into()
}

/// JSON 请求体格式错误统一返回 400
pub fn json_error_handler(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::debug!("JSON parsing failed for {}: {}", req.path(), err);
    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::BadRequest,
        format!("Invalid request body: {err}"),
    ));
    InternalError::from_response(err, response).into()
}
