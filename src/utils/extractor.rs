//! 路径参数提取器
//!
//! 非法 ID 直接返回 400，不进入业务处理。

use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

fn parse_positive_id(req: &HttpRequest, name: &str) -> Result<i64, actix_web::Error> {
    let raw = req.match_info().get(name).unwrap_or_default();
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => {
            let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                format!("Invalid path parameter '{name}': {raw}"),
            ));
            Err(InternalError::from_response(format!("invalid {name}"), response).into())
        }
    }
}

/// 路径中的 `{id}`，必须为正整数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafeIDI64(pub i64);

impl FromRequest for SafeIDI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_positive_id(req, "id").map(SafeIDI64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_valid_id() {
        let req = TestRequest::default().param("id", "42").to_http_request();
        let id = SafeIDI64::extract(&req).await.unwrap();
        assert_eq!(id, SafeIDI64(42));
    }

    #[actix_web::test]
    async fn test_rejects_zero_and_garbage() {
        for raw in ["0", "-3", "abc", ""] {
            let req = TestRequest::default().param("id", raw).to_http_request();
            let err = SafeIDI64::extract(&req).await.unwrap_err();
            assert_eq!(
                err.as_response_error().status_code(),
                actix_web::http::StatusCode::BAD_REQUEST
            );
        }
    }
}
