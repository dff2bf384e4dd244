/*!
 * JWT 认证中间件
 *
 * 校验 `Authorization: Bearer <access_token>`，并把当前用户放入请求扩展。
 *
 * ```rust,ignore
 * web::scope("/api/v1/inquiries")
 *     .wrap(RequireCompany::buyer())
 *     .wrap(RequireJWT)
 * ```
 *
 * 用户按令牌缓存（键 `user:{token}`），未命中时从存储加载；
 * 被禁用的用户即使持有有效令牌也会被拒绝。
 */

use crate::cache::{CacheResult, ObjectCache};
use crate::models::{
    ErrorCode,
    users::entities::{User, UserRole, UserStatus},
};
use crate::storage::Storage;
use crate::utils::jwt::JwtUtils;
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpRequest,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    web,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, sync::Arc};
use tracing::{debug, error, info};

use super::create_error_response;

const BEARER_PREFIX: &str = "Bearer ";

#[derive(Clone)]
pub struct RequireJWT;

fn user_cache_key(token: &str) -> String {
    format!("user:{token}")
}

// 提取并验证 access token，返回当前用户
async fn authenticate(req: &ServiceRequest) -> Result<User, String> {
    let token = req
        .headers()
        .get(actix_web::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix(BEARER_PREFIX))
        .ok_or_else(|| "Missing or invalid Authorization header".to_string())?;

    let claims = JwtUtils::verify_access_token(token).map_err(|err| {
        info!("JWT token validation failed: {}", err);
        "Invalid JWT token".to_string()
    })?;

    let cache = req
        .app_data::<web::Data<Arc<dyn ObjectCache>>>()
        .map(|data| data.get_ref().clone());

    if let Some(cache) = &cache
        && let CacheResult::Found(user) = cache.get_json::<User>(&user_cache_key(token)).await
    {
        return Ok(user);
    }

    let storage = req
        .app_data::<web::Data<Arc<dyn Storage>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| {
            error!("Storage not registered in app data");
            "Authentication unavailable".to_string()
        })?;

    let user_id = claims
        .user_id()
        .ok_or_else(|| "Invalid user ID in JWT".to_string())?;

    let user = storage
        .get_user_by_id(user_id)
        .await
        .map_err(|e| {
            error!("Failed to load user {}: {}", user_id, e);
            "Failed to retrieve user".to_string()
        })?
        .ok_or_else(|| "User not found".to_string())?;

    if user.status != UserStatus::Active {
        return Err("User is not active".to_string());
    }

    if let Some(cache) = cache {
        cache.insert_json(user_cache_key(token), &user, 0).await;
    }

    Ok(user)
}

impl<S, B> Transform<S, ServiceRequest> for RequireJWT
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireJWTMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireJWTMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireJWTMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireJWTMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            // 预检请求直接放行给 CORS 处理
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(srv.call(req).await?.map_into_left_body());
            }

            match authenticate(&req).await {
                Ok(user) => {
                    debug!("JWT authentication successful for ID: {}", user.id);
                    req.extensions_mut().insert(user);
                    Ok(srv.call(req).await?.map_into_left_body())
                }
                Err(err) => {
                    info!(
                        "JWT authentication failed for request to {}: {}",
                        req.path(),
                        err
                    );
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::UNAUTHORIZED,
                            ErrorCode::Unauthorized,
                            &format!("Unauthorized: {err}"),
                        )
                        .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

impl RequireJWT {
    /// 当前用户（需在 RequireJWT 之后调用）
    pub fn extract_user(req: &HttpRequest) -> Option<User> {
        req.extensions().get::<User>().cloned()
    }

    pub fn extract_user_role(req: &HttpRequest) -> Option<UserRole> {
        req.extensions().get::<User>().map(|user| user.role)
    }

    /// 资料变更后移除当前令牌对应的缓存用户
    pub async fn forget_cached_user(req: &HttpRequest) {
        let token = req
            .headers()
            .get(actix_web::http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.strip_prefix(BEARER_PREFIX));
        let cache = req.app_data::<web::Data<Arc<dyn ObjectCache>>>();
        if let (Some(token), Some(cache)) = (token, cache) {
            cache.remove(&user_cache_key(token)).await;
        }
    }
}
