/*!
 * 角色校验中间件，需放在 `RequireJWT` 之后（即先 `.wrap(RequireRole)` 再 `.wrap(RequireJWT)`）。
 *
 * ```rust,ignore
 * web::scope("/api/v1/admin")
 *     .wrap(RequireRole::platform_admin())
 *     .wrap(RequireJWT)
 * ```
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::info;

use crate::{
    middlewares::RequireJWT,
    models::{ErrorCode, users::entities::UserRole},
};

use super::create_error_response;

#[derive(Clone)]
pub struct RequireRole {
    allowed_roles: Vec<UserRole>,
}

impl RequireRole {
    /// 任一角色即可
    pub fn any_of(roles: &[&UserRole]) -> Self {
        Self {
            allowed_roles: roles.iter().map(|r| **r).collect(),
        }
    }

    pub fn platform_admin() -> Self {
        Self::any_of(UserRole::admin_roles())
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireRole
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireRoleMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireRoleMiddleware {
            service: Rc::new(service),
            allowed_roles: self.allowed_roles.clone(),
        }))
    }
}

pub struct RequireRoleMiddleware<S> {
    service: Rc<S>,
    allowed_roles: Vec<UserRole>,
}

impl<S, B> Service<ServiceRequest> for RequireRoleMiddleware<S>
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
        let allowed_roles = self.allowed_roles.clone();

        Box::pin(async move {
            let Some(role) = RequireJWT::extract_user_role(req.request()) else {
                info!("Role check failed: no authenticated user, is RequireJWT applied?");
                return Ok(req.into_response(
                    create_error_response(
                        StatusCode::UNAUTHORIZED,
                        ErrorCode::Unauthorized,
                        "Authentication required",
                    )
                    .map_into_right_body(),
                ));
            };

            if allowed_roles.contains(&role) {
                return Ok(srv.call(req).await?.map_into_left_body());
            }

            info!(
                "Access denied for role {:?} on {}. Allowed: {:?}",
                role,
                req.path(),
                allowed_roles
            );
            Ok(req.into_response(
                create_error_response(StatusCode::FORBIDDEN, ErrorCode::Forbidden, "Access denied.")
                    .map_into_right_body(),
            ))
        })
    }
}
