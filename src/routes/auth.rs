use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::requests::{LoginRequest, RegisterRequest};
use crate::models::users::requests::UpdateProfileRequest;
use crate::services::AuthService;

// 懒加载的全局 AuthService 实例
static AUTH_SERVICE: Lazy<AuthService> = Lazy::new(AuthService::new_lazy);

pub async fn login(
    req: HttpRequest,
    user_data: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.login(user_data.into_inner(), &req).await
}

pub async fn refresh_token(request: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.refresh_token(&request).await
}

pub async fn register(
    req: HttpRequest,
    user_data: web::Json<RegisterRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.register(user_data.into_inner(), &req).await
}

pub async fn get_user(request: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.get_user(&request).await
}

pub async fn update_profile(
    req: HttpRequest,
    update_data: web::Json<UpdateProfileRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE
        .update_profile(update_data.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .route(
                "/login",
                web::post().to(login).wrap(middlewares::RateLimit::login()),
            )
            .route(
                "/register",
                web::post()
                    .to(register)
                    .wrap(middlewares::RateLimit::register()),
            )
            .route(
                "/refresh",
                web::post()
                    .to(refresh_token)
                    .wrap(middlewares::RateLimit::refresh_token()),
            )
            .service(
                web::scope("")
                    .wrap(middlewares::RequireJWT)
                    .route("/me", web::get().to(get_user))
                    .route("/profile", web::put().to(update_profile)),
            ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{Storage, sea_orm_storage::test_support::memory_storage};
    use actix_web::{App, http::StatusCode, test};
    use std::sync::Arc;

    #[actix_web::test]
    async fn test_register_login_and_me() {
        let storage: Arc<dyn Storage> = Arc::new(memory_storage().await);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage.clone()))
                .configure(configure_auth_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(serde_json::json!({
                "email": "Owner@GreenField.com",
                "password": "Agro2025Chain",
                "name": "Li Wei",
                "accountType": "company",
                "company": {"name": {"zh-CN": "绿田农化"}, "companyType": "buyer"}
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["user"]["email"], "owner@greenfield.com");
        assert_eq!(body["data"]["user"]["role"], "owner");
        assert_eq!(body["data"]["company"]["status"], "pending");

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(serde_json::json!({
                "email": "owner@greenfield.com",
                "password": "wrong-password1"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(serde_json::json!({
                "email": "owner@greenfield.com",
                "password": "Agro2025Chain"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.response().cookies().any(|c| c.name() == "refresh_token"));
        let body: serde_json::Value = test::read_body_json(resp).await;
        let token = body["data"]["accessToken"].as_str().unwrap().to_string();

        let req = test::TestRequest::get()
            .uri("/api/v1/auth/me")
            .insert_header(("Authorization", format!("Bearer {token}")))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["company"]["name"]["zh-CN"], "绿田农化");
    }

    #[actix_web::test]
    async fn test_me_requires_token() {
        let storage: Arc<dyn Storage> = Arc::new(memory_storage().await);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage))
                .configure(configure_auth_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/auth/me").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
