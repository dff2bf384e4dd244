use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::news::requests::{CreateNewsRequest, NewsListQuery, PublishNewsRequest};
use crate::services::NewsService;
use crate::utils::SafeIDI64;

static NEWS_SERVICE: Lazy<NewsService> = Lazy::new(NewsService::new_lazy);

pub async fn list_news(
    req: HttpRequest,
    query: web::Query<NewsListQuery>,
) -> ActixResult<HttpResponse> {
    NEWS_SERVICE.list_news(query.into_inner(), &req).await
}

pub async fn get_news(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    NEWS_SERVICE.get_news(id.0, &req).await
}

pub async fn create_news(
    req: HttpRequest,
    news: web::Json<CreateNewsRequest>,
) -> ActixResult<HttpResponse> {
    NEWS_SERVICE.create_news(news.into_inner(), &req).await
}

pub async fn publish_news(
    req: HttpRequest,
    id: SafeIDI64,
    publish: web::Json<PublishNewsRequest>,
) -> ActixResult<HttpResponse> {
    NEWS_SERVICE
        .set_published(id.0, publish.into_inner(), &req)
        .await
}

pub async fn delete_news(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    NEWS_SERVICE.delete_news(id.0, &req).await
}

pub fn configure_news_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/news")
            .service(
                web::resource("")
                    .route(web::get().to(list_news))
                    .route(
                        web::post()
                            .to(create_news)
                            .wrap(middlewares::RequireRole::platform_admin())
                            .wrap(middlewares::RequireJWT),
                    ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_news))
                    .route(
                        web::delete()
                            .to(delete_news)
                            .wrap(middlewares::RequireRole::platform_admin())
                            .wrap(middlewares::RequireJWT),
                    ),
            )
            .service(
                web::resource("/{id}/publish").route(
                    web::put()
                        .to(publish_news)
                        .wrap(middlewares::RequireRole::platform_admin())
                        .wrap(middlewares::RequireJWT),
                ),
            ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::entities::{UserRole, UserType};
    use crate::models::users::requests::CreateUserRequest;
    use crate::storage::Storage;
    use crate::storage::sea_orm_storage::test_support::memory_storage;
    use crate::utils::jwt::JwtUtils;
    use actix_web::{App, http::StatusCode, test};
    use std::sync::Arc;

    fn user_request(email: &str, role: UserRole) -> CreateUserRequest {
        CreateUserRequest {
            email: email.to_string(),
            password_hash: "not-used".to_string(),
            name: "Editor".to_string(),
            role,
            user_type: UserType::IndividualBuyer,
            company_id: None,
            phone: None,
            email_verified: true,
        }
    }

    #[actix_web::test]
    async fn test_admin_publishes_and_public_reads() {
        let storage = memory_storage().await;
        let admin = storage
            .create_user(user_request("admin@argochainhub.com", UserRole::PlatformAdmin))
            .await
            .unwrap();
        let member = storage
            .create_user(user_request("reader@agro.com", UserRole::Member))
            .await
            .unwrap();
        let admin_token = JwtUtils::generate_access_token(admin.subject()).unwrap();
        let member_token = JwtUtils::generate_access_token(member.subject()).unwrap();

        let storage: Arc<dyn Storage> = Arc::new(storage);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage))
                .configure(configure_news_routes),
        )
        .await;

        let payload = serde_json::json!({
            "title": {"zh-CN": "草甘膦价格上涨", "en": "Glyphosate prices rise"},
            "content": {"zh-CN": "本周草甘膦价格继续上涨"},
            "category": "market",
            "isPublished": true
        });

        let req = test::TestRequest::post()
            .uri("/api/v1/news")
            .insert_header(("Authorization", format!("Bearer {member_token}")))
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let req = test::TestRequest::post()
            .uri("/api/v1/news")
            .insert_header(("Authorization", format!("Bearer {admin_token}")))
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        let id = body["data"]["id"].as_i64().unwrap();

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/news/{id}"))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["viewCount"], 1);

        // 草稿发布后才可公开访问
        let draft = serde_json::json!({
            "title": {"zh-CN": "周报草稿"},
            "content": {"zh-CN": "待审"},
            "category": "market"
        });
        let req = test::TestRequest::post()
            .uri("/api/v1/news")
            .insert_header(("Authorization", format!("Bearer {admin_token}")))
            .set_json(&draft)
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        let draft_id = body["data"]["id"].as_i64().unwrap();

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/news/{draft_id}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::put()
            .uri(&format!("/api/v1/news/{draft_id}/publish"))
            .insert_header(("Authorization", format!("Bearer {member_token}")))
            .set_json(serde_json::json!({"isPublished": true}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let req = test::TestRequest::put()
            .uri(&format!("/api/v1/news/{draft_id}/publish"))
            .insert_header(("Authorization", format!("Bearer {admin_token}")))
            .set_json(serde_json::json!({"isPublished": true}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/news/{draft_id}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::delete()
            .uri(&format!("/api/v1/news/{id}"))
            .insert_header(("Authorization", format!("Bearer {admin_token}")))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/news/{id}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
