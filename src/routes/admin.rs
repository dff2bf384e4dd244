use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::companies::requests::{AdminCompanyListQuery, UpdateCompanyStatusRequest};
use crate::services::AdminService;
use crate::utils::SafeIDI64;

static ADMIN_SERVICE: Lazy<AdminService> = Lazy::new(AdminService::new_lazy);

pub async fn list_companies(
    req: HttpRequest,
    query: web::Query<AdminCompanyListQuery>,
) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.list_companies(query.into_inner(), &req).await
}

pub async fn update_company_status(
    req: HttpRequest,
    id: SafeIDI64,
    update: web::Json<UpdateCompanyStatusRequest>,
) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE
        .update_company_status(id.0, update.into_inner(), &req)
        .await
}

pub fn configure_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/admin")
            .wrap(middlewares::RequireRole::platform_admin())
            .wrap(middlewares::RequireJWT)
            .route("/companies", web::get().to(list_companies))
            .route("/companies/{id}/status", web::put().to(update_company_status)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::common::MultilingualText;
    use crate::models::companies::entities::{CompanyStatus, CompanyType};
    use crate::models::users::entities::{UserRole, UserType};
    use crate::models::users::requests::CreateUserRequest;
    use crate::storage::Storage;
    use crate::storage::sea_orm_storage::test_support::{insert_company, memory_storage};
    use crate::utils::jwt::JwtUtils;
    use actix_web::{App, http::StatusCode, test};
    use std::sync::Arc;

    #[actix_web::test]
    async fn test_admin_approves_pending_company() {
        let storage = memory_storage().await;
        let pending = insert_company(
            &storage,
            MultilingualText::new("新农资"),
            CompanyType::Supplier,
            CompanyStatus::Pending,
        )
        .await;
        let admin = storage
            .create_user(CreateUserRequest {
                email: "admin@argochainhub.com".to_string(),
                password_hash: "not-used".to_string(),
                name: "Admin".to_string(),
                role: UserRole::PlatformAdmin,
                user_type: UserType::IndividualBuyer,
                company_id: None,
                phone: None,
                email_verified: true,
            })
            .await
            .unwrap();
        let token = JwtUtils::generate_access_token(admin.subject()).unwrap();
        let auth = ("Authorization", format!("Bearer {token}"));

        let storage: Arc<dyn Storage> = Arc::new(storage);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage))
                .configure(configure_admin_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/admin/companies?status=pending&type=supplier")
            .insert_header(auth.clone())
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["pagination"]["total"], 1);

        let req = test::TestRequest::put()
            .uri(&format!("/api/v1/admin/companies/{}/status", pending.id))
            .insert_header(auth.clone())
            .set_json(serde_json::json!({"status": "active"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["status"], "active");

        let req = test::TestRequest::put()
            .uri("/api/v1/admin/companies/9999/status")
            .insert_header(auth)
            .set_json(serde_json::json!({"status": "rejected"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
