use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::inquiries::requests::{
    CreateInquiryRequest, GetMessagesQuery, InquiryListQuery, SendMessageRequest,
};
use crate::services::InquiryService;
use crate::utils::SafeIDI64;

static INQUIRY_SERVICE: Lazy<InquiryService> = Lazy::new(InquiryService::new_lazy);

pub async fn create_inquiry(
    req: HttpRequest,
    inquiry: web::Json<CreateInquiryRequest>,
) -> ActixResult<HttpResponse> {
    INQUIRY_SERVICE
        .create_inquiry(inquiry.into_inner(), &req)
        .await
}

pub async fn list_inquiries(
    req: HttpRequest,
    query: web::Query<InquiryListQuery>,
) -> ActixResult<HttpResponse> {
    INQUIRY_SERVICE
        .list_inquiries(query.into_inner(), &req)
        .await
}

pub async fn get_stats(req: HttpRequest) -> ActixResult<HttpResponse> {
    INQUIRY_SERVICE.get_stats(&req).await
}

pub async fn get_inquiry(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    INQUIRY_SERVICE.get_inquiry(id.0, &req).await
}

pub async fn list_messages(
    req: HttpRequest,
    id: SafeIDI64,
    query: web::Query<GetMessagesQuery>,
) -> ActixResult<HttpResponse> {
    INQUIRY_SERVICE
        .list_messages(id.0, query.into_inner(), &req)
        .await
}

pub async fn send_message(
    req: HttpRequest,
    id: SafeIDI64,
    message: web::Json<SendMessageRequest>,
) -> ActixResult<HttpResponse> {
    INQUIRY_SERVICE
        .send_message(id.0, message.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_inquiry_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/inquiries")
            .wrap(middlewares::RequireJWT)
            .service(
                // 买方创建和查看自己的询价
                web::resource("")
                    .wrap(middlewares::RequireCompany::buyer())
                    .route(web::get().to(list_inquiries))
                    .route(web::post().to(create_inquiry)),
            )
            .service(
                web::resource("/stats")
                    .wrap(middlewares::RequireCompany::buyer())
                    .route(web::get().to(get_stats)),
            )
            // 详情和消息对买卖双方开放，参与方校验在服务层
            .service(
                web::resource("/{id}")
                    .wrap(middlewares::RequireCompany::any())
                    .route(web::get().to(get_inquiry)),
            )
            .service(
                web::resource("/{id}/messages")
                    .wrap(middlewares::RequireCompany::any())
                    .route(web::get().to(list_messages))
                    .route(
                        web::post()
                            .to(send_message)
                            .wrap(middlewares::RateLimit::send_message()),
                    ),
            ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::common::MultilingualText;
    use crate::models::companies::entities::{Company, CompanyStatus, CompanyType};
    use crate::models::users::entities::{User, UserRole, UserType};
    use crate::models::users::requests::CreateUserRequest;
    use crate::routes::configure_product_routes;
    use crate::storage::Storage;
    use crate::storage::sea_orm_storage::{
        SeaOrmStorage,
        test_support::{insert_company, memory_storage},
    };
    use crate::utils::jwt::JwtUtils;
    use actix_web::{App, http::StatusCode, test};
    use std::sync::Arc;

    async fn member_of(storage: &SeaOrmStorage, company: &Company, email: &str) -> User {
        storage
            .create_user(CreateUserRequest {
                email: email.to_string(),
                password_hash: "not-used".to_string(),
                name: email.to_string(),
                role: UserRole::Owner,
                user_type: UserType::CompanyMember,
                company_id: Some(company.id),
                phone: None,
                email_verified: true,
            })
            .await
            .unwrap()
    }

    fn bearer(user: &User) -> (&'static str, String) {
        let token = JwtUtils::generate_access_token(user.subject()).unwrap();
        ("Authorization", format!("Bearer {token}"))
    }

    #[actix_web::test]
    async fn test_inquiry_flow_between_buyer_and_supplier() {
        let storage = memory_storage().await;
        let supplier_co = insert_company(
            &storage,
            MultilingualText::new("华农化工"),
            CompanyType::Supplier,
            CompanyStatus::Active,
        )
        .await;
        let buyer_co = insert_company(
            &storage,
            MultilingualText::new("Fazenda Verde"),
            CompanyType::Buyer,
            CompanyStatus::Active,
        )
        .await;
        let other_co = insert_company(
            &storage,
            MultilingualText::new("Otra Compañía"),
            CompanyType::Buyer,
            CompanyStatus::Active,
        )
        .await;
        let supplier = member_of(&storage, &supplier_co, "sales@huanong.cn").await;
        let buyer = member_of(&storage, &buyer_co, "compras@fazenda.br").await;
        let outsider = member_of(&storage, &other_co, "info@otra.es").await;

        let storage: Arc<dyn Storage> = Arc::new(storage);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage))
                .configure(configure_product_routes)
                .configure(configure_inquiry_routes),
        )
        .await;

        // 供应商发布产品
        let req = test::TestRequest::post()
            .uri("/api/v1/products")
            .insert_header(bearer(&supplier))
            .set_json(serde_json::json!({
                "name": {"zh-CN": "草甘膦", "en": "Glyphosate"},
                "category": "herbicide",
                "activeIngredient": "Glyphosate"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        let product_id = body["data"]["product"]["id"].as_i64().unwrap();

        // 买方不能发布产品
        let req = test::TestRequest::post()
            .uri("/api/v1/products")
            .insert_header(bearer(&buyer))
            .set_json(serde_json::json!({"name": {"zh-CN": "x"}, "category": "herbicide"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "INVALID_COMPANY_TYPE");

        // 买方询价，供应商取自产品
        let req = test::TestRequest::post()
            .uri("/api/v1/inquiries")
            .insert_header(bearer(&buyer))
            .set_json(serde_json::json!({
                "productId": product_id,
                "quantity": 20,
                "unit": "ton",
                "tradeTerms": "CIF"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        let inquiry = &body["data"]["inquiry"];
        assert_eq!(inquiry["status"], "pending_quote");
        assert_eq!(inquiry["supplierId"], supplier_co.id);
        assert_eq!(inquiry["details"]["supplierPriority"], "normal");
        let inquiry_id = inquiry["id"].as_i64().unwrap();

        // 供应商回复消息
        let req = test::TestRequest::post()
            .uri(&format!("/api/v1/inquiries/{inquiry_id}/messages"))
            .insert_header(bearer(&supplier))
            .set_json(serde_json::json!({"message": "  USD 3200/ton CIF Santos  "}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/inquiries/{inquiry_id}/messages?desc=false"))
            .insert_header(bearer(&buyer))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["items"][0]["message"], "USD 3200/ton CIF Santos");

        // 无关企业无权查看
        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/inquiries/{inquiry_id}"))
            .insert_header(bearer(&outsider))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "INSUFFICIENT_PERMISSIONS");

        let req = test::TestRequest::get()
            .uri("/api/v1/inquiries/stats")
            .insert_header(bearer(&buyer))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["pendingQuote"], 1);
        assert_eq!(body["data"]["total"], 1);

        // 供应商不能使用买方统计
        let req = test::TestRequest::get()
            .uri("/api/v1/inquiries/stats")
            .insert_header(bearer(&supplier))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_message_validation() {
        let storage = memory_storage().await;
        let buyer_co = insert_company(
            &storage,
            MultilingualText::new("Fazenda Azul"),
            CompanyType::Buyer,
            CompanyStatus::Active,
        )
        .await;
        let buyer = member_of(&storage, &buyer_co, "compras@azul.br").await;

        let storage: Arc<dyn Storage> = Arc::new(storage);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage))
                .configure(configure_inquiry_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/inquiries/1/messages")
            .insert_header(bearer(&buyer))
            .set_json(serde_json::json!({"message": "   "}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::get()
            .uri("/api/v1/inquiries/999")
            .insert_header(bearer(&buyer))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
