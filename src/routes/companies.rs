use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::companies::requests::UpdateCompanyRequest;
use crate::services::CompanyService;

static COMPANY_SERVICE: Lazy<CompanyService> = Lazy::new(CompanyService::new_lazy);

pub async fn get_my_company(req: HttpRequest) -> ActixResult<HttpResponse> {
    COMPANY_SERVICE.get_my_company(&req).await
}

pub async fn update_my_company(
    req: HttpRequest,
    update: web::Json<UpdateCompanyRequest>,
) -> ActixResult<HttpResponse> {
    COMPANY_SERVICE
        .update_my_company(update.into_inner(), &req)
        .await
}

pub fn configure_company_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/companies")
            .wrap(middlewares::RequireCompany::any())
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/me")
                    .route(web::get().to(get_my_company))
                    .route(web::put().to(update_my_company)),
            ),
    );
}
