use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::price_trends::requests::{CreatePriceTrendRequest, PriceTrendQuery};
use crate::services::PriceTrendService;

static PRICE_TREND_SERVICE: Lazy<PriceTrendService> = Lazy::new(PriceTrendService::new_lazy);

pub async fn list_price_trends(
    req: HttpRequest,
    query: web::Query<PriceTrendQuery>,
) -> ActixResult<HttpResponse> {
    PRICE_TREND_SERVICE
        .list_price_trends(query.into_inner(), &req)
        .await
}

pub async fn create_price_trend(
    req: HttpRequest,
    trend: web::Json<CreatePriceTrendRequest>,
) -> ActixResult<HttpResponse> {
    PRICE_TREND_SERVICE
        .create_price_trend(trend.into_inner(), &req)
        .await
}

pub fn configure_price_trend_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/v1/price-trends")
            .route(web::get().to(list_price_trends))
            .route(
                web::post()
                    .to(create_price_trend)
                    .wrap(middlewares::RequireRole::platform_admin())
                    .wrap(middlewares::RequireJWT),
            ),
    );
}
