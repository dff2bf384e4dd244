use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::products::requests::{CreateProductRequest, ProductLookupQuery};
use crate::services::ProductService;
use crate::utils::SafeIDI64;

static PRODUCT_SERVICE: Lazy<ProductService> = Lazy::new(ProductService::new_lazy);

pub async fn list_products(
    req: HttpRequest,
    query: web::Query<ProductLookupQuery>,
) -> ActixResult<HttpResponse> {
    PRODUCT_SERVICE.list_products(query.into_inner(), &req).await
}

pub async fn get_product(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    PRODUCT_SERVICE.get_product(id.0, &req).await
}

pub async fn create_product(
    req: HttpRequest,
    product: web::Json<CreateProductRequest>,
) -> ActixResult<HttpResponse> {
    PRODUCT_SERVICE
        .create_product(product.into_inner(), &req)
        .await
}

pub fn configure_product_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/products")
            .service(
                web::resource("")
                    .route(web::get().to(list_products))
                    .route(
                        web::post()
                            .to(create_product)
                            // 仅已激活的供应商可发布产品
                            .wrap(middlewares::RequireCompany::supplier())
                            .wrap(middlewares::RequireJWT),
                    ),
            )
            .route("/{id}", web::get().to(get_product)),
    );
}
