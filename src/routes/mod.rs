pub mod admin;
pub mod auth;
pub mod companies;
pub mod inquiries;
pub mod news;
pub mod price_trends;
pub mod products;
pub mod suppliers;

pub use admin::configure_admin_routes;
pub use auth::configure_auth_routes;
pub use companies::configure_company_routes;
pub use inquiries::configure_inquiry_routes;
pub use news::configure_news_routes;
pub use price_trends::configure_price_trend_routes;
pub use products::configure_product_routes;
pub use suppliers::configure_supplier_routes;

use actix_web::web;

/// 注册全部 API 路由
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_auth_routes)
        .configure(configure_supplier_routes)
        .configure(configure_product_routes)
        .configure(configure_company_routes)
        .configure(configure_inquiry_routes)
        .configure(configure_news_routes)
        .configure(configure_price_trend_routes)
        .configure(configure_admin_routes);
}
