use super::entities::Product;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub product: Product,
}
