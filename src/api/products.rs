//! Product Endpoints

use reqwest::StatusCode;
use serde::Deserialize;

use super::{send_json, ApiClient, ApiResult};
use crate::models::Product;

#[derive(Deserialize)]
struct ProductsResponse {
    products: Vec<Product>,
}

/// Query pairs for a category filter; "all" means no filter
pub fn category_query(category: Option<&str>) -> Vec<(&'static str, String)> {
    match category {
        Some(c) if !c.is_empty() && c != "all" => vec![("category", c.to_string())],
        _ => Vec::new(),
    }
}

pub async fn get_products(api: &ApiClient, category: Option<&str>) -> ApiResult<Vec<Product>> {
    let request = api.get("/products").query(&category_query(category));
    let body: ProductsResponse = send_json(request, &[StatusCode::OK]).await?;
    Ok(body.products)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_query() {
        assert!(category_query(None).is_empty());
        assert!(category_query(Some("all")).is_empty());
        assert!(category_query(Some("")).is_empty());
        assert_eq!(category_query(Some("rpg")), vec![("category", "rpg".to_string())]);
    }
}
