//! Catalogue listing

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::Product;
use crate::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ProductQuery {
    pub category: Option<String>,
}

impl ProductQuery {
    /// `all` and empty values mean no filter
    fn category_filter(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty() && *c != "all")
    }
}

#[derive(Serialize)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
}

/// GET /api/products
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> AppResult<Json<ProductsResponse>> {
    let products = state.products.list_in_stock(query.category_filter()).await?;
    Ok(Json(ProductsResponse { products }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(category: Option<&str>) -> ProductQuery {
        ProductQuery { category: category.map(str::to_string) }
    }

    #[test]
    fn test_category_filter() {
        assert_eq!(query(None).category_filter(), None);
        assert_eq!(query(Some("all")).category_filter(), None);
        assert_eq!(query(Some("  ")).category_filter(), None);
        assert_eq!(query(Some("rpg")).category_filter(), Some("rpg"));
    }
}
