//! Product Repository
//!
//! SQLite-backed catalogue access.

use rusqlite::{params, Row};

use crate::domain::{DomainResult, Product};
use super::db::SharedConnection;

const PRODUCT_COLUMNS: &str =
    "id, title, description, category, price, old_price, image_url, badge, rating, in_stock, created_at";

/// SQLite implementation of Product repository
pub struct ProductRepository {
    conn: SharedConnection,
}

impl ProductRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    /// In-stock products, newest first. `None` lists every category.
    pub async fn list_in_stock(&self, category: Option<&str>) -> DomainResult<Vec<Product>> {
        let conn = self.conn.lock().await;
        let products = match category {
            Some(category) => {
                let mut stmt = conn.prepare(&format!(
                    "SELECT {} FROM products WHERE in_stock = 1 AND category = ?1 ORDER BY created_at DESC, id ASC",
                    PRODUCT_COLUMNS
                ))?;
                let rows = stmt.query_map(params![category], row_to_product)?;
                rows.collect::<Result<Vec<_>, _>>()?
            }
            None => {
                let mut stmt = conn.prepare(&format!(
                    "SELECT {} FROM products WHERE in_stock = 1 ORDER BY created_at DESC, id ASC",
                    PRODUCT_COLUMNS
                ))?;
                let rows = stmt.query_map([], row_to_product)?;
                rows.collect::<Result<Vec<_>, _>>()?
            }
        };
        Ok(products)
    }
}

/// Convert a database row to Product
fn row_to_product(row: &Row<'_>) -> rusqlite::Result<Product> {
    Ok(Product {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        category: row.get(3)?,
        price: row.get(4)?,
        old_price: row.get(5)?,
        image_url: row.get(6)?,
        badge: row.get(7)?,
        rating: row.get(8)?,
        in_stock: row.get(9)?,
        created_at: row.get(10)?,
    })
}
