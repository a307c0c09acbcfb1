//! Order Repository
//!
//! Checkout and order history. Placing an order charges catalogue prices,
//! never the prices the client sent.

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::domain::{
    order_total, validate_lines, DomainError, DomainResult, NewNotification, Order, OrderDetails,
    OrderItem, OrderLine, OrderStatus,
};
use super::db::SharedConnection;
use super::notification_repo::insert_notification;
use super::traits::UserScopedRepository;

const ORDER_SELECT: &str = "SELECT o.id, o.user_id, o.total, o.status, o.created_at, COUNT(oi.id) AS items_count
     FROM orders o LEFT JOIN order_items oi ON oi.order_id = o.id";

/// Line resolved against the catalogue
struct PricedLine {
    product_id: u32,
    title: String,
    quantity: u32,
    price: i64,
}

/// SQLite implementation of Order repository
pub struct OrderRepository {
    conn: SharedConnection,
}

impl OrderRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    /// Place a completed order paid from the user's balance.
    ///
    /// The order, its items, the debit and the confirmation notification are
    /// committed together; nothing is written when any check fails.
    pub async fn place(&self, user_id: u32, lines: &[OrderLine]) -> DomainResult<Order> {
        validate_lines(lines)?;

        let mut conn = self.conn.lock().await;
        let tx = conn.transaction()?;

        let balance: i64 = tx
            .query_row("SELECT balance FROM users WHERE id = ?1", params![user_id], |row| row.get(0))
            .optional()?
            .ok_or_else(|| DomainError::NotFound("User not found".to_string()))?;

        let priced = price_lines(&tx, lines)?;
        let total = order_total(
            &priced.iter().map(|l| (l.quantity, l.price)).collect::<Vec<_>>(),
        );
        if balance < total {
            return Err(DomainError::InvalidInput("Insufficient balance".to_string()));
        }

        tx.execute(
            "INSERT INTO orders (user_id, total, status) VALUES (?1, ?2, ?3)",
            params![user_id, total, OrderStatus::Completed.as_str()],
        )?;
        let order_id = tx.last_insert_rowid();

        {
            let mut stmt = tx.prepare(
                "INSERT INTO order_items (order_id, product_id, title, quantity, price) VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for line in &priced {
                stmt.execute(params![order_id, line.product_id, line.title, line.quantity, line.price])?;
            }
        }

        tx.execute(
            "UPDATE users SET balance = balance - ?1 WHERE id = ?2",
            params![total, user_id],
        )?;

        let order = tx.query_row(
            &format!("{} WHERE o.id = ?1 GROUP BY o.id", ORDER_SELECT),
            params![order_id],
            row_to_order,
        )?;
        insert_notification(&tx, &NewNotification::order_placed(user_id, order.id, total))?;
        tx.commit()?;

        tracing::info!(user_id, order_id = order.id, total, items = priced.len(), "order placed");
        Ok(order)
    }

    /// Order with its items, only when owned by `user_id`
    pub async fn details_for_user(&self, user_id: u32, order_id: u32) -> DomainResult<Option<OrderDetails>> {
        let conn = self.conn.lock().await;
        let order = conn
            .query_row(
                &format!("{} WHERE o.id = ?1 AND o.user_id = ?2 GROUP BY o.id", ORDER_SELECT),
                params![order_id, user_id],
                row_to_order,
            )
            .optional()?;
        match order {
            Some(order) => {
                let items = select_items(&conn, order.id)?;
                Ok(Some(OrderDetails { order, items }))
            }
            None => Ok(None),
        }
    }
}

#[async_trait]
impl UserScopedRepository<Order> for OrderRepository {
    async fn list_for_user(&self, user_id: u32, limit: Option<u32>) -> DomainResult<Vec<Order>> {
        let conn = self.conn.lock().await;
        let limit = limit.map_or(-1, i64::from);
        let mut stmt = conn.prepare(&format!(
            "{} WHERE o.user_id = ?1 GROUP BY o.id ORDER BY o.created_at DESC, o.id DESC LIMIT ?2",
            ORDER_SELECT
        ))?;
        let rows = stmt.query_map(params![user_id, limit], row_to_order)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }
}

fn price_lines(conn: &Connection, lines: &[OrderLine]) -> DomainResult<Vec<PricedLine>> {
    let mut stmt = conn.prepare("SELECT title, price, in_stock FROM products WHERE id = ?1")?;
    let mut priced = Vec::with_capacity(lines.len());
    for line in lines {
        let product: Option<(String, i64, bool)> = stmt
            .query_row(params![line.product_id], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))
            .optional()?;
        match product {
            Some((title, price, true)) => priced.push(PricedLine {
                product_id: line.product_id,
                title,
                quantity: line.quantity,
                price,
            }),
            Some((title, _, false)) => {
                return Err(DomainError::InvalidInput(format!("{} is out of stock", title)));
            }
            None => {
                return Err(DomainError::InvalidInput(format!(
                    "Product {} not found",
                    line.product_id
                )));
            }
        }
    }
    Ok(priced)
}

fn select_items(conn: &Connection, order_id: u32) -> rusqlite::Result<Vec<OrderItem>> {
    let mut stmt = conn.prepare(
        "SELECT id, order_id, product_id, title, quantity, price FROM order_items WHERE order_id = ?1 ORDER BY id",
    )?;
    let rows = stmt.query_map(params![order_id], |row| {
        Ok(OrderItem {
            id: row.get(0)?,
            order_id: row.get(1)?,
            product_id: row.get(2)?,
            title: row.get(3)?,
            quantity: row.get(4)?,
            price: row.get(5)?,
        })
    })?;
    rows.collect()
}

/// Convert a database row to Order
fn row_to_order(row: &Row<'_>) -> rusqlite::Result<Order> {
    let status: String = row.get(3)?;
    Ok(Order {
        id: row.get(0)?,
        user_id: row.get(1)?,
        total: row.get(2)?,
        status: OrderStatus::from_str(&status),
        created_at: row.get(4)?,
        items_count: row.get(5)?,
    })
}
