//! Database Connection and Setup
//!
//! Opens the SQLite database, runs migrations and seeds the catalogue.

use rusqlite::{params, Connection, ErrorCode};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{seed_catalogue, DomainError, DomainResult};

/// Shared connection handed to every repository
pub type SharedConnection = Arc<Mutex<Connection>>;

impl From<rusqlite::Error> for DomainError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation => {
                DomainError::Conflict(err.to_string())
            }
            _ => DomainError::Internal(err.to_string()),
        }
    }
}

/// Database handle
#[derive(Clone)]
pub struct Db {
    conn: SharedConnection,
}

impl Db {
    pub fn connection(&self) -> SharedConnection {
        self.conn.clone()
    }
}

/// Initialize database at path (`:memory:` for an in-memory database)
pub async fn init_db(db_path: &Path) -> DomainResult<Db> {
    let conn = Connection::open(db_path)?;
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;

    run_migrations(&conn)?;
    let seeded = seed_products(&conn)?;
    if seeded > 0 {
        tracing::info!(count = seeded, "seeded product catalogue");
    }

    Ok(Db {
        conn: Arc::new(Mutex::new(conn)),
    })
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> DomainResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS products (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            category TEXT NOT NULL,
            price INTEGER NOT NULL,
            old_price INTEGER,
            image_url TEXT NOT NULL DEFAULT '',
            badge TEXT,
            rating REAL NOT NULL DEFAULT 0,
            in_stock INTEGER NOT NULL DEFAULT 1,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        );

        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            telegram_id INTEGER NOT NULL UNIQUE,
            username TEXT,
            first_name TEXT,
            last_name TEXT,
            photo_url TEXT,
            balance INTEGER NOT NULL DEFAULT 0,
            referral_code TEXT NOT NULL UNIQUE,
            referred_by_id INTEGER REFERENCES users(id),
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        );

        CREATE TABLE IF NOT EXISTS orders (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL REFERENCES users(id),
            total INTEGER NOT NULL,
            status TEXT NOT NULL DEFAULT 'pending',
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        );

        CREATE TABLE IF NOT EXISTS order_items (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            order_id INTEGER NOT NULL REFERENCES orders(id) ON DELETE CASCADE,
            product_id INTEGER NOT NULL REFERENCES products(id),
            title TEXT NOT NULL,
            quantity INTEGER NOT NULL,
            price INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS notifications (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL REFERENCES users(id),
            title TEXT NOT NULL,
            message TEXT NOT NULL,
            type TEXT NOT NULL DEFAULT 'info',
            is_read INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        );

        CREATE INDEX IF NOT EXISTS idx_products_category ON products(category);
        CREATE INDEX IF NOT EXISTS idx_users_referred_by ON users(referred_by_id);
        CREATE INDEX IF NOT EXISTS idx_orders_user ON orders(user_id);
        CREATE INDEX IF NOT EXISTS idx_order_items_order ON order_items(order_id);
        CREATE INDEX IF NOT EXISTS idx_notifications_user ON notifications(user_id);",
    )?;
    Ok(())
}

/// Insert the default catalogue into an empty products table.
/// Returns the number of rows inserted.
fn seed_products(conn: &Connection) -> DomainResult<usize> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM products", [], |row| row.get(0))?;
    if count > 0 {
        return Ok(0);
    }

    let catalogue = seed_catalogue();
    let mut stmt = conn.prepare(
        "INSERT INTO products (title, description, category, price, old_price, image_url, badge, rating, in_stock)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
    )?;
    for p in &catalogue {
        stmt.execute(params![
            p.title,
            p.description,
            p.category,
            p.price,
            p.old_price,
            p.image_url,
            p.badge,
            p.rating,
            p.in_stock
        ])?;
    }
    Ok(catalogue.len())
}
