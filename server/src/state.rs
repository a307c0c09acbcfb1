use std::sync::Arc;

use crate::config::Config;
use crate::repository::{Db, NotificationRepository, OrderRepository, ProductRepository, UserRepository};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<ProductRepository>,
    pub users: Arc<UserRepository>,
    pub orders: Arc<OrderRepository>,
    pub notifications: Arc<NotificationRepository>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(db: &Db, config: Config) -> Self {
        Self {
            products: Arc::new(ProductRepository::new(db.connection())),
            users: Arc::new(UserRepository::new(db.connection())),
            orders: Arc::new(OrderRepository::new(db.connection())),
            notifications: Arc::new(NotificationRepository::new(db.connection())),
            config: Arc::new(config),
        }
    }
}
