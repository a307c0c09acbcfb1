//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod db;
mod product_repo;
mod user_repo;
mod order_repo;
mod notification_repo;


pub use traits::{Repository, UserScopedRepository};
pub use db::{init_db, Db, SharedConnection};
pub use product_repo::ProductRepository;
pub use user_repo::{SignupBonuses, UserRepository};
pub use order_repo::OrderRepository;
pub use notification_repo::NotificationRepository;
