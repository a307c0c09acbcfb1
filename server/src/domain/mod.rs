//! Domain Layer
//!
//! Contains all domain entities and core abstractions.

mod entity;
mod product;
mod user;
mod order;
mod notification;

pub use entity::{Entity, DomainError, DomainResult};
pub use product::{Product, seed_catalogue};
pub use user::{User, TelegramProfile, Registration, generate_referral_code, normalize_referral_code};
pub use order::{Order, OrderItem, OrderStatus, OrderLine, OrderDetails, validate_lines, order_total};
pub use notification::{Notification, NotificationKind, NewNotification};
