//! Frontend Models
//!
//! Data structures matching backend entities, plus client-only view types.

use serde::{Deserialize, Serialize};

/// Product data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub price: i64,
    pub old_price: Option<i64>,
    pub image_url: String,
    pub badge: Option<String>,
    pub rating: f32,
    pub in_stock: bool,
}

impl Product {
    /// Discount against the old price, rounded to whole percent
    pub fn discount_percent(&self) -> Option<u8> {
        let old = self.old_price?;
        if old <= self.price || old <= 0 {
            return None;
        }
        let pct = ((old - self.price) as f64 / old as f64 * 100.0).round();
        Some(pct as u8)
    }
}

/// One cart line
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> i64 {
        self.product.price * i64::from(self.quantity)
    }
}

/// User data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub telegram_id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub photo_url: Option<String>,
    pub balance: i64,
    pub referral_code: String,
    pub referred_by_id: Option<u32>,
    pub created_at: String,
}

impl User {
    /// "First Last", falling back to the username, then to the telegram id
    pub fn display_name(&self) -> String {
        let full = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if !full.is_empty() {
            full
        } else if let Some(username) = self.username.as_deref().filter(|u| !u.is_empty()) {
            username.to_string()
        } else {
            format!("Игрок {}", self.telegram_id)
        }
    }

    pub fn handle(&self) -> Option<String> {
        self.username
            .as_deref()
            .filter(|u| !u.is_empty())
            .map(|u| format!("@{}", u))
    }

    /// Telegram photo or a generated avatar seeded by the telegram id
    pub fn avatar_url(&self) -> String {
        match self.photo_url.as_deref().filter(|p| !p.is_empty()) {
            Some(url) => url.to_string(),
            None => format!(
                "https://api.dicebear.com/7.x/avataaars/svg?seed={}",
                self.telegram_id
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Completed,
    Cancelled,
    #[serde(other)]
    Pending,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Completed => "Выполнен",
            OrderStatus::Pending => "В обработке",
            OrderStatus::Cancelled => "Отменён",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            OrderStatus::Completed => "status-badge completed",
            OrderStatus::Pending => "status-badge pending",
            OrderStatus::Cancelled => "status-badge cancelled",
        }
    }
}

/// Order summary (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u32,
    pub user_id: u32,
    pub total: i64,
    pub status: OrderStatus,
    pub created_at: String,
    #[serde(default)]
    pub items_count: u32,
}

/// Order line as stored on the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: u32,
    pub order_id: u32,
    pub product_id: u32,
    pub title: String,
    pub quantity: u32,
    pub price: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Warning,
    #[serde(other)]
    Info,
}

impl NotificationKind {
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Success => "✔",
            NotificationKind::Warning => "⚠",
            NotificationKind::Info => "ℹ",
        }
    }
}

/// Notification data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u32,
    pub user_id: u32,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub is_read: bool,
    pub created_at: String,
}

/// Payload of `GET /user`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserData {
    pub user: User,
    pub referrals_count: u32,
    pub orders: Vec<Order>,
    pub notifications: Vec<Notification>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn body_class(self) -> &'static str {
        match self {
            Theme::Dark => "theme-dark",
            Theme::Light => "theme-light",
        }
    }
}

/// Sidebar sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Home,
    Catalog,
    Cart,
    Profile,
    Balance,
    Referrals,
    Orders,
    Support,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_user() -> User {
        User {
            id: 1,
            telegram_id: 42,
            username: None,
            first_name: None,
            last_name: None,
            photo_url: None,
            balance: 0,
            referral_code: "ABCD1234".to_string(),
            referred_by_id: None,
            created_at: "2024-11-05 10:00:00".to_string(),
        }
    }

    #[test]
    fn test_display_name_fallbacks() {
        let mut user = make_user();
        assert_eq!(user.display_name(), "Игрок 42");

        user.username = Some("igor".to_string());
        assert_eq!(user.display_name(), "igor");
        assert_eq!(user.handle().as_deref(), Some("@igor"));

        user.first_name = Some("Игорь".to_string());
        user.last_name = Some("Петров".to_string());
        assert_eq!(user.display_name(), "Игорь Петров");
    }

    #[test]
    fn test_avatar_fallback() {
        let mut user = make_user();
        assert!(user.avatar_url().contains("seed=42"));
        user.photo_url = Some("https://t.me/i/userpic/1.jpg".to_string());
        assert_eq!(user.avatar_url(), "https://t.me/i/userpic/1.jpg");
    }

    #[test]
    fn test_discount_percent() {
        let product: Product = serde_json::from_value(serde_json::json!({
            "id": 1,
            "title": "Cyberpunk 2077",
            "description": "",
            "category": "rpg",
            "price": 1999,
            "old_price": 2999,
            "image_url": "",
            "badge": null,
            "rating": 4.8,
            "in_stock": true
        }))
        .unwrap();
        assert_eq!(product.discount_percent(), Some(33));

        let full_price = Product { old_price: None, ..product.clone() };
        assert_eq!(full_price.discount_percent(), None);

        let raised = Product { old_price: Some(1000), ..product };
        assert_eq!(raised.discount_percent(), None);
    }

    #[test]
    fn test_unknown_enum_values_fall_back() {
        let order: Order = serde_json::from_value(serde_json::json!({
            "id": 7,
            "user_id": 1,
            "total": 2499,
            "status": "refunding",
            "created_at": "2024-11-05 10:00:00"
        }))
        .unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.items_count, 0);

        let notification: Notification = serde_json::from_value(serde_json::json!({
            "id": 3,
            "user_id": 1,
            "title": "Новая акция",
            "message": "Скидка 20%",
            "type": "promo",
            "is_read": false,
            "created_at": "2024-11-05 10:00:00"
        }))
        .unwrap();
        assert_eq!(notification.kind, NotificationKind::Info);
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().body_class(), "theme-dark");
    }
}
