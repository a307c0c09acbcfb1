//! Notification Entity

use serde::{Deserialize, Serialize};
use super::entity::Entity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Warning,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Warning => "warning",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "success" => NotificationKind::Success,
            "warning" => NotificationKind::Warning,
            _ => NotificationKind::Info,
        }
    }
}

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

impl Entity for Notification {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Notification about to be inserted
#[derive(Debug, Clone, PartialEq)]
pub struct NewNotification {
    pub user_id: u32,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
}

impl NewNotification {
    pub fn order_placed(user_id: u32, order_id: u32, total: i64) -> Self {
        Self {
            user_id,
            title: "Заказ оформлен".to_string(),
            message: format!("Ваш заказ #{} успешно оформлен на сумму {}₽", order_id, total),
            kind: NotificationKind::Success,
        }
    }

    pub fn referral_joined(referrer_id: u32, bonus: i64) -> Self {
        Self {
            user_id: referrer_id,
            title: "Новый реферал!".to_string(),
            message: format!(
                "По вашей ссылке зарегистрировался новый пользователь. +{}₽",
                bonus
            ),
            kind: NotificationKind::Success,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serializes_as_type_field() {
        let n = Notification {
            id: 1,
            user_id: 2,
            title: "t".into(),
            message: "m".into(),
            kind: NotificationKind::Warning,
            is_read: false,
            created_at: "2024-01-01 00:00:00".into(),
        };
        let json = serde_json::to_value(&n).unwrap();
        assert_eq!(json["type"], "warning");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn test_order_placed_message() {
        let n = NewNotification::order_placed(7, 42, 3498);
        assert_eq!(n.user_id, 7);
        assert_eq!(n.title, "Заказ оформлен");
        assert_eq!(n.message, "Ваш заказ #42 успешно оформлен на сумму 3498₽");
    }

    #[test]
    fn test_unknown_kind_falls_back_to_info() {
        assert_eq!(NotificationKind::from_str("promo"), NotificationKind::Info);
    }
}
