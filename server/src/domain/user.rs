//! User Entity
//!
//! A storefront account keyed by Telegram id, with a ruble balance and a
//! referral code other users can sign up with.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// Length of generated referral codes
pub const REFERRAL_CODE_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub telegram_id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub photo_url: Option<String>,
    /// Balance in whole rubles
    pub balance: i64,
    pub referral_code: String,
    /// User whose code was used at sign-up
    pub referred_by_id: Option<u32>,
    pub created_at: String,
}

impl Entity for User {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Profile fields supplied by Telegram at login
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TelegramProfile {
    pub telegram_id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub photo_url: Option<String>,
}

/// Result of a login: the user and whether it was just created
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub user: User,
    pub created: bool,
}

/// 8 uppercase hex chars derived from the telegram id and fresh randomness
pub fn generate_referral_code(telegram_id: i64) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&telegram_id.to_le_bytes());
    hasher.update(uuid::Uuid::new_v4().as_bytes());
    let hex = hasher.finalize().to_hex();
    hex[..REFERRAL_CODE_LEN].to_ascii_uppercase()
}

/// Referral codes are compared case-insensitively
pub fn normalize_referral_code(raw: &str) -> Option<String> {
    let code = raw.trim();
    if code.is_empty() {
        None
    } else {
        Some(code.to_ascii_uppercase())
    }
}
