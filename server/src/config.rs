//! Server configuration loaded from the environment.

use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use tracing::{info, warn};

use crate::repository::SignupBonuses;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub database_path: PathBuf,
    /// Starting balance of a new user
    pub signup_bonus: i64,
    /// Credited to a referrer per sign-up
    pub referral_bonus: i64,
    /// Notifications returned by `GET /user`
    pub notifications_limit: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            database_path: PathBuf::from("gamestore.db"),
            signup_bonus: 1000,
            referral_bonus: 100,
            notifications_limit: 20,
        }
    }
}

impl Config {
    /// Read `.env` if present, then the process environment
    pub fn load() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            info!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            port: try_load(&lookup, "PORT", defaults.port),
            database_path: lookup("DATABASE_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.database_path),
            signup_bonus: try_load(&lookup, "SIGNUP_BONUS", defaults.signup_bonus),
            referral_bonus: try_load(&lookup, "REFERRAL_BONUS", defaults.referral_bonus),
            notifications_limit: try_load(&lookup, "NOTIFICATIONS_LIMIT", defaults.notifications_limit),
        }
    }

    pub fn bonuses(&self) -> SignupBonuses {
        SignupBonuses {
            signup: self.signup_bonus,
            referral: self.referral_bonus,
        }
    }
}

fn try_load<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        None => {
            info!("{key} not set, using default: {default}");
            default
        }
        Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
            default
        }),
    }
}
