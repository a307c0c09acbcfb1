//! Client Configuration
//!
//! Values baked in at build time (`GAMESTORE_*` env vars seen by `trunk build`).

/// Base URL of the REST backend, without trailing slash
pub const API_BASE_URL: &str = match option_env!("GAMESTORE_API_URL") {
    Some(url) => url,
    None => "http://localhost:8080/api",
};

/// Telegram bot id used by the login widget
pub const TELEGRAM_BOT_ID: Option<&str> = option_env!("GAMESTORE_TELEGRAM_BOT_ID");

/// Products shown on the home grid
pub const PRODUCT_GRID_LIMIT: usize = 12;

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u32 = 3500;

/// Query parameter carrying a referral code, e.g. `?ref=AB12CD34`
pub const REFERRAL_QUERY_PARAM: &str = "ref";

/// Catalogue categories: (slug, label, icon)
pub const CATEGORIES: &[(&str, &str, &str)] = &[
    ("all", "Все игры", "▦"),
    ("rpg", "RPG", "⚔"),
    ("action", "Экшен", "⚡"),
    ("sport", "Спорт", "🏆"),
    ("shooter", "Шутеры", "◎"),
];

/// Display label for a category slug
pub fn category_label(slug: &str) -> &str {
    CATEGORIES
        .iter()
        .find(|(s, _, _)| *s == slug)
        .map(|(_, label, _)| *label)
        .unwrap_or(slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_label() {
        assert_eq!(category_label("action"), "Экшен");
        assert_eq!(category_label("racing"), "racing");
    }
}
