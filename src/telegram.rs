//! Telegram Login Bridge
//!
//! Reads the user from a Telegram WebApp launch, or falls back to the
//! login widget's `Telegram.Login.auth` popup.

use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::api::AuthRequest;
use crate::config;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "Telegram", "Login"], js_name = auth, catch)]
    fn telegram_login_auth(options: &JsValue, callback: &js_sys::Function) -> Result<(), JsValue>;

    #[wasm_bindgen(js_namespace = ["navigator", "clipboard"], js_name = writeText, catch)]
    async fn clipboard_write_text(text: &str) -> Result<JsValue, JsValue>;
}

/// User object as delivered by the widget or `initDataUnsafe.user`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TelegramUser {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub photo_url: Option<String>,
}

impl TelegramUser {
    pub fn into_auth_request(self, referral_code: Option<String>) -> AuthRequest {
        AuthRequest {
            telegram_id: self.id,
            username: self.username,
            first_name: self.first_name,
            last_name: self.last_name,
            photo_url: self.photo_url,
            referral_code,
        }
    }
}

/// Normalize a referral code taken from the URL
pub fn normalize_referral_code(raw: &str) -> Option<String> {
    let code = raw.trim();
    if code.is_empty() || code.len() > 32 || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(code.to_ascii_uppercase())
}

/// `?ref=CODE` from the current page URL
pub fn referral_code_from_url() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params
        .get(config::REFERRAL_QUERY_PARAM)
        .and_then(|raw| normalize_referral_code(&raw))
}

fn lookup(root: &JsValue, path: &[&str]) -> Option<JsValue> {
    let mut current = root.clone();
    for key in path {
        current = js_sys::Reflect::get(&current, &JsValue::from_str(key)).ok()?;
        if current.is_undefined() || current.is_null() {
            return None;
        }
    }
    Some(current)
}

/// User passed in by a Telegram WebApp launch, if any
fn webapp_user() -> Option<TelegramUser> {
    let window = web_sys::window()?;
    let user = lookup(&window, &["Telegram", "WebApp", "initDataUnsafe", "user"])?;
    serde_wasm_bindgen::from_value(user).ok()
}

/// Start a login. `on_done` receives `None` when the user cancels.
///
/// Errors only when no Telegram script is loaded on the page.
pub fn request_login<F>(on_done: F) -> Result<(), String>
where
    F: FnOnce(Option<AuthRequest>) + 'static,
{
    let referral = referral_code_from_url();

    if let Some(user) = webapp_user() {
        on_done(Some(user.into_auth_request(referral)));
        return Ok(());
    }

    let bot_id = config::TELEGRAM_BOT_ID.ok_or("GAMESTORE_TELEGRAM_BOT_ID is not configured")?;
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &"bot_id".into(), &bot_id.into())
        .map_err(|e| format!("Failed to build login options: {:?}", e))?;
    js_sys::Reflect::set(&options, &"request_access".into(), &"write".into())
        .map_err(|e| format!("Failed to build login options: {:?}", e))?;

    // The widget passes `false` on cancel
    let callback = Closure::once_into_js(move |data: JsValue| {
        let user = if data.is_object() {
            serde_wasm_bindgen::from_value::<TelegramUser>(data).ok()
        } else {
            None
        };
        on_done(user.map(|u| u.into_auth_request(referral)));
    });

    telegram_login_auth(&options, callback.unchecked_ref())
        .map_err(|e| format!("Telegram login widget is not loaded: {:?}", e))
}

/// Copy text to the system clipboard
pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    clipboard_write_text(text)
        .await
        .map(|_| ())
        .map_err(|e| format!("Clipboard write failed: {:?}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_referral_code() {
        assert_eq!(normalize_referral_code(" ab12cd34 "), Some("AB12CD34".to_string()));
        assert_eq!(normalize_referral_code(""), None);
        assert_eq!(normalize_referral_code("bad code"), None);
        assert_eq!(normalize_referral_code("<script>"), None);
    }

    #[test]
    fn test_widget_payload_maps_to_auth_request() {
        let user: TelegramUser = serde_json::from_value(serde_json::json!({
            "id": 5551234,
            "first_name": "Игорь",
            "username": "igorpetrov",
            "auth_date": 1730800000,
            "hash": "abc"
        }))
        .unwrap();

        let request = user.into_auth_request(Some("IGOR2024".to_string()));
        assert_eq!(request.telegram_id, 5551234);
        assert_eq!(request.first_name.as_deref(), Some("Игорь"));
        assert_eq!(request.last_name, None);
        assert_eq!(request.referral_code.as_deref(), Some("IGOR2024"));
    }
}
