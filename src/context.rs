//! Application Context
//!
//! Actions that mutate the store and talk to the backend. Provided via the
//! Leptos Context API next to the store itself.

use gloo_timers::future::TimeoutFuture;
use leptos::logging::{error, log, warn};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiClient, AuthRequest, OrderDetails};
use crate::cart;
use crate::config;
use crate::models::{Product, Section, ToastKind};
use crate::store::{self, AppStore, AppStateStoreFields};
use crate::telegram;

/// App-wide actions provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

impl AppContext {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }

    fn api(&self) -> ApiClient {
        ApiClient::default()
    }

    // ========================
    // Toasts
    // ========================

    /// Show a toast that removes itself after `TOAST_DURATION_MS`
    pub fn toast(&self, kind: ToastKind, message: impl Into<String>) {
        let store = self.store;
        let id = store::store_push_toast(&store, kind, message);
        spawn_local(async move {
            TimeoutFuture::new(config::TOAST_DURATION_MS).await;
            store::store_dismiss_toast(&store, id);
        });
    }

    // ========================
    // Catalogue
    // ========================

    pub fn select_category(&self, slug: &str) {
        if self.store.selected_category().get_untracked() != slug {
            self.store.selected_category().set(slug.to_string());
        }
    }

    pub fn load_products(&self, category: String) {
        let store = self.store;
        let api = self.api();
        store.products_loading().set(true);
        spawn_local(async move {
            let products = match api::get_products(&api, Some(&category)).await {
                Ok(products) => {
                    log!("[STORE] Loaded {} products for '{}'", products.len(), category);
                    products
                }
                Err(e) => {
                    error!("[API] Failed to load products: {}", e);
                    Vec::new()
                }
            };
            if !store::store_set_products(&store, &category, products) {
                log!("[STORE] Dropped stale listing for '{}'", category);
            }
        });
    }

    // ========================
    // Cart
    // ========================

    pub fn add_to_cart(&self, product: Product) {
        let title = product.title.clone();
        store::store_add_to_cart(&self.store, product);
        self.toast(ToastKind::Success, format!("«{}» добавлена в корзину", title));
    }

    pub fn remove_from_cart(&self, product_id: u32) {
        store::store_remove_from_cart(&self.store, product_id);
    }

    pub fn update_quantity(&self, product_id: u32, quantity: i64) {
        store::store_update_quantity(&self.store, product_id, quantity);
    }

    pub fn clear_cart(&self) {
        store::store_clear_cart(&self.store);
    }

    pub fn set_cart_open(&self, open: bool) {
        self.store.cart_open().set(open);
    }

    /// Place an order for the whole cart. Ignored while one is in flight.
    pub fn checkout(&self) {
        let Some(user_id) = store::current_user_id(&self.store) else {
            self.toast(ToastKind::Info, "Войдите через Telegram, чтобы оформить заказ");
            return;
        };
        let lines = cart::order_lines(&self.store.cart().read_untracked());
        if lines.is_empty() || !store::store_begin_checkout(&self.store) {
            return;
        }

        let ctx = *self;
        let api = self.api();
        spawn_local(async move {
            let result = api::create_order(&api, user_id, &lines).await;
            store::store_finish_checkout(&ctx.store, &lines, result.is_ok());
            match result {
                Ok(order) => {
                    log!("[STORE] Order #{} placed, total {}", order.id, order.total);
                    ctx.set_cart_open(false);
                    ctx.toast(ToastKind::Success, format!("Заказ #{} оформлен", order.id));
                    ctx.hydrate_session(user_id);
                }
                Err(e) => {
                    warn!("[API] Order failed: {}", e);
                    ctx.toast(ToastKind::Error, e.to_string());
                }
            }
        });
    }

    // ========================
    // Session
    // ========================

    /// Refresh user, referrals, orders and notifications from the backend
    pub fn hydrate_session(&self, user_id: u32) {
        let store = self.store;
        let api = self.api();
        spawn_local(async move {
            match api::get_user_data(&api, user_id).await {
                Ok(data) => {
                    log!(
                        "[STORE] Hydrated user {}: {} orders, {} notifications",
                        user_id,
                        data.orders.len(),
                        data.notifications.len()
                    );
                    if !store::store_apply_user_data(&store, data) {
                        log!("[STORE] Session for user {} ended, dropping its data", user_id);
                    }
                }
                Err(e) => error!("[API] Failed to load user {}: {}", user_id, e),
            }
        });
    }

    /// Register or log in with Telegram profile data, then hydrate
    pub fn login(&self, request: AuthRequest) {
        let ctx = *self;
        let api = self.api();
        spawn_local(async move {
            match api::authenticate(&api, &request).await {
                Ok(user) => {
                    log!("[AUTH] Logged in as user {}", user.id);
                    let user_id = user.id;
                    let name = user.display_name();
                    store::store_set_user(&ctx.store, Some(user));
                    ctx.toast(ToastKind::Success, format!("Добро пожаловать, {}!", name));
                    ctx.hydrate_session(user_id);
                }
                Err(e) => {
                    error!("[AUTH] Login failed: {}", e);
                    ctx.toast(ToastKind::Error, format!("Не удалось войти: {}", e));
                }
            }
        });
    }

    /// Ask Telegram for the user's profile and log in with it
    pub fn login_with_telegram(&self) {
        let ctx = *self;
        let result = telegram::request_login(move |outcome| match outcome {
            Some(request) => ctx.login(request),
            None => log!("[AUTH] Telegram login cancelled"),
        });
        if let Err(e) = result {
            warn!("[AUTH] {}", e);
            self.toast(ToastKind::Error, "Вход через Telegram недоступен");
        }
    }

    pub fn logout(&self) {
        store::store_set_user(&self.store, None);
        self.store.active_section().set(Section::Home);
    }

    // ========================
    // Notifications
    // ========================

    /// Optimistically mark read; roll back if the backend refuses
    pub fn mark_notification_read(&self, id: u32) {
        let Some(user_id) = store::current_user_id(&self.store) else {
            return;
        };
        match store::store_set_notification_read(&self.store, id, true) {
            Some(false) => {}
            // Unknown or already read
            _ => return,
        }

        let ctx = *self;
        let api = self.api();
        spawn_local(async move {
            if let Err(e) = api::mark_notification_read(&api, user_id, id).await {
                warn!("[API] Failed to mark notification {} read: {}", id, e);
                store::store_set_notification_read(&ctx.store, id, false);
                ctx.toast(ToastKind::Warning, "Не удалось обновить уведомление");
            }
        });
    }

    // ========================
    // Orders
    // ========================

    /// Fetch one order's lines for the profile's detail view
    pub async fn order_details(&self, order_id: u32) -> Option<OrderDetails> {
        let user_id = store::current_user_id(&self.store)?;
        match api::get_order(&self.api(), user_id, order_id).await {
            Ok(details) => Some(details),
            Err(e) => {
                warn!("[API] Failed to load order #{}: {}", order_id, e);
                None
            }
        }
    }

    // ========================
    // UI
    // ========================

    pub fn toggle_theme(&self) {
        self.store.theme().update(|t| *t = t.toggled());
    }

    pub fn navigate(&self, section: Section) {
        self.store.active_section().set(section);
        if section == Section::Cart {
            self.set_cart_open(true);
        }
    }
}
