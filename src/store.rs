//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::cart::{self, OrderLine};
use crate::models::{
    CartItem, Notification, Order, Product, Section, Theme, Toast, ToastKind, User, UserData,
};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Catalogue as last fetched
    pub products: Vec<Product>,
    pub products_loading: bool,
    /// Category slug ("all" = unfiltered)
    pub selected_category: String,
    /// Client-side title filter from the header search box
    pub search_query: String,
    pub cart: Vec<CartItem>,
    /// An order request is in flight
    pub checkout_pending: bool,
    /// Logged-in user (None = guest)
    pub user: Option<User>,
    pub referrals_count: u32,
    /// Order history, newest first
    pub orders: Vec<Order>,
    pub notifications: Vec<Notification>,
    pub theme: Theme,
    pub cart_open: bool,
    pub active_section: Section,
    pub toasts: Vec<Toast>,
    /// Last issued toast id
    pub toast_seq: u32,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            selected_category: "all".to_string(),
            products_loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Cart
// ========================

pub fn store_add_to_cart(store: &AppStore, product: Product) {
    cart::add_product(&mut store.cart().write(), product);
}

pub fn store_remove_from_cart(store: &AppStore, product_id: u32) {
    cart::remove_product(&mut store.cart().write(), product_id);
}

/// Quantity <= 0 removes the line
pub fn store_update_quantity(store: &AppStore, product_id: u32, quantity: i64) {
    cart::set_quantity(&mut store.cart().write(), product_id, quantity);
}

pub fn store_clear_cart(store: &AppStore) {
    store.cart().write().clear();
}

/// Mark a checkout as started. Returns false if one is already in flight.
pub fn store_begin_checkout(store: &AppStore) -> bool {
    if store.checkout_pending().get_untracked() {
        return false;
    }
    store.checkout_pending().set(true);
    true
}

/// End the in-flight checkout. A placed order removes only the submitted
/// lines; anything added meanwhile stays in the cart.
pub fn store_finish_checkout(store: &AppStore, submitted: &[OrderLine], placed: bool) {
    if placed {
        let cart_field = store.cart();
        let mut lines = cart_field.write();
        for line in submitted {
            cart::remove_product(&mut lines, line.product_id);
        }
    }
    store.checkout_pending().set(false);
}

pub fn cart_count(store: &AppStore) -> u32 {
    cart::item_count(&store.cart().read())
}

pub fn cart_total(store: &AppStore) -> i64 {
    cart::total(&store.cart().read())
}

// ========================
// Session
// ========================

/// Replace all user-scoped state from a `GET /user` payload.
///
/// Ignored unless that user is still logged in; returns whether it applied.
pub fn store_apply_user_data(store: &AppStore, data: UserData) -> bool {
    if current_user_id(store) != Some(data.user.id) {
        return false;
    }
    store.user().set(Some(data.user));
    store.referrals_count().set(data.referrals_count);
    store.orders().set(data.orders);
    store.notifications().set(data.notifications);
    true
}

/// Replace the current user; `None` logs out
pub fn store_set_user(store: &AppStore, user: Option<User>) {
    match user {
        Some(user) => store.user().set(Some(user)),
        None => store_logout(store),
    }
}

/// Drop the session; the cart survives
pub fn store_logout(store: &AppStore) {
    store.user().set(None);
    store.referrals_count().set(0);
    store.orders().write().clear();
    store.notifications().write().clear();
}

pub fn current_user_id(store: &AppStore) -> Option<u32> {
    store.user().read_untracked().as_ref().map(|u| u.id)
}

// ========================
// Notifications
// ========================

/// Set the read flag; returns the previous value, None if the id is unknown
pub fn set_notification_read(notifications: &mut [Notification], id: u32, read: bool) -> Option<bool> {
    notifications
        .iter_mut()
        .find(|n| n.id == id)
        .map(|n| std::mem::replace(&mut n.is_read, read))
}

pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.is_read).count()
}

pub fn store_set_notification_read(store: &AppStore, id: u32, read: bool) -> Option<bool> {
    set_notification_read(&mut store.notifications().write(), id, read)
}

// ========================
// Toasts
// ========================

/// Push a toast and return its id
pub fn store_push_toast(store: &AppStore, kind: ToastKind, message: impl Into<String>) -> u32 {
    let id = store.toast_seq().get_untracked() + 1;
    store.toast_seq().set(id);
    store.toasts().write().push(Toast { id, kind, message: message.into() });
    id
}

pub fn store_dismiss_toast(store: &AppStore, id: u32) {
    store.toasts().write().retain(|t| t.id != id);
}

// ========================
// Catalogue
// ========================

/// Store a product listing fetched for `category`.
///
/// Dropped when the user has switched category since the request went out.
pub fn store_set_products(store: &AppStore, category: &str, products: Vec<Product>) -> bool {
    if store.selected_category().get_untracked() != category {
        return false;
    }
    store.products().set(products);
    store.products_loading().set(false);
    true
}

/// Case-insensitive title filter, capped at `limit`
pub fn visible_products(products: &[Product], query: &str, limit: usize) -> Vec<Product> {
    let query = query.trim().to_lowercase();
    products
        .iter()
        .filter(|p| query.is_empty() || p.title.to_lowercase().contains(&query))
        .take(limit)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NotificationKind, OrderStatus};
    use leptos::reactive::owner::Owner;

    fn new_store() -> (Owner, AppStore) {
        let owner = Owner::new();
        owner.set();
        (owner, Store::new(AppState::new()))
    }

    fn make_user(id: u32) -> User {
        User {
            id,
            telegram_id: 1000 + i64::from(id),
            username: Some(format!("player{}", id)),
            first_name: None,
            last_name: None,
            photo_url: None,
            balance: 1000,
            referral_code: "ABCD1234".to_string(),
            referred_by_id: None,
            created_at: "2024-11-05 10:00:00".to_string(),
        }
    }

    fn make_order(id: u32, user_id: u32) -> Order {
        Order {
            id,
            user_id,
            total: 899,
            status: OrderStatus::Completed,
            created_at: "2024-11-05 10:00:00".to_string(),
            items_count: 1,
        }
    }

    fn user_data(user: User) -> UserData {
        UserData {
            referrals_count: 2,
            orders: vec![make_order(1, user.id)],
            notifications: vec![make_notification(1, false)],
            user,
        }
    }

    fn make_notification(id: u32, is_read: bool) -> Notification {
        Notification {
            id,
            user_id: 1,
            title: format!("Notice {}", id),
            message: String::new(),
            kind: NotificationKind::Info,
            is_read,
            created_at: "2024-11-05 10:00:00".to_string(),
        }
    }

    fn make_product(id: u32, title: &str) -> Product {
        Product {
            id,
            title: title.to_string(),
            description: String::new(),
            category: "rpg".to_string(),
            price: 100,
            old_price: None,
            image_url: String::new(),
            badge: None,
            rating: 4.0,
            in_stock: true,
        }
    }

    #[test]
    fn test_set_notification_read_reports_previous() {
        let mut list = vec![make_notification(1, false), make_notification(2, true)];

        assert_eq!(set_notification_read(&mut list, 1, true), Some(false));
        assert!(list[0].is_read);
        assert_eq!(unread_count(&list), 0);

        // rollback path
        assert_eq!(set_notification_read(&mut list, 1, false), Some(true));
        assert_eq!(unread_count(&list), 1);

        assert_eq!(set_notification_read(&mut list, 99, true), None);
    }

    #[test]
    fn test_visible_products_filters_and_limits() {
        let products = vec![
            make_product(1, "Cyberpunk 2077"),
            make_product(2, "GTA V Premium"),
            make_product(3, "The Witcher 3"),
        ];

        let all = visible_products(&products, "", 12);
        assert_eq!(all.len(), 3);

        let capped = visible_products(&products, "  ", 2);
        assert_eq!(capped.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2]);

        let found = visible_products(&products, "WITCHER", 12);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 3);
    }

    #[test]
    fn test_new_state_defaults() {
        let state = AppState::new();
        assert_eq!(state.selected_category, "all");
        assert!(state.products_loading);
        assert!(state.user.is_none());
        assert!(!state.checkout_pending);
        assert_eq!(state.theme, Theme::Dark);
    }

    #[test]
    fn test_logout_keeps_cart() {
        let (_owner, store) = new_store();
        store_set_user(&store, Some(make_user(1)));
        assert!(store_apply_user_data(&store, user_data(make_user(1))));
        store_add_to_cart(&store, make_product(3, "The Witcher 3"));
        store_add_to_cart(&store, make_product(3, "The Witcher 3"));

        store_logout(&store);

        assert!(store.user().get_untracked().is_none());
        assert_eq!(store.referrals_count().get_untracked(), 0);
        assert!(store.orders().read_untracked().is_empty());
        assert!(store.notifications().read_untracked().is_empty());
        assert_eq!(cart::item_count(&store.cart().read_untracked()), 2);
    }

    #[test]
    fn test_apply_user_data_replaces_session() {
        let (_owner, store) = new_store();
        store_set_user(&store, Some(make_user(1)));

        let mut fresh = make_user(1);
        fresh.balance = 101;
        let mut data = user_data(fresh);
        data.orders = vec![make_order(7, 1), make_order(6, 1)];
        assert!(store_apply_user_data(&store, data));

        assert_eq!(store.user().get_untracked().map(|u| u.balance), Some(101));
        assert_eq!(store.referrals_count().get_untracked(), 2);
        assert_eq!(
            store.orders().read_untracked().iter().map(|o| o.id).collect::<Vec<_>>(),
            vec![7, 6]
        );
        assert_eq!(unread_count(&store.notifications().read_untracked()), 1);
    }

    #[test]
    fn test_late_user_data_after_logout_is_ignored() {
        let (_owner, store) = new_store();
        store_set_user(&store, Some(make_user(1)));
        store_logout(&store);

        assert!(!store_apply_user_data(&store, user_data(make_user(1))));
        assert!(store.user().get_untracked().is_none());
        assert_eq!(store.referrals_count().get_untracked(), 0);
        assert!(store.orders().read_untracked().is_empty());
        assert!(store.notifications().read_untracked().is_empty());

        // another account logged in before the response arrived
        store_set_user(&store, Some(make_user(2)));
        assert!(!store_apply_user_data(&store, user_data(make_user(1))));
        assert_eq!(current_user_id(&store), Some(2));
    }

    #[test]
    fn test_toast_ids_monotonic() {
        let (_owner, store) = new_store();
        let first = store_push_toast(&store, ToastKind::Success, "one");
        let second = store_push_toast(&store, ToastKind::Warning, "two");
        let third = store_push_toast(&store, ToastKind::Error, "three");
        assert!(first < second && second < third);

        store_dismiss_toast(&store, second);
        assert_eq!(
            store.toasts().read_untracked().iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![first, third]
        );

        // ids are not reused after a dismissal
        let fourth = store_push_toast(&store, ToastKind::Info, "four");
        assert!(fourth > third);
        store_dismiss_toast(&store, 999);
        assert_eq!(store.toasts().read_untracked().len(), 3);
    }

    #[test]
    fn test_stale_category_response_is_dropped() {
        let (_owner, store) = new_store();
        store.selected_category().set("rpg".to_string());

        assert!(store_set_products(&store, "rpg", vec![make_product(3, "The Witcher 3")]));
        assert!(!store.products_loading().get_untracked());

        store.selected_category().set("sport".to_string());
        store.products_loading().set(true);
        assert!(!store_set_products(&store, "rpg", vec![make_product(1, "Cyberpunk 2077")]));
        assert_eq!(store.products().read_untracked()[0].id, 3);
        assert!(store.products_loading().get_untracked());

        assert!(store_set_products(&store, "sport", Vec::new()));
        assert!(store.products().read_untracked().is_empty());
    }

    #[test]
    fn test_checkout_runs_once_and_keeps_new_lines() {
        let (_owner, store) = new_store();
        store_add_to_cart(&store, make_product(1, "Cyberpunk 2077"));
        let submitted = cart::order_lines(&store.cart().read_untracked());

        assert!(store_begin_checkout(&store));
        assert!(!store_begin_checkout(&store));

        store_add_to_cart(&store, make_product(2, "GTA V Premium"));
        store_finish_checkout(&store, &submitted, true);

        assert!(!store.checkout_pending().get_untracked());
        let ids = store.cart().read_untracked().iter().map(|l| l.product.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![2]);

        assert!(store_begin_checkout(&store));
        store_finish_checkout(&store, &cart::order_lines(&store.cart().read_untracked()), false);
        assert!(!store.checkout_pending().get_untracked());
        assert_eq!(store.cart().read_untracked().len(), 1);
    }
}
