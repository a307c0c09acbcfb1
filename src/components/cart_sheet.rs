//! Cart Sheet Component
//!
//! Right-hand drawer listing cart lines with quantity controls and checkout.

use leptos::prelude::*;

use crate::components::ConfirmButton;
use crate::config::category_label;
use crate::context::use_app_context;
use crate::format::format_price;
use crate::models::CartItem;
use crate::store::{self, use_app_store, AppStateStoreFields};

#[component]
fn CartLine(line: CartItem) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let id = line.product.id;

    // Quantity is read live so +/- do not rebuild the row
    let quantity = move || {
        store
            .cart()
            .read()
            .iter()
            .find(|l| l.product.id == id)
            .map(|l| l.quantity)
            .unwrap_or(0)
    };
    let price = line.product.price;

    view! {
        <div class="cart-line fade-in">
            <img src=line.product.image_url.clone() alt=line.product.title.clone() />
            <div class="cart-line-body">
                <h4>{line.product.title.clone()}</h4>
                <p class="muted">{category_label(&line.product.category).to_string()}</p>
                <div class="cart-line-footer">
                    <span class="price">{move || format_price(price * i64::from(quantity()))}</span>
                    <div class="qty-controls">
                        <button
                            class="icon-btn small"
                            on:click=move |_| ctx.update_quantity(id, i64::from(quantity()) - 1)
                        >
                            "−"
                        </button>
                        <span class="qty">{quantity}</span>
                        <button
                            class="icon-btn small"
                            on:click=move |_| ctx.update_quantity(id, i64::from(quantity()) + 1)
                        >
                            "+"
                        </button>
                        <button class="icon-btn small danger" on:click=move |_| ctx.remove_from_cart(id)>
                            "🗑"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn CartSheet() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let count = move || store::cart_count(&store);
    let total = move || store::cart_total(&store);

    view! {
        <Show when=move || store.cart_open().get()>
            <div class="drawer-backdrop" on:click=move |_| ctx.set_cart_open(false)></div>
            <aside class="drawer drawer-right cart-sheet">
                <div class="drawer-header">
                    <h2>"Корзина (" {count} ")"</h2>
                    <button class="icon-btn" on:click=move |_| ctx.set_cart_open(false)>"✕"</button>
                </div>

                <Show
                    when=move || !store.cart().read().is_empty()
                    fallback=|| view! {
                        <div class="empty-state">
                            <div class="empty-icon">"🛒"</div>
                            <h3>"Корзина пуста"</h3>
                            <p class="muted">"Добавьте игры из каталога"</p>
                        </div>
                    }
                >
                    <div class="cart-lines">
                        <For
                            each=move || store.cart().get()
                            key=|line| line.product.id
                            children=move |line| view! { <CartLine line=line /> }
                        />
                    </div>

                    <div class="cart-summary">
                        <div class="cart-total-row">
                            <span>"Итого:"</span>
                            <span class="cart-total">{move || format_price(total())}</span>
                        </div>
                        <Show when=move || store.user().read().is_none()>
                            <p class="muted">"Для оформления заказа войдите через Telegram"</p>
                        </Show>
                        <button
                            class="primary-btn wide"
                            disabled=move || store.checkout_pending().get()
                            on:click=move |_| ctx.checkout()
                        >
                            {move || if store.checkout_pending().get() { "Оформляем..." } else { "Оформить заказ" }}
                        </button>
                        <ConfirmButton
                            label="Очистить корзину"
                            button_class="ghost-btn wide"
                            on_confirm=move |_| ctx.clear_cart()
                        />
                    </div>
                </Show>
            </aside>
        </Show>
    }
}
