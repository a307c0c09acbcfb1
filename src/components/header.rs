//! Header Component
//!
//! Top bar: logo, search, theme toggle, notifications, cart button and account.

use leptos::prelude::*;

use crate::components::NotificationsPopover;
use crate::context::use_app_context;
use crate::models::{Section, Theme};
use crate::store::{self, use_app_store, AppStateStoreFields};

#[component]
fn SearchInput() -> impl IntoView {
    let store = use_app_store();
    view! {
        <div class="search-box">
            <span class="search-icon">"🔍"</span>
            <input
                type="text"
                placeholder="Поиск игр..."
                prop:value=move || store.search_query().get()
                on:input=move |ev| store.search_query().set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (search_open, set_search_open) = signal(false);

    let cart_count = move || store::cart_count(&store);

    view! {
        <header class="app-header">
            <div class="header-row">
                <div class="logo" on:click=move |_| ctx.navigate(Section::Home)>
                    <span class="logo-mark">"🎮"</span>
                    <span class="logo-text">"GameStore"</span>
                </div>

                <div class="header-search desktop-only">
                    <SearchInput />
                </div>

                <div class="header-actions">
                    <button
                        class="icon-btn mobile-only"
                        title="Поиск"
                        on:click=move |_| set_search_open.update(|v| *v = !*v)
                    >
                        "🔍"
                    </button>

                    <button
                        class="icon-btn"
                        title="Сменить тему"
                        on:click=move |_| ctx.toggle_theme()
                    >
                        {move || if store.theme().get() == Theme::Dark { "☀" } else { "☾" }}
                    </button>

                    <NotificationsPopover />

                    <button
                        class="icon-btn cart-btn"
                        title="Корзина"
                        on:click=move |_| ctx.set_cart_open(true)
                    >
                        "🛒"
                        <Show when=move || { cart_count() > 0 }>
                            <span class="count-badge">{cart_count}</span>
                        </Show>
                    </button>

                    {move || match store.user().get() {
                        Some(user) => view! {
                            <button
                                class="avatar-btn"
                                title=user.display_name()
                                on:click=move |_| ctx.navigate(Section::Profile)
                            >
                                <img src=user.avatar_url() alt=user.display_name() />
                            </button>
                        }.into_any(),
                        None => view! {
                            <button class="login-btn" on:click=move |_| ctx.login_with_telegram()>
                                "✈ Войти"
                            </button>
                        }.into_any(),
                    }}
                </div>
            </div>

            <Show when=move || search_open.get()>
                <div class="header-search mobile-only">
                    <SearchInput />
                </div>
            </Show>
        </header>
    }
}
