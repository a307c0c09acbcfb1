//! Profile Section Component
//!
//! Login prompt for guests; profile card, referral code and order history for users.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::format::{format_date, format_price};
use crate::models::{Order, OrderItem, ToastKind, User};
use crate::store::{use_app_store, AppStateStoreFields};
use crate::telegram;

#[component]
fn LoginPrompt() -> impl IntoView {
    let ctx = use_app_context();
    view! {
        <div class="login-prompt">
            <div class="empty-icon">"👤"</div>
            <h3>"Войдите в аккаунт"</h3>
            <p class="muted">"Для доступа к профилю и истории заказов"</p>
            <button class="telegram-btn" on:click=move |_| ctx.login_with_telegram()>
                "✈ Войти через Telegram"
            </button>
        </div>
    }
}

#[component]
fn StatTile(icon: &'static str, label: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="stat-tile">
            <div class="stat-icon">{icon}</div>
            <div>
                <p class="muted small">{label}</p>
                <p class="stat-value">{move || value.get()}</p>
            </div>
        </div>
    }
}

#[component]
fn ProfileCard(user: User) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let code = user.referral_code.clone();

    let copy_code = move |_| {
        let code = code.clone();
        spawn_local(async move {
            match telegram::copy_to_clipboard(&code).await {
                Ok(()) => ctx.toast(ToastKind::Success, "Код скопирован"),
                Err(e) => {
                    leptos::logging::warn!("[STORE] {}", e);
                    ctx.toast(ToastKind::Error, "Не удалось скопировать код");
                }
            }
        });
    };

    let balance = Signal::derive(move || {
        store
            .user()
            .read()
            .as_ref()
            .map(|u| format_price(u.balance))
            .unwrap_or_default()
    });
    let referrals = Signal::derive(move || store.referrals_count().get().to_string());
    let order_count = Signal::derive(move || store.orders().read().len().to_string());

    view! {
        <div class="card profile-card">
            <div class="profile-banner"></div>
            <div class="profile-head">
                <img class="profile-avatar" src=user.avatar_url() alt=user.display_name() />
                <div class="profile-names">
                    <h2>{user.display_name()}</h2>
                    {user.handle().map(|h| view! { <p class="muted">{h}</p> })}
                </div>
                <button class="ghost-btn" on:click=move |_| ctx.logout()>"Выйти"</button>
            </div>

            <div class="stat-grid">
                <StatTile icon="👛" label="Баланс" value=balance />
                <StatTile icon="👥" label="Рефералов" value=referrals />
                <StatTile icon="📦" label="Заказов" value=order_count />
            </div>

            <div class="referral-box">
                <div class="referral-head">
                    <h4>"Реферальный код"</h4>
                    <button class="ghost-btn small" on:click=copy_code>"⧉ Копировать"</button>
                </div>
                <code class="referral-code">{user.referral_code.clone()}</code>
            </div>
        </div>
    }
}

#[component]
fn OrderRow(order: Order) -> impl IntoView {
    let ctx = use_app_context();
    let order_id = order.id;
    let (expanded, set_expanded) = signal(false);
    let (items, set_items) = signal(None::<Vec<OrderItem>>);

    let toggle = move |_| {
        let open = !expanded.get();
        set_expanded.set(open);
        if open && items.get_untracked().is_none() {
            spawn_local(async move {
                let loaded = ctx.order_details(order_id).await.map(|d| d.items);
                set_items.set(Some(loaded.unwrap_or_default()));
            });
        }
    };

    view! {
        <div class="order-row">
            <div class="order-head">
                <div>
                    <p class="order-title">"Заказ #" {order.id}</p>
                    <p class="muted small">{format_date(&order.created_at)}</p>
                </div>
                <span class=order.status.css_class()>{order.status.label()}</span>
            </div>
            <div class="order-foot">
                <span class="price">{format_price(order.total)}</span>
                <button class="ghost-btn small" on:click=toggle>
                    {move || if expanded.get() { "Скрыть ▾" } else { "Подробнее ▸" }}
                </button>
            </div>
            <Show when=move || expanded.get()>
                <ul class="order-items">
                    {move || match items.get() {
                        None => view! { <li class="muted">"Загрузка..."</li> }.into_any(),
                        Some(list) if list.is_empty() => {
                            view! { <li class="muted">"Нет данных о позициях"</li> }.into_any()
                        }
                        Some(list) => list
                            .into_iter()
                            .map(|item| view! {
                                <li>
                                    <span>{item.title}</span>
                                    <span class="muted">" × " {item.quantity}</span>
                                    <span class="price">{format_price(item.price * i64::from(item.quantity))}</span>
                                </li>
                            })
                            .collect_view()
                            .into_any(),
                    }}
                </ul>
            </Show>
        </div>
    }
}

#[component]
pub fn ProfileSection() -> impl IntoView {
    let store = use_app_store();

    view! {
        <section class="profile-section">
            <h2>"Профиль"</h2>
            {move || match store.user().get() {
                None => view! { <LoginPrompt /> }.into_any(),
                Some(user) => view! {
                    <div class="profile-stack fade-in">
                        <ProfileCard user=user />
                        <div class="card">
                            <h3>"История заказов"</h3>
                            <Show
                                when=move || !store.orders().read().is_empty()
                                fallback=|| view! { <p class="muted">"Заказов пока нет"</p> }
                            >
                                <For
                                    each=move || store.orders().get()
                                    key=|o| o.id
                                    children=move |order| view! { <OrderRow order=order /> }
                                />
                            </Show>
                        </div>
                    </div>
                }.into_any(),
            }}
        </section>
    }
}
