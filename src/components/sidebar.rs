//! Sidebar Component
//!
//! Section menu: fixed column on desktop, slide-in drawer on mobile.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Section;
use crate::store::{use_app_store, AppStateStoreFields};

const MENU_ITEMS: &[(Section, &str, &str)] = &[
    (Section::Home, "🏠", "Главная"),
    (Section::Catalog, "▦", "Каталог"),
    (Section::Cart, "🛒", "Корзина"),
    (Section::Profile, "👤", "Профиль"),
    (Section::Balance, "👛", "Баланс"),
    (Section::Referrals, "👥", "Рефералы"),
    (Section::Orders, "📦", "Заказы"),
    (Section::Support, "🎧", "Поддержка"),
];

#[component]
fn SidebarMenu(#[prop(into)] on_pick: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    view! {
        <nav class="sidebar-menu">
            {MENU_ITEMS.iter().map(|&(section, icon, label)| {
                let is_active = move || store.active_section().get() == section;
                view! {
                    <button
                        class=move || if is_active() { "menu-item active" } else { "menu-item" }
                        on:click=move |_| {
                            ctx.navigate(section);
                            on_pick.run(());
                        }
                    >
                        <span class="menu-icon">{icon}</span>
                        <span>{label}</span>
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let (mobile_open, set_mobile_open) = signal(false);

    view! {
        <aside class="sidebar desktop-only">
            <SidebarMenu on_pick=|_| {} />
        </aside>

        <button class="icon-btn sidebar-toggle mobile-only" on:click=move |_| set_mobile_open.set(true)>
            "☰"
        </button>

        <Show when=move || mobile_open.get()>
            <div class="drawer-backdrop" on:click=move |_| set_mobile_open.set(false)></div>
            <aside class="drawer drawer-left">
                <SidebarMenu on_pick=move |_| set_mobile_open.set(false) />
            </aside>
        </Show>
    }
}
