//! Catalogue Components
//!
//! Hero banner, category bar and the product grid.

use leptos::prelude::*;

use crate::components::ProductCard;
use crate::config::{CATEGORIES, PRODUCT_GRID_LIMIT};
use crate::context::use_app_context;
use crate::models::Section;
use crate::store::{self, use_app_store, AppStateStoreFields};

#[component]
pub fn Hero() -> impl IntoView {
    let ctx = use_app_context();
    view! {
        <section class="hero">
            <div class="hero-content">
                <span class="hero-badge">"🔥 Новинка"</span>
                <h1>"Лучшие игры" <br /> "по низким ценам"</h1>
                <p>"Скидки до 70% на хиты этого сезона"</p>
                <button class="primary-btn" on:click=move |_| ctx.navigate(Section::Catalog)>
                    "Смотреть каталог →"
                </button>
            </div>
        </section>
    }
}

#[component]
pub fn CategoryBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    view! {
        <section class="category-bar">
            {CATEGORIES.iter().map(|&(slug, label, icon)| {
                let is_selected = move || store.selected_category().get() == slug;
                view! {
                    <button
                        class=move || if is_selected() { "category-btn active" } else { "category-btn" }
                        on:click=move |_| ctx.select_category(slug)
                    >
                        <span class="category-icon">{icon}</span>
                        {label}
                    </button>
                }
            }).collect_view()}
        </section>
    }
}

#[component]
pub fn ProductGrid() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let visible = Memo::new(move |_| {
        store::visible_products(
            &store.products().read(),
            &store.search_query().read(),
            PRODUCT_GRID_LIMIT,
        )
    });

    view! {
        <section class="product-section">
            <div class="section-header">
                <h2>"Популярные игры"</h2>
                <button class="ghost-btn" on:click=move |_| ctx.select_category("all")>
                    "Все игры →"
                </button>
            </div>

            <div class="product-grid">
                {move || {
                    if store.products_loading().get() {
                        view! { <p class="grid-hint">"Загрузка товаров..."</p> }.into_any()
                    } else if visible.read().is_empty() {
                        view! { <p class="grid-hint">"Ничего не найдено"</p> }.into_any()
                    } else {
                        view! {
                            <For
                                each=move || visible.get().into_iter().enumerate()
                                key=|(_, p)| p.id
                                children=move |(index, product)| view! {
                                    <div
                                        class="fade-in"
                                        style=format!("animation-delay: {}ms;", index * 50)
                                    >
                                        <ProductCard product=product />
                                    </div>
                                }
                            />
                        }.into_any()
                    }
                }}
            </div>
        </section>
    }
}
