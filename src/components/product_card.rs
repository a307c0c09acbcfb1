//! Product Card Component

use leptos::prelude::*;

use crate::config::category_label;
use crate::context::use_app_context;
use crate::format::format_price;
use crate::models::Product;

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let ctx = use_app_context();

    let discount = product.discount_percent();
    let in_stock = product.in_stock;
    let for_cart = product.clone();

    view! {
        <div class="product-card">
            <div class="product-image">
                <img src=product.image_url.clone() alt=product.title.clone() loading="lazy" />
                {product.badge.clone().map(|badge| view! { <span class="product-badge">{badge}</span> })}
                {discount.map(|pct| view! { <span class="discount-badge">{format!("-{}%", pct)}</span> })}
            </div>

            <div class="product-info">
                <div class="product-title-row">
                    <h3 class="product-title">{product.title.clone()}</h3>
                    <span class="product-rating">"★ " {format!("{:.1}", product.rating)}</span>
                </div>

                <span class="category-chip">{category_label(&product.category).to_string()}</span>

                <div class="product-footer">
                    <div class="product-prices">
                        <span class="price">{format_price(product.price)}</span>
                        {product.old_price.map(|old| view! { <span class="old-price">{format_price(old)}</span> })}
                    </div>
                    <button
                        class="add-to-cart-btn"
                        title="В корзину"
                        disabled=!in_stock
                        on:click=move |_| ctx.add_to_cart(for_cart.clone())
                    >
                        "🛒"
                    </button>
                </div>
            </div>
        </div>
    }
}
