//! Cart Math
//!
//! Plain functions over cart lines. The store calls these inside its write guards.

use crate::models::{CartItem, Product};
use serde::Serialize;

/// Add one unit of a product, merging with an existing line
pub fn add_product(cart: &mut Vec<CartItem>, product: Product) {
    match cart.iter_mut().find(|line| line.product.id == product.id) {
        Some(line) => line.quantity += 1,
        None => cart.push(CartItem { product, quantity: 1 }),
    }
}

/// Remove a line by product id. Returns false if no line matched.
pub fn remove_product(cart: &mut Vec<CartItem>, product_id: u32) -> bool {
    let before = cart.len();
    cart.retain(|line| line.product.id != product_id);
    cart.len() != before
}

/// Set a line's quantity; zero or negative removes the line
pub fn set_quantity(cart: &mut Vec<CartItem>, product_id: u32, quantity: i64) {
    if quantity <= 0 {
        remove_product(cart, product_id);
        return;
    }
    let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
    if let Some(line) = cart.iter_mut().find(|line| line.product.id == product_id) {
        line.quantity = quantity;
    }
}

/// Total number of units
pub fn item_count(cart: &[CartItem]) -> u32 {
    cart.iter().map(|line| line.quantity).sum()
}

/// Sum of price × quantity
pub fn total(cart: &[CartItem]) -> i64 {
    cart.iter().map(CartItem::line_total).sum()
}

/// Order line as sent to `POST /orders`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderLine {
    pub product_id: u32,
    pub quantity: u32,
    pub price: i64,
}

pub fn order_lines(cart: &[CartItem]) -> Vec<OrderLine> {
    cart.iter()
        .map(|line| OrderLine {
            product_id: line.product.id,
            quantity: line.quantity,
            price: line.product.price,
        })
        .collect()
}
