//! Product Entity
//!
//! A game sold in the storefront catalogue.

use serde::{Deserialize, Serialize};

/// A catalogue product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Category slug (rpg, action, sport, shooter)
    pub category: String,
    /// Price in whole rubles
    pub price: i64,
    /// Price before discount, shown struck through
    pub old_price: Option<i64>,
    pub image_url: String,
    /// Short label such as "ХИТ" or "-33%"
    pub badge: Option<String>,
    pub rating: f64,
    pub in_stock: bool,
    pub created_at: String,
}

impl Product {
    /// Create an in-stock product with default values
    pub fn new(id: u32, title: String, category: String, price: i64) -> Self {
        Self {
            id,
            title,
            description: String::new(),
            category,
            price,
            old_price: None,
            image_url: String::new(),
            badge: None,
            rating: 0.0,
            in_stock: true,
            created_at: String::new(),
        }
    }

    pub fn with_old_price(mut self, old_price: i64) -> Self {
        self.old_price = Some(old_price);
        self
    }

    pub fn with_badge(mut self, badge: &str) -> Self {
        self.badge = Some(badge.to_string());
        self
    }

    pub fn with_image(mut self, image_url: &str) -> Self {
        self.image_url = image_url.to_string();
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }
}

/// Catalogue used to seed an empty database
pub fn seed_catalogue() -> Vec<Product> {
    vec![
        Product::new(0, "Cyberpunk 2077".into(), "rpg".into(), 1999)
            .with_old_price(2999)
            .with_badge("ХИТ")
            .with_image("https://images.unsplash.com/photo-1538481199705-c710c4e965fc?w=400")
            .with_rating(4.8),
        Product::new(0, "GTA V Premium".into(), "action".into(), 1499)
            .with_badge("-33%")
            .with_image("https://images.unsplash.com/photo-1552820728-8b83bb6b773f?w=400")
            .with_rating(4.9),
        Product::new(0, "The Witcher 3".into(), "rpg".into(), 899)
            .with_old_price(1499)
            .with_image("https://images.unsplash.com/photo-1511512578047-dfb367046420?w=400")
            .with_rating(5.0),
        Product::new(0, "Red Dead Redemption 2".into(), "action".into(), 2499)
            .with_badge("НОВИНКА")
            .with_image("https://images.unsplash.com/photo-1542751371-adc38448a05e?w=400")
            .with_rating(4.9),
        Product::new(0, "Elden Ring".into(), "rpg".into(), 2799)
            .with_image("https://images.unsplash.com/photo-1550745165-9bc0b252726f?w=400")
            .with_rating(4.7),
        Product::new(0, "FIFA 24".into(), "sport".into(), 3499)
            .with_badge("НОВИНКА")
            .with_image("https://images.unsplash.com/photo-1574629810360-7efbbe195018?w=400")
            .with_rating(4.5),
        Product::new(0, "Battlefield 2042".into(), "shooter".into(), 1999)
            .with_old_price(2999)
            .with_badge("-33%")
            .with_image("https://images.unsplash.com/photo-1509198397868-475647b2a1e5?w=400")
            .with_rating(4.3),
        Product::new(0, "Hogwarts Legacy".into(), "rpg".into(), 2999)
            .with_image("https://images.unsplash.com/photo-1556438064-2d7646166914?w=400")
            .with_rating(4.8),
    ]
}
