//! UI Components
//!
//! Reusable Leptos components.

mod header;
mod sidebar;
mod catalog;
mod product_card;
mod cart_sheet;
mod confirm_button;
mod notifications_popover;
mod profile_section;
mod toaster;

pub use header::Header;
pub use sidebar::Sidebar;
pub use catalog::{CategoryBar, Hero, ProductGrid};
pub use product_card::ProductCard;
pub use cart_sheet::CartSheet;
pub use confirm_button::ConfirmButton;
pub use notifications_popover::NotificationsPopover;
pub use profile_section::ProfileSection;
pub use toaster::Toaster;
