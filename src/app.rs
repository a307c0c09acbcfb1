//! GameStore Frontend App
//!
//! Main application component: header, sidebar, catalogue and profile.

use leptos::logging::log;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    CartSheet, CategoryBar, Header, Hero, ProductGrid, ProfileSection, Sidebar, Toaster,
};
use crate::context::AppContext;
use crate::models::Section;
use crate::store::{AppState, AppStateStoreFields};

/// DOM id a sidebar section scrolls to
fn section_anchor(section: Section) -> Option<&'static str> {
    match section {
        Section::Home => Some("top"),
        Section::Catalog => Some("catalog"),
        Section::Profile | Section::Balance | Section::Referrals | Section::Orders => Some("profile"),
        Section::Cart | Section::Support => None,
    }
}

fn scroll_to(anchor: &str) {
    if let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(anchor))
    {
        el.scroll_into_view();
    }
}

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    let ctx = AppContext::new(store);

    // Provide store and actions to all children
    provide_context(store);
    provide_context(ctx);

    // Body class follows the theme
    Effect::new(move |_| {
        let theme = store.theme().get();
        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            body.set_class_name(theme.body_class());
        }
    });

    // Reload the catalogue when the category changes
    Effect::new(move |_| {
        let category = store.selected_category().get();
        log!("[APP] Loading products for category '{}'", category);
        ctx.load_products(category);
    });

    // Sidebar navigation scrolls to the matching block
    Effect::new(move |prev: Option<Section>| {
        let section = store.active_section().get();
        if prev.is_some_and(|p| p != section) {
            if let Some(anchor) = section_anchor(section) {
                scroll_to(anchor);
            }
        }
        section
    });

    view! {
        <div class="app-layout" id="top">
            <Header />
            <Sidebar />

            <main class="main-content">
                <Hero />
                <div id="catalog">
                    <CategoryBar />
                    <ProductGrid />
                </div>
                <div id="profile">
                    <ProfileSection />
                </div>
            </main>

            <CartSheet />
            <Toaster />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_sections_share_anchor() {
        assert_eq!(section_anchor(Section::Orders), Some("profile"));
        assert_eq!(section_anchor(Section::Balance), Some("profile"));
        assert_eq!(section_anchor(Section::Catalog), Some("catalog"));
        assert_eq!(section_anchor(Section::Cart), None);
    }
}
