//! GameStore Frontend Entry Point

mod models;
mod config;
mod format;
mod cart;
mod api;
mod telegram;
mod store;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
