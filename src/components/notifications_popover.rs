//! Notifications Popover Component
//!
//! Bell button with unread badge and a dropdown list. Clicking an unread
//! notification marks it read.

use chrono::Utc;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::format::relative_time;
use crate::models::{Notification, NotificationKind};
use crate::store::{self, use_app_store, AppStateStoreFields};

fn kind_class(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "notif-icon success",
        NotificationKind::Warning => "notif-icon warning",
        NotificationKind::Info => "notif-icon info",
    }
}

#[component]
fn NotificationRow(notification: Notification) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let id = notification.id;

    // Read state comes from the store so optimistic updates re-render
    let is_read = move || {
        store
            .notifications()
            .read()
            .iter()
            .find(|n| n.id == id)
            .map(|n| n.is_read)
            .unwrap_or(true)
    };

    view! {
        <button
            class=move || if is_read() { "notif-row" } else { "notif-row unread" }
            on:click=move |_| ctx.mark_notification_read(id)
        >
            <span class=kind_class(notification.kind)>{notification.kind.icon()}</span>
            <div class="notif-body">
                <div class="notif-title-row">
                    <span class="notif-title">{notification.title.clone()}</span>
                    <Show when=move || !is_read()>
                        <span class="unread-dot"></span>
                    </Show>
                </div>
                <p class="notif-message">{notification.message.clone()}</p>
                <span class="notif-time">{relative_time(&notification.created_at, Utc::now())}</span>
            </div>
        </button>
    }
}

#[component]
pub fn NotificationsPopover() -> impl IntoView {
    let store = use_app_store();
    let (open, set_open) = signal(false);

    let unread = move || store::unread_count(&store.notifications().read());

    view! {
        <div class="popover-anchor">
            <button
                class="icon-btn"
                title="Уведомления"
                on:click=move |_| set_open.update(|v| *v = !*v)
            >
                "🔔"
                <Show when=move || { unread() > 0 }>
                    <span class="count-badge">{unread}</span>
                </Show>
            </button>

            <Show when=move || open.get()>
                <div class="popover" on:mouseleave=move |_| set_open.set(false)>
                    <h3 class="popover-title">"Уведомления"</h3>
                    <div class="popover-scroll">
                        <Show
                            when=move || !store.notifications().read().is_empty()
                            fallback=|| view! { <p class="empty-hint">"Уведомлений пока нет"</p> }
                        >
                            <For
                                each=move || store.notifications().get()
                                key=|n| n.id
                                children=move |n| view! { <NotificationRow notification=n /> }
                            />
                        </Show>
                    </div>
                </div>
            </Show>
        </div>
    }
}
