//! Toaster Component

use leptos::prelude::*;

use crate::models::ToastKind;
use crate::store::{self, use_app_store, AppStateStoreFields};

#[component]
pub fn Toaster() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="toaster">
            <For
                each=move || store.toasts().get()
                key=|t| t.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.kind {
                        ToastKind::Success => "toast success",
                        ToastKind::Info => "toast info",
                        ToastKind::Warning => "toast warning",
                        ToastKind::Error => "toast error",
                    };
                    view! {
                        <div class=class on:click=move |_| store::store_dismiss_toast(&store, id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
