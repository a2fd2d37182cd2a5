//! Session Bar Component
//!
//! Logout button and admin link, shown according to the stored session.

use leptos::prelude::*;

use crate::browser;
use crate::context::{use_app_context, InFlight};
use crate::store::{store_signed_out, use_app_store, AppStateStoreFields};

#[component]
pub fn SessionBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let logging_out = InFlight::new();
    let admin_href = ctx.routes().ingredients;

    let logout = move |_: web_sys::MouseEvent| {
        let sessions = ctx.sessions();
        logging_out.spawn(async move {
            match sessions.logout().await {
                Ok(redirect) => {
                    store_signed_out(&store);
                    browser::follow(redirect).await;
                }
                Err(err) => browser::report(&err),
            }
        });
    };

    let visibility = |shown: bool| if shown { "visible" } else { "hidden" };

    view! {
        <nav class="session-bar">
            <a
                id="admin-link"
                href=admin_href
                style:visibility=move || visibility(store.is_admin().get())
            >
                "Admin"
            </a>
            <button
                id="logout-button"
                type="button"
                style:visibility=move || visibility(store.signed_in().get())
                disabled=move || logging_out.is_busy()
                on:click=logout
            >
                "Logout"
            </button>
        </nav>
    }
}
