//! Login Page Component

use leptos::prelude::*;

use crate::browser;
use crate::context::{use_app_context, InFlight};

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let in_flight = InFlight::new();
    let register_href = ctx.routes().register;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let username = username.get_untracked();
        let password = password.get_untracked();
        let sessions = ctx.sessions();
        in_flight.spawn(async move {
            match sessions.login(&username, &password).await {
                Ok(redirect) => browser::follow(redirect).await,
                Err(err) => browser::report(&err),
            }
        });
    };

    view! {
        <form class="login-form" on:submit=on_submit>
            <h1>"Login"</h1>
            <input
                id="login-input"
                type="text"
                placeholder="Username"
                prop:value=move || username.get()
                on:input=move |ev| set_username.set(event_target_value(&ev))
            />
            <input
                id="password-input"
                type="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
            />
            <button id="login-button" type="submit" disabled=move || in_flight.is_busy()>
                "Login"
            </button>
            <a class="register-link" href=register_href>"Create an account"</a>
        </form>
    }
}
