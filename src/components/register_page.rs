//! Registration Page Component

use leptos::prelude::*;

use crate::browser;
use crate::context::{use_app_context, InFlight};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = use_app_context();
    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (repeat_password, set_repeat_password) = signal(String::new());
    let in_flight = InFlight::new();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let fields = (
            username.get_untracked(),
            email.get_untracked(),
            password.get_untracked(),
            repeat_password.get_untracked(),
        );
        let sessions = ctx.sessions();
        in_flight.spawn(async move {
            let (username, email, password, repeat_password) = fields;
            match sessions.register(&username, &email, &password, &repeat_password).await {
                Ok(redirect) => browser::follow(redirect).await,
                Err(err) => browser::report(&err),
            }
        });
    };

    view! {
        <form class="register-form" on:submit=on_submit>
            <h1>"Register"</h1>
            <input
                id="username-input"
                type="text"
                placeholder="Username"
                prop:value=move || username.get()
                on:input=move |ev| set_username.set(event_target_value(&ev))
            />
            <input
                id="email-input"
                type="email"
                placeholder="Email"
                prop:value=move || email.get()
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />
            <input
                id="password-input"
                type="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
            />
            <input
                id="repeat-password-input"
                type="password"
                placeholder="Repeat password"
                prop:value=move || repeat_password.get()
                on:input=move |ev| set_repeat_password.set(event_target_value(&ev))
            />
            <button id="register-button" type="submit" disabled=move || in_flight.is_busy()>
                "Register"
            </button>
        </form>
    }
}
