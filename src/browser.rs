//! Browser Glue
//!
//! Alerts, navigation and the post-action redirect delay.

use gloo_timers::future::TimeoutFuture;

use crate::clients::Redirect;
use crate::error::ActionError;

/// Blocking `window.alert`
pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        log::warn!("[BROWSER] No window for alert: {}", message);
        return;
    };
    if let Err(e) = window.alert_with_message(message) {
        log::warn!("[BROWSER] alert failed: {:?}", e);
    }
}

/// Alert the user about a failed action.
///
/// Backend and network failures also print the buffered log trail to the
/// console, collapsed.
pub fn report(error: &ActionError) {
    if !error.source.is_local() {
        print_recent_log(&error.to_string());
    }
    alert(&error.to_string());
}

fn print_recent_log(title: &str) {
    let Some(logger) = rolling_logger::installed() else {
        return;
    };
    web_sys::console::group_collapsed_1(&format!("Recent log before \"{}\"", title).into());
    web_sys::console::log_1(&logger.dump().into());
    web_sys::console::group_end();
}

/// Path of the current document, e.g. `/frontend/recipe/recipe-page.html`
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_default()
}

pub fn navigate(href: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_href(href) {
        log::error!("[BROWSER] Navigation to {} failed: {:?}", href, e);
    }
}

/// Wait out the redirect delay, then navigate
pub async fn follow(redirect: Redirect) {
    let millis = u32::try_from(redirect.after.as_millis()).unwrap_or(u32::MAX);
    if millis > 0 {
        TimeoutFuture::new(millis).await;
    }
    navigate(&redirect.to);
}
