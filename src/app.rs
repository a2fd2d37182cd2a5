//! Recipe Book Frontend App
//!
//! Wires the backend client and picks the page view from the document path.

use std::rc::Rc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::{ApiClient, HttpTransport};
use crate::browser;
use crate::components::{IngredientPage, LoginPage, RecipePage, RegisterPage};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::session::{BrowserSessionStorage, Session};
use crate::store::AppState;

/// The page documents this binary serves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Register,
    Recipes,
    Ingredients,
}

impl Page {
    /// Match on the document file name; anything unknown is the login page
    pub fn from_path(path: &str) -> Self {
        match path.rsplit('/').next().unwrap_or_default() {
            "register-page.html" => Page::Register,
            "recipe-page.html" => Page::Recipes,
            "ingredient-page.html" => Page::Ingredients,
            _ => Page::Login,
        }
    }
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let storage = match BrowserSessionStorage::open() {
        Ok(storage) => storage,
        Err(err) => {
            log::error!("[APP] {}", err);
            return view! {
                <p class="fatal-error">"Session storage is unavailable in this browser."</p>
            }
            .into_any();
        }
    };

    let api = ApiClient::new(
        Rc::new(HttpTransport::new(config.api_base_url.clone())),
        Rc::new(storage),
    );
    let session = Session::load(api.session_store());

    // Provide state to all children
    provide_context(Store::new(AppState::new(session.as_ref())));
    provide_context(AppContext::new(api, config));

    let page = Page::from_path(&browser::current_path());
    log::info!("[APP] Mounting {:?} (signed in: {})", page, session.is_some());

    match page {
        Page::Login => view! { <LoginPage /> }.into_any(),
        Page::Register => view! { <RegisterPage /> }.into_any(),
        Page::Recipes => view! { <RecipePage /> }.into_any(),
        Page::Ingredients => view! { <IngredientPage /> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_from_path() {
        assert_eq!(Page::from_path("/frontend/recipe/recipe-page.html"), Page::Recipes);
        assert_eq!(Page::from_path("/frontend/register/register-page.html"), Page::Register);
        assert_eq!(Page::from_path("/ingredients/ingredient-page.html"), Page::Ingredients);
        assert_eq!(Page::from_path("/frontend/login/login-page.html"), Page::Login);
        assert_eq!(Page::from_path("/"), Page::Login);
        assert_eq!(Page::from_path(""), Page::Login);
    }
}
