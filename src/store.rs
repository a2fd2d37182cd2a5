//! Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Controllers
//! own the lists; the store mirrors them for rendering.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Ingredient, Recipe};
use crate::session::Session;

/// Rendered page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Recipes currently shown
    pub recipes: Vec<Recipe>,
    /// Ingredients currently shown
    pub ingredients: Vec<Ingredient>,
    /// A bearer token is stored for this tab
    pub signed_in: bool,
    pub is_admin: bool,
}

impl AppState {
    pub fn new(session: Option<&Session>) -> Self {
        Self {
            signed_in: session.is_some(),
            is_admin: session.is_some_and(|s| s.is_admin),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_recipes(store: &AppStore, recipes: Vec<Recipe>) {
    *store.recipes().write() = recipes;
}

pub fn store_set_ingredients(store: &AppStore, ingredients: Vec<Ingredient>) {
    *store.ingredients().write() = ingredients;
}

pub fn store_signed_out(store: &AppStore) {
    *store.signed_in().write() = false;
    *store.is_admin().write() = false;
}
