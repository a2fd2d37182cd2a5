//! Page Controllers
//!
//! One controller per page. Each owns its local state, validates form
//! input, calls the backend and reports failures as `ActionError`s.

mod session;
mod recipe;
mod ingredient;

use std::time::Duration;

use crate::error::ActionError;

pub use session::SessionClient;
pub use recipe::RecipeClient;
pub use ingredient::IngredientClient;

/// Where to send the browser after an action, and when
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub to: String,
    pub after: Duration,
}

impl Redirect {
    pub fn now(to: &str) -> Self {
        Self { to: to.to_string(), after: Duration::ZERO }
    }
}

/// Log a failed action before handing it back to the view
fn logged<T>(area: &str, result: Result<T, ActionError>) -> Result<T, ActionError> {
    if let Err(err) = &result {
        if err.source.is_local() {
            log::info!("[{}] {:?} rejected: {}", area, err.action, err.source);
        } else {
            log::error!("[{}] {:?} failed: {}", area, err.action, err.source);
        }
    }
    result
}
