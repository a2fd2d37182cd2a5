//! UI Components
//!
//! Page views and reusable Leptos components.

mod delete_confirm_button;
mod entity_list;
mod session_bar;
mod login_page;
mod register_page;
mod recipe_page;
mod ingredient_page;

pub use delete_confirm_button::DeleteConfirmButton;
pub use entity_list::{IngredientList, RecipeList};
pub use session_bar::SessionBar;
pub use login_page::LoginPage;
pub use register_page::RegisterPage;
pub use recipe_page::RecipePage;
pub use ingredient_page::IngredientPage;
