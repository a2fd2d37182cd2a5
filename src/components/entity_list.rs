//! Entity List Components
//!
//! Render the current list as `<li>` rows. Entity text is inserted as
//! text nodes, so markup in names or instructions is shown literally.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::models::{Ingredient, Recipe};

/// Row text for a recipe, as (name line, instructions line)
pub fn recipe_lines(recipe: &Recipe) -> (String, String) {
    (
        format!("name: {}", recipe.name),
        format!("instructions: {}", recipe.instructions),
    )
}

#[component]
pub fn RecipeList(
    #[prop(into)] recipes: Signal<Vec<Recipe>>,
    #[prop(into)] on_delete: Callback<u32>,
) -> impl IntoView {
    view! {
        <ul id="recipe-list" class="entity-list">
            <For
                each=move || recipes.get()
                key=|recipe| recipe.clone()
                children=move |recipe| {
                    let id = recipe.id;
                    let (name_line, instructions_line) = recipe_lines(&recipe);
                    view! {
                        <li class="recipe-row" data-id=id.to_string()>
                            <span class="recipe-name">{name_line}</span>
                            <span class="recipe-instructions">{instructions_line}</span>
                            <DeleteConfirmButton
                                label=recipe.name.clone()
                                on_confirm=move |_| on_delete.run(id)
                            />
                        </li>
                    }
                }
            />
        </ul>
    }
}

#[component]
pub fn IngredientList(
    #[prop(into)] ingredients: Signal<Vec<Ingredient>>,
    #[prop(into)] on_delete: Callback<u32>,
) -> impl IntoView {
    view! {
        <ul id="ingredient-list" class="entity-list">
            <For
                each=move || ingredients.get()
                key=|ingredient| ingredient.clone()
                children=move |ingredient| {
                    let id = ingredient.id;
                    view! {
                        <li class="ingredient-row" data-id=id.to_string()>
                            <p>{ingredient.name.clone()}</p>
                            <DeleteConfirmButton
                                label=ingredient.name
                                on_confirm=move |_| on_delete.run(id)
                            />
                        </li>
                    }
                }
            />
        </ul>
    }
}
