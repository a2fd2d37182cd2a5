//! Recipe Page Component
//!
//! Search, add, update and delete forms over the recipe list.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser;
use crate::cache::Refresh;
use crate::clients::RecipeClient;
use crate::components::{RecipeList, SessionBar};
use crate::context::{use_app_context, InFlight};
use crate::error::{Action, ActionError};
use crate::store::{store_set_recipes, use_app_store, AppStateStoreFields};

/// Outcome of a write followed by a re-fetch.
///
/// The form is cleared once the write itself landed, even when the
/// follow-up fetch failed.
fn settle_write(
    result: Result<Refresh, ActionError>,
    write: Action,
    clear: impl FnOnce(),
    sync: impl FnOnce(),
) {
    match result {
        Ok(Refresh::Applied) => {
            clear();
            sync();
        }
        Ok(Refresh::Superseded) => clear(),
        Err(err) => {
            if err.action != write {
                clear();
            }
            browser::report(&err);
        }
    }
}

#[component]
pub fn RecipePage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let client = StoredValue::new_local(Rc::new(RecipeClient::new(ctx.api())));

    let sync = move || store_set_recipes(&store, client.get_value().recipes());

    let load = move |query: Option<String>| {
        let recipes = client.get_value();
        spawn_local(async move {
            match recipes.refresh(query.as_deref()).await {
                Ok(Refresh::Applied) => sync(),
                Ok(Refresh::Superseded) => {}
                Err(err) => browser::report(&err),
            }
        });
    };

    // Initial load
    Effect::new(move |_| load(None));

    // Search
    let (search, set_search) = signal(String::new());
    let on_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        load(Some(search.get_untracked()));
    };

    // Add
    let (add_name, set_add_name) = signal(String::new());
    let (add_instructions, set_add_instructions) = signal(String::new());
    let adding = InFlight::new();
    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = add_name.get_untracked();
        let instructions = add_instructions.get_untracked();
        let recipes = client.get_value();
        adding.spawn(async move {
            let result = recipes.create(&name, &instructions).await;
            let clear = move || {
                set_add_name.set(String::new());
                set_add_instructions.set(String::new());
            };
            settle_write(result, Action::CreateRecipe, clear, sync);
        });
    };

    // Update
    let (update_name, set_update_name) = signal(String::new());
    let (update_instructions, set_update_instructions) = signal(String::new());
    let updating = InFlight::new();
    let on_update = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = update_name.get_untracked();
        let instructions = update_instructions.get_untracked();
        let recipes = client.get_value();
        updating.spawn(async move {
            let result = recipes.update(&name, &instructions).await;
            let clear = move || {
                set_update_name.set(String::new());
                set_update_instructions.set(String::new());
            };
            settle_write(result, Action::UpdateRecipe, clear, sync);
        });
    };

    // Delete by name
    let (delete_name, set_delete_name) = signal(String::new());
    let deleting = InFlight::new();
    let on_delete = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = delete_name.get_untracked();
        let recipes = client.get_value();
        deleting.spawn(async move {
            match recipes.delete(&name).await {
                Ok(_) => {
                    set_delete_name.set(String::new());
                    sync();
                }
                Err(err) => browser::report(&err),
            }
        });
    };

    // Delete from a row
    let delete_row = Callback::new(move |id: u32| {
        let recipes = client.get_value();
        deleting.spawn(async move {
            match recipes.delete_by_id(id).await {
                Ok(_) => sync(),
                Err(err) => browser::report(&err),
            }
        });
    });

    view! {
        <div class="recipe-page">
            <SessionBar />
            <h1>"Recipes"</h1>

            <form class="search-form" on:submit=on_search>
                <input
                    id="search-input"
                    type="search"
                    placeholder="Search by name"
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <button id="search-button" type="submit">"Search"</button>
            </form>

            <RecipeList
                recipes=Signal::derive(move || store.recipes().get())
                on_delete=delete_row
            />

            <form class="add-recipe-form" on:submit=on_add>
                <h2>"Add recipe"</h2>
                <input
                    id="add-recipe-name-input"
                    type="text"
                    placeholder="Name"
                    prop:value=move || add_name.get()
                    on:input=move |ev| set_add_name.set(event_target_value(&ev))
                />
                <textarea
                    id="add-recipe-instructions-input"
                    placeholder="Instructions"
                    prop:value=move || add_instructions.get()
                    on:input=move |ev| set_add_instructions.set(event_target_value(&ev))
                ></textarea>
                <button
                    id="add-recipe-submit-input"
                    type="submit"
                    disabled=move || adding.is_busy()
                >
                    "Add"
                </button>
            </form>

            <form class="update-recipe-form" on:submit=on_update>
                <h2>"Update recipe"</h2>
                <input
                    id="update-recipe-name-input"
                    type="text"
                    placeholder="Name"
                    prop:value=move || update_name.get()
                    on:input=move |ev| set_update_name.set(event_target_value(&ev))
                />
                <textarea
                    id="update-recipe-instructions-input"
                    placeholder="New instructions"
                    prop:value=move || update_instructions.get()
                    on:input=move |ev| {
                        set_update_instructions.set(event_target_value(&ev))
                    }
                ></textarea>
                <button
                    id="update-recipe-submit-input"
                    type="submit"
                    disabled=move || updating.is_busy()
                >
                    "Update"
                </button>
            </form>

            <form class="delete-recipe-form" on:submit=on_delete>
                <h2>"Delete recipe"</h2>
                <input
                    id="delete-recipe-name-input"
                    type="text"
                    placeholder="Name"
                    prop:value=move || delete_name.get()
                    on:input=move |ev| set_delete_name.set(event_target_value(&ev))
                />
                <button
                    id="delete-recipe-submit-input"
                    type="submit"
                    disabled=move || deleting.is_busy()
                >
                    "Delete"
                </button>
            </form>
        </div>
    }
}
