//! Ingredient Page Component

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser;
use crate::cache::Refresh;
use crate::clients::IngredientClient;
use crate::components::IngredientList;
use crate::context::{use_app_context, InFlight};
use crate::error::Action;
use crate::store::{store_set_ingredients, use_app_store, AppStateStoreFields};

#[component]
pub fn IngredientPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let client = StoredValue::new_local(Rc::new(IngredientClient::new(ctx.api())));
    let recipes_href = ctx.routes().recipes;

    let sync = move || store_set_ingredients(&store, client.get_value().ingredients());

    // Load ingredients on mount
    Effect::new(move |_| {
        let ingredients = client.get_value();
        spawn_local(async move {
            match ingredients.refresh().await {
                Ok(Refresh::Applied) => sync(),
                Ok(Refresh::Superseded) => {}
                Err(err) => browser::report(&err),
            }
        });
    });

    let (add_name, set_add_name) = signal(String::new());
    let adding = InFlight::new();
    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = add_name.get_untracked();
        let ingredients = client.get_value();
        adding.spawn(async move {
            match ingredients.create(&name).await {
                Ok(refresh) => {
                    set_add_name.set(String::new());
                    if refresh == Refresh::Applied {
                        sync();
                    }
                }
                Err(err) => {
                    // The add landed; only the follow-up fetch failed
                    if err.action == Action::FetchIngredients {
                        set_add_name.set(String::new());
                    }
                    browser::report(&err);
                }
            }
        });
    };

    let (delete_name, set_delete_name) = signal(String::new());
    let deleting = InFlight::new();
    let on_delete = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = delete_name.get_untracked();
        let ingredients = client.get_value();
        deleting.spawn(async move {
            match ingredients.delete(&name).await {
                Ok(_) => {
                    set_delete_name.set(String::new());
                    sync();
                }
                Err(err) => browser::report(&err),
            }
        });
    };

    let delete_row = Callback::new(move |id: u32| {
        let ingredients = client.get_value();
        deleting.spawn(async move {
            match ingredients.delete_by_id(id).await {
                Ok(_) => sync(),
                Err(err) => browser::report(&err),
            }
        });
    });

    view! {
        <div class="ingredient-page">
            <nav class="page-nav">
                <a href=recipes_href>"Back to recipes"</a>
            </nav>
            <h1>"Ingredients"</h1>

            <IngredientList
                ingredients=Signal::derive(move || store.ingredients().get())
                on_delete=delete_row
            />

            <form class="add-ingredient-form" on:submit=on_add>
                <input
                    id="add-ingredient-name-input"
                    type="text"
                    placeholder="Ingredient name"
                    prop:value=move || add_name.get()
                    on:input=move |ev| set_add_name.set(event_target_value(&ev))
                />
                <button
                    id="add-ingredient-submit-button"
                    type="submit"
                    disabled=move || adding.is_busy()
                >
                    "Add"
                </button>
            </form>

            <form class="delete-ingredient-form" on:submit=on_delete>
                <input
                    id="delete-ingredient-name-input"
                    type="text"
                    placeholder="Ingredient name"
                    prop:value=move || delete_name.get()
                    on:input=move |ev| set_delete_name.set(event_target_value(&ev))
                />
                <button
                    id="delete-ingredient-submit-button"
                    type="submit"
                    disabled=move || deleting.is_busy()
                >
                    "Delete"
                </button>
            </form>
        </div>
    }
}
