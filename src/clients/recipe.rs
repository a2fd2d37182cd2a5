//! Recipe Controller
//!
//! Holds the recipe list for the page. Creates and updates re-fetch the
//! whole list; deletes patch the local list in place.

use std::cell::RefCell;

use super::logged;
use crate::api::ApiClient;
use crate::cache::{EntityCache, Refresh, RequestSequence};
use crate::error::{Action, ActionError, ActionResultExt, ClientError, ValidationError};
use crate::models::{Recipe, RecipeDraft};

pub struct RecipeClient {
    api: ApiClient,
    cache: RefCell<EntityCache<Recipe>>,
    sequence: RequestSequence,
}

impl RecipeClient {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            cache: RefCell::new(EntityCache::default()),
            sequence: RequestSequence::default(),
        }
    }

    pub fn recipes(&self) -> Vec<Recipe> {
        self.cache.borrow().snapshot()
    }

    /// Fetch all recipes, or those matching `query`, and replace the list
    pub async fn refresh(&self, query: Option<&str>) -> Result<Refresh, ActionError> {
        let action = match query.map(str::trim) {
            Some(q) if !q.is_empty() => Action::SearchRecipes,
            _ => Action::FetchRecipes,
        };
        let ticket = self.sequence.begin();
        let recipes = logged("RECIPES", self.api.list_recipes(query).await.during(action))?;
        if !self.sequence.is_latest(ticket) {
            log::debug!("[RECIPES] Dropping stale list (ticket {})", ticket);
            return Ok(Refresh::Superseded);
        }
        log::info!("[RECIPES] Loaded {} recipes", recipes.len());
        self.cache.borrow_mut().replace(recipes);
        Ok(Refresh::Applied)
    }

    pub async fn create(&self, name: &str, instructions: &str) -> Result<Refresh, ActionError> {
        let result = async {
            let draft = RecipeDraft::new(name, instructions)?;
            self.api.create_recipe(&draft).await
        }
        .await;
        logged("RECIPES", result.during(Action::CreateRecipe))?;
        self.refresh(None).await
    }

    /// Replace the instructions of the recipe named `name`
    pub async fn update(&self, name: &str, instructions: &str) -> Result<Refresh, ActionError> {
        let result = async {
            let draft = RecipeDraft::new(name, instructions)?;
            let target = self.cache.borrow().resolve(&draft.name)?;
            self.api.update_recipe(target.id, &draft).await
        }
        .await;
        logged("RECIPES", result.during(Action::UpdateRecipe))?;
        self.refresh(None).await
    }

    /// Delete the last recipe named `name` and drop it from the list
    pub async fn delete(&self, name: &str) -> Result<Recipe, ActionError> {
        let result = async {
            let name = name.trim();
            if name.is_empty() {
                return Err(ClientError::from(ValidationError::MissingRecipeName));
            }
            let target = self.cache.borrow().resolve(name)?;
            self.api.delete_recipe(target.id).await?;
            self.sequence.invalidate();
            self.cache
                .borrow_mut()
                .remove_resolved(target)
                .ok_or_else(|| ClientError::UnknownName {
                    kind: "recipe",
                    name: name.to_string(),
                })
        }
        .await;
        logged("RECIPES", result.during(Action::DeleteRecipe))
    }

    /// Delete the row bound to `id`
    pub async fn delete_by_id(&self, id: u32) -> Result<Option<Recipe>, ActionError> {
        logged(
            "RECIPES",
            self.api.delete_recipe(id).await.during(Action::DeleteRecipe),
        )?;
        self.sequence.invalidate();
        Ok(self.cache.borrow_mut().remove_id(id))
    }
}
