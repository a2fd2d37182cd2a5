//! Ingredient Controller

use std::cell::RefCell;

use super::logged;
use crate::api::ApiClient;
use crate::cache::{EntityCache, Refresh, RequestSequence};
use crate::error::{Action, ActionError, ActionResultExt, ClientError};
use crate::models::{Ingredient, IngredientDraft};

pub struct IngredientClient {
    api: ApiClient,
    cache: RefCell<EntityCache<Ingredient>>,
    sequence: RequestSequence,
}

impl IngredientClient {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            cache: RefCell::new(EntityCache::default()),
            sequence: RequestSequence::default(),
        }
    }

    pub fn ingredients(&self) -> Vec<Ingredient> {
        self.cache.borrow().snapshot()
    }

    pub async fn refresh(&self) -> Result<Refresh, ActionError> {
        let ticket = self.sequence.begin();
        let ingredients = logged(
            "INGREDIENTS",
            self.api.list_ingredients().await.during(Action::FetchIngredients),
        )?;
        if !self.sequence.is_latest(ticket) {
            return Ok(Refresh::Superseded);
        }
        log::info!("[INGREDIENTS] Loaded {} ingredients", ingredients.len());
        self.cache.borrow_mut().replace(ingredients);
        Ok(Refresh::Applied)
    }

    pub async fn create(&self, name: &str) -> Result<Refresh, ActionError> {
        let result = async {
            let draft = IngredientDraft::new(name)?;
            self.api.create_ingredient(&draft).await
        }
        .await;
        logged("INGREDIENTS", result.during(Action::CreateIngredient))?;
        self.refresh().await
    }

    /// Delete the last ingredient named `name`; the list is patched, not re-fetched
    pub async fn delete(&self, name: &str) -> Result<Ingredient, ActionError> {
        let result = async {
            let draft = IngredientDraft::new(name)?;
            let target = self.cache.borrow().resolve(&draft.name)?;
            self.api.delete_ingredient(target.id).await?;
            self.sequence.invalidate();
            self.cache.borrow_mut().remove_resolved(target).ok_or(ClientError::UnknownName {
                kind: "ingredient",
                name: draft.name,
            })
        }
        .await;
        logged("INGREDIENTS", result.during(Action::DeleteIngredient))
    }

    pub async fn delete_by_id(&self, id: u32) -> Result<Option<Ingredient>, ActionError> {
        logged(
            "INGREDIENTS",
            self.api.delete_ingredient(id).await.during(Action::DeleteIngredient),
        )?;
        self.sequence.invalidate();
        Ok(self.cache.borrow_mut().remove_id(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use crate::api::Method;
    use crate::testing::{harness, MemorySessionStore, SlowListTransport};

    #[tokio::test]
    async fn test_delete_duplicate_name_hits_last_match() {
        let h = harness(Some("tok"));
        h.transport
            .respond(200, r#"[{"id":1,"name":"Salt"},{"id":2,"name":"Salt"}]"#)
            .respond(200, "");
        let client = IngredientClient::new(h.api.clone());
        client.refresh().await.unwrap();

        let removed = client.delete("Salt").await.unwrap();

        assert_eq!(removed.id, 2);
        assert_eq!(
            h.transport.calls(),
            vec![
                (Method::Get, "/ingredients".to_string()),
                (Method::Delete, "/ingredients/2".to_string()),
            ]
        );
        assert_eq!(client.ingredients(), vec![Ingredient { id: 1, name: "Salt".to_string() }]);
    }

    #[tokio::test]
    async fn test_create_posts_then_refetches() {
        let h = harness(Some("tok"));
        h.transport.respond(201, "").respond(200, r#"[{"id":3,"name":"Thyme"}]"#);
        let client = IngredientClient::new(h.api.clone());

        client.create(" Thyme ").await.unwrap();

        let requests = h.transport.requests();
        assert_eq!(requests[0].body, Some(serde_json::json!({"name": "Thyme"})));
        assert_eq!(requests[1].method, Method::Get);
        assert_eq!(client.ingredients()[0].name, "Thyme");
    }

    #[tokio::test]
    async fn test_empty_name_sends_nothing() {
        let h = harness(Some("tok"));
        let client = IngredientClient::new(h.api.clone());

        assert_eq!(client.create("").await.unwrap_err().to_string(), "No ingredient provided");
        assert_eq!(client.delete("").await.unwrap_err().to_string(), "No ingredient provided");
        assert!(h.transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_failures_use_ingredient_messages() {
        let h = harness(Some("tok"));
        h.transport.respond(500, "").respond(403, "");
        let client = IngredientClient::new(h.api.clone());

        let err = client.refresh().await.unwrap_err();
        assert_eq!(err.to_string(), "Unable to fetch ingredients");
        let err = client.create("Basil").await.unwrap_err();
        assert_eq!(err.to_string(), "Unable to add ingredient");
        assert_eq!(h.transport.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_delete_by_id_keeps_same_named_rows() {
        let h = harness(Some("tok"));
        h.transport
            .respond(200, r#"[{"id":1,"name":"Salt"},{"id":2,"name":"Salt"}]"#)
            .respond(204, "");
        let client = IngredientClient::new(h.api.clone());
        client.refresh().await.unwrap();

        client.delete_by_id(1).await.unwrap();

        assert_eq!(h.transport.calls()[1], (Method::Delete, "/ingredients/1".to_string()));
        assert_eq!(client.ingredients().iter().map(|i| i.id).collect::<Vec<_>>(), vec![2]);
    }

    #[tokio::test]
    async fn test_row_delete_outlasts_list_fetched_before_it() {
        let transport = Rc::new(SlowListTransport::new(
            r#"[{"id":1,"name":"Salt"},{"id":2,"name":"Pepper"}]"#,
        ));
        let api = ApiClient::new(transport.clone(), Rc::new(MemorySessionStore::default()));
        let client = IngredientClient::new(api);
        client.refresh().await.unwrap();

        let (listed, deleted) = tokio::join!(client.refresh(), client.delete_by_id(1));

        assert_eq!(listed.unwrap(), Refresh::Superseded);
        assert_eq!(deleted.unwrap().map(|i| i.id), Some(1));
        assert_eq!(client.ingredients(), vec![Ingredient { id: 2, name: "Pepper".to_string() }]);
        assert_eq!(transport.calls()[2], (Method::Delete, "/ingredients/1".to_string()));
    }
}
