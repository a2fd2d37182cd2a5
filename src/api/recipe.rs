//! Recipe Endpoints

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::{ApiClient, Method};
use crate::error::ClientError;
use crate::models::{Recipe, RecipeDraft};

/// `/recipes`, or `/recipes?name=<query>` for a non-blank search
pub fn recipes_path(query: Option<&str>) -> String {
    match query.map(str::trim).filter(|q| !q.is_empty()) {
        Some(q) => format!("/recipes?name={}", utf8_percent_encode(q, NON_ALPHANUMERIC)),
        None => "/recipes".to_string(),
    }
}

impl ApiClient {
    pub async fn list_recipes(&self, query: Option<&str>) -> Result<Vec<Recipe>, ClientError> {
        let request = self.authed(Method::Get, recipes_path(query));
        self.transport.send(request).await?.success()?.json()
    }

    pub async fn create_recipe(&self, draft: &RecipeDraft) -> Result<(), ClientError> {
        let request = self.authed(Method::Post, "/recipes").json(draft)?;
        self.transport.send(request).await?.success()?;
        Ok(())
    }

    /// Full replacement of the recipe with `id`
    pub async fn update_recipe(&self, id: u32, draft: &RecipeDraft) -> Result<(), ClientError> {
        let request = self.authed(Method::Put, format!("/recipes/{}", id)).json(draft)?;
        self.transport.send(request).await?.success()?;
        Ok(())
    }

    pub async fn delete_recipe(&self, id: u32) -> Result<(), ClientError> {
        let request = self.authed(Method::Delete, format!("/recipes/{}", id));
        self.transport.send(request).await?.success()?;
        Ok(())
    }
}
