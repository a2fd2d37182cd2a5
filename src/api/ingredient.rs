//! Ingredient Endpoints

use super::{ApiClient, Method};
use crate::error::ClientError;
use crate::models::{Ingredient, IngredientDraft};

impl ApiClient {
    pub async fn list_ingredients(&self) -> Result<Vec<Ingredient>, ClientError> {
        let request = self.authed(Method::Get, "/ingredients");
        self.transport.send(request).await?.success()?.json()
    }

    pub async fn create_ingredient(&self, draft: &IngredientDraft) -> Result<(), ClientError> {
        let request = self.authed(Method::Post, "/ingredients").json(draft)?;
        self.transport.send(request).await?.success()?;
        Ok(())
    }

    pub async fn delete_ingredient(&self, id: u32) -> Result<(), ClientError> {
        let request = self.authed(Method::Delete, format!("/ingredients/{}", id));
        self.transport.send(request).await?.success()?;
        Ok(())
    }
}
