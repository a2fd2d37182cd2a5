//! Frontend Models
//!
//! Data structures matching backend entities and request bodies.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Recipe data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u32,
    pub name: String,
    pub instructions: String,
}

/// Ingredient data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: u32,
    pub name: String,
}

/// Entities the user refers to by name in forms
pub trait Named {
    /// Noun used in messages ("recipe", "ingredient")
    const KIND: &'static str;

    fn id(&self) -> u32;
    fn name(&self) -> &str;
}

impl Named for Recipe {
    const KIND: &'static str = "recipe";

    fn id(&self) -> u32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Ingredient {
    const KIND: &'static str = "ingredient";

    fn id(&self) -> u32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

// ========================
// Request Bodies
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Usernames are trimmed; passwords are sent exactly as typed
    pub fn new(username: &str, password: &str) -> Result<Self, ValidationError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ValidationError::MissingUsername);
        }
        if password.is_empty() {
            return Err(ValidationError::MissingPassword);
        }
        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl Registration {
    pub fn new(
        username: &str,
        email: &str,
        password: &str,
        repeat_password: &str,
    ) -> Result<Self, ValidationError> {
        let username = username.trim();
        let email = email.trim();
        if username.is_empty() {
            return Err(ValidationError::MissingUsername);
        }
        if email.is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        if password.is_empty() {
            return Err(ValidationError::MissingPassword);
        }
        if repeat_password.is_empty() || password != repeat_password {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(Self {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}

/// Body for recipe create and full-replacement update
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeDraft {
    pub name: String,
    pub instructions: String,
}

impl RecipeDraft {
    pub fn new(name: &str, instructions: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingRecipeName);
        }
        if instructions.trim().is_empty() {
            return Err(ValidationError::MissingInstructions);
        }
        Ok(Self {
            name: name.to_string(),
            instructions: instructions.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientDraft {
    pub name: String,
}

impl IngredientDraft {
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingIngredientName);
        }
        Ok(Self { name: name.to_string() })
    }
}
