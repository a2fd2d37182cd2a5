//! Client Errors
//!
//! Local validation failures and remote failures, plus the mapping from
//! a failed user action to the alert text shown for it.

use thiserror::Error;

/// Input rejected before any request is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("No username provided")]
    MissingUsername,
    #[error("No email provided")]
    MissingEmail,
    #[error("No password provided")]
    MissingPassword,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("No recipe name provided")]
    MissingRecipeName,
    #[error("No recipe provided")]
    MissingInstructions,
    #[error("No ingredient provided")]
    MissingIngredientName,
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// Name lookup against the local list found nothing
    #[error("No {kind} named \"{name}\"")]
    UnknownName { kind: &'static str, name: String },

    #[error("Backend rejected the credentials")]
    Unauthorized,

    #[error("Username or email already registered")]
    Conflict,

    #[error("Backend responded with status {0}")]
    Status(u16),

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Unexpected response body: {0}")]
    Decode(String),

    #[error("Session storage error: {0}")]
    Storage(String),
}

impl ClientError {
    /// Classify a non-success HTTP status
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => Self::Unauthorized,
            409 => Self::Conflict,
            other => Self::Status(other),
        }
    }

    /// True when the failure happened before anything was sent
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Invalid(_) | Self::UnknownName { .. })
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// HTTP status carried by the error, if it came from one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Conflict => Some(409),
            Self::Status(status) => Some(*status),
            _ => None,
        }
    }
}

/// User-triggered operations, used to pick the alert text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Login,
    Register,
    Logout,
    FetchRecipes,
    SearchRecipes,
    CreateRecipe,
    UpdateRecipe,
    DeleteRecipe,
    FetchIngredients,
    CreateIngredient,
    DeleteIngredient,
}

impl Action {
    /// Alert text for a failure of this action
    pub fn failure_message(self, error: &ClientError) -> String {
        if error.is_local() {
            return error.to_string();
        }
        let network = error.is_transport();
        let text = match self {
            Action::Login => match error {
                ClientError::Unauthorized => "Incorrect login!",
                _ if network => "Network error, please try again",
                _ => "Unknown issue!",
            },
            Action::Register => match error {
                ClientError::Conflict => "Username and Email already exist",
                _ => "Failed to register, please try again",
            },
            Action::Logout => "Failed to logout",
            Action::FetchRecipes if network => "Network error when fetching recipes",
            Action::FetchRecipes => "Unable to get recipes",
            Action::SearchRecipes if network => {
                "Network error when searching for recipes, please try again"
            }
            Action::SearchRecipes => "No available recipes found",
            Action::CreateRecipe if network => "Network error when adding recipe",
            Action::CreateRecipe => {
                return match error.status() {
                    Some(status) => format!("Error when adding recipe (status code {status})"),
                    None => "Error when adding recipe".to_string(),
                };
            }
            Action::UpdateRecipe => "Failed to update recipe",
            Action::DeleteRecipe => "Failed to delete recipe",
            Action::FetchIngredients => "Unable to fetch ingredients",
            Action::CreateIngredient => "Unable to add ingredient",
            Action::DeleteIngredient => "Failed to delete ingredient",
        };
        text.to_string()
    }
}

/// A failed action together with its cause
#[derive(Debug, Error)]
#[error("{}", .action.failure_message(.source))]
pub struct ActionError {
    pub action: Action,
    #[source]
    pub source: ClientError,
}

impl ActionError {
    pub fn new(action: Action, source: impl Into<ClientError>) -> Self {
        Self { action, source: source.into() }
    }
}

/// Tag a client result with the action it belongs to
pub trait ActionResultExt<T> {
    fn during(self, action: Action) -> Result<T, ActionError>;
}

impl<T, E: Into<ClientError>> ActionResultExt<T> for Result<T, E> {
    fn during(self, action: Action) -> Result<T, ActionError> {
        self.map_err(|source| ActionError::new(action, source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert!(matches!(ClientError::from_status(401), ClientError::Unauthorized));
        assert!(matches!(ClientError::from_status(409), ClientError::Conflict));
        assert!(matches!(ClientError::from_status(500), ClientError::Status(500)));
        assert_eq!(ClientError::from_status(403).status(), Some(403));
    }

    #[test]
    fn test_login_messages() {
        assert_eq!(Action::Login.failure_message(&ClientError::Unauthorized), "Incorrect login!");
        assert_eq!(Action::Login.failure_message(&ClientError::Status(500)), "Unknown issue!");
        assert_eq!(Action::Login.failure_message(&ClientError::Status(409)), "Unknown issue!");
        assert_eq!(
            Action::Login.failure_message(&ClientError::Transport("offline".into())),
            "Network error, please try again"
        );
    }

    #[test]
    fn test_local_failures_show_their_own_text() {
        let error = ClientError::from(ValidationError::PasswordMismatch);
        assert_eq!(Action::Register.failure_message(&error), "Passwords do not match");

        let unknown = ClientError::UnknownName { kind: "recipe", name: "Soup".into() };
        assert_eq!(Action::DeleteRecipe.failure_message(&unknown), "No recipe named \"Soup\"");
    }

    #[test]
    fn test_create_recipe_reports_status() {
        let error = ActionError::new(Action::CreateRecipe, ClientError::Status(400));
        assert_eq!(error.to_string(), "Error when adding recipe (status code 400)");
    }

    #[test]
    fn test_register_conflict() {
        assert_eq!(
            Action::Register.failure_message(&ClientError::Conflict),
            "Username and Email already exist"
        );
        assert_eq!(
            Action::Register.failure_message(&ClientError::Status(500)),
            "Failed to register, please try again"
        );
    }
}
