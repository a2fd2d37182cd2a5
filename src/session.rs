//! Session Storage
//!
//! The bearer token and admin flag live in tab-scoped storage behind
//! the `SessionStore` trait.

use crate::error::ClientError;

pub const AUTH_TOKEN_KEY: &str = "auth-token";
pub const IS_ADMIN_KEY: &str = "is-admin";

/// Key/value store scoped to the browser tab
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), ClientError>;
    fn clear(&self) -> Result<(), ClientError>;
}

/// Signed-in state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub is_admin: bool,
}

impl Session {
    /// Parse the login response body, `"<token> <isAdmin>"`.
    ///
    /// A missing flag reads as not admin; a missing token is an error.
    pub fn parse(body: &str) -> Result<Self, ClientError> {
        let mut parts = body.split_whitespace();
        let token = parts
            .next()
            .ok_or_else(|| ClientError::Decode("login response carried no token".to_string()))?;
        let is_admin = parts.next() == Some("true");
        Ok(Self {
            token: token.to_string(),
            is_admin,
        })
    }

    /// Write both keys, or neither
    pub fn save(&self, store: &dyn SessionStore) -> Result<(), ClientError> {
        let flag = if self.is_admin { "true" } else { "false" };
        let written = store
            .set(AUTH_TOKEN_KEY, &self.token)
            .and_then(|()| store.set(IS_ADMIN_KEY, flag));
        if written.is_err() {
            if let Err(e) = store.clear() {
                log::warn!("[SESSION] Could not clear partial session: {}", e);
            }
        }
        written
    }

    /// Read back a stored session, if there is a token
    pub fn load(store: &dyn SessionStore) -> Option<Self> {
        let token = store.get(AUTH_TOKEN_KEY)?;
        let is_admin = store.get(IS_ADMIN_KEY).as_deref() == Some("true");
        Some(Self { token, is_admin })
    }
}

/// `window.sessionStorage`
pub struct BrowserSessionStorage {
    storage: web_sys::Storage,
}

impl BrowserSessionStorage {
    pub fn open() -> Result<Self, ClientError> {
        let window = web_sys::window()
            .ok_or_else(|| ClientError::Storage("no window".to_string()))?;
        let storage = window
            .session_storage()
            .map_err(|e| ClientError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| ClientError::Storage("session storage disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl SessionStore for BrowserSessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ClientError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| ClientError::Storage(format!("{:?}", e)))
    }

    fn clear(&self) -> Result<(), ClientError> {
        self.storage
            .clear()
            .map_err(|e| ClientError::Storage(format!("{:?}", e)))
    }
}
