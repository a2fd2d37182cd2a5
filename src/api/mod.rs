//! Backend API Bindings
//!
//! One function per backend endpoint, organized by domain.

mod transport;
mod auth;
mod recipe;
mod ingredient;

use std::rc::Rc;

use crate::session::{Session, SessionStore};

pub use transport::*;

/// Backend client shared by every page controller
#[derive(Clone)]
pub struct ApiClient {
    transport: Rc<dyn Transport>,
    session: Rc<dyn SessionStore>,
}

impl ApiClient {
    pub fn new(transport: Rc<dyn Transport>, session: Rc<dyn SessionStore>) -> Self {
        Self { transport, session }
    }

    pub fn session_store(&self) -> &dyn SessionStore {
        self.session.as_ref()
    }

    /// Request carrying the stored bearer token, if any
    fn authed(&self, method: Method, path: impl Into<String>) -> ApiRequest {
        let token = Session::load(self.session.as_ref()).map(|session| session.token);
        ApiRequest::new(method, path).bearer(token)
    }
}
