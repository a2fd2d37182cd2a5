//! Auth Endpoints
//!
//! `/login`, `/register`, `/logout`.

use super::{ApiClient, ApiRequest, Method};
use crate::error::ClientError;
use crate::models::{Credentials, Registration};
use crate::session::Session;

impl ApiClient {
    /// POST /login. The body is `"<token> <isAdmin>"`.
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, ClientError> {
        let request = ApiRequest::new(Method::Post, "/login").json(credentials)?;
        let response = self.transport.send(request).await?.success()?;
        Session::parse(&response.body)
    }

    /// POST /register, expecting 201
    pub async fn register(&self, registration: &Registration) -> Result<(), ClientError> {
        let request = ApiRequest::new(Method::Post, "/register").json(registration)?;
        self.transport.send(request).await?.success()?;
        Ok(())
    }

    pub async fn logout(&self) -> Result<(), ClientError> {
        let request = self.authed(Method::Post, "/logout");
        self.transport.send(request).await?.success()?;
        Ok(())
    }
}
