//! Session Controller
//!
//! Login, registration and logout.

use std::time::Duration;

use super::{logged, Redirect};
use crate::api::ApiClient;
use crate::config::{AppConfig, PageRoutes};
use crate::error::{Action, ActionError, ActionResultExt, ClientError};
use crate::models::{Credentials, Registration};
use crate::session::Session;

pub struct SessionClient {
    api: ApiClient,
    routes: PageRoutes,
    login_redirect_delay: Duration,
}

impl SessionClient {
    pub fn new(api: ApiClient, config: &AppConfig) -> Self {
        Self {
            api,
            routes: config.routes.clone(),
            login_redirect_delay: config.login_redirect_delay,
        }
    }

    /// Stored session for this tab, if signed in
    pub fn current(&self) -> Option<Session> {
        Session::load(self.api.session_store())
    }

    /// Sign in, persist the session and head to the recipe page
    pub async fn login(&self, username: &str, password: &str) -> Result<Redirect, ActionError> {
        logged("AUTH", self.try_login(username, password).await.during(Action::Login))
    }

    async fn try_login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Redirect, ClientError> {
        let credentials = Credentials::new(username, password)?;
        let session = self.api.login(&credentials).await?;
        session.save(self.api.session_store())?;
        log::info!("[AUTH] Signed in as {} (admin={})", credentials.username, session.is_admin);
        Ok(Redirect {
            to: self.routes.recipes.clone(),
            after: self.login_redirect_delay,
        })
    }

    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
        repeat_password: &str,
    ) -> Result<Redirect, ActionError> {
        let result = async {
            let registration = Registration::new(username, email, password, repeat_password)?;
            self.api.register(&registration).await?;
            log::info!("[AUTH] Registered {}", registration.username);
            Ok::<_, ClientError>(Redirect::now(&self.routes.login))
        }
        .await;
        logged("AUTH", result.during(Action::Register))
    }

    /// Clears the tab's session only once the backend accepted the logout
    pub async fn logout(&self) -> Result<Redirect, ActionError> {
        let result = async {
            self.api.logout().await?;
            self.api.session_store().clear()?;
            log::info!("[AUTH] Signed out");
            Ok::<_, ClientError>(Redirect::now(&self.routes.login))
        }
        .await;
        logged("AUTH", result.during(Action::Logout))
    }
}
