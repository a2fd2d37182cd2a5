//! Frontend Configuration
//!
//! Backend location, page routes and logging settings.

use std::time::Duration;

use log::LevelFilter;
use rolling_logger::LoggerConfig;

/// Backend used when no override is baked in at build time
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8081";

/// Delay between a successful login and the redirect
pub const LOGIN_REDIRECT_DELAY: Duration = Duration::from_millis(500);

/// Relative locations of the page documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRoutes {
    pub login: String,
    pub register: String,
    pub recipes: String,
    pub ingredients: String,
}

impl Default for PageRoutes {
    fn default() -> Self {
        Self {
            login: "../login/login-page.html".to_string(),
            register: "../register/register-page.html".to_string(),
            recipes: "../recipe/recipe-page.html".to_string(),
            ingredients: "../ingredients/ingredient-page.html".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Backend origin, without trailing slash
    pub api_base_url: String,
    pub login_redirect_delay: Duration,
    pub routes: PageRoutes,
    pub log_level: LevelFilter,
    pub log_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            login_redirect_delay: LOGIN_REDIRECT_DELAY,
            routes: PageRoutes::default(),
            log_level: LevelFilter::Info,
            log_capacity: rolling_logger::DEFAULT_CAPACITY,
        }
    }
}

impl AppConfig {
    /// Defaults with build-time overrides (`RECIPE_API_BASE_URL`, `RECIPE_LOG_LEVEL`)
    pub fn from_build_env() -> Self {
        Self::with_overrides(option_env!("RECIPE_API_BASE_URL"), option_env!("RECIPE_LOG_LEVEL"))
    }

    fn with_overrides(base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = base_url.map(str::trim).filter(|url| !url.is_empty()) {
            config.api_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(level) = log_level.and_then(|level| level.parse().ok()) {
            config.log_level = level;
        }
        config
    }

    pub fn logger(&self) -> LoggerConfig {
        LoggerConfig {
            level: self.log_level,
            capacity: self.log_capacity,
        }
    }
}
