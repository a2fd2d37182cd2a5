//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::clients::SessionClient;
use crate::config::{AppConfig, PageRoutes};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Backend client (not `Send`, so kept in local storage)
    api: StoredValue<ApiClient, LocalStorage>,
    sessions: StoredValue<Rc<SessionClient>, LocalStorage>,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(api: ApiClient, config: AppConfig) -> Self {
        let sessions = Rc::new(SessionClient::new(api.clone(), &config));
        Self {
            api: StoredValue::new_local(api),
            sessions: StoredValue::new_local(sessions),
            config: StoredValue::new(config),
        }
    }

    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    pub fn sessions(&self) -> Rc<SessionClient> {
        self.sessions.get_value()
    }

    pub fn routes(&self) -> PageRoutes {
        self.config.with_value(|config| config.routes.clone())
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

/// Per-form in-flight guard.
///
/// While a request is pending the form's submit button is disabled and
/// further submits are ignored.
#[derive(Clone, Copy)]
pub struct InFlight {
    busy: ReadSignal<bool>,
    set_busy: WriteSignal<bool>,
}

impl InFlight {
    pub fn new() -> Self {
        let (busy, set_busy) = signal(false);
        Self { busy, set_busy }
    }

    /// Tracked read, for `disabled=`
    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    /// Run `task` unless one is already pending
    pub fn spawn<F>(self, task: F)
    where
        F: Future<Output = ()> + 'static,
    {
        if self.busy.get_untracked() {
            log::debug!("[APP] Ignoring submit while a request is pending");
            return;
        }
        self.set_busy.set(true);
        spawn_local(async move {
            task.await;
            self.set_busy.set(false);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use any_spawner::Executor;
    use leptos::reactive::owner::Owner;
    use tokio::sync::oneshot;
    use tokio::task::LocalSet;

    async fn settle() {
        for _ in 0..5 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn test_in_flight_ignores_submit_while_busy() {
        let _ = Executor::init_tokio();
        let owner = Owner::new();
        owner.set();

        LocalSet::new()
            .run_until(async {
                let in_flight = InFlight::new();
                let runs = Rc::new(Cell::new(0));
                let (release, pending) = oneshot::channel::<()>();

                let first = runs.clone();
                in_flight.spawn(async move {
                    first.set(first.get() + 1);
                    let _ = pending.await;
                });
                assert!(in_flight.is_busy());

                let second = runs.clone();
                in_flight.spawn(async move {
                    second.set(second.get() + 10);
                });
                settle().await;
                assert_eq!(runs.get(), 1);
                assert!(in_flight.is_busy());

                release.send(()).unwrap();
                settle().await;
                assert!(!in_flight.is_busy());
                assert_eq!(runs.get(), 1);
            })
            .await;
    }
}
