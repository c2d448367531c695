//! Page view state
//!
//! A [`Page`] pairs one data loader with the state a view renders from.
//! Mounting is guarded: without a session the page asks for the login screen
//! and never touches the network.

use std::future::Future;
use std::time::Instant;

use chronodesk_infra::api::{ApiError, ApiErrorCategory, TokenStore};
use futures::future::BoxFuture;
use futures::FutureExt;
use tracing::{debug, info};

use crate::utils::logging::log_command_execution;

/// What a view renders
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed { message: String, category: ApiErrorCategory },
}

impl<T> ViewState<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// User-facing error text, if the last load failed
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Result of mounting or retrying a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    /// The page loaded (or failed) and should be shown
    Rendered,
    /// No usable session; show the login screen instead
    RedirectToLogin,
}

/// Whether the user is signed in, read from the token store at navigation time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionState {
    authenticated: bool,
}

impl SessionState {
    pub fn authenticated() -> Self {
        Self { authenticated: true }
    }

    pub fn anonymous() -> Self {
        Self { authenticated: false }
    }

    pub async fn from_store(store: &dyn TokenStore) -> Self {
        Self { authenticated: store.is_authenticated().await }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}

type Loader<T> = Box<dyn Fn() -> BoxFuture<'static, Result<T, ApiError>> + Send + Sync>;

/// A view backed by one remote read
pub struct Page<T> {
    name: &'static str,
    loader: Loader<T>,
    state: ViewState<T>,
}

impl<T> std::fmt::Debug for Page<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page").field("name", &self.name).finish_non_exhaustive()
    }
}

impl<T: Send + 'static> Page<T> {
    /// Build a page; `loader` is called once per mount or retry.
    pub fn new<F, Fut>(name: &'static str, loader: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, ApiError>> + Send + 'static,
    {
        Self { name, loader: Box::new(move || loader().boxed()), state: ViewState::Idle }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn state(&self) -> &ViewState<T> {
        &self.state
    }

    pub fn into_state(self) -> ViewState<T> {
        self.state
    }

    /// Load the page if the user is signed in
    pub async fn mount(&mut self, session: &SessionState) -> PageOutcome {
        if !session.is_authenticated() {
            info!(page = self.name, "no session, redirecting to login");
            self.state = ViewState::Idle;
            return PageOutcome::RedirectToLogin;
        }
        self.load().await
    }

    /// Re-issue the loader, e.g. after the user dismisses an error
    pub async fn retry(&mut self) -> PageOutcome {
        debug!(page = self.name, "retrying page load");
        self.load().await
    }

    async fn load(&mut self) -> PageOutcome {
        self.state = ViewState::Loading;
        let start = Instant::now();
        let result = (self.loader)().await;
        log_command_execution(self.name, start.elapsed(), result.is_ok());

        match result {
            Ok(data) => {
                self.state = ViewState::Loaded(data);
                PageOutcome::Rendered
            }
            // The token vanished or was rejected after the guard ran.
            Err(err @ (ApiError::MissingToken | ApiError::Status { status: 401, .. })) => {
                self.state = ViewState::Failed { message: err.to_string(), category: err.category() };
                PageOutcome::RedirectToLogin
            }
            Err(err) => {
                self.state = ViewState::Failed { message: err.to_string(), category: err.category() };
                PageOutcome::Rendered
            }
        }
    }
}
