//! Cross-cutting handling of failed responses.
//!
//! Every request made through [`super::ApiClient`] runs its failures through the
//! client's [`InterceptorChain`], in registration order.

use super::ApiError;
use std::sync::Arc;

pub trait ResponseInterceptor: Send + Sync {
    fn on_error(&self, error: &ApiError);
}

#[derive(Clone, Default)]
pub struct InterceptorChain {
    interceptors: Vec<Arc<dyn ResponseInterceptor>>,
}

impl InterceptorChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, interceptor: impl ResponseInterceptor + 'static) -> Self {
        self.interceptors.push(Arc::new(interceptor));
        self
    }

    pub fn len(&self) -> usize {
        self.interceptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interceptors.is_empty()
    }

    pub fn on_error(&self, error: &ApiError) {
        for i in &self.interceptors {
            i.on_error(error);
        }
    }
}

/// Owner of the process-wide bearer credential.
pub trait CredentialStore: Send + Sync {
    fn invalidate(&self);
}

pub trait Navigator: Send + Sync {
    fn redirect(&self, path: &str);
}

/// On 401: drop the stored credential and send the user to the login screen.
pub struct UnauthorizedInterceptor<C, N> {
    credentials: C,
    navigator: N,
    login_path: &'static str,
}

impl<C: CredentialStore, N: Navigator> UnauthorizedInterceptor<C, N> {
    pub fn new(credentials: C, navigator: N) -> Self {
        Self {
            credentials,
            navigator,
            login_path: "/login",
        }
    }
}

impl<C: CredentialStore, N: Navigator> ResponseInterceptor for UnauthorizedInterceptor<C, N> {
    fn on_error(&self, error: &ApiError) {
        if !error.is_unauthorized() {
            return;
        }
        tracing::warn!("session rejected by backend, signing out");
        self.credentials.invalidate();
        self.navigator.redirect(self.login_path);
    }
}

pub struct TracingInterceptor;

impl ResponseInterceptor for TracingInterceptor {
    fn on_error(&self, error: &ApiError) {
        match error {
            ApiError::Network(_) => tracing::warn!(%error, "backend unreachable"),
            ApiError::Remote { status, .. } => {
                tracing::warn!(status, %error, "backend returned an error")
            }
            ApiError::Parse(_) => tracing::error!(%error, "unexpected backend response"),
        }
    }
}

/// Clears the token and cached user from `localStorage`.
pub struct BrowserCredentials;

impl CredentialStore for BrowserCredentials {
    fn invalidate(&self) {
        crate::storage::clear_session();
    }
}

/// Full page navigation, which also resets all in-memory state.
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn redirect(&self, path: &str) {
        if let Some(w) = web_sys::window() {
            let _ = w.location().set_href(path);
        }
    }
}

/// The chain installed on the browser client.
pub fn browser_chain() -> InterceptorChain {
    InterceptorChain::new()
        .with(TracingInterceptor)
        .with(UnauthorizedInterceptor::new(BrowserCredentials, BrowserNavigator))
}
