//! Bearer token access
//!
//! The client reads the current auth token through a [`TokenProvider`] once per
//! operation. Providers never hand out empty strings: an empty token is treated
//! the same as no token at all.

use parking_lot::RwLock;
use std::sync::Arc;

/// Default env var read by [`EnvToken`]
pub const AUTH_TOKEN_ENV: &str = "SUBSCRIPTION_AUTH_TOKEN";

/// Supplies the current bearer token, or `None` when signed out
pub trait TokenProvider: Send + Sync {
    fn token(&self) -> Option<String>;
}

impl<F> TokenProvider for F
where
    F: Fn() -> Option<String> + Send + Sync,
{
    fn token(&self) -> Option<String> {
        non_empty(self())
    }
}

/// Build the `Authorization` header value for a token
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {}", token)
}

fn non_empty(token: Option<String>) -> Option<String> {
    token.filter(|t| !t.is_empty())
}

/// Fixed token, useful for scripts and tests
#[derive(Debug, Clone, Default)]
pub struct StaticToken(Option<String>);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    pub fn none() -> Self {
        Self(None)
    }
}

impl TokenProvider for StaticToken {
    fn token(&self) -> Option<String> {
        non_empty(self.0.clone())
    }
}

/// Reads the token from an environment variable on every call
#[derive(Debug, Clone)]
pub struct EnvToken {
    var: String,
}

impl EnvToken {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    pub fn var_name(&self) -> &str {
        &self.var
    }
}

impl Default for EnvToken {
    fn default() -> Self {
        Self::new(AUTH_TOKEN_ENV)
    }
}

impl TokenProvider for EnvToken {
    fn token(&self) -> Option<String> {
        non_empty(std::env::var(&self.var).ok())
    }
}

/// Shared, in-memory session state
///
/// Clones share the same slot, so a token set through one handle is seen by
/// every client holding another.
#[derive(Debug, Clone, Default)]
pub struct TokenStore {
    inner: Arc<RwLock<Option<String>>>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sign_in(&self, token: impl Into<String>) {
        *self.inner.write() = Some(token.into());
    }

    pub fn sign_out(&self) {
        *self.inner.write() = None;
    }

    pub fn is_signed_in(&self) -> bool {
        self.token().is_some()
    }
}

impl TokenProvider for TokenStore {
    fn token(&self) -> Option<String> {
        non_empty(self.inner.read().clone())
    }
}
