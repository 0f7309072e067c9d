//! Client for a remote subscription API
//!
//! Creates and cancels the signed-in user's subscription, authenticating each
//! request with the bearer token supplied by a [`TokenProvider`].

pub mod auth;
pub mod client;
pub mod config;
pub mod logging;
pub mod transport;
pub mod types;

pub use auth::{bearer_header, EnvToken, StaticToken, TokenProvider, TokenStore, AUTH_TOKEN_ENV};
pub use client::{SubscriptionClient, SubscriptionError, SUBSCRIPTION_PATH};
pub use config::{ClientConfig, ConfigError, API_URL_ENV};
pub use logging::init_tracing;
pub use transport::{Headers, HttpTransport, ReqwestTransport, TransportError, TransportResponse};
pub use types::SubscriptionRequest;
