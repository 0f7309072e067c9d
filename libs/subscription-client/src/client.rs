//! Subscription API client
//!
//! Both operations follow the same shape: read the token, refuse locally if
//! there is none, otherwise issue exactly one request and hand back whatever
//! the transport returns.

use crate::auth::{bearer_header, TokenProvider};
use crate::config::ClientConfig;
use crate::transport::{Headers, HttpTransport, ReqwestTransport, TransportError, TransportResponse};
use crate::types::SubscriptionRequest;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Path of the subscription resource, relative to the base URL
pub const SUBSCRIPTION_PATH: &str = "/subscription";

#[derive(Error, Debug)]
pub enum SubscriptionError {
    #[error("You are not signed in.")]
    Unauthenticated,

    #[error(transparent)]
    Transport(#[from] TransportError),
}

pub type Result<T> = std::result::Result<T, SubscriptionError>;

/// Client for the `/subscription` resource
pub struct SubscriptionClient {
    base_url: String,
    tokens: Arc<dyn TokenProvider>,
    transport: Arc<dyn HttpTransport>,
}

impl SubscriptionClient {
    pub fn new(
        base_url: impl Into<String>,
        tokens: Arc<dyn TokenProvider>,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            tokens,
            transport,
        }
    }

    /// Build a client backed by reqwest, using the configured URL and timeouts
    pub fn from_config(config: &ClientConfig, tokens: Arc<dyn TokenProvider>) -> Result<Self> {
        let transport = ReqwestTransport::new(config.timeout(), config.connect_timeout())?;
        Ok(Self::new(config.base_url.clone(), tokens, Arc::new(transport)))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the subscription resource
    pub fn subscription_url(&self) -> String {
        format!("{}{}", self.base_url, SUBSCRIPTION_PATH)
    }

    /// Create (or replace) the signed-in user's subscription
    pub async fn create_subscription(
        &self,
        stripe_token: &str,
        plan_type: &str,
    ) -> Result<TransportResponse> {
        let headers = self.auth_headers("create subscription")?;
        let url = self.subscription_url();
        let body = SubscriptionRequest::new(stripe_token, plan_type).to_json();

        debug!("POST {} (plan {})", url, plan_type);

        self.transport
            .post(&url, &body, headers)
            .await
            .map_err(|e| {
                warn!("Create subscription failed: {}", e);
                SubscriptionError::from(e)
            })
    }

    /// Cancel the signed-in user's subscription
    ///
    /// Always sends the request; whether cancelling twice is harmless is up to
    /// the server.
    pub async fn cancel_subscription(&self) -> Result<TransportResponse> {
        let headers = self.auth_headers("cancel subscription")?;
        let url = self.subscription_url();

        debug!("DELETE {}", url);

        self.transport.delete(&url, headers).await.map_err(|e| {
            warn!("Cancel subscription failed: {}", e);
            SubscriptionError::from(e)
        })
    }

    /// Authorization header for the current token, read fresh on every call
    fn auth_headers(&self, action: &str) -> Result<Headers> {
        let token = match self.tokens.token() {
            Some(token) => token,
            None => {
                warn!("Refusing to {}: no auth token", action);
                return Err(SubscriptionError::Unauthenticated);
            }
        };

        let mut headers = Headers::new();
        headers.insert("Authorization".to_string(), bearer_header(&token));
        Ok(headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{StaticToken, TokenStore};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use serde_json::{json, Value};

    #[derive(Debug, Clone, PartialEq)]
    struct Recorded {
        method: &'static str,
        url: String,
        body: Option<Value>,
        headers: Headers,
    }

    #[derive(Default)]
    struct RecordingTransport {
        calls: Mutex<Vec<Recorded>>,
    }

    impl RecordingTransport {
        fn calls(&self) -> Vec<Recorded> {
            self.calls.lock().clone()
        }
    }

    #[async_trait]
    impl HttpTransport for RecordingTransport {
        async fn post(
            &self,
            url: &str,
            body: &Value,
            headers: Headers,
        ) -> crate::transport::Result<TransportResponse> {
            self.calls.lock().push(Recorded {
                method: "POST",
                url: url.to_string(),
                body: Some(body.clone()),
                headers,
            });
            Ok(TransportResponse::new(201, r#"{"status":"active"}"#))
        }

        async fn delete(
            &self,
            url: &str,
            headers: Headers,
        ) -> crate::transport::Result<TransportResponse> {
            self.calls.lock().push(Recorded {
                method: "DELETE",
                url: url.to_string(),
                body: None,
                headers,
            });
            Ok(TransportResponse::new(204, ""))
        }
    }

    fn client_with(
        tokens: impl TokenProvider + 'static,
    ) -> (SubscriptionClient, Arc<RecordingTransport>) {
        let transport = Arc::new(RecordingTransport::default());
        let client = SubscriptionClient::new(
            "https://api.example.com",
            Arc::new(tokens),
            transport.clone(),
        );
        (client, transport)
    }

    #[tokio::test]
    async fn test_create_sends_post_with_bearer() {
        let (client, transport) = client_with(StaticToken::new("abc123"));

        let response = client.create_subscription("tok_visa", "pro").await.unwrap();
        assert_eq!(response.status, 201);

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, "POST");
        assert_eq!(calls[0].url, "https://api.example.com/subscription");
        assert_eq!(
            calls[0].body,
            Some(json!({ "stripeToken": "tok_visa", "planType": "pro" }))
        );
        assert_eq!(calls[0].headers.get("Authorization").unwrap(), "Bearer abc123");
    }

    #[tokio::test]
    async fn test_cancel_sends_delete_without_body() {
        let (client, transport) = client_with(StaticToken::new("xyz"));

        let response = client.cancel_subscription().await.unwrap();
        assert_eq!(response.status, 204);

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, "DELETE");
        assert_eq!(calls[0].url, "https://api.example.com/subscription");
        assert_eq!(calls[0].body, None);
        assert_eq!(calls[0].headers.len(), 1);
        assert_eq!(calls[0].headers.get("Authorization").unwrap(), "Bearer xyz");
    }

    #[tokio::test]
    async fn test_missing_token_sends_nothing() {
        let (client, transport) = client_with(StaticToken::none());

        let err = client.cancel_subscription().await.unwrap_err();
        assert!(matches!(err, SubscriptionError::Unauthenticated));
        assert_eq!(err.to_string(), "You are not signed in.");

        let err = client.create_subscription("tok_visa", "pro").await.unwrap_err();
        assert!(matches!(err, SubscriptionError::Unauthenticated));

        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn test_token_read_on_every_call() {
        let store = TokenStore::new();
        let (client, transport) = client_with(store.clone());

        store.sign_in("first");
        client.cancel_subscription().await.unwrap();
        store.sign_in("second");
        client.cancel_subscription().await.unwrap();
        store.sign_out();
        assert!(client.cancel_subscription().await.is_err());

        let calls = transport.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].headers["Authorization"], "Bearer first");
        assert_eq!(calls[1].headers["Authorization"], "Bearer second");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let (client, _) = client_with(StaticToken::none());
        assert_eq!(client.subscription_url(), "https://api.example.com/subscription");

        let client = SubscriptionClient::new(
            "http://localhost:3000/",
            Arc::new(StaticToken::none()),
            Arc::new(RecordingTransport::default()),
        );
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(client.subscription_url(), "http://localhost:3000/subscription");
    }
}
