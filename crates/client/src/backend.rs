//! REST client for the portal backend.
//!
//! [`PortalBackend`] is the seam the gateway, review loader and runner talk
//! to. [`HttpBackend`] implements it over [`reqwest`], sending the auth
//! store's token as the HTTP Basic auth username on every call.

use std::future::Future;

use serde_json::Value;

use jobport_core::types::Payload;

use crate::config::ClientConfig;
use crate::error::ClientError;

/// JSON transport to the portal backend.
///
/// Paths are the `/api/...` constants from [`jobport_core::endpoints`].
pub trait PortalBackend: Send + Sync {
    /// `GET` a path and return the decoded JSON body.
    fn get_json(&self, path: &str) -> impl Future<Output = Result<Value, ClientError>> + Send;

    /// `POST` a form payload and return the backend's acknowledgement.
    /// An empty acknowledgement body decodes to `Value::Null`.
    fn post_json(
        &self,
        path: &str,
        payload: &Payload,
    ) -> impl Future<Output = Result<Value, ClientError>> + Send;
}

impl<B: PortalBackend> PortalBackend for &B {
    fn get_json(&self, path: &str) -> impl Future<Output = Result<Value, ClientError>> + Send {
        (**self).get_json(path)
    }

    fn post_json(
        &self,
        path: &str,
        payload: &Payload,
    ) -> impl Future<Output = Result<Value, ClientError>> + Send {
        (**self).post_json(path, payload)
    }
}

/// HTTP client for one portal deployment.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    api_url: String,
    token: String,
}

impl HttpBackend {
    /// Create a client for `api_url`, e.g. `http://host:8000`.
    pub fn new(api_url: String, token: String) -> Self {
        Self::with_client(reqwest::Client::new(), api_url, token)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: String, token: String) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    /// Build a client with the configured request timeout.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self::with_client(
            client,
            config.api_url.clone(),
            config.token.clone(),
        ))
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`ClientError::Api`]
    /// containing the status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Decode a successful response body as JSON.
    async fn parse_response(path: &str, response: reqwest::Response) -> Result<Value, ClientError> {
        let response = Self::ensure_success(response).await?;
        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| ClientError::Decode {
            path: path.to_string(),
            message: e.to_string(),
        })
    }
}

impl PortalBackend for HttpBackend {
    async fn get_json(&self, path: &str) -> Result<Value, ClientError> {
        let response = self
            .client
            .get(self.url(path))
            .basic_auth(&self.token, None::<&str>)
            .send()
            .await?;

        Self::parse_response(path, response).await
    }

    async fn post_json(&self, path: &str, payload: &Payload) -> Result<Value, ClientError> {
        let response = self
            .client
            .post(self.url(path))
            .basic_auth(&self.token, None::<&str>)
            .json(payload)
            .send()
            .await?;

        Self::parse_response(path, response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let backend = HttpBackend::new("http://localhost:8000/".into(), "t".into());
        assert_eq!(backend.api_url(), "http://localhost:8000");
        assert_eq!(
            backend.url("/api/get-user-info"),
            "http://localhost:8000/api/get-user-info"
        );
    }
}
