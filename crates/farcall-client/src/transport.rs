//! HTTP transport shim.
//!
//! The transport owns no protocol knowledge: it takes an already-encoded
//! request body, performs one HTTP POST, and hands the raw response back to
//! the codec. Everything JSON-RPC happens above it.

use async_trait::async_trait;
use reqwest::header;
use url::Url;

use crate::error::ClientResult;

/// Media type for JSON-RPC over HTTP.
const JSON_MEDIA_TYPE: &str = "application/json";

/// One-POST-per-call request transport.
///
/// Ownership of the returned response (and its body stream) passes to the
/// caller, which releases it by drop on every exit path.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends one encoded request body and returns the raw HTTP response.
    async fn post(&self, body: Vec<u8>) -> ClientResult<reqwest::Response>;
}

/// [`Transport`] implementation over a [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpTransport {
    /// Creates a transport posting to `endpoint` with a stock HTTP client.
    pub fn new(endpoint: Url) -> Self {
        Self::with_client(endpoint, reqwest::Client::new())
    }

    /// Creates a transport around a caller-configured HTTP client.
    ///
    /// Timeouts, TLS settings, and connection reuse policy all live on the
    /// injected client; the codec layers no timeout of its own on top.
    pub fn with_client(endpoint: Url, client: reqwest::Client) -> Self {
        Self { client, endpoint }
    }

    /// Returns the endpoint this transport posts to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, body: Vec<u8>) -> ClientResult<reqwest::Response> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(header::CONTENT_TYPE, JSON_MEDIA_TYPE)
            .body(body)
            .send()
            .await?;
        Ok(response)
    }
}
