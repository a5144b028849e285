// src/transport/http/transport.rs

//! reqwest-backed implementation of the domain-level `HttpTransport`
//! trait.
//!
//! The underlying `reqwest::Client` holds an internal connection pool and
//! is safe for concurrent use by multiple callers; the RPC layer neither
//! pools nor limits in-flight requests on top of it.

use std::sync::Arc;

use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;

use crate::{Error, HttpTransport, Result, RpcConfig, TransportPtr};

struct HttpClientTransport {
    // ---
    http: reqwest::Client,
}

#[async_trait::async_trait]
impl HttpTransport for HttpClientTransport {
    // ---

    /// Perform one POST exchange.
    ///
    /// Non-2xx statuses are not treated as failures here: JSON-RPC
    /// servers report application errors in the response envelope, so the
    /// body is returned for the client layer to classify.
    async fn post_json(&self, url: &str, body: Bytes) -> Result<Bytes> {
        // ---
        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| Error::Transport(format!("request failed: {e}")))?;

        // Reads the body to completion; reqwest releases the connection
        // on drop for both the success and the failure path.
        response
            .bytes()
            .await
            .map_err(|e| Error::Transport(format!("failed to read response body: {e}")))
    }
}

/// Create the default reqwest-backed transport.
///
/// Timeout behavior comes entirely from [`RpcConfig::request_timeout`];
/// when unset, reqwest's own defaults apply.
///
/// # Errors
///
/// Returns `Error::Transport` if the underlying HTTP client cannot be
/// constructed (e.g. TLS backend initialization failure).
pub fn create_transport(config: &RpcConfig) -> Result<TransportPtr> {
    // ---
    let mut builder = reqwest::Client::builder();

    if let Some(timeout) = config.request_timeout {
        builder = builder.timeout(timeout);
    }

    let http = builder
        .build()
        .map_err(|e| Error::Transport(format!("failed to build HTTP client: {e}")))?;

    Ok(Arc::new(HttpClientTransport { http }))
}
