//! Public, transport-agnostic client configuration.
//!
//! This type intentionally contains no transport-specific concepts
//! (e.g. reqwest client options). Transport layers are responsible for
//! interpreting this config into concrete connection settings.

use std::time::Duration;

/// Client configuration and connection parameters.
#[derive(Debug, Clone)]
pub struct RpcConfig {
    // ---
    /// Endpoint URL of the JSON-RPC server
    /// (e.g. `"http://127.0.0.1:8545"`).
    ///
    /// Immutable after the client is constructed.
    pub endpoint: String,

    /// Optional per-request timeout applied by the default HTTP
    /// transport.
    ///
    /// If `None`, the transport's own defaults apply. The RPC layer
    /// enforces no timeout of its own.
    pub request_timeout: Option<Duration>,
}

impl RpcConfig {
    /// Create a new `RpcConfig` for the given endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            request_timeout: None,
        }
    }

    /// Set an explicit per-request timeout for the default transport.
    ///
    /// # Example
    ///
    /// ```
    /// use eth_rpc::RpcConfig;
    /// use std::time::Duration;
    ///
    /// let config = RpcConfig::new("http://127.0.0.1:8545")
    ///     .with_request_timeout(Duration::from_secs(10));
    /// ```
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }
}
