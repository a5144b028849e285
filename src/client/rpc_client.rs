// src/client/rpc_client.rs

//! Core RPC invoker.
//!
//! This module contains the [`RpcClient`] type which executes one full
//! request/response cycle per call: obtain a uniquely identified request
//! envelope, serialize it, exchange it over the transport, validate the
//! response framing, and route either a decoded result or a classified
//! error back to the caller.
//!
//! # Architecture
//!
//! The client owns a [`RequestSequencer`] whose atomic counter is the
//! only mutable session state. Everything else (endpoint URL, transport
//! handle) is immutable after construction, so the client is cheap to
//! clone and share.
//!
//! # Concurrency
//!
//! Multiple calls may be in flight simultaneously on one client.
//! Concurrent invocations contend only on the counter fetch-add; nothing
//! is held across the network exchange. There is no admission control,
//! backpressure, or cancellation beyond the failure paths of `call`.

use std::sync::Arc;

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::protocol::{RequestSequencer, Response, PROTOCOL_VERSION};
use crate::{Error, Result, RpcConfig, TransportPtr};

/// Ethereum JSON-RPC 2.0 client.
///
/// Cheap to clone (internally `Arc`-backed); clones share the same
/// transport and ID sequence.
///
/// # Example
///
/// ```no_run
/// use eth_rpc::{RpcClient, RpcConfig};
///
/// # async fn example() -> eth_rpc::Result<()> {
/// let client = RpcClient::new(&RpcConfig::new("http://127.0.0.1:8545"))?;
///
/// let version = client.net_version().await?;
/// println!("network: {version}");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct RpcClient {
    inner: Arc<Inner>,
}

struct Inner {
    // ---
    endpoint: String,
    transport: TransportPtr,
    sequencer: RequestSequencer,
}

impl RpcClient {
    // ---
    /// Create a client with an explicitly provided transport.
    ///
    /// This is the constructor you want for tests and for advanced users
    /// who manage their own HTTP client lifecycle. The transport is
    /// shared, externally owned, and assumed safe for concurrent use.
    pub fn with_transport(transport: TransportPtr, config: RpcConfig) -> Self {
        // ---
        Self {
            inner: Arc::new(Inner {
                endpoint: config.endpoint,
                transport,
                sequencer: RequestSequencer::new(),
            }),
        }
    }

    /// Convenience constructor that builds the default HTTP transport
    /// from `config`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Transport` if the underlying HTTP client cannot
    /// be constructed.
    #[cfg(feature = "transport_http")]
    pub fn new(config: &RpcConfig) -> Result<Self> {
        // ---
        let transport = crate::create_http_transport(config)?;
        Ok(Self::with_transport(transport, config.clone()))
    }

    /// Endpoint URL this client was constructed with.
    pub fn endpoint(&self) -> &str {
        &self.inner.endpoint
    }

    /// Invoke `method` with positional `params` and decode the result
    /// into `R`.
    ///
    /// Performs exactly one network round trip and advances the session
    /// ID counter by exactly one, whether or not the exchange succeeds.
    /// This is the sole building block for every typed method façade.
    ///
    /// # Errors
    ///
    /// - `Error::Encoding` - request serialization fails
    /// - `Error::Transport` - the exchange fails or the body cannot be read
    /// - `Error::Decoding` - malformed response envelope, or a result
    ///   payload that cannot be converted to `R`
    /// - `Error::Rpc` - the server reported an error; surfaced verbatim
    ///   and checked before any framing validation
    /// - `Error::ProtocolMismatch` - response `id` or protocol version
    ///   does not match the request
    pub async fn call<R>(&self, method: &str, params: Vec<Value>) -> Result<R>
    where
        R: DeserializeOwned,
    {
        // ---
        // Counter bump only; no lock is held across the exchange.
        let request = self.inner.sequencer.next(method, params);

        let body = serde_json::to_vec(&request).map_err(Error::Encoding)?;

        tracing::debug!(method, id = request.id, "sending request");

        let response_body: Bytes = self
            .inner
            .transport
            .post_json(&self.inner.endpoint, Bytes::from(body))
            .await?;

        let mut response: Response =
            serde_json::from_slice(&response_body).map_err(Error::Decoding)?;

        // A server-reported error wins over framing validation: a
        // non-conforming error response still carries server intent.
        if let Some(remote) = response.error.take() {
            tracing::debug!(method, code = remote.code, "server returned error");
            return Err(Error::Rpc(remote));
        }

        if response.id != Some(request.id) || response.jsonrpc != PROTOCOL_VERSION {
            tracing::warn!(
                method,
                sent_id = request.id,
                received_id = ?response.id,
                received_version = %response.jsonrpc,
                "response framing does not match request"
            );
            return Err(Error::ProtocolMismatch);
        }

        serde_json::from_str(response.result_json()).map_err(Error::Decoding)
    }
}
