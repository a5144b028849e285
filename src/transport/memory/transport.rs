// src/transport/memory/transport.rs

//! In-memory transport implementation.
//!
//! This file contains the concrete implementation of the domain-level
//! `HttpTransport` trait using in-process dispatch only.
//!
//! The memory transport is the **reference implementation** of transport
//! semantics: each `post_json` call is one complete exchange whose
//! response is produced synchronously by a caller-supplied handler. It is
//! intended for testing and for validating client behavior without
//! network, server, or timing-related variability.
//!
//! ## Semantics
//!
//! - Each call invokes the handler exactly once with the serialized
//!   request body.
//! - The handler's `Ok` bytes are the complete response body.
//! - The handler's `Err` models a transport-level failure (connection
//!   refused, timeout) and is surfaced unchanged.
//!
//! ## Non-Goals
//!
//! - Real network behavior or HTTP status simulation
//! - Persistence across calls (handlers may carry their own state)

use std::sync::Arc;

use bytes::Bytes;

use crate::{HttpTransport, Result, TransportPtr};

struct MemoryTransport {
    // ---
    handler: Box<dyn Fn(Bytes) -> Result<Bytes> + Send + Sync>,
}

#[async_trait::async_trait]
impl HttpTransport for MemoryTransport {
    // ---

    /// Dispatch the body to the handler.
    ///
    /// The URL is accepted for interface parity but not interpreted;
    /// a memory transport has exactly one endpoint.
    async fn post_json(&self, _url: &str, body: Bytes) -> Result<Bytes> {
        // ---
        (self.handler)(body)
    }
}

/// Create a new in-memory transport around `handler`.
///
/// This transport is always available and requires no external resources.
///
/// # Example
///
/// ```
/// use bytes::Bytes;
/// use eth_rpc::create_memory_transport;
///
/// let transport = create_memory_transport(|_body: Bytes| {
///     Ok(Bytes::from_static(
///         br#"{"jsonrpc":"2.0","id":1,"result":"3"}"#,
///     ))
/// });
/// ```
pub fn create_transport<F>(handler: F) -> TransportPtr
where
    F: Fn(Bytes) -> Result<Bytes> + Send + Sync + 'static,
{
    // ---
    Arc::new(MemoryTransport {
        handler: Box::new(handler),
    })
}
