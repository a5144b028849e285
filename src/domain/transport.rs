// src/domain/transport.rs

//! Transport domain abstraction.
//!
//! This module defines the domain-level HTTP exchange interface used by
//! the client layer. It intentionally avoids any reference to concrete
//! HTTP client libraries.
//!
//! The transport layer is responsible only for delivering an opaque
//! payload and returning the complete response body. Higher-level
//! semantics such as envelope framing, ID correlation, and error
//! classification are handled by the client.
//!
//! Concrete implementations of this interface live under `src/transport/`.

use std::sync::Arc;

use bytes::Bytes;

use crate::Result;

/// HTTP exchange abstraction.
///
/// A `HttpTransport` performs exactly one POST exchange per call. It
/// defines the minimal contract required by the client layer without
/// committing to any specific HTTP client.
///
/// Implementations must ensure that:
/// - The payload is sent as a single request with content type
///   `application/json`.
/// - The response body is read to completion before returning.
/// - The body/connection is released on every exit path, including early
///   failures.
/// - Concurrent use by multiple callers is safe.
///
/// Non-2xx statuses are transport-defined: JSON-RPC servers commonly
/// report application errors in the response envelope regardless of
/// status, so implementations should return the body rather than fail.
///
/// Retry, backoff, and timeout policy beyond the transport's own defaults
/// are explicitly out of scope for this interface.
#[async_trait::async_trait]
pub trait HttpTransport: Send + Sync {
    // ---
    /// POST `body` to `url` and return the full response body.
    ///
    /// Fails with [`Error::Transport`](crate::Error::Transport) on
    /// connection failure, timeout, or an unreadable body.
    async fn post_json(&self, url: &str, body: Bytes) -> Result<Bytes>;
}

/// Shared transport pointer.
///
/// This is an `Arc<dyn HttpTransport>`, which means:
/// - `.clone()` is cheap (only increments a reference count)
/// - Multiple clients may share one underlying connection pool
/// - Concrete transport types are erased behind a stable domain interface.
pub type TransportPtr = Arc<dyn HttpTransport>;
