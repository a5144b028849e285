use thiserror::Error;

use crate::protocol::RemoteError;

/// Errors that can occur during RPC invocation
#[derive(Error, Debug)]
pub enum Error {
    /// Request serialization failed before anything was sent
    #[error("request encoding failed: {0}")]
    Encoding(#[source] serde_json::Error),

    /// Network or HTTP-layer failure (connection refused, timeout, DNS,
    /// body read failure)
    #[error("transport error: {0}")]
    Transport(String),

    /// Malformed or type-incompatible response body, either at the
    /// envelope level or when decoding the result payload
    #[error("response decoding failed: {0}")]
    Decoding(#[source] serde_json::Error),

    /// Response `id` or protocol version does not match the request.
    ///
    /// Signals a desynchronized or non-conforming server. Fatal for the
    /// call; not an application-level failure.
    #[error("RPC specification error")]
    ProtocolMismatch,

    /// Application error reported by the server, passed through verbatim
    #[error(transparent)]
    Rpc(#[from] RemoteError),
}

/// Result type alias for RPC operations
pub type Result<T> = std::result::Result<T, Error>;
