//! Ethereum JSON-RPC 2.0 client with pluggable HTTP transports
//!
//! This library provides a simple, ergonomic client for an Ethereum
//! node's JSON-RPC surface. It handles request framing, per-session
//! unique request IDs, remote-error passthrough, protocol-mismatch
//! detection, and polymorphic result decoding, with the HTTP exchange
//! delegated to an injected transport.
//!

// Import all sub modules once...
mod client;
mod domain;
mod transport;

mod rpc_config;

mod error;
mod protocol;
mod types;

// Re-export main types
pub use client::RpcClient;

pub use rpc_config::RpcConfig;

pub use error::{Error, Result};
pub use protocol::{RemoteError, Request, RequestSequencer, Response, PROTOCOL_VERSION};

pub use types::{EstimateGasRequest, Log, TransactionReceipt, TransactionRequest};

pub use transport::create_memory_transport;

#[cfg(feature = "transport_http")]
pub use transport::create_http_transport;

// --- public re-exports
pub use domain::{HttpTransport, TransportPtr};
