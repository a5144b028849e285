// src/protocol/envelope.rs

//! JSON-RPC 2.0 wire envelopes.
//!
//! Shapes here match the JSON-RPC 2.0 framing exactly:
//!
//! - request: `{"jsonrpc":"2.0","method":"<name>","id":<int>,"params":[...]}`
//! - success: `{"jsonrpc":"2.0","id":<int>,"result":<any>}`
//! - error:   `{"jsonrpc":"2.0","id":<int>,"error":{"code":..,"message":..,"data":..}}`
//!
//! The response `result` is kept as raw JSON and decoded lazily into the
//! caller's expected shape; the envelope itself never interprets it.

use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use serde_json::Value;
use thiserror::Error;

/// Fixed protocol version literal stamped on every request and expected
/// on every response.
pub const PROTOCOL_VERSION: &str = "2.0";

/// A single JSON-RPC request envelope.
///
/// Constructed only through [`RequestSequencer::next`](crate::RequestSequencer::next),
/// which guarantees a fresh unique `id`.
#[derive(Debug, Clone, Serialize)]
pub struct Request {
    /// Always [`PROTOCOL_VERSION`].
    pub jsonrpc: &'static str,

    /// RPC method name (e.g. `"eth_getBalance"`).
    pub method: String,

    /// Session-unique, monotonically increasing identifier.
    pub id: u64,

    /// Positional parameters, already in wire-representable form.
    pub params: Vec<Value>,
}

/// A single JSON-RPC response envelope.
///
/// Exactly one of `result` / `error` is meaningful. Framing fields that a
/// conforming server must echo (`jsonrpc`, `id`) default to empty/absent
/// when missing so that the invoker can classify the mismatch itself
/// rather than failing envelope decode.
#[derive(Debug, Deserialize)]
pub struct Response {
    // ---
    #[serde(default)]
    pub jsonrpc: String,

    /// Echoed request id. `None` when absent or JSON `null`.
    #[serde(default)]
    pub id: Option<u64>,

    #[serde(default)]
    pub error: Option<RemoteError>,

    /// Deferred-decoded result payload.
    #[serde(default)]
    pub result: Option<Box<RawValue>>,
}

impl Response {
    /// Raw JSON text of the result payload, treating an absent member as
    /// JSON `null`.
    pub fn result_json(&self) -> &str {
        // ---
        self.result.as_deref().map(RawValue::get).unwrap_or("null")
    }
}

/// Error object reported by the server.
///
/// Decoded from the response envelope and surfaced unchanged; the client
/// never constructs one itself. `Display` is the server's message text
/// verbatim, which makes it the externally visible failure description
/// when wrapped in [`Error::Rpc`](crate::Error::Rpc).
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct RemoteError {
    // ---
    /// Numeric error code (e.g. `-32000`).
    pub code: i64,

    /// Human-readable description.
    pub message: String,

    /// Optional additional data of arbitrary shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}
