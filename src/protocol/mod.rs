/// Protocol types for JSON-RPC 2.0 framing and request identity
///
/// This module defines the wire format for request/response envelopes
/// and per-session request ID management.
mod envelope;
mod sequencer;

pub use envelope::{RemoteError, Request, Response, PROTOCOL_VERSION};
pub use sequencer::RequestSequencer;
