// src/protocol/sequencer.rs

//! Per-session request identity.
//!
//! Request IDs are carried *in-band* inside protocol envelopes and are the
//! only piece of mutable state a client session owns. The sequencer hands
//! out IDs with a single atomic fetch-add, so concurrent invocations
//! serialize only on the counter bump, never on I/O.

use std::sync::atomic::{AtomicU64, Ordering};

use serde_json::Value;

use super::{Request, PROTOCOL_VERSION};

/// Issues uniquely identified, protocol-stamped request envelopes.
///
/// Two concurrent calls from the same session never observe the same ID.
/// The counter advances by exactly one per call regardless of whether the
/// resulting request succeeds, fails, or is never sent.
#[derive(Debug)]
pub struct RequestSequencer {
    next_id: AtomicU64,
}

impl RequestSequencer {
    /// Create a sequencer whose first issued ID is 1.
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
        }
    }

    /// Build the next request envelope for `method` with positional
    /// `params`.
    ///
    /// Pure in-memory construction plus a counter increment; cannot fail.
    /// Parameters must already be wire-representable values; no semantic
    /// validation happens here.
    pub fn next(&self, method: &str, params: Vec<Value>) -> Request {
        // ---
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);

        Request {
            jsonrpc: PROTOCOL_VERSION,
            method: method.to_owned(),
            id,
            params,
        }
    }
}

impl Default for RequestSequencer {
    fn default() -> Self {
        Self::new()
    }
}
