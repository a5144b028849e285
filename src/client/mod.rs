//! RPC client implementation.
//!
//! This module contains the core [`RpcClient`] type which performs
//! request/response cycles against a JSON-RPC 2.0 server over an injected
//! HTTP transport, plus the typed Ethereum method façades built on top of
//! it.

mod methods;
mod rpc_client;

pub use rpc_client::RpcClient;
