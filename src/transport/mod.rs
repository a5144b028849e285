//! Transport implementations.
//!
//! This module provides concrete implementations of the domain-level
//! `HttpTransport` trait. Network transports are hidden behind feature
//! flags and exposed only through constructor functions.
//!
//! Domain code must not depend on transport-specific types.

mod memory;

#[cfg(feature = "transport_http")]
mod http;

#[cfg(feature = "transport_http")]
pub use http::create_transport as create_http_transport;

pub use memory::create_transport as create_memory_transport;
