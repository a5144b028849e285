//! In-memory loopback transport.

mod transport;

pub use transport::create_transport;
