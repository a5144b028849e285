//! Default HTTP transport backed by `reqwest`.

mod transport;

pub use transport::create_transport;
