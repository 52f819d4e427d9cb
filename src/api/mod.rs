//! Backend access
//!
//! [`BackendPort`] is the seam the workflows depend on; [`HttpBackend`] is
//! the production adapter.

mod http;
mod port;

#[cfg(test)]
pub(crate) mod memory;

pub use http::HttpBackend;
pub use port::BackendPort;
