//! Concrete implementations of the traits in `crate::traits`.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`RemoteGateway`] - todo gateway over the HTTP function-call protocol
//! - [`MemoryGateway`] - todo gateway over an in-process store
//!
//! # Mock Implementations
//!
//! - [`mock::MockHttpClient`] - configurable HTTP responses

pub mod memory_gateway;
pub mod mock;
pub mod remote_gateway;
pub mod reqwest_http;

pub use memory_gateway::MemoryGateway;
pub use mock::MockHttpClient;
pub use remote_gateway::{RemoteGateway, DEFAULT_RECONNECT_DELAY};
pub use reqwest_http::ReqwestHttpClient;
