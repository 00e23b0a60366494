//! Trait abstractions at the I/O seams.
//!
//! - [`TodoGateway`] - the data gateway the screen talks to
//! - [`HttpClient`] - HTTP transport used by the remote gateway

pub mod gateway;
pub mod http;

pub use gateway::{LiveQuery, Snapshot, TodoGateway};
pub use http::{ByteStream, HttpClient, HttpError, Response};
