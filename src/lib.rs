//! todosync - a terminal todo list with real-time sync.
//!
//! The client ([`app`], [`ui`]) renders the list and turns user intents into
//! [`traits::TodoGateway`] calls. The backend ([`server`], [`store`]) serves
//! the same collection over HTTP with a Server-Sent-Events live query.
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod models;
pub mod protocol;
pub mod server;
pub mod sse;
pub mod startup;
pub mod store;
pub mod terminal;
pub mod traits;
pub mod ui;
