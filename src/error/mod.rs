//! Error types.
//!
//! Three kinds of failure exist in the application:
//!
//! | Kind | Where | Handling |
//! |------|-------|----------|
//! | Validation no-op | blank create/rename input | silently ignored, never reaches the gateway |
//! | [`GatewayError`] | any backend call | modal alert naming the [`GatewayAction`], no retry |
//! | [`StartupError`] | configuration, assets, logging | process exits before the first frame |
//!
//! Store-side failures ([`crate::store::StoreError`]) surface to clients as
//! [`GatewayError::Rejected`].

mod gateway;
mod startup;

pub use gateway::{GatewayAction, GatewayError};
pub use startup::StartupError;

/// Result alias for gateway calls.
pub type GatewayResult<T> = Result<T, GatewayError>;
