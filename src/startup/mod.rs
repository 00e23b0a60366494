//! Startup: configuration, assets, logging and application wiring.
//!
//! Everything here runs before the first frame. Any failure is a
//! [`StartupError`] and the process exits without entering the TUI.
//!
//! # Components
//!
//! - [`config`] - environment-driven settings for the client and the server
//! - [`assets`] - title and banner art
//! - [`logging`] - tracing subscriber setup

pub mod assets;
pub mod config;
pub mod logging;

pub use assets::Assets;
pub use config::{AppConfig, ServeConfig};
pub use logging::{init_file_logging, init_stderr_logging};

use std::sync::Arc;

use crate::adapters::{RemoteGateway, ReqwestHttpClient};
use crate::app::App;
use crate::error::StartupError;
use crate::ui::ThemeStore;

/// Build a ready-to-run [`App`] talking to the configured backend.
///
/// Assets are loaded here, before the first render. The live query is not
/// opened yet; call [`App::start_sync`] inside the runtime.
pub fn build_app(config: &AppConfig) -> Result<App, StartupError> {
    let assets = Assets::resolve(config.assets_dir.as_deref())?;
    let gateway = RemoteGateway::new(ReqwestHttpClient::new(), config.backend_url.clone())
        .with_reconnect_delay(config.reconnect_delay);
    tracing::info!(
        backend = %config.backend_url,
        theme = %config.theme,
        "starting client"
    );
    Ok(App::new(
        Arc::new(gateway),
        ThemeStore::new(config.theme),
        assets,
    ))
}
