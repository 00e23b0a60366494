//! Startup configuration types.
//!
//! Settings come from environment variables read once at startup. Lookup is
//! injected so tests never touch the process environment:
//!
//! ```ignore
//! use todosync::startup::AppConfig;
//!
//! let config = AppConfig::from_lookup(|var| match var {
//!     "TODOSYNC_URL" => Some("http://127.0.0.1:3210".into()),
//!     _ => None,
//! })?;
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::adapters::DEFAULT_RECONNECT_DELAY;
use crate::error::StartupError;
use crate::ui::ThemeMode;

pub const URL_VAR: &str = "TODOSYNC_URL";
pub const THEME_VAR: &str = "TODOSYNC_THEME";
pub const ASSETS_VAR: &str = "TODOSYNC_ASSETS";
pub const RECONNECT_VAR: &str = "TODOSYNC_RECONNECT_MS";
pub const LOG_VAR: &str = "TODOSYNC_LOG";
pub const ADDR_VAR: &str = "TODOSYNC_ADDR";

/// Bind address of `todosync serve` when none is configured.
pub const DEFAULT_ADDR: &str = "127.0.0.1:3210";

/// Non-empty trimmed value of `var`.
fn lookup_value<F>(lookup: &F, var: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Check that `raw` is an absolute http(s) URL and return it without a
/// trailing slash.
pub fn validate_backend_url(raw: &str) -> Result<String, StartupError> {
    let invalid = |reason: String| StartupError::InvalidBackendUrl {
        url: raw.to_string(),
        reason,
    };
    let url = reqwest::Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme '{}'", other))),
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }
    Ok(raw.trim_end_matches('/').to_string())
}

/// Default log file: `<local data dir>/todosync/todosync.log`.
pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("todosync")
        .join("todosync.log")
}

/// Configuration of the terminal client.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend endpoint, validated, without trailing slash
    pub backend_url: String,
    pub theme: ThemeMode,
    /// Directory to load asset overrides from
    pub assets_dir: Option<PathBuf>,
    /// Delay before re-opening a broken live query
    pub reconnect_delay: Duration,
    pub log_path: PathBuf,
}

impl AppConfig {
    /// Config for `backend_url` with every other setting at its default.
    pub fn new(backend_url: impl Into<String>) -> Self {
        Self {
            backend_url: backend_url.into(),
            theme: ThemeMode::default(),
            assets_dir: None,
            reconnect_delay: DEFAULT_RECONNECT_DELAY,
            log_path: default_log_path(),
        }
    }

    pub fn with_theme(mut self, theme: ThemeMode) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_assets_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.assets_dir = Some(dir.into());
        self
    }

    pub fn with_reconnect_delay(mut self, delay: Duration) -> Self {
        self.reconnect_delay = delay;
        self
    }

    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = path.into();
        self
    }

    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, StartupError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, StartupError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_url =
            lookup_value(&lookup, URL_VAR).ok_or(StartupError::MissingBackendUrl { var: URL_VAR })?;
        let mut config = Self::new(validate_backend_url(&raw_url)?);

        if let Some(theme) = lookup_value(&lookup, THEME_VAR) {
            config.theme = theme.parse().map_err(|_| StartupError::InvalidSetting {
                var: THEME_VAR,
                value: theme,
            })?;
        }
        if let Some(dir) = lookup_value(&lookup, ASSETS_VAR) {
            config.assets_dir = Some(PathBuf::from(dir));
        }
        if let Some(ms) = lookup_value(&lookup, RECONNECT_VAR) {
            let millis: u64 = ms.parse().map_err(|_| StartupError::InvalidSetting {
                var: RECONNECT_VAR,
                value: ms,
            })?;
            config.reconnect_delay = Duration::from_millis(millis);
        }
        if let Some(path) = lookup_value(&lookup, LOG_VAR) {
            config.log_path = PathBuf::from(path);
        }
        Ok(config)
    }
}

/// Configuration of the backend service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServeConfig {
    pub addr: SocketAddr,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3210)),
        }
    }
}

impl ServeConfig {
    pub fn with_addr(mut self, addr: SocketAddr) -> Self {
        self.addr = addr;
        self
    }

    pub fn from_env() -> Result<Self, StartupError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, StartupError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup_value(&lookup, ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = parse_addr(ADDR_VAR, &raw)?;
        Ok(Self::default().with_addr(addr))
    }
}

/// Parse a bind address, naming `var` in the error.
pub fn parse_addr(var: &'static str, raw: &str) -> Result<SocketAddr, StartupError> {
    raw.parse().map_err(|_| StartupError::InvalidSetting {
        var,
        value: raw.to_string(),
    })
}
