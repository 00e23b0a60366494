//! Failures that keep the application from reaching an interactive state.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// No backend endpoint configured.
    #[error("{var} is not set; the backend endpoint URL is required")]
    MissingBackendUrl { var: &'static str },

    /// The configured endpoint does not parse as an http(s) URL.
    #[error("invalid backend URL '{url}': {reason}")]
    InvalidBackendUrl { url: String, reason: String },

    /// A setting has a value that cannot be interpreted.
    #[error("invalid value '{value}' for {var}")]
    InvalidSetting { var: &'static str, value: String },

    /// An asset file could not be read before the first render.
    #[error("failed to load asset {}: {source}", path.display())]
    AssetLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The log sink could not be opened.
    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_url_names_variable() {
        let err = StartupError::MissingBackendUrl { var: "TODOSYNC_URL" };
        assert!(err.to_string().starts_with("TODOSYNC_URL is not set"));
    }

    #[test]
    fn test_asset_error_keeps_source() {
        let err = StartupError::AssetLoad {
            path: PathBuf::from("/tmp/assets/title.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("/tmp/assets/title.txt"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
