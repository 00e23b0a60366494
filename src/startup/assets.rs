//! Title and banner art, optionally loaded from a directory.

use std::path::{Path, PathBuf};

use crate::error::StartupError;
use crate::ui::ThemeMode;

pub const TITLE_FILE: &str = "title.txt";
pub const BANNER_LIGHT_FILE: &str = "banner-light.txt";
pub const BANNER_DARK_FILE: &str = "banner-dark.txt";

/// Shown in light mode (switches to dark).
pub const MOON_GLYPH: &str = "☾";
/// Shown in dark mode (switches to light).
pub const SUN_GLYPH: &str = "☀";

const BUILTIN_TITLE: &str = "T O D O";
const BUILTIN_BANNER_LIGHT: &str = "   .        '       .     \n        '        .        \n .          .         '   ";
const BUILTIN_BANNER_DARK: &str = "   *     .        +     . \n .     +     *         .  \n     .          .   *     ";

/// Text art drawn by the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assets {
    title: String,
    banner_light: String,
    banner_dark: String,
}

impl Default for Assets {
    fn default() -> Self {
        Self::builtin()
    }
}

fn read_asset(dir: &Path, name: &str) -> Result<String, StartupError> {
    let path: PathBuf = dir.join(name);
    std::fs::read_to_string(&path)
        .map(|text| text.trim_end_matches(['\n', '\r']).to_string())
        .map_err(|source| StartupError::AssetLoad { path, source })
}

impl Assets {
    pub fn builtin() -> Self {
        Self {
            title: BUILTIN_TITLE.to_string(),
            banner_light: BUILTIN_BANNER_LIGHT.to_string(),
            banner_dark: BUILTIN_BANNER_DARK.to_string(),
        }
    }

    /// Read every asset file from `dir`. Any missing or unreadable file is
    /// an error.
    pub fn load(dir: &Path) -> Result<Self, StartupError> {
        let assets = Self {
            title: read_asset(dir, TITLE_FILE)?,
            banner_light: read_asset(dir, BANNER_LIGHT_FILE)?,
            banner_dark: read_asset(dir, BANNER_DARK_FILE)?,
        };
        tracing::debug!(dir = %dir.display(), "assets loaded");
        Ok(assets)
    }

    /// Built-ins, or the contents of `dir` when given.
    pub fn resolve(dir: Option<&Path>) -> Result<Self, StartupError> {
        match dir {
            Some(dir) => Self::load(dir),
            None => Ok(Self::builtin()),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn banner(&self, mode: ThemeMode) -> &str {
        match mode {
            ThemeMode::Light => &self.banner_light,
            ThemeMode::Dark => &self.banner_dark,
        }
    }

    pub fn toggle_glyph(&self, mode: ThemeMode) -> &'static str {
        match mode {
            ThemeMode::Light => MOON_GLYPH,
            ThemeMode::Dark => SUN_GLYPH,
        }
    }
}
