//! Light/dark palettes and the shared theme store.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use ratatui::style::Color;
use tokio::sync::watch;

/// Theme preference. Light unless configured otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            ThemeMode::Light => &LIGHT,
            ThemeMode::Dark => &DARK,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(format!("unknown theme '{}'", other)),
        }
    }
}

/// Named colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub card_background: Color,
    pub text: Color,
    pub text_secondary: Color,
    pub border: Color,
    pub primary: Color,
    pub completed: Color,
    pub placeholder: Color,
}

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(0xFA, 0xFA, 0xFA),
    card_background: Color::Rgb(0xFF, 0xFF, 0xFF),
    text: Color::Rgb(0x39, 0x3A, 0x4B),
    text_secondary: Color::Rgb(0x94, 0x95, 0xA5),
    border: Color::Rgb(0xE3, 0xE4, 0xF1),
    primary: Color::Rgb(0x3A, 0x7C, 0xFD),
    completed: Color::Rgb(0xD1, 0xD2, 0xDA),
    placeholder: Color::Rgb(0x94, 0x95, 0xA5),
};

pub const DARK: Palette = Palette {
    background: Color::Rgb(0x17, 0x18, 0x23),
    card_background: Color::Rgb(0x25, 0x27, 0x3D),
    text: Color::Rgb(0xC8, 0xCB, 0xE7),
    text_secondary: Color::Rgb(0x5B, 0x5E, 0x7E),
    border: Color::Rgb(0x39, 0x3A, 0x4B),
    primary: Color::Rgb(0x3A, 0x7C, 0xFD),
    completed: Color::Rgb(0x4D, 0x50, 0x67),
    placeholder: Color::Rgb(0x76, 0x79, 0x92),
};

/// Header gradient end points, shared by both themes.
pub const GRADIENT_START: (u8, u8, u8) = (0x55, 0xDD, 0xFF);
pub const GRADIENT_END: (u8, u8, u8) = (0xC0, 0x58, 0xF3);

/// Header title color, drawn over the gradient.
pub const COLOR_TITLE: Color = Color::Rgb(0xFF, 0xFF, 0xFF);

/// Linear interpolation along the header gradient, `t` in `0.0..=1.0`.
pub fn gradient_at(t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Color::Rgb(
        lerp(GRADIENT_START.0, GRADIENT_END.0),
        lerp(GRADIENT_START.1, GRADIENT_END.1),
        lerp(GRADIENT_START.2, GRADIENT_END.2),
    )
}

/// Process-wide theme preference.
///
/// Clones share one value; every themed component reads it at render time
/// and [`ThemeStore::subscribe`] observes changes. Nothing is persisted.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    tx: Arc<watch::Sender<ThemeMode>>,
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}

impl ThemeStore {
    pub fn new(initial: ThemeMode) -> Self {
        let (tx, _) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    pub fn current(&self) -> ThemeMode {
        *self.tx.borrow()
    }

    pub fn palette(&self) -> &'static Palette {
        self.current().palette()
    }

    /// Flip light/dark and return the new mode.
    pub fn toggle(&self) -> ThemeMode {
        let mut next = ThemeMode::default();
        self.tx.send_modify(|mode| {
            *mode = mode.toggled();
            next = *mode;
        });
        tracing::debug!(theme = %next, "theme toggled");
        next
    }

    pub fn set(&self, mode: ThemeMode) {
        self.tx.send_replace(mode);
    }

    pub fn subscribe(&self) -> watch::Receiver<ThemeMode> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_light() {
        let store = ThemeStore::default();
        assert_eq!(store.current(), ThemeMode::Light);
        assert_eq!(store.palette().background, Color::Rgb(0xFA, 0xFA, 0xFA));
    }

    #[test]
    fn test_double_toggle_is_identity() {
        let store = ThemeStore::new(ThemeMode::Dark);
        assert_eq!(store.toggle(), ThemeMode::Light);
        assert_eq!(store.toggle(), ThemeMode::Dark);
        assert_eq!(store.current(), ThemeMode::Dark);
    }

    #[test]
    fn test_clones_share_state() {
        let store = ThemeStore::default();
        let other = store.clone();
        other.toggle();
        assert_eq!(store.current(), ThemeMode::Dark);
        assert_eq!(store.palette(), &DARK);
    }

    #[tokio::test]
    async fn test_subscribers_observe_toggle() {
        let store = ThemeStore::default();
        let mut rx = store.subscribe();
        store.toggle();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), ThemeMode::Dark);
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!("dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!(" Light ".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert!("blue".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn test_gradient_endpoints() {
        assert_eq!(gradient_at(0.0), Color::Rgb(0x55, 0xDD, 0xFF));
        assert_eq!(gradient_at(1.0), Color::Rgb(0xC0, 0x58, 0xF3));
        assert_eq!(gradient_at(7.0), gradient_at(1.0));
    }
}
