//! Responsive layout decisions.
//!
//! The `LayoutContext` carries the terminal dimensions into every render
//! function; all width-dependent choices are pure functions of it and are
//! re-derived on every frame.

/// Terminal width breakpoints
pub mod breakpoints {
    /// Below this the filter tabs use the compact two-row card
    pub const SM_WIDTH: u16 = 80;
    /// Widest the main column grows
    pub const MAX_CONTENT_WIDTH: u16 = 96;
    /// Minimum height for the full header
    pub const SM_HEIGHT: u16 = 24;
}

/// Presentation variant of the filter tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterTabsVariant {
    /// Own card below the list: counter and "Clear Completed" on one row,
    /// the three filters on the next
    Compact,
    /// One row at the bottom of the list card
    Expanded,
}

impl FilterTabsVariant {
    pub fn from_width(width: u16) -> Self {
        if width < breakpoints::SM_WIDTH {
            FilterTabsVariant::Compact
        } else {
            FilterTabsVariant::Expanded
        }
    }
}

/// Terminal dimensions for responsive calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    pub width: u16,
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }

    pub fn filter_tabs_variant(&self) -> FilterTabsVariant {
        FilterTabsVariant::from_width(self.width)
    }

    /// Width of the centered main column.
    ///
    /// Narrow terminals use the full width minus a one-column margin per side.
    pub fn content_width(&self) -> u16 {
        if self.is_narrow() {
            self.width.saturating_sub(2)
        } else {
            self.width
                .saturating_sub(4)
                .min(breakpoints::MAX_CONTENT_WIDTH)
        }
    }

    /// Rows given to the header banner.
    pub fn header_height(&self) -> u16 {
        if self.is_short() {
            3
        } else {
            5
        }
    }

    /// Calculate a width as a percentage of terminal width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Percentage width clamped to `[min, max]`.
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage).clamp(min, max.max(min))
    }
}
