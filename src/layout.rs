//! Responsive layout selection.
//!
//! The page carries both the table view and the card view. Which one is
//! visible is a pure function of viewport width; the same rule is emitted
//! as a CSS media query so the browser and [`Breakpoint::active_view`]
//! always agree.

use serde::{Deserialize, Serialize};

/// Default viewport breakpoint in CSS pixels (the "lg" breakpoint).
pub const DEFAULT_BREAKPOINT_PX: u32 = 1024;

/// Default terminal breakpoint in columns for the terminal renderer.
pub const DEFAULT_TERMINAL_BREAKPOINT_COLS: u16 = 100;

/// The two representations of the technique list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    /// Five-column table for wide viewports
    Table,
    /// Stacked cards for narrow viewports
    Cards,
}

impl ViewKind {
    /// CSS class of the view's container element.
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::Table => "table-view",
            Self::Cards => "card-view",
        }
    }

    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Table, Self::Cards]
    }
}

impl std::fmt::Display for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Cards => write!(f, "cards"),
        }
    }
}

/// Width threshold at and above which the table view is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub min_width: u32,
}

impl Breakpoint {
    #[must_use]
    pub const fn new(min_width: u32) -> Self {
        Self { min_width }
    }

    /// The view visible at `width`. Exactly one view is active for any width.
    #[must_use]
    pub const fn active_view(&self, width: u32) -> ViewKind {
        if width >= self.min_width {
            ViewKind::Table
        } else {
            ViewKind::Cards
        }
    }

    /// Whether `view` is the visible one at `width`.
    #[must_use]
    pub fn is_visible(&self, view: ViewKind, width: u32) -> bool {
        self.active_view(width) == view
    }

    /// Media query that matches widths where the table is shown.
    #[must_use]
    pub fn wide_media_query(&self) -> String {
        format!("(min-width: {}px)", self.min_width)
    }
}

impl Default for Breakpoint {
    fn default() -> Self {
        Self::new(DEFAULT_BREAKPOINT_PX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_view_boundaries() {
        let bp = Breakpoint::default();
        assert_eq!(bp.active_view(0), ViewKind::Cards);
        assert_eq!(bp.active_view(1023), ViewKind::Cards);
        assert_eq!(bp.active_view(1024), ViewKind::Table);
        assert_eq!(bp.active_view(2560), ViewKind::Table);
    }

    #[test]
    fn test_exactly_one_view_visible() {
        let bp = Breakpoint::new(800);
        for width in [0, 320, 799, 800, 801, 1920] {
            let visible = ViewKind::all()
                .into_iter()
                .filter(|v| bp.is_visible(*v, width))
                .count();
            assert_eq!(visible, 1, "width {width}");
        }
    }

    #[test]
    fn test_media_query() {
        assert_eq!(Breakpoint::new(900).wide_media_query(), "(min-width: 900px)");
    }
}
