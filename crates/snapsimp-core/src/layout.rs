//! Viewport-dependent layout decisions.

/// Minimum window width (logical px) for the large navigation bar.
pub const LARGE_NAV_MIN_WIDTH: f64 = 850.0;

/// Navigation bar layout for the current window width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavLayout {
    #[default]
    Large,
    Compact,
}

impl NavLayout {
    pub fn for_width(width: f64) -> Self {
        if width >= LARGE_NAV_MIN_WIDTH {
            NavLayout::Large
        } else {
            NavLayout::Compact
        }
    }

    /// Maximum logo edge length in px.
    pub fn logo_max_px(&self) -> u32 {
        match self {
            NavLayout::Large => 80,
            NavLayout::Compact => 60,
        }
    }

    /// CSS modifier class for the nav bar.
    pub fn class(&self) -> &'static str {
        match self {
            NavLayout::Large => "navbar navbar--large",
            NavLayout::Compact => "navbar navbar--compact",
        }
    }
}
