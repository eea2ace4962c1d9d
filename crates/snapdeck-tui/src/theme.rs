use ratatui::style::Color;

/// Runtime theme with configurable colors.
#[derive(Debug, Clone)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub dim: Color,
    /// Active indicator, trail draw-in, progress fill
    pub accent: Color,
    /// Section headers and the active TOC entry
    pub highlight: Color,
    /// Ripple acknowledgment
    pub ripple: Color,
    pub status_bg: Color,
    pub status_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Gruvbox Material dark
        Self {
            bg: Color::Rgb(0x28, 0x28, 0x28),
            fg: Color::Rgb(0xd4, 0xbe, 0x98),
            dim: Color::Rgb(0x7c, 0x6f, 0x64),
            accent: Color::Rgb(0x89, 0xb4, 0x82),
            highlight: Color::Rgb(0xd8, 0xa6, 0x57),
            ripple: Color::Rgb(0xe7, 0x8a, 0x4e),
            status_bg: Color::Rgb(0x45, 0x40, 0x3d),
            status_fg: Color::Rgb(0xdd, 0xc7, 0xa1),
        }
    }
}

impl Theme {
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(0xf9, 0xf5, 0xd7),
            fg: Color::Rgb(0x65, 0x4c, 0x35),
            dim: Color::Rgb(0xa8, 0x99, 0x84),
            accent: Color::Rgb(0x6c, 0x78, 0x2e),
            highlight: Color::Rgb(0xb4, 0x71, 0x09),
            ripple: Color::Rgb(0xc3, 0x5e, 0x0a),
            status_bg: Color::Rgb(0xeb, 0xdb, 0xb2),
            status_fg: Color::Rgb(0x50, 0x49, 0x45),
        }
    }
}

/// Resolve a theme by config name; unknown names fall back to the dark
/// default.
pub fn load_theme(name: &str) -> Theme {
    match name {
        "light" => Theme::light(),
        _ => Theme::default(),
    }
}
