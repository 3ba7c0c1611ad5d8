//! Color palettes for list rendering.
//!
//! The active palette is resolved from configuration once per command and
//! passed down to the renderer; nothing here is global or mutable.

/// ANSI styling for one theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub section_title: &'static str,
    pub pending: &'static str,
    pub done: &'static str,
    pub accent: &'static str,
    pub reset: &'static str,
}

/// Default theme, tuned for light terminal backgrounds.
pub const LIGHT: Palette = Palette {
    section_title: "\x1b[34;1m",
    pending: "\x1b[0m",
    done: "\x1b[90;9m", // grey + strikethrough
    accent: "\x1b[32m",
    reset: "\x1b[0m",
};

/// Brighter foregrounds for dark terminal backgrounds.
pub const DARK: Palette = Palette {
    section_title: "\x1b[36;1m",
    pending: "\x1b[97m",
    done: "\x1b[90;9m",
    accent: "\x1b[92m",
    reset: "\x1b[0m",
};

/// Resolve the palette for a configured theme name.
/// Unknown names fall back to light, matching the app default.
pub fn palette_for(theme: &str) -> Palette {
    match theme {
        "dark" => DARK,
        _ => LIGHT,
    }
}
