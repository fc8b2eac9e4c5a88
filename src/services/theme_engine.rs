//! Theme engine — resolves the persisted display mode to a terminal palette.

use crate::types::settings::ThemeMode;

/// An RGB color triple.
pub type Rgb = (u8, u8, u8);

/// Fallback when a palette constant fails to parse.
const FALLBACK_COLOR: Rgb = (200, 200, 200);

/// Colors used by the terminal renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub accent: Rgb,
    pub text: Rgb,
    pub muted: Rgb,
    pub link: Rgb,
    pub danger: Rgb,
}

/// Trait defining the theme engine interface.
pub trait ThemeEngineTrait {
    fn set_theme(&mut self, mode: ThemeMode);
    fn get_theme(&self) -> &ThemeMode;
    /// Returns the effective mode, resolving `System` to a concrete one.
    fn resolved_theme(&self) -> ThemeMode;
    fn detect_system_theme(&self) -> ThemeMode;
    fn palette(&self) -> Palette;
}

/// Dark terminal colors.
struct DarkPalette;
impl DarkPalette {
    const ACCENT: &'static str = "#2ea44f";
    const TEXT: &'static str = "#c9d1d9";
    const MUTED: &'static str = "#8b949e";
    const LINK: &'static str = "#58a6ff";
    const DANGER: &'static str = "#f85149";
}

/// Light terminal colors.
struct LightPalette;
impl LightPalette {
    const ACCENT: &'static str = "#1a7f37";
    const TEXT: &'static str = "#24292f";
    const MUTED: &'static str = "#57606a";
    const LINK: &'static str = "#0969da";
    const DANGER: &'static str = "#cf222e";
}

/// Parses a `#rrggbb` hex color into an RGB triple.
fn hex_to_rgb(color: &str) -> Option<Rgb> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// The theme engine implementation.
pub struct ThemeEngine {
    current_theme: ThemeMode,
}

impl ThemeEngine {
    /// Creates a new ThemeEngine with the given initial mode.
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            current_theme: mode,
        }
    }

    fn build_palette(
        accent: &str,
        text: &str,
        muted: &str,
        link: &str,
        danger: &str,
    ) -> Palette {
        Palette {
            accent: hex_to_rgb(accent).unwrap_or(FALLBACK_COLOR),
            text: hex_to_rgb(text).unwrap_or(FALLBACK_COLOR),
            muted: hex_to_rgb(muted).unwrap_or(FALLBACK_COLOR),
            link: hex_to_rgb(link).unwrap_or(FALLBACK_COLOR),
            danger: hex_to_rgb(danger).unwrap_or(FALLBACK_COLOR),
        }
    }
}

impl ThemeEngineTrait for ThemeEngine {
    fn set_theme(&mut self, mode: ThemeMode) {
        self.current_theme = mode;
    }

    fn get_theme(&self) -> &ThemeMode {
        &self.current_theme
    }

    fn resolved_theme(&self) -> ThemeMode {
        match &self.current_theme {
            ThemeMode::System => self.detect_system_theme(),
            other => other.clone(),
        }
    }

    fn detect_system_theme(&self) -> ThemeMode {
        // Terminals advertise their scheme through COLORFGBG ("<fg>;<bg>"),
        // where background slots 0-6 and 8 are the dark ANSI colors.
        if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
            if let Some(bg) = colorfgbg
                .rsplit(';')
                .next()
                .and_then(|s| s.trim().parse::<u8>().ok())
            {
                return if bg <= 6 || bg == 8 {
                    ThemeMode::Dark
                } else {
                    ThemeMode::Light
                };
            }
        }
        // Default to dark.
        ThemeMode::Dark
    }

    fn palette(&self) -> Palette {
        match self.resolved_theme() {
            ThemeMode::Dark => Self::build_palette(
                DarkPalette::ACCENT,
                DarkPalette::TEXT,
                DarkPalette::MUTED,
                DarkPalette::LINK,
                DarkPalette::DANGER,
            ),
            ThemeMode::Light => Self::build_palette(
                LightPalette::ACCENT,
                LightPalette::TEXT,
                LightPalette::MUTED,
                LightPalette::LINK,
                LightPalette::DANGER,
            ),
            // System is already resolved by resolved_theme()
            ThemeMode::System => unreachable!(),
        }
    }
}
