//! Theme-driven widget styling.
//!
//! Palette entries from the resolved [`Theme`] become ratatui colors.

use crate::model::Theme;
use ratatui::style::{Color, Modifier, Style};

/// Secondary text (hints, disabled controls).
pub const MUTED_TEXT: Style = Style::new().fg(Color::DarkGray);

/// Section headers inside panels and the help overlay.
pub const SECTION_HEADER: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Colors on or off regardless of environment.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== GalleryStyles =====

/// Styles for every gallery widget, derived once from the theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalleryStyles {
    /// Focused element, selected tab, active step.
    pub primary: Style,
    /// Secondary accents (filter values, badges).
    pub secondary: Style,
    /// Completed steps.
    pub success: Style,
    /// Skipped steps, loading indicator.
    pub warning: Style,
    /// Empty results.
    pub error: Style,
    /// Body text.
    pub text: Style,
    /// Hints and disabled controls.
    pub muted: Style,
}

impl GalleryStyles {
    /// Build styles from the theme palette.
    ///
    /// Unknown or malformed palette entries fall back to a terminal color.
    /// With colors disabled every style is plain, except that focus is still
    /// shown with reverse video.
    pub fn from_theme(theme: &Theme, config: ColorConfig) -> Self {
        if !config.colors_enabled() {
            return Self {
                primary: Style::default().add_modifier(Modifier::REVERSED),
                secondary: Style::default(),
                success: Style::default(),
                warning: Style::default(),
                error: Style::default(),
                text: Style::default(),
                muted: Style::default(),
            };
        }

        let fg = |name: &str, fallback: Color| {
            Style::default().fg(palette_color(theme, name, fallback))
        };
        Self {
            primary: fg("primary", Color::Blue).add_modifier(Modifier::BOLD),
            secondary: fg("secondary", Color::Magenta),
            success: fg("success", Color::Green),
            warning: fg("warning", Color::Yellow),
            error: fg("error", Color::Red),
            text: fg("text", Color::White),
            muted: fg("muted", Color::DarkGray),
        }
    }
}

impl Default for GalleryStyles {
    fn default() -> Self {
        Self::from_theme(&Theme::default(), ColorConfig::new(true))
    }
}

/// Palette entry as an RGB color.
pub fn palette_color(theme: &Theme, name: &str, fallback: Color) -> Color {
    theme
        .rgb(name)
        .map(|(r, g, b)| Color::Rgb(r, g, b))
        .unwrap_or(fallback)
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn color_config_respects_no_color_flag() {
        let config = ColorConfig::from_env_and_args(true);
        assert!(
            !config.colors_enabled(),
            "--no-color flag should disable colors"
        );
    }

    #[test]
    #[serial(no_color)]
    fn color_config_respects_no_color_env_var() {
        std::env::set_var("NO_COLOR", "1");
        let config = ColorConfig::from_env_and_args(false);
        std::env::remove_var("NO_COLOR");
        assert!(!config.colors_enabled(), "NO_COLOR should disable colors");
    }

    #[test]
    fn palette_color_parses_theme_hex() {
        let theme = Theme::default();
        assert_eq!(
            palette_color(&theme, "primary", Color::Reset),
            Color::Rgb(0x19, 0x76, 0xd2)
        );
    }

    #[test]
    fn palette_color_falls_back_for_missing_entry() {
        let theme = Theme::default();
        assert_eq!(palette_color(&theme, "nope", Color::Cyan), Color::Cyan);
    }

    #[test]
    fn uncolored_styles_still_mark_focus() {
        let styles = GalleryStyles::from_theme(&Theme::default(), ColorConfig::new(false));
        assert!(styles.primary.add_modifier.contains(Modifier::REVERSED));
        assert_eq!(styles.text, Style::default());
    }
}
