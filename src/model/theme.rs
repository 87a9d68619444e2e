//! Design tokens supplied by the theme provider.
//!
//! patternkit never computes these; they are injected through configuration
//! and consumed by the layout derivations in `view_state`.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

/// Named responsive breakpoint, smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Breakpoint {
    /// Phones.
    Xs,
    /// Large phones / small tablets.
    Sm,
    /// Tablets.
    Md,
    /// Laptops.
    Lg,
    /// Wide desktops.
    Xl,
}

impl Breakpoint {
    /// All breakpoints in ascending order.
    pub const ALL: [Breakpoint; 5] = [
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
    ];

    /// Short lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Breakpoint::Xs => "xs",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Minimum widths in pixels for each breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Breakpoints {
    /// Minimum width for `xs`.
    pub xs: u32,
    /// Minimum width for `sm`.
    pub sm: u32,
    /// Minimum width for `md`.
    pub md: u32,
    /// Minimum width for `lg`.
    pub lg: u32,
    /// Minimum width for `xl`.
    pub xl: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            xs: 0,
            sm: 600,
            md: 900,
            lg: 1200,
            xl: 1536,
        }
    }
}

impl Breakpoints {
    /// Minimum width of one breakpoint.
    pub fn min_width(&self, bp: Breakpoint) -> u32 {
        match bp {
            Breakpoint::Xs => self.xs,
            Breakpoint::Sm => self.sm,
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
            Breakpoint::Xl => self.xl,
        }
    }

    /// Whether thresholds are non-decreasing from `xs` to `xl`.
    pub fn is_ascending(&self) -> bool {
        Breakpoint::ALL
            .windows(2)
            .all(|pair| self.min_width(pair[0]) <= self.min_width(pair[1]))
    }

    /// Largest breakpoint whose minimum width is at most `width_px`.
    ///
    /// Widths below `xs` still classify as `Xs`.
    pub fn classify(&self, width_px: u32) -> Breakpoint {
        Breakpoint::ALL
            .iter()
            .rev()
            .copied()
            .find(|bp| width_px >= self.min_width(*bp))
            .unwrap_or(Breakpoint::Xs)
    }
}

/// Theme tokens: spacing unit, breakpoints, and palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Base spacing unit in pixels.
    pub spacing_unit: u32,
    /// Breakpoint thresholds.
    pub breakpoints: Breakpoints,
    /// Named colors (`"primary" -> "#1976d2"`).
    pub palette: BTreeMap<String, String>,
}

impl Default for Theme {
    fn default() -> Self {
        let palette = [
            ("primary", "#1976d2"),
            ("secondary", "#9c27b0"),
            ("success", "#2e7d32"),
            ("warning", "#ed6c02"),
            ("error", "#d32f2f"),
            ("text", "#e0e0e0"),
            ("muted", "#9e9e9e"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            spacing_unit: 8,
            breakpoints: Breakpoints::default(),
            palette,
        }
    }
}

impl Theme {
    /// Spacing in pixels for a multiplier (`spacing(2)` = two units).
    pub fn spacing(&self, factor: u32) -> u32 {
        self.spacing_unit.saturating_mul(factor)
    }

    /// Palette lookup.
    pub fn color(&self, name: &str) -> Option<&str> {
        self.palette.get(name).map(String::as_str)
    }

    /// Palette lookup parsed to RGB.
    pub fn rgb(&self, name: &str) -> Option<(u8, u8, u8)> {
        self.color(name).and_then(parse_hex_color)
    }
}

/// Parse `#rrggbb` or `#rgb`.
pub fn parse_hex_color(raw: &str) -> Option<(u8, u8, u8)> {
    let hex = raw.strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        6 => Some((
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        3 => {
            let short = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
            Some((short(0)?, short(1)?, short(2)?))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_picks_largest_matching_breakpoint() {
        let bps = Breakpoints::default();
        assert_eq!(bps.classify(0), Breakpoint::Xs);
        assert_eq!(bps.classify(599), Breakpoint::Xs);
        assert_eq!(bps.classify(600), Breakpoint::Sm);
        assert_eq!(bps.classify(1000), Breakpoint::Md);
        assert_eq!(bps.classify(1200), Breakpoint::Lg);
        assert_eq!(bps.classify(4000), Breakpoint::Xl);
    }

    #[test]
    fn classify_below_xs_threshold_is_xs() {
        let bps = Breakpoints {
            xs: 100,
            ..Breakpoints::default()
        };
        assert_eq!(bps.classify(10), Breakpoint::Xs);
    }

    #[test]
    fn default_breakpoints_are_ascending() {
        assert!(Breakpoints::default().is_ascending());
        let bad = Breakpoints {
            md: 500,
            ..Breakpoints::default()
        };
        assert!(!bad.is_ascending());
    }

    #[test]
    fn spacing_multiplies_unit() {
        let theme = Theme::default();
        assert_eq!(theme.spacing(0), 0);
        assert_eq!(theme.spacing(3), 24);
    }

    #[test]
    fn parse_hex_color_accepts_long_and_short_forms() {
        assert_eq!(parse_hex_color("#1976d2"), Some((0x19, 0x76, 0xd2)));
        assert_eq!(parse_hex_color("#fff"), Some((255, 255, 255)));
    }

    #[test]
    fn parse_hex_color_rejects_garbage() {
        assert_eq!(parse_hex_color("1976d2"), None);
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color("#gggggg"), None);
    }

    #[test]
    fn palette_lookup() {
        let theme = Theme::default();
        assert_eq!(theme.color("primary"), Some("#1976d2"));
        assert_eq!(theme.color("nope"), None);
    }
}
