//! Responsive multi-panel shell layout.
//!
//! A shell has a navigation sidebar, a main content area and an optional
//! detail panel. Which of these are shown, and how, depends only on the
//! active breakpoint.

use crate::model::{Breakpoint, Breakpoints};
use crate::view_state::masonry::columns_for;

/// How the navigation sidebar is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarMode {
    /// Always visible beside the content.
    Permanent,
    /// Hidden behind a drawer toggle, drawn over the content when open.
    Temporary,
}

/// Semantic role of a shell panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellPanel {
    /// Navigation sidebar.
    Sidebar,
    /// Main content.
    Content,
    /// Detail / inspector panel.
    Detail,
}

/// Derived shell layout for one breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellLayout {
    /// Breakpoint the layout was derived for.
    pub breakpoint: Breakpoint,
    /// Sidebar presentation.
    pub sidebar: SidebarMode,
    /// Whether the detail panel is shown.
    pub detail_visible: bool,
    /// Content grid columns.
    pub columns: usize,
}

impl ShellLayout {
    /// Panels laid out side by side, left to right. A temporary sidebar is
    /// included only while its drawer is open.
    pub fn panels(&self, drawer_open: bool) -> Vec<ShellPanel> {
        let mut panels = Vec::with_capacity(3);
        if self.sidebar == SidebarMode::Permanent || drawer_open {
            panels.push(ShellPanel::Sidebar);
        }
        panels.push(ShellPanel::Content);
        if self.detail_visible {
            panels.push(ShellPanel::Detail);
        }
        panels
    }

    /// Whether the drawer toggle is meaningful at this breakpoint.
    pub fn has_drawer(&self) -> bool {
        self.sidebar == SidebarMode::Temporary
    }
}

/// Layout for a breakpoint.
pub fn shell_layout(breakpoint: Breakpoint) -> ShellLayout {
    let sidebar = if breakpoint >= Breakpoint::Md {
        SidebarMode::Permanent
    } else {
        SidebarMode::Temporary
    };
    ShellLayout {
        breakpoint,
        sidebar,
        detail_visible: breakpoint >= Breakpoint::Lg,
        columns: columns_for(breakpoint),
    }
}

/// Layout for a viewport width in px.
pub fn shell_layout_for_width(breakpoints: &Breakpoints, width_px: u32) -> ShellLayout {
    shell_layout(breakpoints.classify(width_px))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_screens_use_a_drawer() {
        let layout = shell_layout(Breakpoint::Xs);
        assert_eq!(layout.sidebar, SidebarMode::Temporary);
        assert!(!layout.detail_visible);
        assert_eq!(layout.panels(false), vec![ShellPanel::Content]);
        assert_eq!(
            layout.panels(true),
            vec![ShellPanel::Sidebar, ShellPanel::Content]
        );
    }

    #[test]
    fn medium_screens_pin_the_sidebar() {
        let layout = shell_layout(Breakpoint::Md);
        assert_eq!(layout.sidebar, SidebarMode::Permanent);
        assert!(!layout.has_drawer());
        assert_eq!(
            layout.panels(false),
            vec![ShellPanel::Sidebar, ShellPanel::Content]
        );
    }

    #[test]
    fn large_screens_show_detail_panel() {
        let layout = shell_layout(Breakpoint::Lg);
        assert_eq!(
            layout.panels(false),
            vec![ShellPanel::Sidebar, ShellPanel::Content, ShellPanel::Detail]
        );
    }

    #[test]
    fn width_is_classified_with_theme_breakpoints() {
        let bps = Breakpoints::default();
        assert_eq!(shell_layout_for_width(&bps, 599).breakpoint, Breakpoint::Xs);
        assert_eq!(
            shell_layout_for_width(&bps, 1300).breakpoint,
            Breakpoint::Lg
        );
    }
}
