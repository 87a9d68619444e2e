//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
/// Each story interprets the generic actions (`Up`, `Activate`, ...) for
/// its own state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Gallery navigation
    /// Show the next story. Default: Tab
    NextStory,
    /// Show the previous story. Default: Shift+Tab
    PrevStory,
    /// Jump to a story by 1-indexed number. Default: 1-9
    SelectStory(usize),

    // Generic movement
    /// Move highlight up. Default: k/↑
    Up,
    /// Move highlight down. Default: j/↓
    Down,
    /// Move left / back. Default: h/←
    Left,
    /// Move right / forward. Default: l/→
    Right,
    /// Activate the highlighted element. Default: Enter
    Activate,
    /// Toggle the highlighted element. Default: Space
    Toggle,
    /// Dismiss. Default: Esc
    Cancel,

    // Collection
    /// Next page. Default: n/Page Down
    NextPage,
    /// Previous page. Default: N/Page Up
    PrevPage,
    /// Cycle the value of the focused filter. Default: f
    CycleFilter,
    /// Focus the next filter control. Default: F
    NextFilterKey,
    /// Clear all filters. Default: x
    ClearFilters,
    /// Cycle sort options. Default: s
    CycleSort,
    /// Toggle grid/list mode. Default: v
    ToggleViewMode,
    /// Cycle page sizes. Default: p
    CyclePageSize,

    // Pattern-specific
    /// Toggle exclusive/inclusive expansion or linear/non-linear stepping. Default: m
    ToggleMode,
    /// Skip an optional step. Default: S
    Skip,
    /// Reset the story's state. Default: r
    Reset,
    /// Zoom in. Default: +/=
    ZoomIn,
    /// Zoom out. Default: -
    ZoomOut,

    // Application
    /// Show help overlay. Default: ?
    Help,
    /// Exit. Default: q/Ctrl+c
    Quit,
}
