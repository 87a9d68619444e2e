//! Story registry for the gallery.
//!
//! Each story renders one pattern with built-in fixtures (or a catalog file
//! passed on the command line) so its state machine can be driven by hand.

pub mod fixtures;

/// Which pattern a story demonstrates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoryKind {
    /// Filterable, sortable, paginated card catalog.
    Collection,
    /// Accordion panels (exclusive or inclusive).
    Accordion,
    /// File tree with nested expansion.
    FileTree,
    /// Tab strip.
    Tabs,
    /// Multi-step form.
    Stepper,
    /// Image grid with lightbox overlay.
    Lightbox,
    /// Floating action button with speed dial.
    SpeedDial,
    /// Infinite-scroll feed.
    Feed,
    /// Masonry grid.
    Masonry,
    /// Responsive multi-panel shell.
    Shell,
}

/// One gallery entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Story {
    /// Stable id used by `--story`.
    pub id: &'static str,
    /// Sidebar title.
    pub title: &'static str,
    /// Pattern shown.
    pub kind: StoryKind,
    /// One-line usage hint shown in the footer.
    pub hint: &'static str,
}

/// Every story, in sidebar order.
pub static STORIES: [Story; 10] = [
    Story {
        id: "collection",
        title: "Card Catalog",
        kind: StoryKind::Collection,
        hint: "hjkl move  enter open  f filter  F next filter  s sort  v view  n/N page  p size  x clear",
    },
    Story {
        id: "accordion",
        title: "Accordion",
        kind: StoryKind::Accordion,
        hint: "j/k move  space toggle  m exclusive/inclusive",
    },
    Story {
        id: "file-tree",
        title: "File Tree",
        kind: StoryKind::FileTree,
        hint: "j/k move  space toggle  h/l collapse/expand  m exclusive/inclusive",
    },
    Story {
        id: "tabs",
        title: "Tabs",
        kind: StoryKind::Tabs,
        hint: "h/l previous/next tab",
    },
    Story {
        id: "stepper",
        title: "Stepper",
        kind: StoryKind::Stepper,
        hint: "l next  h back  S skip  j/k focus  enter jump/finish  m linear  r reset",
    },
    Story {
        id: "lightbox",
        title: "Lightbox",
        kind: StoryKind::Lightbox,
        hint: "h/l move  enter open  ←/→ navigate  +/- zoom  esc close",
    },
    Story {
        id: "speed-dial",
        title: "Speed Dial",
        kind: StoryKind::SpeedDial,
        hint: "space open/close  j/k highlight  enter choose  esc close",
    },
    Story {
        id: "feed",
        title: "Infinite Feed",
        kind: StoryKind::Feed,
        hint: "j/k scroll  r restart",
    },
    Story {
        id: "masonry",
        title: "Masonry",
        kind: StoryKind::Masonry,
        hint: "resize the terminal to change columns",
    },
    Story {
        id: "shell",
        title: "Responsive Shell",
        kind: StoryKind::Shell,
        hint: "space toggle drawer  esc close  resize to change layout",
    },
];

/// Look up a story by id.
pub fn find_story(id: &str) -> Option<(usize, &'static Story)> {
    STORIES.iter().enumerate().find(|(_, story)| story.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn story_ids_are_unique() {
        let ids: HashSet<&str> = STORIES.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), STORIES.len());
    }

    #[test]
    fn find_story_returns_index() {
        let (index, story) = find_story("lightbox").expect("lightbox story exists");
        assert_eq!(story.kind, StoryKind::Lightbox);
        assert_eq!(STORIES[index].id, "lightbox");
    }

    #[test]
    fn find_story_unknown_is_none() {
        assert!(find_story("nope").is_none());
    }
}
