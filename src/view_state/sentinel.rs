//! Proximity test for the infinite-scroll sentinel.

/// Whether the sentinel at the end of `content_height` rows is within
/// `threshold` rows of the bottom of the viewport.
///
/// Content shorter than the viewport always has its sentinel in view.
pub fn sentinel_in_view(
    scroll_offset: usize,
    viewport_height: usize,
    content_height: usize,
    threshold: usize,
) -> bool {
    let reach = scroll_offset
        .saturating_add(viewport_height)
        .saturating_add(threshold);
    content_height <= reach
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_content_is_always_in_view() {
        assert!(sentinel_in_view(0, 20, 5, 0));
    }

    #[test]
    fn far_from_bottom_is_not_in_view() {
        assert!(!sentinel_in_view(0, 10, 100, 2));
    }

    #[test]
    fn threshold_pulls_the_trigger_early() {
        assert!(!sentinel_in_view(85, 10, 100, 4));
        assert!(sentinel_in_view(86, 10, 100, 4));
    }

    #[test]
    fn huge_offsets_do_not_overflow() {
        assert!(sentinel_in_view(usize::MAX, 10, 100, 10));
    }
}
