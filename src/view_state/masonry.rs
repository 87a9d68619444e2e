//! Masonry column placement.
//!
//! Items are placed one at a time into the currently shortest column. Ties
//! go to the leftmost column, so equal-height items fill left to right.

use crate::model::Breakpoint;

/// Where one item landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MasonryPlacement {
    /// Column index (0-based, left to right).
    pub column: usize,
    /// Offset of the item's top edge within its column.
    pub top: u32,
    /// Item height.
    pub height: u32,
}

/// Placement of every item plus the resulting column heights.
///
/// # Invariants
/// - `placements.len()` equals the number of input heights.
/// - `columns[c]` lists item indices in column `c`, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MasonryLayout {
    /// Per-item placement, indexed like the input.
    pub placements: Vec<MasonryPlacement>,
    /// Item indices per column.
    pub columns: Vec<Vec<usize>>,
    /// Final height of each column.
    pub column_heights: Vec<u32>,
}

impl MasonryLayout {
    /// Height of the tallest column.
    pub fn height(&self) -> u32 {
        self.column_heights.iter().copied().max().unwrap_or(0)
    }
}

/// Column count used at each breakpoint.
pub fn columns_for(breakpoint: Breakpoint) -> usize {
    match breakpoint {
        Breakpoint::Xs => 1,
        Breakpoint::Sm => 2,
        Breakpoint::Md => 3,
        Breakpoint::Lg => 4,
        Breakpoint::Xl => 5,
    }
}

/// Place items of the given heights into `columns` columns separated
/// vertically by `gap`. A column count of 0 is treated as 1.
pub fn masonry_layout(heights: &[u32], columns: usize, gap: u32) -> MasonryLayout {
    let columns = columns.max(1);
    let mut column_heights = vec![0u32; columns];
    let mut members: Vec<Vec<usize>> = vec![Vec::new(); columns];
    let mut placements = Vec::with_capacity(heights.len());

    for (index, &height) in heights.iter().enumerate() {
        // min_by_key returns the first minimum, which is the leftmost column
        let column = column_heights
            .iter()
            .enumerate()
            .min_by_key(|&(_, h)| *h)
            .map_or(0, |(c, _)| c);

        let top = if members[column].is_empty() {
            0
        } else {
            column_heights[column].saturating_add(gap)
        };
        column_heights[column] = top.saturating_add(height);
        members[column].push(index);
        placements.push(MasonryPlacement { column, top, height });
    }

    MasonryLayout {
        placements,
        columns: members,
        column_heights,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_heights_fill_left_to_right() {
        let layout = masonry_layout(&[4, 4, 4, 4], 3, 0);
        let cols: Vec<usize> = layout.placements.iter().map(|p| p.column).collect();
        assert_eq!(cols, vec![0, 1, 2, 0]);
    }

    #[test]
    fn goes_into_shortest_column() {
        // col0: 10, col1: 2 → third item goes to col1
        let layout = masonry_layout(&[10, 2, 3], 2, 0);
        assert_eq!(layout.placements[2].column, 1);
        assert_eq!(layout.placements[2].top, 2);
        assert_eq!(layout.column_heights, vec![10, 5]);
    }

    #[test]
    fn gap_separates_items_in_a_column() {
        let layout = masonry_layout(&[3, 3], 1, 1);
        assert_eq!(layout.placements[1].top, 4);
        assert_eq!(layout.height(), 7);
    }

    #[test]
    fn zero_columns_is_treated_as_one() {
        let layout = masonry_layout(&[1, 2], 0, 0);
        assert_eq!(layout.columns, vec![vec![0, 1]]);
    }

    #[test]
    fn empty_input_gives_empty_columns() {
        let layout = masonry_layout(&[], 3, 1);
        assert!(layout.placements.is_empty());
        assert_eq!(layout.height(), 0);
        assert_eq!(layout.columns.len(), 3);
    }

    #[test]
    fn column_count_grows_with_breakpoint() {
        let counts: Vec<usize> = Breakpoint::ALL.iter().map(|&bp| columns_for(bp)).collect();
        assert_eq!(counts, vec![1, 2, 3, 4, 5]);
    }
}
