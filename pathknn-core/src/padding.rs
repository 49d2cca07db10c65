//! Fixed-width padding for rows whose component is smaller than `k`.
//!
//! The downstream embedding indexes rows positionally, so every row must
//! carry `k` records even when the search ran out of reachable vertices.
//! Missing slots are filled with infinite-distance placeholders drawn from
//! the lowest vertex indices the search did not touch.

use crate::neighbour::{Neighbour, NeighbourRow};

/// Appends placeholders to `row` until it holds `k` records.
///
/// Indices are scanned in ascending order over `0..vertex_count`, skipping
/// every index for which `touched` returns `true`. When the scan runs out of
/// indices first, the row is left shorter than `k`; this only happens when
/// `k >= vertex_count`.
///
/// # Examples
/// ```
/// use pathknn_core::{NeighbourRow, pad_row};
///
/// let mut row = NeighbourRow::new(2, Vec::new());
/// pad_row(&mut row, 3, 6, |vertex| vertex == 2);
/// let ids: Vec<usize> = row.neighbours().iter().map(|n| n.id).collect();
/// assert_eq!(ids, vec![0, 1, 3]);
/// assert!(row.neighbours().iter().all(|n| n.distance.is_infinite()));
/// ```
pub fn pad_row<F>(row: &mut NeighbourRow, k: usize, vertex_count: usize, touched: F)
where
    F: Fn(usize) -> bool,
{
    let missing = k.saturating_sub(row.len());
    if missing == 0 {
        return;
    }
    let fillers: Vec<usize> = (0..vertex_count)
        .filter(|&vertex| !touched(vertex))
        .take(missing)
        .collect();
    for vertex in fillers {
        row.push(Neighbour::placeholder(vertex));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    fn ids(row: &NeighbourRow) -> Vec<usize> {
        row.neighbours().iter().map(|n| n.id).collect()
    }

    #[rstest]
    fn full_rows_are_left_alone() {
        let mut row = NeighbourRow::new(
            0,
            vec![
                Neighbour { id: 1, distance: 1.0 },
                Neighbour { id: 2, distance: 2.0 },
            ],
        );
        pad_row(&mut row, 2, 10, |vertex| vertex <= 2);
        assert_eq!(ids(&row), vec![1, 2]);
    }

    #[rstest]
    fn placeholders_follow_real_records() {
        let mut row = NeighbourRow::new(3, vec![Neighbour { id: 4, distance: 1.0 }]);
        pad_row(&mut row, 4, 8, |vertex| vertex == 3 || vertex == 4);
        assert_eq!(ids(&row), vec![4, 0, 1, 2]);
        assert_eq!(row.real_count(), 1);
        assert!(row.neighbours()[1..].iter().all(Neighbour::is_placeholder));
    }

    #[rstest]
    #[case(3, 3)]
    #[case(5, 3)]
    fn exhausted_index_space_leaves_short_row(#[case] k: usize, #[case] vertex_count: usize) {
        let mut row = NeighbourRow::new(0, vec![Neighbour { id: 1, distance: 1.0 }]);
        pad_row(&mut row, k, vertex_count, |vertex| vertex <= 1);
        assert_eq!(ids(&row), vec![1, 2]);
    }
}
