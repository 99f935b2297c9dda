//! Lane allocation — greedy interval coloring of one row group.
//!
//! Spans are half-open `[start, end)`. A span with `end <= start` is a point
//! and occupies exactly the instant `start`, so it collides with a span that
//! contains that instant and with other points at the same instant.
//!
//! Spans are visited in `(start, end, input index)` order and each one takes
//! the lowest row that is free at its start. Because spans arrive by start
//! time, the greedy choice is optimal: the number of rows equals the largest
//! number of spans and points occupying any single instant.
//!
//! The allocator is generic over the coordinate so the same packing runs on
//! time intervals or on rendered pixel extents.

/// Row assignment for a group of half-open `[start, end)` spans.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Allocation {
    /// Input indices in the order they were packed.
    pub order: Vec<usize>,
    /// Row of each span, indexed like the input.
    pub rows: Vec<usize>,
    /// Number of rows used.
    pub row_count: usize,
}

/// How far the last item placed in a row reaches.
#[derive(Debug, Clone, Copy)]
struct RowEnd<K> {
    end: K,
    /// The row still holds `end` itself (the last item was a point).
    inclusive: bool,
}

impl<K: Ord + Copy> RowEnd<K> {
    fn of(start: K, end: K) -> Self {
        if end > start {
            Self {
                end,
                inclusive: false,
            }
        } else {
            Self {
                end: start,
                inclusive: true,
            }
        }
    }

    fn is_free_at(&self, instant: K) -> bool {
        self.end < instant || (self.end == instant && !self.inclusive)
    }
}

/// Incremental allocator. Feed spans sorted by start; see [`allocate`].
#[derive(Debug, Clone, Default)]
pub struct LaneAllocator<K> {
    /// Reach of the last span placed in each row.
    row_ends: Vec<RowEnd<K>>,
}

impl<K: Ord + Copy> LaneAllocator<K> {
    pub fn new() -> Self {
        Self {
            row_ends: Vec::new(),
        }
    }

    /// Place `[start, end)` in the lowest row free at `start` and return that
    /// row. An `end` at or before `start` places a point at `start`.
    pub fn place(&mut self, start: K, end: K) -> usize {
        let reach = RowEnd::of(start, end);
        match self.row_ends.iter().position(|row_end| row_end.is_free_at(start)) {
            Some(row) => {
                self.row_ends[row] = reach;
                row
            }
            None => {
                self.row_ends.push(reach);
                self.row_ends.len() - 1
            }
        }
    }

    pub fn row_count(&self) -> usize {
        self.row_ends.len()
    }
}

/// Sort `spans` stably by `(start, end)` and pack them into rows.
pub fn allocate<K: Ord + Copy>(spans: &[(K, K)]) -> Allocation {
    let mut order: Vec<usize> = (0..spans.len()).collect();
    // Stable: equal (start, end) pairs keep input order.
    order.sort_by_key(|&i| {
        let (start, end) = spans[i];
        (start, end.max(start))
    });

    let mut allocator = LaneAllocator::new();
    let mut rows = vec![0; spans.len()];
    for &i in &order {
        let (start, end) = spans[i];
        rows[i] = allocator.place(start, end);
    }

    Allocation {
        order,
        rows,
        row_count: allocator.row_count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_uses_no_rows() {
        let allocation = allocate::<i64>(&[]);
        assert_eq!(allocation.row_count, 0);
        assert!(allocation.order.is_empty());
    }

    #[test]
    fn touching_spans_share_a_row() {
        let allocation = allocate(&[(0, 5), (5, 10), (10, 15)]);
        assert_eq!(allocation.rows, vec![0, 0, 0]);
        assert_eq!(allocation.row_count, 1);
    }

    #[test]
    fn overlapping_spans_stack() {
        let allocation = allocate(&[(0, 10), (2, 4), (3, 8), (4, 6)]);
        assert_eq!(allocation.rows, vec![0, 1, 2, 1]);
        assert_eq!(allocation.row_count, 3);
    }

    #[test]
    fn reuses_lowest_free_row() {
        let allocation = allocate(&[(0, 3), (0, 10), (4, 6)]);
        assert_eq!(allocation.rows, vec![0, 1, 0]);
    }

    #[test]
    fn ties_break_by_end_then_input_order() {
        let allocation = allocate(&[(0, 9), (0, 4), (0, 4)]);
        assert_eq!(allocation.order, vec![1, 2, 0]);
        assert_eq!(allocation.rows, vec![2, 0, 1]);
    }

    #[test]
    fn inverted_span_is_treated_as_point() {
        let mut allocator = LaneAllocator::new();
        assert_eq!(allocator.place(5, 1), 0);
        assert_eq!(allocator.place(5, 7), 1);
        assert_eq!(allocator.place(7, 7), 0);
        assert_eq!(allocator.row_count(), 2);
    }

    #[test]
    fn point_inside_span_takes_its_own_row() {
        let allocation = allocate(&[(0, 10), (5, 5)]);
        assert_eq!(allocation.rows, vec![0, 1]);
        assert_eq!(allocation.row_count, 2);
    }

    #[test]
    fn point_at_span_start_collides_but_at_end_does_not() {
        let allocation = allocate(&[(5, 5), (5, 10)]);
        assert_eq!(allocation.rows, vec![0, 1]);
        assert_eq!(allocation.row_count, 2);

        let allocation = allocate(&[(0, 5), (5, 5), (5, 9)]);
        assert_eq!(allocation.rows, vec![0, 0, 1]);
        assert_eq!(allocation.row_count, 2);
    }

    #[test]
    fn points_at_same_instant_stack() {
        let allocation = allocate(&[(3, 3), (3, 3), (4, 4)]);
        assert_eq!(allocation.rows, vec![0, 1, 0]);
        assert_eq!(allocation.row_count, 2);
    }
}
