//! Ordering by rank.
//!
//! Columns and tasks carry an integer `order`. Sorting is always stable so
//! that equal ranks keep their previous relative order.

use crate::column::Column;
use crate::task::Task;

/// Entities ranked by an integer `order` within their container.
pub trait Ranked {
    fn rank(&self) -> i32;
}

impl Ranked for Task {
    fn rank(&self) -> i32 {
        self.order
    }
}

impl Ranked for Column {
    fn rank(&self) -> i32 {
        self.order
    }
}

/// Sort in place, ascending by rank.
pub fn sort_by_order<T: Ranked>(items: &mut [T]) {
    items.sort_by_key(Ranked::rank);
}

/// Borrowing variant of [`sort_by_order`].
pub fn sorted_by_order<T: Ranked>(items: &[T]) -> Vec<&T> {
    let mut sorted: Vec<&T> = items.iter().collect();
    sorted.sort_by_key(|item| item.rank());
    sorted
}
