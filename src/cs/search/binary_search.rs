use std::cmp::Ordering;

/// Searches a sorted slice for `target` using iterative binary search.
///
/// Returns the index of any element equal to `target`, or `None` if there is
/// no such element; an empty slice always yields `None`. The slice must be
/// sorted in ascending order, otherwise the result is meaningless. O(log n)
/// time, O(1) space.
///
/// # Examples
///
/// ```
/// use algo_classics::cs::search::binary_search::binary_search;
///
/// let items = [1, 3, 5, 7, 9];
/// assert_eq!(binary_search(&items, &7), Some(3));
/// assert_eq!(binary_search(&items, &4), None);
/// ```
pub fn binary_search<T: Ord>(items: &[T], target: &T) -> Option<usize> {
    // range [from, to) still under consideration
    let mut from = 0;
    let mut to = items.len();

    while from < to {
        // midpoint, computed without overflowing the sum
        let current = from + (to - from) / 2;

        match items[current].cmp(target) {
            Ordering::Equal => return Some(current),
            // next: [from, current)
            Ordering::Greater => to = current,
            // next: [current + 1, to)
            Ordering::Less => from = current + 1,
        }
    }

    None
}

/// Searches a sorted slice for `target` using recursive binary search.
///
/// Identical contract to [`binary_search`]; provided for completeness.
///
/// # Examples
///
/// ```
/// use algo_classics::cs::search::binary_search::binary_search_recursive;
///
/// let items = [2, 4, 6, 8];
/// assert_eq!(binary_search_recursive(&items, &2), Some(0));
/// assert_eq!(binary_search_recursive(&items, &5), None);
/// ```
pub fn binary_search_recursive<T: Ord>(items: &[T], target: &T) -> Option<usize> {
    find_in_range(items, target, 0, items.len())
}

fn find_in_range<T: Ord>(items: &[T], target: &T, from: usize, to: usize) -> Option<usize> {
    // empty range: not found
    if from >= to {
        return None;
    }

    let current = from + (to - from) / 2;
    match items[current].cmp(target) {
        Ordering::Equal => Some(current),
        Ordering::Greater => find_in_range(items, target, from, current),
        Ordering::Less => find_in_range(items, target, current + 1, to),
    }
}
