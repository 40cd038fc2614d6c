use std::ops::Range;

use log::trace;
use rand::Rng;

/// Sorts the slice in ascending order using iterative quicksort.
///
/// Instead of recursing, the sort keeps an explicit "to do" list of
/// `[from, to)` ranges that still need partitioning, so no input can grow the
/// call stack. Pivots are chosen uniformly at random, which keeps the expected
/// running time at O(n log n) even on already-sorted or reverse-sorted inputs;
/// the O(n²) worst case survives only with negligible probability.
///
/// The sort is not stable: equal elements may be reordered relative to each
/// other. An empty slice is a valid no-op.
///
/// # Examples
///
/// ```
/// use algo_classics::cs::sort::quicksort::quicksort;
///
/// let mut arr = vec![5, 3, 8, 1, 9, 2];
/// quicksort(&mut arr);
/// assert_eq!(arr, vec![1, 2, 3, 5, 8, 9]);
/// ```
pub fn quicksort<T: Ord>(input: &mut [T]) {
    if input.len() <= 1 {
        return;
    }
    trace!("quicksort: {} elements", input.len());

    // "to do" list of [from, to) ranges that still need partitioning
    let mut todo: Vec<Range<usize>> = vec![0..input.len()];

    while let Some(range) = todo.pop() {
        let (from, to) = (range.start, range.end);

        // partition puts the pivot in its sorted position and divides the
        // range into two (potentially unsorted) subranges
        let partition_index = partition(input, from, to);

        // left subrange, if there is still something to do
        if partition_index > from + 1 {
            todo.push(from..partition_index);
        }
        // right subrange, if there is still something to do
        if partition_index + 2 < to {
            todo.push(partition_index + 1..to);
        }
    }
}

/// Sorts the slice in ascending order using recursive quicksort.
///
/// Same partitioning scheme and guarantees as [`quicksort`]; provided for
/// completeness. Recursion depth is O(log n) in expectation thanks to the
/// random pivot.
///
/// # Examples
///
/// ```
/// use algo_classics::cs::sort::quicksort::quicksort_recursive;
///
/// let mut arr = vec![3, 6, 2, 7, 1, 8, 5, 4];
/// quicksort_recursive(&mut arr);
/// assert_eq!(arr, vec![1, 2, 3, 4, 5, 6, 7, 8]);
/// ```
pub fn quicksort_recursive<T: Ord>(input: &mut [T]) {
    if input.len() <= 1 {
        return;
    }
    sort_range(input, 0, input.len());
}

fn sort_range<T: Ord>(input: &mut [T], from: usize, to: usize) {
    // base case: single element
    if from + 1 >= to {
        return;
    }
    let partition_index = partition(input, from, to);
    sort_range(input, from, partition_index);
    sort_range(input, partition_index + 1, to);
}

/// Partitions the range `[from, to)` of `input` around a randomly chosen
/// pivot and returns the pivot's final index.
///
/// After the call, every element in `[from, index)` compares less than or
/// equal to the element at the returned index, and every element in
/// `(index, to)` compares greater than or equal to it. Elements are only
/// moved by swapping; nothing is allocated. A single-element range is valid
/// and returns `from`.
///
/// The pivot position is drawn uniformly at random from `[from, to)`, moved
/// to the back of the range, and swapped into place after a left-to-right
/// scan that collects the strictly smaller elements behind an advancing
/// boundary.
///
/// # Panics
///
/// Panics if `from >= to` or `to > input.len()`.
pub fn partition<T: Ord>(input: &mut [T], from: usize, to: usize) -> usize {
    assert!(from < to, "partition range must be non-empty");
    assert!(to <= input.len(), "partition range out of bounds");

    // move a random pivot to the last position of the range
    let last = to - 1;
    let random_index = rand::thread_rng().gen_range(from..to);
    input.swap(random_index, last);

    // scan and collect everything strictly less than the pivot behind the boundary
    let mut boundary = from;
    for i in from..last {
        if input[i] < input[last] {
            input.swap(i, boundary);
            boundary += 1;
        }
    }

    // move the pivot into its sorted position
    input.swap(last, boundary);

    debug_assert!(is_partitioned(input, from, to, boundary));
    boundary
}

/// Checks that `[from, to)` is partitioned around `partition_index`: nothing
/// on the left compares greater than the pivot, nothing on the right compares
/// less.
fn is_partitioned<T: Ord>(input: &[T], from: usize, to: usize, partition_index: usize) -> bool {
    let pivot = &input[partition_index];
    input[from..partition_index].iter().all(|x| x <= pivot)
        && input[partition_index + 1..to].iter().all(|x| x >= pivot)
}
