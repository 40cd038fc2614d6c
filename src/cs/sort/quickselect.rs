use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::cs::sort::quicksort::partition;
use crate::error::{Error, Result};

/// Returns the k-th largest element of the slice using randomized quickselect.
///
/// `k` is a 1-based rank counted from the largest element, so `k = 1` returns
/// the maximum and `k = input.len()` the minimum. Under ties any element
/// whose rank equals `k` may be returned.
///
/// The slice is repeatedly partitioned (reusing
/// [`partition`](crate::cs::sort::quicksort::partition)) around random pivots,
/// narrowing the candidate range until the pivot lands on the target rank's
/// sorted position. A loop is used instead of recursion so the call stack
/// stays flat. Expected O(n) time, O(n²) worst case with negligible
/// probability.
///
/// As an intentional side effect the slice ends up partially reordered,
/// though not necessarily sorted.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if the slice is empty or `k` is not in
/// `1..=input.len()`. Validation happens before any mutation.
///
/// # Examples
///
/// ```
/// use algo_classics::cs::sort::quickselect::kth_largest;
///
/// let mut arr = vec![5, 3, 8, 1, 9, 2];
/// assert_eq!(kth_largest(&mut arr, 1), Ok(9));
///
/// let mut arr = vec![5, 3, 8, 1, 9, 2];
/// assert_eq!(kth_largest(&mut arr, 6), Ok(1));
/// ```
pub fn kth_largest<T: Ord + Clone>(input: &mut [T], k: usize) -> Result<T> {
    validate(input.len(), k)?;

    // sorted position of the k-th largest
    let target = input.len() - k;

    let mut from = 0;
    let mut to = input.len();

    // repeat partitioning until the k-th largest sits at its sorted position
    loop {
        let partition_index = partition(input, from, to);
        match partition_index.cmp(&target) {
            Ordering::Equal => return Ok(input[target].clone()),
            // will be found in [from, partition_index)
            Ordering::Greater => to = partition_index,
            // will be found in [partition_index + 1, to)
            Ordering::Less => from = partition_index + 1,
        }
    }
}

/// Returns the k-th largest element by scanning once with a min-heap of
/// fixed capacity `k`.
///
/// The heap holds the k largest elements seen so far; whenever an element
/// greater than the heap's minimum shows up, it replaces that minimum. After
/// the scan the heap root is the k-th largest. O(n log k) time, O(k)
/// auxiliary space, and unlike [`kth_largest`] the input is not mutated.
///
/// Both selectors satisfy the same rank contract; under ties they may return
/// different (equal-ranked) occurrences.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if the slice is empty or `k` is not in
/// `1..=input.len()`.
///
/// # Examples
///
/// ```
/// use algo_classics::cs::sort::quickselect::kth_largest_by_heap;
///
/// let arr = vec![5, 3, 8, 1, 9, 2];
/// assert_eq!(kth_largest_by_heap(&arr, 2), Ok(8));
/// ```
pub fn kth_largest_by_heap<T: Ord + Clone>(input: &[T], k: usize) -> Result<T> {
    validate(input.len(), k)?;

    // seed the heap with the first k elements
    let mut min_heap: BinaryHeap<Reverse<T>> = input[..k].iter().cloned().map(Reverse).collect();

    // keep replacing the root with greater elements
    for item in &input[k..] {
        let outranks_smallest = min_heap
            .peek()
            .map_or(false, |Reverse(smallest)| item > smallest);
        if outranks_smallest {
            min_heap.pop();
            min_heap.push(Reverse(item.clone()));
        }
    }

    // min-heap of capacity k: the root is the k-th largest
    match min_heap.pop() {
        Some(Reverse(kth)) => Ok(kth),
        None => unreachable!("heap holds exactly k >= 1 elements"),
    }
}

fn validate(len: usize, k: usize) -> Result<()> {
    if len == 0 {
        return Err(Error::InvalidInput(
            "input must contain at least one element".to_string(),
        ));
    }
    if k < 1 || k > len {
        return Err(Error::InvalidInput(format!(
            "rank k must be between 1 and {}, got {}",
            len, k
        )));
    }
    Ok(())
}
