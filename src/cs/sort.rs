pub mod merge_sort;
pub mod quickselect;
pub mod quicksort;

// Re-export sorting and selection algorithms with descriptive names
pub use merge_sort::merge_sort;
pub use quickselect::{kth_largest, kth_largest_by_heap};
pub use quicksort::{partition, quicksort, quicksort_recursive};
