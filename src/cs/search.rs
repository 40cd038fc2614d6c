pub mod binary_search;

// Re-export search algorithms
pub use binary_search::{binary_search, binary_search_recursive};
