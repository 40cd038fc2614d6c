pub mod coin_change;
pub mod longest_increasing_subsequence;
pub mod max_collect;

// Re-export dynamic programming algorithms with descriptive names
pub use coin_change::min_coins;
pub use longest_increasing_subsequence::{
    longest_increasing_length, longest_non_decreasing_length,
};
pub use max_collect::max_collect;
