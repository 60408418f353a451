// Reference point for tests and benchmarks.
pub mod rust_std;

// Leftmost element as pivot, recursing into both sides.
pub mod quicksort_basic;

// Median-of-three pivot at every recursion level.
pub mod quicksort_median_three;

// Leftmost element as pivot, recursing only into the shorter side.
pub mod quicksort_tail_call;
