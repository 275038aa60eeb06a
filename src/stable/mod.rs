#[cfg(feature = "bubble_sort")]
pub mod bubble_sort;

#[cfg(feature = "insertion_sort")]
pub mod insertion_sort;

// Top-down, single scratch buffer.
#[cfg(feature = "merge_sort")]
pub mod merge_sort;
