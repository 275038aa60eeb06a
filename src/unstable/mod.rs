#[cfg(feature = "selection_sort")]
pub mod selection_sort;

// Random pivot, three-way partition.
#[cfg(feature = "quicksort")]
pub mod quicksort;
