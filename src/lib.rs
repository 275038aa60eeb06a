//! Comparison sort implementations sharing one test and bench harness.
//!
//! Every algorithm sorts in place through a `&mut [T]` and exposes the same entry points:
//! `sort`, `sort_by` and `sort_by_less`. The latter takes the raw "is ordered before" predicate,
//! which must implement a strict weak ordering. If it does not, the resulting order is
//! unspecified, but every call still terminates and leaves a permutation of the input.

// Registers the `sort` and `sort_by` functions of the invoking module with the test and bench
// harness, as `SortImpl`.
macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod random;
pub mod stable;
pub mod unstable;
