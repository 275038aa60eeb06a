//! Shared test and benchmark tooling for the sort implementations.

use std::cmp::Ordering;

pub mod patterns;

#[doc(hidden)]
pub use paste;

/// Common interface every sort implementation exposes to the test and bench harness.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;
}

/// Describes the possible ways a sequence can be ordered.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Order {
    Ascending,
    Descending,
}

/// Returns `true` if no adjacent pair `(x, y)` of `v` satisfies `is_less(y, x)`.
///
/// Stops at the first inversion.
pub fn is_sorted_by<T, F>(v: &[T], mut is_less: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    v.windows(2).all(|w| !is_less(&w[1], &w[0]))
}

/// Returns `true` if `v` is sorted in the given `order`. Repeated values count as sorted.
pub fn is_sorted<T: Ord>(v: &[T], order: Order) -> bool {
    match order {
        Order::Ascending => is_sorted_by(v, |a, b| a.lt(b)),
        Order::Descending => is_sorted_by(v, |a, b| a.gt(b)),
    }
}

#[macro_export]
macro_rules! instantiate_sort_tests_gen {
    ($sort_impl:ty, $prefix:ident, $($test_fn:ident),+ $(,)?) => {
        $crate::paste::paste! {
            $(
                #[test]
                fn [<$prefix _ $test_fn>]() {
                    $crate::tests::$test_fn::<$sort_impl>();
                }
            )+
        }
    };
}

/// Instantiates the properties every comparison sort must uphold.
#[macro_export]
macro_rules! instantiate_sort_tests {
    ($sort_impl:ty) => {
        $crate::instantiate_sort_tests_gen!(
            $sort_impl,
            sort,
            basic,
            fixed_scenarios,
            shuffled_fibonacci,
            random,
            random_few_distinct,
            random_zipf,
            ascending,
            descending,
            saw,
            pipe_organ,
            all_equal,
            random_str,
            descending_predicate,
            generic_descending,
            idempotent,
            permutation_under_non_total_order,
            panic_retain_original_set,
        );
    };
}

/// Instantiates the additional properties of a stable sort.
#[macro_export]
macro_rules! instantiate_stable_sort_tests {
    ($sort_impl:ty) => {
        $crate::instantiate_sort_tests_gen!(
            $sort_impl,
            stable,
            stability,
            stability_few_distinct,
            stability_reversed_keys,
        );
    };
}
