#![cfg(feature = "quicksort")]

use sort_playground_rs::random::{RandomSource, SeededRandom};
use sort_playground_rs::unstable::quicksort;
use sort_test_tools::{instantiate_sort_tests, is_sorted, patterns, Order};

type TestSort = quicksort::SortImpl;

instantiate_sort_tests!(TestSort);

/// Always picks the lowest index, the classic first-element pivot.
struct FirstIndex;

impl RandomSource for FirstIndex {
    fn gen_range(&mut self, lo: usize, _hi: usize) -> usize {
        lo
    }
}

/// Never yields a pivot.
struct Exhausted;

impl RandomSource for Exhausted {
    fn gen_range(&mut self, lo: usize, _hi: usize) -> usize {
        lo
    }

    fn pick_index(&mut self, _len: usize) -> Option<usize> {
        None
    }
}

/// Yields an index past the end.
struct OutOfBounds;

impl RandomSource for OutOfBounds {
    fn gen_range(&mut self, _lo: usize, hi: usize) -> usize {
        hi + 1
    }
}

#[test]
fn seeded_source_sorts() {
    for len in [0, 1, 2, 10, 100, 1000] {
        let mut v = patterns::random(len);
        let mut expected = v.clone();
        expected.sort();

        quicksort::sort_with(&mut v, &mut SeededRandom::new(len as u64));
        assert_eq!(v, expected);
    }
}

#[test]
fn seeded_source_is_reproducible() {
    let input = patterns::random_uniform(500, 0..50);

    let count = |seed| {
        let mut v = input.clone();
        let mut comparisons = 0;
        quicksort::sort_by_less_with(
            &mut v,
            |a, b| {
                comparisons += 1;
                a < b
            },
            &mut SeededRandom::new(seed),
        );
        assert!(is_sorted(&v, Order::Ascending));

        comparisons
    };

    assert_eq!(count(7), count(7));
}

#[test]
fn deterministic_first_pivot_still_sorts() {
    // Quadratic for sorted input, but correct.
    for v in [
        patterns::ascending(2_000),
        patterns::descending(2_000),
        patterns::all_equal(2_000),
    ] {
        let mut v = v;
        let mut expected = v.clone();
        expected.sort();

        quicksort::sort_with(&mut v, &mut FirstIndex);
        assert_eq!(v, expected);
    }
}

#[test]
fn all_equal_is_one_partition() {
    // Everything lands in the equal group of the first pivot.
    let mut comparisons = 0;
    let mut v = vec![3; 100];
    quicksort::sort_by_less(&mut v, |a, b| {
        comparisons += 1;
        a < b
    });

    assert_eq!(comparisons, 2 * 99);
    assert_eq!(v, vec![3; 100]);
}

#[test]
fn missing_pivot_leaves_input_untouched() {
    let mut v = vec![3, 1, 2];
    quicksort::sort_with(&mut v, &mut Exhausted);
    assert_eq!(v, [3, 1, 2]);

    let mut v = vec![3, 1, 2];
    quicksort::sort_with(&mut v, &mut OutOfBounds);
    assert_eq!(v, [3, 1, 2]);
}

#[test]
fn descending_predicate() {
    let mut v = ["a", "a", "b", "c", "d", "e"];
    quicksort::sort_by_less_with(&mut v, |a, b| a > b, &mut SeededRandom::new(1));
    assert_eq!(v, ["e", "d", "c", "b", "a", "a"]);
}
