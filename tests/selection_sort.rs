#![cfg(feature = "selection_sort")]

use sort_playground_rs::unstable::selection_sort;
use sort_test_tools::instantiate_sort_tests;

type TestSort = selection_sort::SortImpl;

instantiate_sort_tests!(TestSort);

fn count_comparisons(v: &mut [i32]) -> usize {
    let mut comparisons = 0;
    selection_sort::sort_by_less(v, |a, b| {
        comparisons += 1;
        a < b
    });

    comparisons
}

#[test]
fn comparisons_do_not_depend_on_input_order() {
    let len = 64;
    let expected = len * (len - 1) / 2;

    let mut sorted: Vec<i32> = (0..len as i32).collect();
    assert_eq!(count_comparisons(&mut sorted), expected);

    let mut reversed: Vec<i32> = (0..len as i32).rev().collect();
    assert_eq!(count_comparisons(&mut reversed), expected);

    let mut equal = vec![5; len];
    assert_eq!(count_comparisons(&mut equal), expected);
}

#[test]
fn reorders_equal_elements() {
    // The swap of position 0 and 2 carries (2, 'a') past (2, 'b').
    let mut v = [(2, 'a'), (2, 'b'), (1, 'c')];
    selection_sort::sort_by(&mut v, |a, b| a.0.cmp(&b.0));
    assert_eq!(v, [(1, 'c'), (2, 'b'), (2, 'a')]);
}

#[test]
fn picks_first_occurrence_of_minimum() {
    let mut v = [(3, 'a'), (1, 'b'), (1, 'c'), (2, 'd')];
    selection_sort::sort_by(&mut v, |a, b| a.0.cmp(&b.0));
    assert_eq!(v, [(1, 'b'), (1, 'c'), (2, 'd'), (3, 'a')]);
}
