use std::cmp::Ordering;

use crate::random::{RandomSource, ThreadRandom};

sort_impl!("quicksort_unstable");

/// Sorts the slice in place, but might not preserve the order of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not allocate),
/// *O*(*n* \* log(*n*)) on average and *O*(*n*^2) worst-case.
///
/// # Current implementation
///
/// Quicksort with a uniformly random pivot and a three-way partition into elements less than,
/// equal to and greater than the pivot. Elements equal to the pivot are in their final position
/// after partitioning and are never looked at again, so inputs with many duplicates do not
/// degrade. The random pivot makes the quadratic case unlikely for any input, including sorted and
/// reversed ones, but does not rule it out.
///
/// Recursion always goes into the smaller partition, so the stack depth is *O*(log(*n*)) even
/// when the partitions are unbalanced.
///
/// Pivots are drawn from the thread-local generator, see [`sort_with`] for a reproducible
/// alternative.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    sort_with(v, &mut ThreadRandom::new());
}

/// Sorts the slice in place with a comparator function, but might not preserve the order of equal
/// elements.
///
/// The comparator function must define a total ordering for the elements in the slice. If
/// the ordering is not total, the order of the elements is unspecified. An order is a
/// total order if it is (for all `a`, `b` and `c`):
///
/// * total and antisymmetric: exactly one of `a < b`, `a == b` or `a > b` is true, and
/// * transitive, `a < b` and `b < c` implies `a < c`. The same must hold for both `==` and `>`.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_by_with(v, compare, &mut ThreadRandom::new());
}

#[inline]
pub fn sort_by_less<T, F>(v: &mut [T], is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    sort_by_less_with(v, is_less, &mut ThreadRandom::new());
}

/// Like [`sort`], drawing pivots from `rng`.
#[inline]
pub fn sort_with<T, R>(v: &mut [T], rng: &mut R)
where
    T: Ord,
    R: RandomSource,
{
    quicksort(v, rng, &mut |a, b| a.lt(b));
}

/// Like [`sort_by`], drawing pivots from `rng`.
#[inline]
pub fn sort_by_with<T, F, R>(v: &mut [T], mut compare: F, rng: &mut R)
where
    F: FnMut(&T, &T) -> Ordering,
    R: RandomSource,
{
    quicksort(v, rng, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Like [`sort_by_less`], drawing pivots from `rng`.
#[inline]
pub fn sort_by_less_with<T, F, R>(v: &mut [T], mut is_less: F, rng: &mut R)
where
    F: FnMut(&T, &T) -> bool,
    R: RandomSource,
{
    quicksort(v, rng, &mut is_less);
}

// --- IMPL ---

/// Sorts `v` recursively.
///
/// A source that yields no pivot, or one out of bounds, ends the sort of the current sub-slice.
fn quicksort<T, R, F>(mut v: &mut [T], rng: &mut R, is_less: &mut F)
where
    R: RandomSource,
    F: FnMut(&T, &T) -> bool,
{
    loop {
        let len = v.len();
        if len < 2 {
            return;
        }

        let Some(pivot_pos) = rng.pick_index(len).filter(|pos| *pos < len) else {
            return;
        };

        let (num_lt, num_eq) = partition(v, pivot_pos, is_less);

        // Split the slice into `left`, `equal`, and `right`. `equal` holds at least the pivot, so
        // both sides are strictly shorter than `v`.
        let (left, rest) = v.split_at_mut(num_lt);
        let right = &mut rest[num_eq..];

        // Recurse into the shorter side and continue with the longer one.
        if left.len() < right.len() {
            quicksort(left, rng, is_less);
            v = right;
        } else {
            quicksort(right, rng, is_less);
            v = left;
        }
    }
}

/// Rearranges `v` into elements less than, equal to and greater than `v[pivot_pos]`, in that
/// order, in a single pass.
///
/// Returns the number of elements less than the pivot and the number of elements equal to it,
/// pivot included.
///
/// If `is_less` does not implement a total order the resulting order and return value are
/// unspecified, but the number of comparisons is bounded by `2 * (len - 1)` and all original
/// elements remain in `v`.
fn partition<T, F>(v: &mut [T], pivot_pos: usize, is_less: &mut F) -> (usize, usize)
where
    F: FnMut(&T, &T) -> bool,
{
    // Place the pivot at the beginning of slice, where the scan does not touch it.
    v.swap(0, pivot_pos);
    let (pivot, rest) = v.split_at_mut(1);
    let pivot = &pivot[0];

    // `rest` is kept as [less | equal | unclassified | greater]:
    // `rest[..lt]` less, `rest[lt..i]` equal, `rest[i..gt]` unclassified, `rest[gt..]` greater.
    let mut lt = 0;
    let mut i = 0;
    let mut gt = rest.len();

    while i < gt {
        if is_less(&rest[i], pivot) {
            rest.swap(lt, i);
            lt += 1;
            i += 1;
        } else if is_less(pivot, &rest[i]) {
            gt -= 1;
            rest.swap(i, gt);
        } else {
            i += 1;
        }
    }

    // Place the pivot between the less and equal groups. `v[1..=lt]` holds the less group, so
    // this moves its last element to the front.
    v.swap(0, lt);

    (lt, gt - lt + 1)
}
