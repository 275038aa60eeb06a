use std::cmp::Ordering;

sort_impl!("bubble_sort_stable");

/// Sorts the slice in place.
///
/// This sort is stable (i.e., does not reorder equal elements), in-place (i.e., does not
/// allocate), and *O*(*n*^2) worst-case. Already sorted input is detected after a single pass,
/// making it *O*(*n*) best-case.
///
/// # Current implementation
///
/// Repeatedly scans adjacent pairs left to right and swaps every pair that is out of order. Each
/// pass moves the largest remaining element to its final position, so the scanned range shrinks
/// by one per pass. The first pass without a swap ends the sort.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    bubble_sort(v, |a, b| a.lt(b));
}

/// Sorts the slice in place with a comparator function.
///
/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n*^2) worst-case.
///
/// The comparator function must define a total ordering for the elements in the slice. If
/// the ordering is not total, the order of the elements is unspecified. An order is a
/// total order if it is (for all `a`, `b` and `c`):
///
/// * total and antisymmetric: exactly one of `a < b`, `a == b` or `a > b` is true, and
/// * transitive, `a < b` and `b < c` implies `a < c`. The same must hold for both `==` and `>`.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    bubble_sort(v, |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts the slice in place with an "is ordered before" predicate, which must implement a strict
/// weak ordering.
#[inline]
pub fn sort_by_less<T, F>(v: &mut [T], is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    bubble_sort(v, is_less);
}

// --- IMPL ---

fn bubble_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Everything at or after `end` is in its final position.
    let mut end = v.len();

    while end > 1 {
        let mut swapped = false;

        for i in 1..end {
            // Strictly out of order only, equal neighbours are never exchanged.
            if is_less(&v[i], &v[i - 1]) {
                v.swap(i - 1, i);
                swapped = true;
            }
        }

        if !swapped {
            return;
        }

        end -= 1;
    }
}
