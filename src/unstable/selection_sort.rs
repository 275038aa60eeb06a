use std::cmp::Ordering;

sort_impl!("selection_sort_unstable");

/// Sorts the slice in place, but might not preserve the order of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not allocate),
/// and *O*(*n*^2) in all cases. It performs at most `len - 1` swaps.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    selection_sort(v, |a, b| a.lt(b));
}

/// Sorts the slice in place with a comparator function, but might not preserve the order of equal
/// elements.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    selection_sort(v, |a, b| compare(a, b) == Ordering::Less);
}

#[inline]
pub fn sort_by_less<T, F>(v: &mut [T], is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    selection_sort(v, is_less);
}

// --- IMPL ---

fn selection_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    for i in 0..len - 1 {
        // First occurrence of the minimum of `v[i..]`.
        let mut min = i;
        for j in (i + 1)..len {
            if is_less(&v[j], &v[min]) {
                min = j;
            }
        }

        // The direct swap can carry `v[i]` past elements equal to it, hence unstable.
        if min != i {
            v.swap(i, min);
        }
    }
}
