use std::cmp::Ordering;
use std::mem;
use std::ptr;

sort_impl!("merge_sort_stable");

/// Sorts the slice in place.
///
/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n* \* log(*n*)) in all
/// cases.
///
/// # Current implementation
///
/// A top-down merge sort. The slice is split at `len / 2`, both halves are sorted recursively and
/// then merged. The split does not depend on the input, so the sort is not adaptive.
///
/// It allocates temporary storage half the size of `self` once per call, which every merge
/// reuses.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    merge_sort(v, &mut |a, b| a.lt(b));
}

/// Sorts the slice in place with a comparator function.
///
/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n* \* log(*n*)) in all
/// cases.
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
    merge_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

#[inline]
pub fn sort_by_less<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    merge_sort(v, &mut is_less);
}

// --- IMPL ---

fn merge_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Sorting has no meaningful behavior on zero-sized types.
    if mem::size_of::<T>() == 0 {
        return;
    }

    let len = v.len();
    if len < 2 {
        return;
    }

    // Allocate a buffer to use as scratch memory. We keep the length 0 so we can keep in it
    // shallow copies of the contents of `v` without risking the dtors running on copies if
    // `is_less` panics. When merging two sorted runs, this buffer holds a copy of the left run,
    // which will always have length at most `len / 2`.
    let mut buf = Vec::<T>::with_capacity(len / 2);

    merge_sort_rec(v, buf.as_mut_ptr(), is_less);
}

fn merge_sort_rec<T, F>(v: &mut [T], buf: *mut T, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    // For odd `len` the right run is the longer one.
    let mid = len / 2;

    merge_sort_rec(&mut v[..mid], buf, is_less);
    merge_sort_rec(&mut v[mid..], buf, is_less);

    // SAFETY: `0 < mid < len` and `buf` is valid for `mid` writes, since every sub-slice is at
    // most as long as the top-level slice, whose half sized the buffer.
    unsafe {
        merge(v, mid, buf, is_less);
    }
}

/// Merges non-decreasing runs `v[..mid]` and `v[mid..]` using `buf` as temporary storage, and
/// stores the result into `v[..]`.
///
/// Ties are resolved in favor of the left run.
///
/// SAFETY: The two slices must be non-empty and `mid` must be in bounds. Buffer `buf` must be long
/// enough to hold a copy of the left slice. Also, `T` must not be a zero-sized type.
unsafe fn merge<T, F>(v: &mut [T], mid: usize, buf: *mut T, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    let v = v.as_mut_ptr();

    // SAFETY: mid and len must be in-bounds of v.
    let (v_mid, v_end) = unsafe { (v.add(mid), v.add(len)) };

    // The left run is copied into `buf` and merged forwards into `v`. The write position never
    // overtakes the read position of the right run, so no unmerged element is overwritten.
    //
    // Intermediate state of the merging process is tracked by `hole`, which serves two purposes:
    // 1. Protects integrity of `v` from panics in `is_less`.
    // 2. Fills the remaining hole in `v` if the right run gets consumed first.
    //
    // Panic safety:
    //
    // If `is_less` panics at any point during the process, `hole` will get dropped and fill the
    // hole in `v` with the unconsumed range in `buf`, thus ensuring that `v` still holds every
    // object it initially held exactly once.
    unsafe {
        ptr::copy_nonoverlapping(v, buf, mid);

        let mut hole = MergeHole {
            start: buf,
            end: buf.add(mid),
            dest: v,
        };

        let mut right = v_mid;

        while hole.start < hole.end && right < v_end {
            // Take from the right run only if it is strictly less, keeping equal elements in
            // their original order.
            let take_right = is_less(&*right, &*hole.start);
            let src = if take_right { right } else { hole.start };

            ptr::copy_nonoverlapping(src, hole.dest, 1);
            hole.dest = hole.dest.add(1);

            if take_right {
                right = right.add(1);
            } else {
                hole.start = hole.start.add(1);
            }
        }
        // Finally, `hole` gets dropped. If the right run was not fully consumed, whatever remains
        // of it is already in place. If the left run was not fully consumed, the rest of it is
        // copied into the gap.
    }
}

// When dropped, copies the range `start..end` into `dest..`.
struct MergeHole<T> {
    start: *mut T,
    end: *mut T,
    dest: *mut T,
}

impl<T> Drop for MergeHole<T> {
    fn drop(&mut self) {
        // SAFETY: `T` is not a zero-sized type, and these are pointers into a slice's elements.
        unsafe {
            let len = self.end.offset_from(self.start) as usize;
            ptr::copy_nonoverlapping(self.start, self.dest, len);
        }
    }
}
