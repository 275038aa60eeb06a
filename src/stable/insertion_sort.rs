use core::cmp::Ordering;
use core::mem::ManuallyDrop;
use core::ptr;

sort_impl!("insertion_sort_stable");

/// Sorts the slice in place.
///
/// This sort is stable (i.e., does not reorder equal elements), in-place (i.e., does not
/// allocate), and *O*(*n*^2) worst-case. Already sorted input takes `len - 1` comparisons and no
/// moves.
///
/// # Current implementation
///
/// Grows a sorted prefix one element at a time. Each new element is shifted left past every
/// element of the prefix that is strictly greater than it. Every prefix is sorted on its own, so
/// elements could be appended while sorting.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    insertion_sort(v, &mut |a, b| a.lt(b));
}

/// Sorts the slice in place with a comparator function.
///
/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n*^2) worst-case.
///
/// If the comparator does not implement a total order the resulting order is unspecified, but the
/// slice still holds every original element exactly once, even if `compare` panics.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

#[inline]
pub fn sort_by_less<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    insertion_sort(v, &mut is_less);
}

// --- IMPL ---

fn insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    for i in 1..len {
        // SAFETY: `1 <= i < len`, so the sub-slice has at least two elements.
        unsafe {
            insert_tail(&mut v[..=i], is_less);
        }
    }
}

/// Inserts the last element of `v` into the sorted prefix `v[..v.len() - 1]`.
///
/// SAFETY: `v.len()` must be at least 2.
unsafe fn insert_tail<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(v.len() >= 2);

    let arr_ptr = v.as_mut_ptr();
    let i = v.len() - 1;

    // SAFETY: caller must ensure v is at least len 2.
    unsafe {
        let i_ptr = arr_ptr.add(i);

        // Not strictly less than its predecessor, it already is where it belongs.
        if !is_less(&*i_ptr, &*i_ptr.sub(1)) {
            return;
        }

        // Read the candidate into a stack value. From here on the slice has exactly one
        // logically uninitialized slot, tracked by `hole`.
        let tmp = ManuallyDrop::new(ptr::read(i_ptr));

        // Intermediate state of the insertion process is always tracked by `hole`, which
        // serves two purposes:
        // 1. Protects integrity of `v` from panics in `is_less`.
        // 2. Fills the remaining hole in `v` in the end.
        //
        // Panic safety:
        //
        // If `is_less` panics at any point during the process, `hole` will get dropped and
        // fill the hole in `v` with `tmp`, thus ensuring that `v` still holds every object it
        // initially held exactly once.
        let mut hole = InsertionHole {
            src: &*tmp,
            dest: i_ptr.sub(1),
        };
        ptr::copy_nonoverlapping(hole.dest, i_ptr, 1);

        // Equal elements stop the shift, which keeps the sort stable.
        for j in (0..(i - 1)).rev() {
            let j_ptr = arr_ptr.add(j);
            if !is_less(&*tmp, &*j_ptr) {
                break;
            }

            ptr::copy_nonoverlapping(j_ptr, hole.dest, 1);
            hole.dest = j_ptr;
        }
        // `hole` gets dropped and thus copies `tmp` into the remaining hole in `v`.
    }
}

// When dropped, copies from `src` into `dest`.
struct InsertionHole<T> {
    src: *const T,
    dest: *mut T,
}

impl<T> Drop for InsertionHole<T> {
    fn drop(&mut self) {
        // SAFETY: This is a helper class. Please refer to its usage for correctness. Namely, one
        // must be sure that `src` and `dst` does not overlap as required by
        // `ptr::copy_nonoverlapping` and are both valid for writes.
        unsafe {
            ptr::copy_nonoverlapping(self.src, self.dest, 1);
        }
    }
}
