use std::cmp::Ordering;
use std::mem;

use crate::quicksort;

sort_impl!("quicksort_tail_call_unstable");

/// Sorts the slice, but might not preserve the order of equal elements.
///
/// Only the shorter side of each partition is sorted recursively, the longer one is handled
/// in a loop.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    unstable_sort(v, |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    unstable_sort(v, |a, b| compare(a, b) == Ordering::Less);
}

#[inline]
fn unstable_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if mem::size_of::<T>() == 0 {
        return;
    }

    let len = v.len();
    if len < 2 {
        return;
    }

    quicksort::quick_sort_tail_call_by(v, 0, len - 1, &mut is_less);
}
