//! Recursive quicksort with median-of-three pivot selection.

use std::cmp::Ordering;
use std::mem;

use crate::quicksort;

sort_impl!("quicksort_median_three_unstable");

/// Sorts the slice, but might not preserve the order of equal elements.
///
/// Each pivot is the median of the first, middle and last element of the range being sorted,
/// which keeps sorted and reverse sorted input at *O*(*n* \* log(*n*)).
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    unstable_sort(v, |a, b| a.lt(b));
}

/// Sorts the slice with a comparator function, but might not preserve the order of equal
/// elements.
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

    quicksort::quick_sort_median_by(v, 0, len - 1, &mut is_less);
}
