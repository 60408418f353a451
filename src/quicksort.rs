//! Textbook quicksort over inclusive index ranges.
//!
//! Every routine works on `v[left..=right]` and leaves everything outside that range untouched.
//! Ranges with `left >= right` hold at most one element and are already sorted. Indices past
//! the end of `v` are a caller bug and panic like any other out-of-bounds slice access.
//!
//! Each operation comes in two flavours: one for `T: Ord` and a `_by` variant taking an
//! `is_less` predicate, which is what all the actual work is written against.

/// Exchanges the elements at `i` and `j`.
#[inline]
pub fn swap<T>(v: &mut [T], i: usize, j: usize) {
    v.swap(i, j);
}

/// Partitions `v[left..=right]` around the pivot `v[left]` and returns the pivot's final
/// position `p`.
///
/// Afterwards all elements in `v[left..p]` are `<=` the pivot and all elements in
/// `v[p + 1..=right]` are `>=` the pivot.
#[inline]
pub fn partition<T: Ord>(v: &mut [T], left: usize, right: usize) -> usize {
    partition_by(v, left, right, &mut |a, b| a.lt(b))
}

/// Same as [`partition`] with a custom `is_less` predicate.
///
/// If `is_less` is not a strict weak order the returned position is meaningless, but the call
/// still terminates and `v` remains a permutation of its original elements.
pub fn partition_by<T, F>(v: &mut [T], left: usize, right: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(right < v.len());

    let mut i = left;
    let mut j = right;

    while i < j {
        // Find the last element less than the pivot.
        while i < j && !is_less(&v[j], &v[left]) {
            j -= 1;
        }

        // Find the first element greater than the pivot.
        while i < j && !is_less(&v[left], &v[i]) {
            i += 1;
        }

        if i < j {
            swap(v, i, j);
            // v[j] now holds an element greater than the pivot, no need to look at it again.
            j -= 1;
        }
    }

    // Place the pivot between the two partitions.
    swap(v, i, left);

    i
}

/// Returns whichever of `left`, `mid` and `right` holds the median of the three values.
///
/// With duplicates the returned index still holds the median value, e.g. `[5, 5, 1]` yields one
/// of the `5`s.
#[inline]
pub fn median_three<T: Ord>(v: &[T], left: usize, mid: usize, right: usize) -> usize {
    median_three_by(v, left, mid, right, &mut |a, b| a.lt(b))
}

/// Same as [`median_three`] with a custom `is_less` predicate.
pub fn median_three_by<T, F>(
    v: &[T],
    left: usize,
    mid: usize,
    right: usize,
    is_less: &mut F,
) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let (a, b, c) = (&v[left], &v[mid], &v[right]);

    let x = is_less(a, b);
    let y = is_less(a, c);
    if x == y {
        // If x=y=0 then b, c <= a. In this case we want to return max(b, c).
        // If x=y=1 then a < b, c. In this case we want to return min(b, c).
        // By toggling the outcome of b < c using XOR x we get this behavior.
        if is_less(b, c) ^ x {
            right
        } else {
            mid
        }
    } else {
        // Either c <= a < b or b <= a < c, thus a is our median.
        left
    }
}

/// Like [`partition`], but first moves the median of `v[left]`, `v[mid]` and `v[right]` into
/// `left` so that it becomes the pivot.
///
/// Sorted and reverse sorted ranges then split in half instead of degrading to *O*(*n*^2).
#[inline]
pub fn partition_median<T: Ord>(v: &mut [T], left: usize, right: usize) -> usize {
    partition_median_by(v, left, right, &mut |a, b| a.lt(b))
}

/// Same as [`partition_median`] with a custom `is_less` predicate.
pub fn partition_median_by<T, F>(
    v: &mut [T],
    left: usize,
    right: usize,
    is_less: &mut F,
) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    // Floor of (left + right) / 2 without overflowing.
    let mid = left + (right - left) / 2;

    let median = median_three_by(v, left, mid, right, is_less);
    swap(v, left, median);

    partition_by(v, left, right, is_less)
}

/// Sorts `v[left..=right]`, using `v[left]` as pivot at every level.
///
/// Recursion depth is *O*(*n*) for already sorted input.
#[inline]
pub fn quick_sort<T: Ord>(v: &mut [T], left: usize, right: usize) {
    quick_sort_by(v, left, right, &mut |a, b| a.lt(b));
}

/// Same as [`quick_sort`] with a custom `is_less` predicate.
pub fn quick_sort_by<T, F>(v: &mut [T], left: usize, right: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if left >= right {
        return;
    }

    let pivot = partition_by(v, left, right, is_less);

    // With the pivot at index 0 the left side is empty, and (0, 0) is just as much of a no-op.
    quick_sort_by(v, left, pivot.saturating_sub(1), is_less);
    quick_sort_by(v, pivot + 1, right, is_less);
}

/// Sorts `v[left..=right]`, choosing every pivot with [`partition_median`].
#[inline]
pub fn quick_sort_median<T: Ord>(v: &mut [T], left: usize, right: usize) {
    quick_sort_median_by(v, left, right, &mut |a, b| a.lt(b));
}

/// Same as [`quick_sort_median`] with a custom `is_less` predicate.
pub fn quick_sort_median_by<T, F>(v: &mut [T], left: usize, right: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if left >= right {
        return;
    }

    let pivot = partition_median_by(v, left, right, is_less);

    quick_sort_median_by(v, left, pivot.saturating_sub(1), is_less);
    quick_sort_median_by(v, pivot + 1, right, is_less);
}

/// Sorts `v[left..=right]`, only ever recursing into the shorter side of a partition.
///
/// The longer side is handled by looping, so the recursive calls see at most half of the
/// current range each, bounding the stack growth of this function to *O*(log(*n*)).
#[inline]
pub fn quick_sort_tail_call<T: Ord>(v: &mut [T], left: usize, right: usize) {
    quick_sort_tail_call_by(v, left, right, &mut |a, b| a.lt(b));
}

/// Same as [`quick_sort_tail_call`] with a custom `is_less` predicate.
pub fn quick_sort_tail_call_by<T, F>(v: &mut [T], left: usize, right: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    quick_sort_tail_call_with(v, left, right, is_less, &mut |v, l, r, is_less| {
        quick_sort_by(v, l, r, is_less)
    });
}

/// The loop behind [`quick_sort_tail_call_by`], with the routine used to sort the shorter side
/// supplied by the caller as `sort_shorter(v, left, right, is_less)`.
///
/// `sort_shorter` is only ever handed a range of at most half the size of the range it was
/// split from. Ranges it receives may be empty (`left >= right`).
pub fn quick_sort_tail_call_with<T, F, R>(
    v: &mut [T],
    mut left: usize,
    mut right: usize,
    is_less: &mut F,
    sort_shorter: &mut R,
) where
    F: FnMut(&T, &T) -> bool,
    R: FnMut(&mut [T], usize, usize, &mut F),
{
    while left < right {
        let pivot = partition_by(v, left, right, is_less);

        if pivot - left < right - pivot {
            // Sort the left side, continue with [pivot + 1, right].
            sort_shorter(v, left, pivot.saturating_sub(1), is_less);
            left = pivot + 1;
        } else {
            // Sort the right side, continue with [left, pivot - 1].
            sort_shorter(v, pivot + 1, right, is_less);
            right = pivot.saturating_sub(1);
        }
    }
}
