//! Prints each quicksort variant at work on a small fixed input.

use partition_sort_rs::quicksort;

fn main() {
    let nums = [2, 4, 1, 0, 3, 5];
    let right = nums.len() - 1;

    let variants: [(&str, fn(&mut [i32], usize, usize)); 3] = [
        ("quick_sort", quicksort::quick_sort),
        ("quick_sort_median", quicksort::quick_sort_median),
        ("quick_sort_tail_call", quicksort::quick_sort_tail_call),
    ];

    for (name, range_sort) in variants {
        let mut v = nums;
        println!("{name}: before {v:?}");
        range_sort(&mut v, 0, right);
        println!("{name}: after  {v:?}");
    }

    let candidates = [2, 4, 1];
    let median = quicksort::median_three(&candidates, 0, 1, 2);
    println!(
        "median_three({candidates:?}) = index {median} (value {})",
        candidates[median]
    );

    let mut v = nums;
    let pivot = quicksort::partition(&mut v, 0, right);
    println!("partition({nums:?}) = {v:?}, pivot {} at index {pivot}", v[pivot]);
}
