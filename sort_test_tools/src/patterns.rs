//! Input generators shared by the sort tests and benchmarks.
//!
//! All random patterns derive from one process wide seed, see [`random_init_seed`].

use std::env;
use std::ops::Range;

use once_cell::sync::Lazy;
use rand::distributions::Distribution;
use rand::prelude::*;
use zipf::ZipfDistribution;

static SEED: Lazy<u64> = Lazy::new(|| {
    let seed = match env::var("OVERRIDE_SEED") {
        Ok(val) => val
            .parse::<u64>()
            .unwrap_or_else(|_| panic!("OVERRIDE_SEED must be a u64, got: {val:?}")),
        Err(_) => thread_rng().gen(),
    };

    // Printed once so that failing runs can be reproduced with OVERRIDE_SEED.
    println!("Seed: {seed}");

    seed
});

/// Returns the seed all random patterns are derived from.
///
/// Picked randomly on first use, unless pinned via the `OVERRIDE_SEED` environment variable.
pub fn random_init_seed() -> u64 {
    *SEED
}

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform(len: usize, range: Range<i32>) -> Vec<i32> {
    // :.:.:.::

    let mut rng = new_rng();

    // Abstracting over ranges in Rust :(
    let dist = rand::distributions::Uniform::from(range);
    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law

    if len == 0 {
        return Vec::new();
    }

    let mut rng = new_rng();

    // Values are in the range 1..=len, with low values being a lot more likely.
    let dist = ZipfDistribution::new(len, exponent).unwrap();
    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    //     .:
    //   .:::. :
    // .::::::.::
    // [----][--]
    //  ^      ^
    //  |      |
    // sorted  |
    //     unsorted

    let mut v = random(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;
    v[..sorted_len].sort_unstable();

    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    (0..len).map(|_| 66).collect()
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect()
}

pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<i32> {
    //   .:  .:
    // .:::.:::

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random(len);
    let chunk_len = len.div_ceil(saw_count.max(1));
    for chunk in vals.chunks_mut(chunk_len) {
        chunk.sort_unstable();
    }

    vals
}

pub fn saw_descending(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.
    // :::.:::.

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random(len);
    let chunk_len = len.div_ceil(saw_count.max(1));
    for chunk in vals.chunks_mut(chunk_len) {
        chunk.sort_unstable_by(|a, b| b.cmp(a));
    }

    vals
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random(len);
    let first_half = &mut vals[0..(len / 2)];
    first_half.sort_unstable();

    let second_half = &mut vals[(len / 2)..len];
    second_half.sort_unstable_by(|a, b| b.cmp(a));

    vals
}
