use std::env;

use once_cell::sync::Lazy;
use rand::prelude::*;
use zipf::ZipfDistribution;

// --- Public ---

/// Seed shared by every pattern generated in this process.
///
/// Set `OVERRIDE_SEED=<u64>` to replay a failing run.
pub fn random_init_seed() -> u64 {
    *SEED
}

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_seeded_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::

    let mut rng = new_seeded_rng();
    let dist = range.into();
    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law

    let mut rng = new_seeded_rng();

    // Rejects only non-positive exponents.
    let Ok(dist) = ZipfDistribution::new(len.max(1), exponent) else {
        return random(len);
    };

    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
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

    let saw_len = (len / saw_count.max(1)).max(1);
    (0..len).map(|i| (i % saw_len) as i32).collect()
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = ascending(len);
    vals[len / 2..].reverse();
    vals
}

/// The canonical input of the fixed scenarios, in ascending order.
pub fn fibonacci() -> Vec<i32> {
    vec![1, 1, 2, 3, 5, 8, 13]
}

/// `v` shuffled with the process seed.
pub fn shuffled<T>(mut v: Vec<T>) -> Vec<T> {
    let mut rng = new_seeded_rng();
    v.shuffle(&mut rng);
    v
}

// --- Private ---

static SEED: Lazy<u64> = Lazy::new(|| {
    let seed = env::var("OVERRIDE_SEED")
        .ok()
        .and_then(|seed| seed.parse::<u64>().ok())
        .unwrap_or_else(|| thread_rng().gen());

    println!("Seed: {seed}");
    seed
});

fn new_seeded_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}
