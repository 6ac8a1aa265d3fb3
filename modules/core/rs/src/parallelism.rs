use std::cmp::Ordering;
use std::thread::available_parallelism;

use eyre::Result;
use rayon::{ThreadPool, ThreadPoolBuilder};

// Positive values are capped by the hardware, 0 means a single thread, and negative values
// count backwards from the number of available cores (-1 = all of them).
fn normalize(requested: isize, max: isize) -> usize {
    match requested.cmp(&0) {
        Ordering::Less => (max + requested + 1).max(1) as usize,
        Ordering::Equal => 1,
        Ordering::Greater => requested.min(max) as usize,
    }
}

/// Number of worker threads to use for the requested level of parallelism.
pub fn available(requested: isize) -> Result<usize> {
    let max = available_parallelism()?.get() as isize;
    Ok(normalize(requested, max))
}

/// Build a dedicated rayon pool sized with [`available`].
pub fn pool(requested: isize) -> Result<ThreadPool> {
    let threads = available(requested)?;
    let pool = ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|ind| format!("gpsa-worker-{ind}"))
        .build()?;
    Ok(pool)
}
