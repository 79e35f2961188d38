//! Row-parallel iteration with a size threshold.
//!
//! Every transform writes disjoint rows of a freshly allocated buffer, so the
//! outer scan-line loop can be split across rayon workers without locking.
//! Small images stay on the calling thread. Without the `parallel` feature
//! everything runs sequentially.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Minimum pixel count before work is spread across threads.
pub const PARALLEL_THRESHOLD: usize = 30_000;

/// Call `f(y, row)` for every output row of `data`.
///
/// `row_len` is the byte length of a row; `data.len()` must be a multiple of it.
pub fn for_each_row_mut<F>(data: &mut [u8], row_len: usize, f: F)
where
    F: Fn(usize, &mut [u8]) + Sync + Send,
{
    if row_len == 0 || data.is_empty() {
        return;
    }

    #[cfg(feature = "parallel")]
    {
        if data.len() / crate::raster::CHANNELS >= PARALLEL_THRESHOLD {
            data.par_chunks_exact_mut(row_len)
                .enumerate()
                .for_each(|(y, row)| f(y, row));
            return;
        }
    }

    for (y, row) in data.chunks_exact_mut(row_len).enumerate() {
        f(y, row);
    }
}

/// Fold rows of `data` into accumulators and reduce them to one.
///
/// Used for histogram accumulation: each worker builds a partial result and
/// the partials are summed in a final reduction.
pub fn fold_rows<A, I, F, R>(data: &[u8], row_len: usize, init: I, fold_fn: F, reduce_fn: R) -> A
where
    A: Send,
    I: Fn() -> A + Sync + Send,
    F: Fn(A, &[u8]) -> A + Sync + Send,
    R: Fn(A, A) -> A + Sync + Send,
{
    if row_len == 0 || data.is_empty() {
        return init();
    }

    #[cfg(feature = "parallel")]
    {
        if data.len() / crate::raster::CHANNELS >= PARALLEL_THRESHOLD {
            return data
                .par_chunks_exact(row_len)
                .fold(&init, &fold_fn)
                .reduce(&init, &reduce_fn);
        }
    }

    #[cfg(not(feature = "parallel"))]
    let _ = reduce_fn;

    data.chunks_exact(row_len).fold(init(), fold_fn)
}
