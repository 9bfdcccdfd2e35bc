//! Row-partitioned parallel execution of the convolution pass.
//!
//! The destination's row index space is divided into contiguous,
//! non-overlapping ranges, one worker thread per range. Each worker runs the
//! same per-pixel routine as the serial engine restricted to its own rows,
//! reading the shared source and writing only its own band, so no
//! synchronization is needed beyond the single join when the scope closes.
//! The result is byte-identical to the serial pass for any worker count.
use super::conv::convolve_band;
use super::kernel::ConvKernel;
use crate::image::RgbImageU8;
use log::debug;
use std::thread;

/// Worker count used by the command-line driver.
pub const DEFAULT_WORKERS: usize = 4;

/// Contiguous band of destination rows owned exclusively by one worker for
/// the duration of one filter pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowRange {
    pub start: usize,
    pub count: usize,
}

/// Split `[0, height)` into `workers` contiguous disjoint ranges.
///
/// Every worker except the last owns `height / workers` rows; the last worker
/// absorbs the remainder, so the union is always an exact cover. With more
/// workers than rows the leading ranges are empty and the last owns
/// everything.
pub fn partition_rows(height: usize, workers: usize) -> Vec<RowRange> {
    assert!(workers >= 1, "worker count must be positive");
    let base = height / workers;
    let mut ranges = Vec::with_capacity(workers);
    for i in 0..workers {
        let start = i * base;
        let count = if i == workers - 1 {
            height - start
        } else {
            base
        };
        ranges.push(RowRange { start, count });
    }
    ranges
}

/// Apply `kernel` to every pixel of `src` using `workers` threads.
///
/// One fork at the start of the pass, one join before returning; the
/// destination is not observable until every worker has finished. A worker
/// that fails to start or dies mid-pass aborts the whole pass when the scope
/// unwinds — there is no partial result.
pub fn convolve_parallel(src: &RgbImageU8, kernel: &ConvKernel, workers: usize) -> RgbImageU8 {
    let w = src.w;
    let mut dest = RgbImageU8::new(w, src.h);
    if w == 0 || src.h == 0 {
        return dest;
    }
    let ranges = partition_rows(src.h, workers);
    debug!(
        "convolve_parallel: {}x{} across {} workers, {} rows per band",
        w,
        src.h,
        workers,
        src.h / workers
    );

    // Carve the destination storage into one disjoint slice per range.
    let mut bands = Vec::with_capacity(ranges.len());
    let mut rest = dest.data.as_mut_slice();
    for range in &ranges {
        let (band, tail) = rest.split_at_mut(range.count * w);
        bands.push((range.start, band));
        rest = tail;
    }

    thread::scope(|s| {
        for (start_row, band) in bands {
            s.spawn(move || convolve_band(src, kernel, start_row, band));
        }
    });

    dest
}
