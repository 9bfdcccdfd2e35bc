mod common;

use common::synthetic_image::{impulse_rgb, textured_rgb, uniform_rgb};
use edge_filter::filter::{convolve, convolve_parallel, partition_rows, LAPLACIAN};
use edge_filter::image::{ImageView, Rgb};

#[test]
fn parallel_output_is_partition_invariant() {
    let _ = env_logger::builder().is_test(true).try_init();
    // Dimensions with awkward remainders for every worker count below.
    let src = textured_rgb(61, 47);
    let reference = convolve(&src, &LAPLACIAN);

    for workers in [1, 2, 3, 4, 5, 8, 16] {
        let result = convolve_parallel(&src, &LAPLACIAN, workers);
        assert_eq!(
            result.data, reference.data,
            "byte mismatch against serial reference with {workers} workers"
        );
    }
}

#[test]
fn more_workers_than_rows_still_matches() {
    let src = textured_rgb(33, 5);
    let reference = convolve(&src, &LAPLACIAN);
    let result = convolve_parallel(&src, &LAPLACIAN, 8);
    assert_eq!(result.data, reference.data);
}

#[test]
fn corner_impulse_is_partition_invariant() {
    // The corner impulse exercises wraparound reads across band boundaries:
    // the first and last bands both sample rows owned by the other.
    let src = impulse_rgb(24, 18, 0, 0, 255);
    let reference = convolve(&src, &LAPLACIAN);

    for workers in [2, 3, 6] {
        let result = convolve_parallel(&src, &LAPLACIAN, workers);
        assert_eq!(result.data, reference.data, "mismatch with {workers} workers");
    }
}

#[test]
fn uniform_image_is_black_for_every_engine() {
    let src = uniform_rgb(16, 16, 77);
    let reference = convolve(&src, &LAPLACIAN);
    let pixels = reference.as_slice().expect("owned buffers are contiguous");
    assert!(
        pixels.iter().all(|&px| px == Rgb::splat(0)),
        "zero-sum kernel must cancel a constant image"
    );

    for workers in [1, 2, 4] {
        let result = convolve_parallel(&src, &LAPLACIAN, workers);
        assert_eq!(result.data, reference.data);
    }
}

#[test]
fn partitions_are_contiguous_for_all_heights() {
    for height in 1..=40 {
        for workers in 1..=8 {
            let ranges = partition_rows(height, workers);
            let mut next = 0usize;
            for range in &ranges {
                assert_eq!(
                    range.start, next,
                    "gap or overlap at h={height} n={workers}"
                );
                next += range.count;
            }
            assert_eq!(next, height, "partition must cover h={height} n={workers}");
        }
    }
}
