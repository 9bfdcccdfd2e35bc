#![doc = include_str!("../README.md")]

pub mod config;
pub mod diagnostics;
pub mod filter;
pub mod image;

// --- High-level re-exports -------------------------------------------------

// Main entry points: the two engines and the fixed kernel.
pub use crate::filter::{convolve, convolve_parallel, ConvKernel, DEFAULT_WORKERS, LAPLACIAN};
pub use crate::image::{Rgb, RgbImageU8};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use edge_filter::prelude::*;
///
/// let src = RgbImageU8::new(64, 48);
/// let reference = convolve(&src, &LAPLACIAN);
/// let banded = convolve_parallel(&src, &LAPLACIAN, 4);
/// assert_eq!(reference.data, banded.data);
/// ```
pub mod prelude {
    pub use crate::filter::{convolve, convolve_parallel, ConvKernel, LAPLACIAN};
    pub use crate::image::{Rgb, RgbImageU8};
}
