//! Edge-filtering core: a fixed 3×3 convolution in two interchangeable
//! execution modes.
//!
//! - `convolve` — single-threaded reference engine.
//! - `convolve_parallel` — fixed-worker-pool engine over disjoint row bands,
//!   numerically identical output for any worker count ≥ 1.
//!
//! Design goals
//! - One copy of the per-pixel arithmetic (`convolve_band`) shared by both
//!   engines, so parity cannot drift.
//! - Toroidal neighborhood sampling with no border special-casing.
//! - Disjoint-write partitioning: each destination row is written by exactly
//!   one worker, so the parallel pass needs no locks and exactly one join.

pub mod conv;
pub mod kernel;
pub mod parallel;

pub use conv::{convolve, convolve_band};
pub use kernel::{ConvKernel, Kernel3, LAPLACIAN};
pub use parallel::{convolve_parallel, partition_rows, RowRange, DEFAULT_WORKERS};
