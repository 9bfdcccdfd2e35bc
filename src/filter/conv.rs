//! Kernel application with toroidal (wraparound) neighborhood sampling.
//!
//! - Every destination pixel is the clamped, kernel-weighted sum of the 3×3
//!   source neighborhood centered on it.
//! - Neighbor coordinates wrap modulo the image dimensions: there is no edge
//!   padding and no border special-casing, so corners get a full 9-sample
//!   neighborhood drawn from the opposite edges.
//! - Accumulated values are scaled by the kernel factor, then clamped to
//!   `[0, 255]` with truncation toward zero (not rounding).
//!
//! Complexity: O(W·H) per pass; the source buffer is never mutated.
use super::kernel::ConvKernel;
use crate::image::{ImageView, Rgb, RgbImageU8};
use log::debug;

/// Apply `kernel` to every pixel of `src`, single-threaded reference pass.
pub fn convolve(src: &RgbImageU8, kernel: &ConvKernel) -> RgbImageU8 {
    let mut dest = RgbImageU8::new(src.w, src.h);
    if src.w == 0 || src.h == 0 {
        return dest;
    }
    debug!("convolve: {}x{} serial pass", src.w, src.h);
    convolve_band(src, kernel, 0, &mut dest.data);
    dest
}

/// Run the per-pixel kernel over the destination rows starting at
/// `start_row`, writing into `band`.
///
/// `band` must hold a whole number of rows (`band.len() == k * src.w`) and is
/// the only memory written; `src` is only read. Both engines funnel through
/// this routine so there is a single copy of the pixel arithmetic.
pub fn convolve_band(src: &RgbImageU8, kernel: &ConvKernel, start_row: usize, band: &mut [Rgb]) {
    let w = src.w;
    let h = src.h;
    debug_assert_eq!(band.len() % w, 0, "band must cover whole rows");

    for (i, out_row) in band.chunks_exact_mut(w).enumerate() {
        let y = start_row + i;
        // The three source rows of the neighborhood, wrapped modulo height.
        let rows = [
            src.row((y + h - 1) % h),
            src.row(y),
            src.row((y + 1) % h),
        ];
        for (x, out) in out_row.iter_mut().enumerate() {
            let x_idx = [(x + w - 1) % w, x, (x + 1) % w];

            let mut sum_r = 0.0f32;
            let mut sum_g = 0.0f32;
            let mut sum_b = 0.0f32;
            for (src_row, k_row) in rows.iter().zip(&kernel.weights) {
                for (&sx, &kw) in x_idx.iter().zip(k_row) {
                    let px = src_row[sx];
                    sum_r += px.r as f32 * kw;
                    sum_g += px.g as f32 * kw;
                    sum_b += px.b as f32 * kw;
                }
            }

            *out = Rgb {
                r: clamp_channel(sum_r * kernel.factor),
                g: clamp_channel(sum_g * kernel.factor),
                b: clamp_channel(sum_b * kernel.factor),
            };
        }
    }
}

/// Clamp an accumulated channel value to `[0, 255]`.
///
/// The cast truncates toward zero; in-range fractional values are floored
/// rather than rounded, and that order is part of the output contract.
#[inline]
fn clamp_channel(value: f32) -> u8 {
    let v = value as i32;
    if v < 0 {
        0
    } else if v > 255 {
        255
    } else {
        v as u8
    }
}
