//! Fixed 3×3 convolution kernel definitions.

pub type Kernel3 = [[f32; 3]; 3];

/// A 3×3 convolution kernel with a post-accumulation scale factor.
///
/// The factor is applied after the neighborhood sum and before clamping, so
/// rescaled variants of a kernel never touch the accumulation loop. The
/// engines only guarantee correct output for odd-sized kernels centered on
/// the pixel, which for this type means exactly 3×3.
#[derive(Clone, Copy, Debug)]
pub struct ConvKernel {
    pub weights: Kernel3,
    pub factor: f32,
}

/// Laplacian edge-detection kernel. The weights sum to zero, so spatially
/// constant neighborhoods cancel exactly.
pub const LAPLACIAN: ConvKernel = ConvKernel {
    weights: [[-1.0, -1.0, -1.0], [-1.0, 8.0, -1.0], [-1.0, -1.0, -1.0]],
    factor: 1.0,
};
