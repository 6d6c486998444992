use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::pixel::Pixel;
use crate::core::data::primitives::PixelSample;
use crate::core::data::surface_size::SurfaceSize;
use crate::core::data::viewport_state::ViewportState;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

/// Bound on `|Re(z) + Im(z)|` beyond which a point counts as escaped.
pub const ESCAPE_THRESHOLD: f64 = 16.0;
pub const ITERATIONS_PER_DEPTH: u32 = 10;

/// Number of iterations of `z <- z² + c`, starting from `z = c`, that stay
/// within the escape bound. Returns `max_iterations` when the point never
/// escapes.
///
/// The escape test is `|Re(z) + Im(z)| > 16` rather than the usual modulus
/// test, which bends the boundary of the rendered set along the diagonals.
#[must_use]
pub fn escape_count(c: Complex, max_iterations: u32) -> u32 {
    let mut z = c;

    for iteration in 0..max_iterations {
        z = z * z + c;

        if z.abs_component_sum() > ESCAPE_THRESHOLD {
            return iteration;
        }
    }

    max_iterations
}

/// Iteration limit for a given recursion depth setting.
#[must_use]
pub fn max_iterations_for_depth(recursion_depth: u32) -> u32 {
    recursion_depth.saturating_mul(ITERATIONS_PER_DEPTH)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    size: SurfaceSize,
    viewport: ViewportState,
    max_iterations: u32,
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(size: SurfaceSize, viewport: ViewportState, max_iterations: u32) -> Self {
        Self {
            size,
            viewport,
            max_iterations,
        }
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Output = PixelSample;

    fn compute(&self, pixel: Pixel) -> PixelSample {
        let c = pixel_to_complex_coords(
            f64::from(pixel.x),
            f64::from(pixel.y),
            self.size,
            &self.viewport,
        );

        PixelSample {
            pixel,
            escape_count: escape_count(c, self.max_iterations),
            max_iterations: self.max_iterations,
        }
    }
}
