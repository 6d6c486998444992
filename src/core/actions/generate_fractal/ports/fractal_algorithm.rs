use crate::core::data::pixel::Pixel;

/// Per-pixel computation driven by [`generate_fractal`].
///
/// [`generate_fractal`]: crate::core::actions::generate_fractal::generate_fractal::generate_fractal
pub trait FractalAlgorithm {
    type Output;

    fn compute(&self, pixel: Pixel) -> Self::Output;
}
