use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel::Pixel;
use crate::core::data::surface_size::SurfaceSize;

/// Runs `algorithm` over every pixel of the surface, column by column
/// (x outer, y inner). Results are produced lazily, one per pixel.
pub fn generate_fractal<Alg: FractalAlgorithm>(
    size: SurfaceSize,
    algorithm: &Alg,
) -> impl Iterator<Item = Alg::Output> + '_ {
    (0..size.width())
        .flat_map(move |x| (0..size.height()).map(move |y| Pixel { x, y }))
        .map(move |pixel| algorithm.compute(pixel))
}
