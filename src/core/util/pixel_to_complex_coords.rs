use crate::core::data::complex::Complex;
use crate::core::data::surface_size::SurfaceSize;
use crate::core::data::viewport_state::ViewportState;
use crate::core::util::linear_map::linear_map;

/// Maps a surface position onto the complex plane window described by
/// `viewport`. Pixel 0 lands on the window's lower bound and `width`/`height`
/// on its upper bound; positions outside the surface extrapolate linearly.
#[must_use]
pub fn pixel_to_complex_coords(
    x: f64,
    y: f64,
    size: SurfaceSize,
    viewport: &ViewportState,
) -> Complex {
    let (real_min, real_max) = viewport.real_range();
    let (imag_min, imag_max) = viewport.imag_range();

    Complex {
        real: linear_map(x, 0.0, f64::from(size.width()), real_min, real_max),
        imag: linear_map(y, 0.0, f64::from(size.height()), imag_min, imag_max),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_to_complex_top_left() {
        let result = pixel_to_complex_coords(
            0.0,
            0.0,
            SurfaceSize::default(),
            &ViewportState::default(),
        );

        assert_eq!(result, Complex::new(-2.5, -2.0));
    }

    #[test]
    fn test_pixel_to_complex_far_edges() {
        let result = pixel_to_complex_coords(
            800.0,
            600.0,
            SurfaceSize::default(),
            &ViewportState::default(),
        );

        assert_eq!(result, Complex::new(1.5, 2.0));
    }

    #[test]
    fn test_pixel_to_complex_center() {
        let result = pixel_to_complex_coords(
            400.0,
            300.0,
            SurfaceSize::default(),
            &ViewportState::default(),
        );

        assert_eq!(result, Complex::new(-0.5, 0.0));
    }

    #[test]
    fn test_pixel_to_complex_zoomed_and_offset() {
        let viewport = ViewportState {
            offset_x: 1.0,
            offset_y: -1.0,
            scale: 4.0,
        };
        let size = SurfaceSize::new(100, 100).unwrap();

        let result = pixel_to_complex_coords(50.0, 50.0, size, &viewport);

        // real window [0.375, 1.375], imag window [-1.5, -0.5]
        assert_eq!(result, Complex::new(0.875, -1.0));
    }

    #[test]
    fn test_pixel_outside_surface_extrapolates() {
        let size = SurfaceSize::new(100, 100).unwrap();

        let result = pixel_to_complex_coords(150.0, -50.0, size, &ViewportState::default());

        assert_eq!(result, Complex::new(3.5, -4.0));
    }
}
