use crate::core::data::complex::Complex;
use crate::core::data::surface_size::SurfaceSize;
use crate::core::data::viewport_state::ViewportState;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

pub const ZOOM_FACTOR: f64 = 2.0;

/// Owns the Mandelbrot view and applies click-to-zoom and reset to it.
///
/// Zoom only ever goes in: each click re-centres on the clicked point and
/// doubles the scale. The only way back out is [`ViewportController::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportController {
    state: ViewportState,
}

impl ViewportController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> ViewportState {
        self.state
    }

    #[must_use]
    pub fn pixel_to_complex(&self, x: f64, y: f64, size: SurfaceSize) -> Complex {
        pixel_to_complex_coords(x, y, size, &self.state)
    }

    /// Re-centres the view on the point under `(x, y)` and doubles the
    /// scale. Returns the new centre.
    pub fn zoom_at(&mut self, x: f64, y: f64, size: SurfaceSize) -> Complex {
        let centre = self.pixel_to_complex(x, y, size);

        self.state.offset_x = centre.real;
        self.state.offset_y = centre.imag;
        self.state.scale *= ZOOM_FACTOR;

        centre
    }

    pub fn reset(&mut self) {
        self.state = ViewportState::default();
    }
}
