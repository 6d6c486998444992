/// Real-axis bounds of the unzoomed view, relative to the offset.
pub const BASE_REAL_MIN: f64 = -2.5;
pub const BASE_REAL_MAX: f64 = 1.5;
/// Half-height of the unzoomed view on the imaginary axis.
pub const BASE_IMAG_HALF_EXTENT: f64 = 2.0;

/// Mandelbrot pan/zoom state. `scale` stays strictly positive.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewportState {
    pub offset_x: f64,
    pub offset_y: f64,
    pub scale: f64,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            scale: 1.0,
        }
    }
}

impl ViewportState {
    #[must_use]
    pub fn real_range(&self) -> (f64, f64) {
        (
            BASE_REAL_MIN / self.scale + self.offset_x,
            BASE_REAL_MAX / self.scale + self.offset_x,
        )
    }

    #[must_use]
    pub fn imag_range(&self) -> (f64, f64) {
        (
            -BASE_IMAG_HALF_EXTENT / self.scale + self.offset_y,
            BASE_IMAG_HALF_EXTENT / self.scale + self.offset_y,
        )
    }
}
