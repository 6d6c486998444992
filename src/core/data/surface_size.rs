use thiserror::Error;

use crate::core::data::pixel::Pixel;

pub const DEFAULT_SURFACE_WIDTH: u32 = 800;
pub const DEFAULT_SURFACE_HEIGHT: u32 = 600;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum SurfaceSizeError {
    #[error("surface size must be at least 1x1: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

/// Fixed pixel dimensions of a drawing surface.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SurfaceSize {
    width: u32,
    height: u32,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceSizeError> {
        if width == 0 || height == 0 {
            return Err(SurfaceSizeError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn contains_pixel(&self, pixel: Pixel) -> bool {
        pixel.x < self.width && pixel.y < self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_SURFACE_WIDTH,
            height: DEFAULT_SURFACE_HEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_size_new_valid() {
        let size = SurfaceSize::new(320, 200).unwrap();

        assert_eq!(size.width(), 320);
        assert_eq!(size.height(), 200);
        assert_eq!(size.pixel_count(), 64_000);
    }

    #[test]
    fn test_surface_size_must_not_be_empty() {
        assert_eq!(
            SurfaceSize::new(0, 10),
            Err(SurfaceSizeError::InvalidSize { width: 0, height: 10 })
        );
        assert_eq!(
            SurfaceSize::new(10, 0),
            Err(SurfaceSizeError::InvalidSize { width: 10, height: 0 })
        );
        assert!(SurfaceSize::new(1, 1).is_ok());
    }

    #[test]
    fn test_default_is_800_by_600() {
        let size = SurfaceSize::default();

        assert_eq!((size.width(), size.height()), (800, 600));
    }

    #[test]
    fn test_contains_pixel() {
        let size = SurfaceSize::new(100, 50).unwrap();

        assert!(size.contains_pixel(Pixel { x: 0, y: 0 }));
        assert!(size.contains_pixel(Pixel { x: 99, y: 49 }));
        assert!(!size.contains_pixel(Pixel { x: 100, y: 10 }));
        assert!(!size.contains_pixel(Pixel { x: 10, y: 50 }));
    }

    #[test]
    fn test_error_message() {
        let err = SurfaceSize::new(0, 0).unwrap_err();

        assert_eq!(err.to_string(), "surface size must be at least 1x1: 0x0");
    }
}
