use crate::controllers::interactive::ports::drawing_surface::DrawingSurface;
use crate::core::data::colour::Colour;
use crate::core::data::pixel::Pixel;
use crate::core::data::point::Point;
use crate::core::data::surface_size::SurfaceSize;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear,
    Line {
        start: Point,
        end: Point,
        colour: Colour,
    },
    Triangle {
        vertices: [Point; 3],
        colour: Colour,
    },
    Pixel {
        pixel: Pixel,
        colour: Colour,
    },
}

/// Surface that keeps every draw call in order instead of rasterising.
///
/// Hosts with their own canvas can replay the calls; nothing is clipped or
/// clamped on the way in.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordingSurface {
    size: SurfaceSize,
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            calls: Vec::new(),
        }
    }

    /// Every call since the surface was created or last drained.
    #[must_use]
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Calls made after the most recent clear, i.e. the frame currently shown.
    #[must_use]
    pub fn calls_since_clear(&self) -> &[DrawCall] {
        let first = self
            .calls
            .iter()
            .rposition(|call| *call == DrawCall::Clear)
            .map_or(0, |index| index + 1);

        &self.calls[first..]
    }

    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }
}

impl DrawingSurface for RecordingSurface {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn draw_line(&mut self, start: Point, end: Point, colour: Colour) {
        self.calls.push(DrawCall::Line { start, end, colour });
    }

    fn draw_triangle(&mut self, vertices: [Point; 3], colour: Colour) {
        self.calls.push(DrawCall::Triangle { vertices, colour });
    }

    fn draw_pixel(&mut self, pixel: Pixel, colour: Colour) {
        self.calls.push(DrawCall::Pixel { pixel, colour });
    }
}
