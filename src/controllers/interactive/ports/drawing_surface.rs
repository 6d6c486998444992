use crate::core::data::colour::Colour;
use crate::core::data::pixel::Pixel;
use crate::core::data::point::Point;
use crate::core::data::surface_size::SurfaceSize;

/// Canvas the render pass draws onto. Dimensions are fixed for the
/// lifetime of the surface.
pub trait DrawingSurface {
    fn size(&self) -> SurfaceSize;

    /// Erases everything drawn so far.
    fn clear(&mut self);

    fn draw_line(&mut self, start: Point, end: Point, colour: Colour);

    fn draw_triangle(&mut self, vertices: [Point; 3], colour: Colour);

    fn draw_pixel(&mut self, pixel: Pixel, colour: Colour);
}

impl<T: DrawingSurface + ?Sized> DrawingSurface for Box<T> {
    fn size(&self) -> SurfaceSize {
        (**self).size()
    }

    fn clear(&mut self) {
        (**self).clear()
    }

    fn draw_line(&mut self, start: Point, end: Point, colour: Colour) {
        (**self).draw_line(start, end, colour)
    }

    fn draw_triangle(&mut self, vertices: [Point; 3], colour: Colour) {
        (**self).draw_triangle(vertices, colour)
    }

    fn draw_pixel(&mut self, pixel: Pixel, colour: Colour) {
        (**self).draw_pixel(pixel, colour)
    }
}
