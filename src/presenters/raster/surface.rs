use crate::controllers::interactive::ports::drawing_surface::DrawingSurface;
use crate::core::data::colour::{Colour, Rgb};
use crate::core::data::pixel::Pixel;
use crate::core::data::point::Point;
use crate::core::data::surface_size::SurfaceSize;

const BYTES_PER_PIXEL: usize = 3;

fn surface_size_to_buffer_size(size: SurfaceSize) -> usize {
    size.width() as usize * size.height() as usize * BYTES_PER_PIXEL
}

/// In-memory RGB8 canvas, row-major, cleared to white.
///
/// Colours are clamped through [`Colour::to_rgb`]. Anything drawn outside
/// the surface is dropped without error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterSurface {
    size: SurfaceSize,
    buffer: Vec<u8>,
}

impl RasterSurface {
    #[must_use]
    pub fn new(size: SurfaceSize) -> Self {
        let mut surface = Self {
            size,
            buffer: vec![0; surface_size_to_buffer_size(size)],
        };
        surface.clear();

        surface
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    #[must_use]
    pub fn pixel_at(&self, pixel: Pixel) -> Option<Rgb> {
        let index = self.index_of(pixel)?;

        Some(Rgb {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    fn index_of(&self, pixel: Pixel) -> Option<usize> {
        if !self.size.contains_pixel(pixel) {
            return None;
        }

        Some((pixel.y as usize * self.size.width() as usize + pixel.x as usize) * BYTES_PER_PIXEL)
    }

    fn set_pixel(&mut self, pixel: Pixel, colour: Rgb) {
        if let Some(index) = self.index_of(pixel) {
            self.buffer[index] = colour.r;
            self.buffer[index + 1] = colour.g;
            self.buffer[index + 2] = colour.b;
        }
    }

    fn plot(&mut self, x: f64, y: f64, colour: Rgb) {
        let (x, y) = (x.round(), y.round());

        // also rejects NaN
        if !(x >= 0.0 && y >= 0.0) {
            return;
        }
        if x >= f64::from(self.size.width()) || y >= f64::from(self.size.height()) {
            return;
        }

        self.set_pixel(
            Pixel {
                x: x as u32,
                y: y as u32,
            },
            colour,
        );
    }

    /// Parameter range `[t0, t1]` of `start + delta * t` that lies within one
    /// pixel of the surface, or `None` when the line never gets that close.
    fn visible_range(&self, start: Point, delta: Point) -> Option<(f64, f64)> {
        let x_max = f64::from(self.size.width());
        let y_max = f64::from(self.size.height());
        let mut t0: f64 = 0.0;
        let mut t1: f64 = 1.0;

        for (p, q) in [
            (-delta.x, start.x + 1.0),
            (delta.x, x_max - start.x),
            (-delta.y, start.y + 1.0),
            (delta.y, y_max - start.y),
        ] {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }

            let t = q / p;
            if p < 0.0 {
                t0 = t0.max(t);
            } else {
                t1 = t1.min(t);
            }
        }

        (t0 <= t1).then_some((t0, t1))
    }

    /// DDA walk from `start` to `end`, one sample per unit step along the
    /// longer axis. Only the samples inside the clipped range are visited.
    fn rasterise_line(&mut self, start: Point, end: Point, colour: Rgb) {
        let finite = [start.x, start.y, end.x, end.y]
            .iter()
            .all(|value| value.is_finite());
        if !finite {
            return;
        }

        let delta = end - start;
        let steps = delta.x.abs().max(delta.y.abs()).ceil();
        if !steps.is_finite() {
            return;
        }
        if steps == 0.0 {
            self.plot(start.x, start.y, colour);
            return;
        }

        let Some((t0, t1)) = self.visible_range(start, delta) else {
            return;
        };
        let step = delta / steps;
        let first = (t0 * steps).ceil() as u64;
        let last = (t1 * steps).floor() as u64;

        for i in first..=last {
            let point = start + step * i as f64;
            self.plot(point.x, point.y, colour);
        }
    }
}

impl DrawingSurface for RasterSurface {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn clear(&mut self) {
        self.buffer.fill(u8::MAX);
    }

    fn draw_line(&mut self, start: Point, end: Point, colour: Colour) {
        self.rasterise_line(start, end, colour.to_rgb());
    }

    fn draw_triangle(&mut self, vertices: [Point; 3], colour: Colour) {
        let colour = colour.to_rgb();
        let [a, b, c] = vertices;

        self.rasterise_line(a, b, colour);
        self.rasterise_line(b, c, colour);
        self.rasterise_line(c, a, colour);
    }

    fn draw_pixel(&mut self, pixel: Pixel, colour: Colour) {
        self.set_pixel(pixel, colour.to_rgb());
    }
}
