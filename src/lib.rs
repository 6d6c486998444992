//! Koch curve, Sierpinski triangle and Mandelbrot set rendering onto a
//! host-supplied [`DrawingSurface`].
//!
//! A [`FractalRenderer`] holds the render parameters and the Mandelbrot
//! viewport, and redraws the whole frame whenever either changes.

mod controllers;
mod core;
mod presenters;

pub use crate::controllers::interactive::{
    DrawingSurface, FractalRenderer, FrameSummary, RenderCommand, RenderError,
};
pub use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::colour_mapping::kinds::ColourSchemeKinds;
pub use crate::core::colour_mapping::map::ColourMap;
pub use crate::core::colour_mapping::maps::escape_time::EscapeTimeColourMap;
pub use crate::core::colour_mapping::maps::level::LevelColourMap;
pub use crate::core::data::colour::{Colour, Rgb};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel::Pixel;
pub use crate::core::data::point::Point;
pub use crate::core::data::primitives::{PixelSample, Segment, Triangle};
pub use crate::core::data::render_parameters::{RenderParameterError, RenderParameters};
pub use crate::core::data::surface_size::{SurfaceSize, SurfaceSizeError};
pub use crate::core::data::viewport_state::ViewportState;
pub use crate::core::fractals::fractal_kinds::FractalKinds;
pub use crate::core::fractals::koch::generator::{KochSegments, generate_koch, koch_baseline};
pub use crate::core::fractals::mandelbrot::algorithm::{
    MandelbrotAlgorithm, escape_count, max_iterations_for_depth,
};
pub use crate::core::fractals::mandelbrot::viewport_controller::ViewportController;
pub use crate::core::fractals::sierpinski::generator::{
    SierpinskiTriangles, generate_sierpinski, sierpinski_outline,
};
pub use crate::core::util::midpoint::midpoint;
pub use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;
pub use crate::core::util::rotate::rotate;
pub use crate::presenters::raster::surface::RasterSurface;
pub use crate::presenters::recording::surface::{DrawCall, RecordingSurface};
