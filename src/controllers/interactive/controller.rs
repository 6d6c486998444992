use std::time::Instant;

use log::{debug, info, warn};

use crate::controllers::interactive::data::frame_summary::FrameSummary;
use crate::controllers::interactive::errors::render::RenderError;
use crate::controllers::interactive::events::render_command::RenderCommand;
use crate::controllers::interactive::ports::drawing_surface::DrawingSurface;
use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::colour_mapping::kinds::ColourSchemeKinds;
use crate::core::colour_mapping::map::ColourMap;
use crate::core::colour_mapping::maps::escape_time::EscapeTimeColourMap;
use crate::core::colour_mapping::maps::level::LevelColourMap;
use crate::core::data::render_parameters::RenderParameters;
use crate::core::data::viewport_state::ViewportState;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::fractals::koch::generator::{generate_koch, koch_baseline};
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::viewport_controller::ViewportController;
use crate::core::fractals::sierpinski::generator::{generate_sierpinski, sierpinski_outline};

/// Drives full, synchronous redraws of the selected fractal.
///
/// Every handler that changes state redraws once before returning. A pass
/// always runs to completion; there is no caching between passes.
pub struct FractalRenderer<S: DrawingSurface> {
    surface: Option<S>,
    parameters: RenderParameters,
    viewport: ViewportController,
    generation: u64,
}

impl<S: DrawingSurface> Default for FractalRenderer<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: DrawingSurface> FractalRenderer<S> {
    /// A renderer with default parameters and no surface attached yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            surface: None,
            parameters: RenderParameters::default(),
            viewport: ViewportController::new(),
            generation: 0,
        }
    }

    #[must_use]
    pub fn with_surface(surface: S) -> Self {
        Self {
            surface: Some(surface),
            ..Self::new()
        }
    }

    #[must_use]
    pub fn with_parameters(mut self, parameters: RenderParameters) -> Self {
        self.parameters = parameters;
        self
    }

    /// Returns the previously attached surface, if any.
    pub fn attach_surface(&mut self, surface: S) -> Option<S> {
        self.surface.replace(surface)
    }

    pub fn detach_surface(&mut self) -> Option<S> {
        self.surface.take()
    }

    #[must_use]
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    #[must_use]
    pub fn parameters(&self) -> &RenderParameters {
        &self.parameters
    }

    #[must_use]
    pub fn viewport(&self) -> ViewportState {
        self.viewport.state()
    }

    /// Generation of the most recent completed pass, 0 before the first.
    #[must_use]
    pub fn last_generation(&self) -> u64 {
        self.generation
    }

    /// Dispatches a host event to its handler. Returns `None` only for a
    /// surface click that was ignored.
    pub fn handle(&mut self, command: RenderCommand) -> Result<Option<FrameSummary>, RenderError> {
        match command {
            RenderCommand::SetFractalKind(kind) => self.set_fractal_kind(kind).map(Some),
            RenderCommand::SetRecursionDepth(depth) => self.set_recursion_depth(depth).map(Some),
            RenderCommand::SetColourScheme(scheme) => self.set_colour_scheme(scheme).map(Some),
            RenderCommand::SetLinearZoom(zoom) => self.set_linear_zoom(zoom).map(Some),
            RenderCommand::ResetView => self.reset_view().map(Some),
            RenderCommand::SurfaceClick { x, y } => self.on_surface_click(x, y),
            RenderCommand::Redraw => self.render().map(Some),
        }
    }

    /// Switching fractals also puts the Mandelbrot view back to its default.
    pub fn set_fractal_kind(&mut self, kind: FractalKinds) -> Result<FrameSummary, RenderError> {
        self.parameters.set_fractal_kind(kind);
        self.viewport.reset();
        self.render()
    }

    pub fn set_recursion_depth(&mut self, depth: i64) -> Result<FrameSummary, RenderError> {
        self.parameters
            .set_recursion_depth(depth)
            .inspect_err(|err| warn!("rejected recursion depth: {}", err))?;
        self.render()
    }

    pub fn set_colour_scheme(
        &mut self,
        scheme: ColourSchemeKinds,
    ) -> Result<FrameSummary, RenderError> {
        self.parameters.set_colour_scheme(scheme);
        self.render()
    }

    pub fn set_linear_zoom(&mut self, zoom: f64) -> Result<FrameSummary, RenderError> {
        self.parameters
            .set_linear_zoom(zoom)
            .inspect_err(|err| warn!("rejected linear zoom: {}", err))?;
        self.render()
    }

    /// Restores the Mandelbrot view and the linear zoom.
    pub fn reset_view(&mut self) -> Result<FrameSummary, RenderError> {
        self.viewport.reset();
        self.parameters.reset_linear_zoom();
        info!("view reset");
        self.render()
    }

    /// Zooms the Mandelbrot view in on the clicked point. Clicks while a
    /// linear fractal is selected are ignored.
    pub fn on_surface_click(
        &mut self,
        x: f64,
        y: f64,
    ) -> Result<Option<FrameSummary>, RenderError> {
        if self.parameters.fractal_kind().is_linear() {
            debug!("ignoring click at ({}, {}) outside the Mandelbrot view", x, y);
            return Ok(None);
        }

        let size = self
            .surface
            .as_ref()
            .map(|surface| surface.size())
            .ok_or(RenderError::SurfaceUnavailable)?;
        let centre = self.viewport.zoom_at(x, y, size);
        info!(
            "zoomed to {} + {}i at scale {}",
            centre.real,
            centre.imag,
            self.viewport.state().scale
        );

        self.render().map(Some)
    }

    /// Clears the surface and draws the current fractal from scratch.
    pub fn render(&mut self) -> Result<FrameSummary, RenderError> {
        let Some(surface) = self.surface.as_mut() else {
            warn!("redraw requested with no drawing surface attached");
            return Err(RenderError::SurfaceUnavailable);
        };

        let parameters = self.parameters;
        let generation = self.generation + 1;
        let kind = parameters.fractal_kind();
        debug!(
            "render {} started: {}, depth {}, {} colours",
            generation,
            kind,
            parameters.recursion_depth(),
            parameters.colour_scheme()
        );

        let start = Instant::now();
        surface.clear();
        let primitives = match kind {
            FractalKinds::Koch => draw_koch(surface, &parameters),
            FractalKinds::Sierpinski => draw_sierpinski(surface, &parameters),
            FractalKinds::Mandelbrot => draw_mandelbrot(surface, &parameters, self.viewport.state()),
        };
        let render_duration = start.elapsed();

        self.generation = generation;
        debug!(
            "render {} finished: {} primitives in {:?}",
            generation, primitives, render_duration
        );

        Ok(FrameSummary {
            generation,
            kind,
            primitives,
            render_duration,
        })
    }
}

fn draw_koch<S: DrawingSurface>(surface: &mut S, parameters: &RenderParameters) -> u64 {
    let (start, end) = koch_baseline(surface.size(), parameters.linear_zoom());
    let colour_map = LevelColourMap::new(parameters.colour_scheme(), parameters.recursion_depth());
    let mut primitives = 0;

    for segment in generate_koch(start, end, parameters.recursion_depth()) {
        surface.draw_line(segment.start, segment.end, colour_map.map(segment.level));
        primitives += 1;
    }

    primitives
}

fn draw_sierpinski<S: DrawingSurface>(surface: &mut S, parameters: &RenderParameters) -> u64 {
    let [p1, p2, p3] = sierpinski_outline(surface.size(), parameters.linear_zoom());
    let colour_map = LevelColourMap::new(parameters.colour_scheme(), parameters.recursion_depth());
    let mut primitives = 0;

    for triangle in generate_sierpinski(p1, p2, p3, parameters.recursion_depth()) {
        surface.draw_triangle(triangle.vertices, colour_map.map(triangle.level));
        primitives += 1;
    }

    primitives
}

fn draw_mandelbrot<S: DrawingSurface>(
    surface: &mut S,
    parameters: &RenderParameters,
    viewport: ViewportState,
) -> u64 {
    let size = surface.size();
    let max_iterations = parameters.max_iterations();
    let algorithm = MandelbrotAlgorithm::new(size, viewport, max_iterations);
    let colour_map = EscapeTimeColourMap::new(parameters.colour_scheme(), max_iterations);
    let mut primitives = 0;

    for sample in generate_fractal(size, &algorithm) {
        surface.draw_pixel(sample.pixel, colour_map.map(sample.escape_count));
        primitives += 1;
    }

    primitives
}
