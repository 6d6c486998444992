use thiserror::Error;

use crate::core::colour_mapping::kinds::ColourSchemeKinds;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::fractals::mandelbrot::algorithm::max_iterations_for_depth;

pub const DEFAULT_RECURSION_DEPTH: u32 = 5;
pub const DEFAULT_LINEAR_ZOOM: f64 = 1.0;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum RenderParameterError {
    #[error("recursion depth must be between 0 and {max}: {depth}", max = u32::MAX)]
    InvalidRecursionDepth { depth: i64 },
    #[error("linear zoom must be a positive finite number: {zoom}")]
    InvalidLinearZoom { zoom: f64 },
}

/// User-adjustable settings read by every render pass.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderParameters {
    fractal_kind: FractalKinds,
    recursion_depth: u32,
    colour_scheme: ColourSchemeKinds,
    linear_zoom: f64,
}

impl Default for RenderParameters {
    fn default() -> Self {
        Self {
            fractal_kind: FractalKinds::default(),
            recursion_depth: DEFAULT_RECURSION_DEPTH,
            colour_scheme: ColourSchemeKinds::default(),
            linear_zoom: DEFAULT_LINEAR_ZOOM,
        }
    }
}

impl RenderParameters {
    pub fn new(
        fractal_kind: FractalKinds,
        recursion_depth: u32,
        colour_scheme: ColourSchemeKinds,
        linear_zoom: f64,
    ) -> Result<Self, RenderParameterError> {
        let mut params = Self {
            fractal_kind,
            recursion_depth,
            colour_scheme,
            ..Self::default()
        };
        params.set_linear_zoom(linear_zoom)?;

        Ok(params)
    }

    #[must_use]
    pub fn fractal_kind(&self) -> FractalKinds {
        self.fractal_kind
    }

    #[must_use]
    pub fn recursion_depth(&self) -> u32 {
        self.recursion_depth
    }

    #[must_use]
    pub fn colour_scheme(&self) -> ColourSchemeKinds {
        self.colour_scheme
    }

    #[must_use]
    pub fn linear_zoom(&self) -> f64 {
        self.linear_zoom
    }

    /// Iteration limit used by the Mandelbrot pass, derived from the depth.
    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        max_iterations_for_depth(self.recursion_depth)
    }

    pub fn set_fractal_kind(&mut self, fractal_kind: FractalKinds) {
        self.fractal_kind = fractal_kind;
    }

    pub fn set_recursion_depth(&mut self, depth: i64) -> Result<(), RenderParameterError> {
        self.recursion_depth = u32::try_from(depth)
            .map_err(|_| RenderParameterError::InvalidRecursionDepth { depth })?;

        Ok(())
    }

    pub fn set_colour_scheme(&mut self, colour_scheme: ColourSchemeKinds) {
        self.colour_scheme = colour_scheme;
    }

    pub fn set_linear_zoom(&mut self, zoom: f64) -> Result<(), RenderParameterError> {
        if !zoom.is_finite() || zoom <= 0.0 {
            return Err(RenderParameterError::InvalidLinearZoom { zoom });
        }

        self.linear_zoom = zoom;
        Ok(())
    }

    pub fn reset_linear_zoom(&mut self) {
        self.linear_zoom = DEFAULT_LINEAR_ZOOM;
    }
}
