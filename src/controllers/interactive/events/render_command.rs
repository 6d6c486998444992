use crate::core::colour_mapping::kinds::ColourSchemeKinds;
use crate::core::fractals::fractal_kinds::FractalKinds;

/// Discrete events a host delivers to the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderCommand {
    SetFractalKind(FractalKinds),
    SetRecursionDepth(i64),
    SetColourScheme(ColourSchemeKinds),
    SetLinearZoom(f64),
    ResetView,
    SurfaceClick { x: f64, y: f64 },
    Redraw,
}
