use std::time::Duration;

use crate::core::fractals::fractal_kinds::FractalKinds;

/// Outcome of one completed render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSummary {
    pub generation: u64,
    pub kind: FractalKinds,
    /// Lines, triangles or pixels handed to the surface.
    pub primitives: u64,
    pub render_duration: Duration,
}
