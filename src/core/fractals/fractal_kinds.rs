#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FractalKinds {
    #[default]
    Koch,
    Sierpinski,
    Mandelbrot,
}

impl FractalKinds {
    pub const ALL: &'static [Self] = &[Self::Koch, Self::Sierpinski, Self::Mandelbrot];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Koch => "Koch curve",
            Self::Sierpinski => "Sierpinski triangle",
            Self::Mandelbrot => "Mandelbrot set",
        }
    }

    /// Koch and Sierpinski are drawn from recursively subdivided primitives.
    #[must_use]
    pub const fn is_linear(self) -> bool {
        matches!(self, Self::Koch | Self::Sierpinski)
    }
}

impl std::fmt::Display for FractalKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
