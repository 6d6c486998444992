use crate::core::colour_mapping::kinds::ColourSchemeKinds;
use crate::core::colour_mapping::map::ColourMap;
use crate::core::data::colour::{Colour, FULL_PERCENT};
use crate::core::util::linear_map::linear_map;

const HUE_RANGE_DEGREES: f64 = 360.0;
const CHANNEL_MAX: f64 = 255.0;

/// Colours Mandelbrot pixels by escape count relative to the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscapeTimeColourMap {
    scheme: ColourSchemeKinds,
    max_iterations: u32,
}

impl EscapeTimeColourMap {
    #[must_use]
    pub fn new(scheme: ColourSchemeKinds, max_iterations: u32) -> Self {
        Self {
            scheme,
            max_iterations,
        }
    }

    fn scale(&self, escape_count: u32, out_max: f64) -> f64 {
        linear_map(
            f64::from(escape_count),
            0.0,
            f64::from(self.max_iterations),
            0.0,
            out_max,
        )
    }
}

impl ColourMap for EscapeTimeColourMap {
    fn map(&self, escape_count: u32) -> Colour {
        match self.scheme {
            ColourSchemeKinds::Rainbow => Colour::Hsb {
                hue: self.scale(escape_count, HUE_RANGE_DEGREES),
                saturation: FULL_PERCENT,
                brightness: FULL_PERCENT,
            },
            ColourSchemeKinds::Grayscale => Colour::Gray(self.scale(escape_count, CHANNEL_MAX)),
            ColourSchemeKinds::Blue => Colour::Rgb {
                r: 0.0,
                g: 0.0,
                b: self.scale(escape_count, CHANNEL_MAX),
            },
            ColourSchemeKinds::Green => Colour::Rgb {
                r: 0.0,
                g: self.scale(escape_count, CHANNEL_MAX),
                b: 0.0,
            },
        }
    }

    fn kind(&self) -> ColourSchemeKinds {
        self.scheme
    }
}
