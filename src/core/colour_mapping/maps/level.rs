use crate::core::colour_mapping::kinds::ColourSchemeKinds;
use crate::core::colour_mapping::map::ColourMap;
use crate::core::data::colour::{Colour, FULL_PERCENT};
use crate::core::util::linear_map::linear_map;

const RAINBOW_HUE_STEP: u64 = 50;
// wraps at 255 even though hue is measured in degrees
const RAINBOW_HUE_WRAP: u64 = 255;
const CHANNEL_BASE: f64 = 200.0;
const CHANNEL_STEP: f64 = 10.0;

/// Colours Koch and Sierpinski primitives by the recursion level they were
/// emitted at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelColourMap {
    scheme: ColourSchemeKinds,
    recursion_depth: u32,
}

impl LevelColourMap {
    #[must_use]
    pub fn new(scheme: ColourSchemeKinds, recursion_depth: u32) -> Self {
        Self {
            scheme,
            recursion_depth,
        }
    }
}

impl ColourMap for LevelColourMap {
    fn map(&self, level: u32) -> Colour {
        match self.scheme {
            ColourSchemeKinds::Rainbow => Colour::Hsb {
                hue: ((u64::from(level) * RAINBOW_HUE_STEP) % RAINBOW_HUE_WRAP) as f64,
                saturation: FULL_PERCENT,
                brightness: FULL_PERCENT,
            },
            ColourSchemeKinds::Grayscale => Colour::Gray(linear_map(
                f64::from(level),
                0.0,
                f64::from(self.recursion_depth),
                0.0,
                255.0,
            )),
            ColourSchemeKinds::Blue => Colour::Rgb {
                r: 0.0,
                g: 0.0,
                b: CHANNEL_BASE + f64::from(level) * CHANNEL_STEP,
            },
            ColourSchemeKinds::Green => Colour::Rgb {
                r: 0.0,
                g: CHANNEL_BASE + f64::from(level) * CHANNEL_STEP,
                b: 0.0,
            },
        }
    }

    fn kind(&self) -> ColourSchemeKinds {
        self.scheme
    }
}
