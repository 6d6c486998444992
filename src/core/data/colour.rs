/// Colour as produced by a colour scheme, before any clamping.
///
/// Channel values are kept exactly as the scheme computed them, so a value
/// mapped from outside its input range can overshoot (e.g. a blue channel of
/// 260). Surfaces decide how to present out-of-range values; [`Colour::to_rgb`]
/// is the conversion used by the raster surface.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Colour {
    /// Hue in degrees, saturation and brightness in percent.
    Hsb {
        hue: f64,
        saturation: f64,
        brightness: f64,
    },
    /// Single grey channel on a 0-255 scale.
    Gray(f64),
    /// Red, green and blue channels on a 0-255 scale.
    Rgb { r: f64, g: f64, b: f64 },
}

pub const FULL_PERCENT: f64 = 100.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Self = Self { r: 255, g: 255, b: 255 };
}

fn to_channel(value: f64) -> u8 {
    // NaN survives clamp() and saturates to 0 in the cast
    value.clamp(0.0, 255.0).round() as u8
}

fn hsb_to_unit_rgb(hue: f64, saturation: f64, brightness: f64) -> (f64, f64, f64) {
    // no sextant to pick from; render black like any other NaN channel
    if !hue.is_finite() {
        return (0.0, 0.0, 0.0);
    }

    let s = (saturation / FULL_PERCENT).clamp(0.0, 1.0);
    let v = (brightness / FULL_PERCENT).clamp(0.0, 1.0);
    let h = hue.rem_euclid(360.0) / 60.0;
    let sextant = h.floor();
    let f = h - sextant;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    match sextant as i32 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

impl Colour {
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        match self {
            Self::Hsb {
                hue,
                saturation,
                brightness,
            } => {
                let (r, g, b) = hsb_to_unit_rgb(hue, saturation, brightness);

                Rgb {
                    r: to_channel(r * 255.0),
                    g: to_channel(g * 255.0),
                    b: to_channel(b * 255.0),
                }
            }
            Self::Gray(level) => {
                let level = to_channel(level);

                Rgb {
                    r: level,
                    g: level,
                    b: level,
                }
            }
            Self::Rgb { r, g, b } => Rgb {
                r: to_channel(r),
                g: to_channel(g),
                b: to_channel(b),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_hue(hue: f64) -> Colour {
        Colour::Hsb {
            hue,
            saturation: FULL_PERCENT,
            brightness: FULL_PERCENT,
        }
    }

    #[test]
    fn test_primary_hues() {
        assert_eq!(full_hue(0.0).to_rgb(), Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(full_hue(120.0).to_rgb(), Rgb { r: 0, g: 255, b: 0 });
        assert_eq!(full_hue(240.0).to_rgb(), Rgb { r: 0, g: 0, b: 255 });
    }

    #[test]
    fn test_hue_wraps_at_360() {
        assert_eq!(full_hue(360.0).to_rgb(), full_hue(0.0).to_rgb());
        assert_eq!(full_hue(-120.0).to_rgb(), full_hue(240.0).to_rgb());
    }

    #[test]
    fn test_intermediate_hue() {
        // 30 degrees is halfway between red and yellow
        assert_eq!(full_hue(30.0).to_rgb(), Rgb { r: 255, g: 128, b: 0 });
    }

    #[test]
    fn test_gray_fills_all_channels() {
        assert_eq!(Colour::Gray(128.0).to_rgb(), Rgb { r: 128, g: 128, b: 128 });
    }

    #[test]
    fn test_overshoot_is_clamped_only_on_conversion() {
        let colour = Colour::Rgb { r: 0.0, g: 0.0, b: 260.0 };

        assert!(matches!(colour, Colour::Rgb { b, .. } if b == 260.0));
        assert_eq!(colour.to_rgb(), Rgb { r: 0, g: 0, b: 255 });
        assert_eq!(Colour::Gray(-20.0).to_rgb(), Rgb { r: 0, g: 0, b: 0 });
    }

    #[test]
    fn test_nan_channels_render_black() {
        assert_eq!(Colour::Gray(f64::NAN).to_rgb(), Rgb { r: 0, g: 0, b: 0 });
    }

    #[test]
    fn test_nan_hue_renders_black() {
        assert_eq!(full_hue(f64::NAN).to_rgb(), Rgb { r: 0, g: 0, b: 0 });
        assert_eq!(full_hue(f64::INFINITY).to_rgb(), Rgb { r: 0, g: 0, b: 0 });
    }
}
