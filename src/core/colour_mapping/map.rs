use crate::core::colour_mapping::kinds::ColourSchemeKinds;
use crate::core::data::colour::Colour;

/// Maps a scalar produced by a fractal pass (a recursion level or an escape
/// count) to the colour it is drawn with.
pub trait ColourMap {
    fn map(&self, value: u32) -> Colour;

    fn kind(&self) -> ColourSchemeKinds;

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}
