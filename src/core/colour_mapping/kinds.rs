#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColourSchemeKinds {
    #[default]
    Rainbow,
    Grayscale,
    Blue,
    Green,
}

impl ColourSchemeKinds {
    pub const ALL: &'static [Self] = &[Self::Rainbow, Self::Grayscale, Self::Blue, Self::Green];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Rainbow => "Rainbow",
            Self::Grayscale => "Grayscale",
            Self::Blue => "Blue",
            Self::Green => "Green",
        }
    }
}

impl std::fmt::Display for ColourSchemeKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
