#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    pub x: u32,
    pub y: u32,
}
