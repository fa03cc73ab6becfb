/// An opaque RGB color with 8-bit channels.
///
/// Opacity lives on the individual shapes, not on the color itself,
/// so palette entries can be shared between opaque and translucent
/// shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}
