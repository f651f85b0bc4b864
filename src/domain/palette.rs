/// Linear RGB color with components in 0.0..=1.0
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// True when every channel is zero
    pub fn is_black(self) -> bool {
        self == Self::BLACK
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::BLACK
    }
}

/// The Dazzler's 16 colors.
/// 1-7 are half intensity, 9-15 full intensity; 0 and 8 are both black.
pub const PALETTE: [Rgb; 16] = [
    Rgb::BLACK,
    Rgb::new(0.5, 0.0, 0.0), // dim red
    Rgb::new(0.0, 0.5, 0.0), // dim green
    Rgb::new(0.5, 0.5, 0.0), // dim yellow
    Rgb::new(0.0, 0.0, 0.5), // dim blue
    Rgb::new(0.5, 0.0, 0.5), // dim magenta
    Rgb::new(0.0, 0.5, 0.5), // dim cyan
    Rgb::new(0.5, 0.5, 0.5), // grey
    Rgb::BLACK,
    Rgb::new(1.0, 0.0, 0.0),
    Rgb::new(0.0, 1.0, 0.0),
    Rgb::new(1.0, 1.0, 0.0),
    Rgb::new(0.0, 0.0, 1.0),
    Rgb::new(1.0, 0.0, 1.0),
    Rgb::new(0.0, 1.0, 1.0),
    Rgb::WHITE,
];

/// Read-only access to the color table
pub struct Palette;

impl Palette {
    /// Color for a Dazzler color number; only the low nibble is used
    pub const fn color(index: u8) -> Rgb {
        PALETTE[(index & 0x0F) as usize]
    }
}
