//! Packed ARGB pixel and the two gray formulas used by the converter.

/// Threshold of the floating point gray below which a pixel prints dark.
pub const DARK_THRESHOLD: i32 = 200;

/// One source pixel, 8 bits per channel.
///
/// Stored as a packed `0xAARRGGBB` word, the layout most platform bitmap
/// APIs hand out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Argb(u32);

impl Argb {
    pub const WHITE: Argb = Argb(0xFFFF_FFFF);
    pub const BLACK: Argb = Argb(0xFF00_0000);

    pub fn new(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Argb(
            (u32::from(alpha) << 24)
                | (u32::from(red) << 16)
                | (u32::from(green) << 8)
                | u32::from(blue),
        )
    }

    pub fn from_u32(word: u32) -> Self {
        Argb(word)
    }

    pub fn to_u32(self) -> u32 {
        self.0
    }

    pub fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub fn red(self) -> u8 {
        ((self.0 & 0x00FF_0000) >> 16) as u8
    }

    pub fn green(self) -> u8 {
        ((self.0 & 0x0000_FF00) >> 8) as u8
    }

    pub fn blue(self) -> u8 {
        (self.0 & 0x0000_00FF) as u8
    }

    /// Fully transparent pixels are replaced by opaque white so they print
    /// as background.
    pub fn opaque_or_white(self) -> Self {
        if self.alpha() == 0 {
            Self::WHITE
        } else {
            self
        }
    }

    /// Fixed point luminance in `0..=255`.
    ///
    /// `(r * 19595 + g * 38470 + b * 7472) >> 16`, truncated rather than
    /// rounded. Printed output of existing devices depends on this exact
    /// rounding, so do not replace it with the floating point weights.
    pub fn luminance(self) -> i32 {
        let p = self.opaque_or_white();
        (i32::from(p.red()) * 19595 + i32::from(p.green()) * 38470 + i32::from(p.blue()) * 7472)
            >> 16
    }

    /// Whether the pixel prints dark when no dithering is applied.
    ///
    /// Uses the floating point `0.299R + 0.587G + 0.114B` weights truncated
    /// to an integer, which is not the same value as [`Argb::luminance`].
    pub fn is_dark(self) -> bool {
        let p = self.opaque_or_white();
        let gray = 0.299 * f64::from(p.red()) + 0.587 * f64::from(p.green())
            + 0.114 * f64::from(p.blue());
        (gray as i32) < DARK_THRESHOLD
    }
}

impl From<u32> for Argb {
    fn from(word: u32) -> Self {
        Argb::from_u32(word)
    }
}

impl From<Argb> for u32 {
    fn from(pixel: Argb) -> Self {
        pixel.to_u32()
    }
}
