use std::fmt;

/// Packed 24-bit RGB color (`0xRRGGBB`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColorKey(u32);

impl ColorKey {
    pub const MAX: u32 = 0x00FF_FFFF;

    /// Build a key from a raw integer. Bits above the low 24 (alpha) are dropped.
    pub const fn new(raw: u32) -> Self {
        Self(raw & Self::MAX)
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    pub const fn rgb(self) -> (u8, u8, u8) {
        ((self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8)
    }
}

impl From<u32> for ColorKey {
    fn from(raw: u32) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for ColorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06X}", self.0)
    }
}
