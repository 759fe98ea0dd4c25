//! Element colors.
//!
//! Colors belong to scene elements, never to primitives: the kernel
//! rasterizes geometry only and leaves compositing to the caller.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Opaque green.
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    /// Opaque blue.
    pub const BLUE: Self = Self::rgb(0, 0, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create a color with modified alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Drawing-board palette, row by row: greys, primaries, secondaries and
/// three rows of muted tones.
pub const PALETTE: [Rgba; 18] = [
    Rgba::rgb(0, 0, 0),
    Rgba::rgb(85, 85, 85),
    Rgba::rgb(170, 170, 170),
    Rgba::rgb(255, 0, 0),
    Rgba::rgb(0, 255, 0),
    Rgba::rgb(0, 0, 255),
    Rgba::rgb(0, 255, 255),
    Rgba::rgb(255, 0, 255),
    Rgba::rgb(255, 255, 0),
    Rgba::rgb(223, 96, 85),
    Rgba::rgb(96, 211, 148),
    Rgba::rgb(170, 246, 231),
    Rgba::rgb(203, 144, 77),
    Rgba::rgb(223, 203, 116),
    Rgba::rgb(195, 233, 145),
    Rgba::rgb(180, 206, 179),
    Rgba::rgb(219, 211, 201),
    Rgba::rgb(250, 212, 216),
];
