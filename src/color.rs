//! RGBA color values carried by drawing primitives.

use serde::{Deserialize, Serialize};

/// An 8-bit-per-channel RGBA color.
///
/// Derives `Ord` so two-color bond splitting can pick a deterministic
/// winner when deciding which half keeps which stroke; the ordering is a
/// stable key over `(r, g, b, a)`, not a perceptual relation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = opaque).
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Construct an RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Construct an opaque color.
    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// The same color with a different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_stable() {
        let a = Rgba::opaque(10, 20, 30);
        let b = Rgba::opaque(10, 20, 31);
        assert!(a < b);
        assert_eq!(a.max(b), b);
    }

    #[test]
    fn alpha_override() {
        let c = Rgba::opaque(1, 2, 3).with_alpha(55);
        assert_eq!(c, Rgba::new(1, 2, 3, 55));
    }
}
