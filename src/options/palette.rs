use serde::{Deserialize, Serialize};

use crate::color::Rgba;

/// Palette slot used for every highlight when monochromatic
/// highlighting is requested.
pub(crate) const MONOCHROMATIC_SLOT: usize = 2;

/// Highlight and stereo-label colors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HighlightPalette {
    /// Ordered highlight colors, indexed by `map_value % len`.
    pub colors: Vec<Rgba>,
    /// Color of defined/known stereo descriptors.
    pub stereo_known: Rgba,
    /// Color of indeterminate stereo descriptors.
    pub stereo_unknown: Rgba,
}

impl Default for HighlightPalette {
    fn default() -> Self {
        Self {
            colors: vec![
                Rgba::opaque(255, 179, 179),
                Rgba::opaque(255, 223, 128),
                Rgba::opaque(179, 209, 255),
                Rgba::opaque(179, 255, 191),
                Rgba::opaque(234, 179, 255),
                Rgba::opaque(255, 204, 229),
                Rgba::opaque(179, 255, 247),
                Rgba::opaque(222, 255, 140),
            ],
            stereo_known: Rgba::opaque(0, 178, 0),
            stereo_unknown: Rgba::opaque(255, 0, 0),
        }
    }
}

impl HighlightPalette {
    /// Highlight color for an atom-map value. Monochromatic mode pins
    /// every highlight to one slot so mapped sets read as a single
    /// group.
    #[must_use]
    pub fn color_for_map(&self, map_value: u32, monochromatic: bool) -> Rgba {
        if self.colors.is_empty() {
            return crate::tables::DEFAULT_DRAW_COLOR;
        }
        let idx = if monochromatic {
            MONOCHROMATIC_SLOT % self.colors.len()
        } else {
            map_value as usize % self.colors.len()
        };
        self.colors[idx]
    }
}
