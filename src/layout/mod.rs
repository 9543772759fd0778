//! Per-render visual layout passes.
//!
//! Three passes run in order: atoms (labels, attachments, occlusion
//! radii), bonds (depiction geometry clipped against those radii), and
//! group brackets. Each pass produces primitives and is pure over the
//! molecule snapshot, the viewport transform, and the options.

pub(crate) mod atoms;
pub(crate) mod bonds;
pub(crate) mod brackets;

use crate::color::Rgba;

/// Per-atom layout results the bond pass depends on.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AtomDrawProps {
    /// Occlusion radius in viewport units; bond segments must clear it.
    pub radius: f64,
    /// Draw color used when bonds are colored per endpoint atom.
    pub color: Rgba,
    /// Halo color behind the label, transparent when no halo was drawn.
    pub halo_color: Rgba,
    /// Whether the atom is highlighted.
    pub highlighted: bool,
}
