use serde::{Deserialize, Serialize};

// Default values are empirically tuned visual heuristics inherited from
// the reference renderer, not derivable constants; keep them named so
// presets can override them deliberately.

/// Fallback mean bond length (molecule units) when the molecule has no
/// bonds or length-proportional resize is off.
const DEFAULT_EXPECTED_BOND_LENGTH: f64 = 1.0;
/// Stroke width as a fraction of the rendered bond length; ~5% reads as
/// a medium-weight skeletal stroke.
const DEFAULT_STROKE_WIDTH_FRACTION: f64 = 0.05;
/// Label font em size as a fraction of the rendered bond length.
const DEFAULT_LABEL_FONT_FRACTION: f64 = 0.66;
/// Separation between the two lines of a double bond, as a fraction of
/// the rendered bond length.
const DEFAULT_DOUBLE_BOND_GAP_FRACTION: f64 = 0.30;
/// Length of the inner (offset) double-bond line relative to the outer.
const DEFAULT_DOUBLE_BOND_LENGTH_FRACTION: f64 = 0.66;
/// Multiplier applied to the measured label radius to keep bond ends
/// clear of the glyphs.
const DEFAULT_LABEL_BOND_GAP_FRACTION: f64 = 1.14;
/// Half-angle of a stereo wedge, radians (15 degrees).
const DEFAULT_WEDGE_HALF_ANGLE: f64 = std::f64::consts::PI / 12.0;
/// Gap left when splitting overlapping bond strokes, in stroke widths.
const DEFAULT_OVERLAP_SPLIT_FRACTION: f64 = 2.0;
/// Tick count for hashed (down) stereo bonds.
const DEFAULT_DASH_COUNT: u32 = 6;

/// Numeric style parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StyleParameters {
    /// Expected mean bond length in molecule units.
    pub expected_bond_length: f64,
    /// Bond stroke width fraction.
    pub stroke_width_fraction: f64,
    /// Atom label font-size fraction.
    pub label_font_fraction: f64,
    /// Double-bond line gap fraction.
    pub double_bond_gap_fraction: f64,
    /// Inner double-bond line length fraction.
    pub double_bond_length_fraction: f64,
    /// Label-to-bond clearance multiplier.
    pub label_bond_gap_fraction: f64,
    /// Stereo wedge half-angle in radians.
    pub wedge_half_angle: f64,
    /// Overlap-split gap in stroke widths.
    pub overlap_split_fraction: f64,
    /// Hashed-bond tick count (base count when spacing is constant).
    pub dash_count: u32,
}

impl Default for StyleParameters {
    fn default() -> Self {
        Self {
            expected_bond_length: DEFAULT_EXPECTED_BOND_LENGTH,
            stroke_width_fraction: DEFAULT_STROKE_WIDTH_FRACTION,
            label_font_fraction: DEFAULT_LABEL_FONT_FRACTION,
            double_bond_gap_fraction: DEFAULT_DOUBLE_BOND_GAP_FRACTION,
            double_bond_length_fraction: DEFAULT_DOUBLE_BOND_LENGTH_FRACTION,
            label_bond_gap_fraction: DEFAULT_LABEL_BOND_GAP_FRACTION,
            wedge_half_angle: DEFAULT_WEDGE_HALF_ANGLE,
            overlap_split_fraction: DEFAULT_OVERLAP_SPLIT_FRACTION,
            dash_count: DEFAULT_DASH_COUNT,
        }
    }
}
