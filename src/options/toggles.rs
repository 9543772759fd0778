use serde::{Deserialize, Serialize};

/// Boolean drawing policies.
///
/// Field defaults reproduce the reference depiction style: bonds and
/// symbols on, plain carbons suppressed, implicit hydrogens shown,
/// wedge/hash stereo bonds honored, no highlighting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DrawToggles {
    /// Draw bond depictions at all.
    pub bonds: bool,
    /// Draw atom label symbols at all.
    pub symbols: bool,
    /// Draw every carbon symbol, not just the exceptional ones.
    pub carbon: bool,
    /// Draw terminal carbon symbols.
    pub terminal_carbon: bool,
    /// Draw implicit-hydrogen counts on visible labels.
    pub implicit_hydrogen: bool,
    /// Honor up/down bond stereo flags with wedge/hash depictions.
    pub stereo_bonds: bool,
    /// Draw per-center stereo descriptor labels.
    pub stereo_labels: bool,
    /// Treat defined R/S labels as relative (they fall back to the
    /// indeterminate branch, matching the legacy renderer).
    pub stereo_labels_as_relative: bool,
    /// Star defined descriptors: `(R*)`/`(S*)`.
    pub stereo_labels_as_starred: bool,
    /// Wrap stereo descriptors in parentheses.
    pub stereo_labels_parentheses: bool,
    /// Fold the stereo descriptor into the atom symbol instead of
    /// attaching it nearby.
    pub stereo_labels_replace_symbol: bool,
    /// Derive stereocenter parity from atom-map values instead of the
    /// model's stereo descriptors.
    pub stereo_from_atom_maps: bool,
    /// Force stereo-labeled renders to the monochrome draw color.
    pub stereo_force_monochromatic: bool,
    /// Disable the per-element color scheme.
    pub greyscale: bool,
    /// Highlight atoms carrying atom-to-atom map values.
    pub highlight_mapped_atoms: bool,
    /// Render highlights as halo discs behind the label.
    pub highlight_with_halo: bool,
    /// Use a single palette slot for every highlight.
    pub highlight_monochromatic: bool,
    /// Force-draw the symbol of highlighted atoms.
    pub highlight_show_atom: bool,
    /// Show atom-map numbers as superscript attachments.
    pub atom_map_numbers: bool,
    /// Split bond strokes at the midpoint into the two atom colors.
    pub atom_color_on_bonds: bool,
    /// Render hash (down) bonds as tapered dash wedges rather than
    /// dashed lines.
    pub dash_as_wedge: bool,
    /// Keep dash spacing constant by scaling tick count with segment
    /// length.
    pub constant_dash_width: bool,
    /// Center every double bond instead of offsetting to one side.
    pub center_all_double_bonds: bool,
    /// Center double bonds that are not part of a ring.
    pub center_nonring_double_bonds: bool,
    /// Accepted for compatibility: atom radii are not drawn to scale,
    /// so this has no visual effect.
    pub proportional_atom_radius: bool,
    /// Scale stroke/font metrics by the molecule's mean bond length
    /// instead of the configured expected length.
    pub bond_length_proportional_resize: bool,
    /// Reserve extra margin for a viewport border.
    pub border: bool,
}

impl Default for DrawToggles {
    fn default() -> Self {
        Self {
            bonds: true,
            symbols: true,
            carbon: false,
            terminal_carbon: false,
            implicit_hydrogen: true,
            stereo_bonds: true,
            stereo_labels: false,
            stereo_labels_as_relative: false,
            stereo_labels_as_starred: false,
            stereo_labels_parentheses: true,
            stereo_labels_replace_symbol: false,
            stereo_from_atom_maps: false,
            stereo_force_monochromatic: false,
            greyscale: false,
            highlight_mapped_atoms: false,
            highlight_with_halo: false,
            highlight_monochromatic: false,
            highlight_show_atom: false,
            atom_map_numbers: false,
            atom_color_on_bonds: false,
            dash_as_wedge: true,
            constant_dash_width: true,
            center_all_double_bonds: false,
            center_nonring_double_bonds: false,
            proportional_atom_radius: false,
            bond_length_proportional_resize: true,
            border: false,
        }
    }
}
