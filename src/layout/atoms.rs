//! Atom visual layout.
//!
//! For every atom this pass decides the visible label text and color,
//! places auxiliary attachments (hydrogen count, charge, isotope,
//! radical dots, stereo tag, map number) in non-overlapping directions
//! around the symbol, and derives the occlusion radius that the bond
//! pass clips against. Atoms are processed in the molecule's native
//! order so output is deterministic.

use glam::DVec2;
use rustc_hash::FxHashMap;

use crate::color::Rgba;
use crate::geometry::{scaled_or_default, Point2D};
use crate::layout::AtomDrawProps;
use crate::model::{
    Atom, BondOrder, Chirality, Molecule, OpticalActivity, StereochemistryType,
};
use crate::options::{DrawToggles, HighlightPalette, RendererOptions};
use crate::primitives::{GlyphRun, Primitive};
use crate::tables;
use crate::text::TextMetrics;
use crate::transform::ViewportTransform;

/// Fraction of the occlusion radius kept when drawing a halo disc.
const HALO_RADIUS_FUDGE: f64 = 0.5;
/// Halo growth term, as a fraction of the rendered bond length. Shared
/// by the atom halo discs and the bond halo under-strokes.
pub(crate) const HALO_RADIUS_GROW: f64 = 0.20;
/// Alpha of the translucent stereo halo behind a labeled center.
const STEREO_HALO_ALPHA: u8 = 55;
/// Stereo tags and replace-mode labels render at this font factor.
const STEREO_TAG_SIZE_FACTOR: f64 = 0.7;
/// Small westward bias applied to the neighbor-centroid direction so
/// perfectly symmetric layouts settle on the right-hand slot.
const CENTROID_X_BIAS: f64 = 1.0 / 24.0;
/// Carbons in allene-like chains (two bonds, both double) are always
/// labeled; the bare skeletal kink would be ambiguous. A fixed policy
/// of the depiction style, not a candidate for `DrawToggles`.
const ALLENE_CARBON_VISIBLE: bool = true;

/// Slot an attachment occupies around the symbol, named by where it
/// lands on screen. An attachment goes opposite the atom's bonded
/// neighbors, so each slot is selected by the neighbor-centroid
/// direction that makes it the natural choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Right,
    Below,
    Left,
    Above,
}

/// Slot mask bit: attachment may sit to the right of the symbol.
const RIGHT: u8 = 0b0001;
/// Slot mask bit: below the symbol.
const BELOW: u8 = 0b0010;
/// Slot mask bit: to the left of the symbol.
const LEFT: u8 = 0b0100;
/// Slot mask bit: above the symbol.
const ABOVE: u8 = 0b1000;
/// All four slots.
const ALL_SLOTS: u8 = RIGHT | BELOW | LEFT | ABOVE;

impl Slot {
    /// Scan order for selection; on distance ties the later slot wins.
    const ALL: [Self; 4] = [Self::Right, Self::Below, Self::Left, Self::Above];

    const fn bit(self) -> u8 {
        match self {
            Self::Right => RIGHT,
            Self::Below => BELOW,
            Self::Left => LEFT,
            Self::Above => ABOVE,
        }
    }

    /// Neighbor-centroid direction (molecule coordinates, y up) for
    /// which this slot is the best placement.
    const fn neighbor_dir(self) -> DVec2 {
        match self {
            Self::Right => DVec2::new(-1.0, 0.0),
            Self::Below => DVec2::new(0.0, 1.0),
            Self::Left => DVec2::new(1.0, 0.0),
            Self::Above => DVec2::new(0.0, -1.0),
        }
    }
}

/// One auxiliary text attachment queued for placement.
struct Attachment {
    text: String,
    /// Permitted slots; `None` means free placement along the widest
    /// angular gap (stereo tags).
    slots: Option<u8>,
    size_factor: f64,
    color: Rgba,
}

/// Geometry of the measured symbol the attachments anchor to.
#[derive(Clone, Copy)]
struct LabelFrame {
    /// Transformed atom position (viewport units).
    origin: DVec2,
    /// Half the symbol's measured width.
    half_width: f64,
    /// A third of the symbol's measured height.
    third_height: f64,
}

/// Inputs shared by the whole atom pass.
pub(crate) struct AtomLayoutInput<'a> {
    /// Molecule snapshot.
    pub molecule: &'a Molecule,
    /// Viewport transform for this render.
    pub transform: &'a ViewportTransform,
    /// Glyph metrics provider.
    pub metrics: &'a dyn TextMetrics,
    /// Immutable options snapshot.
    pub options: &'a RendererOptions,
    /// Mean bond length in molecule units.
    pub avg_bond_length: f64,
}

/// Results of the atom pass.
pub(crate) struct AtomLayout {
    /// Halo discs, drawn before all bond geometry.
    pub halos: Vec<Primitive>,
    /// Label and attachment glyph runs, drawn after bond geometry.
    pub labels: Vec<Primitive>,
    /// Per-atom draw properties consumed by the bond pass.
    pub props: FxHashMap<usize, AtomDrawProps>,
}

/// Run the atom pass over every atom.
pub(crate) fn layout_atoms(input: &AtomLayoutInput<'_>) -> AtomLayout {
    let font_size = input.options.style.label_font_fraction
        * input.transform.scale()
        * input.avg_bond_length;
    let highlight_maps = input.options.draw.highlight_mapped_atoms
        && input.molecule.has_atom_maps();

    let mut layout = AtomLayout {
        halos: Vec::new(),
        labels: Vec::new(),
        props: FxHashMap::default(),
    };
    for index in 0..input.molecule.atoms().len() {
        lay_out_atom(input, &mut layout, index, font_size, highlight_maps);
    }
    layout
}

#[allow(clippy::too_many_lines)]
fn lay_out_atom(
    input: &AtomLayoutInput<'_>,
    layout: &mut AtomLayout,
    index: usize,
    font_size: f64,
    highlight_maps: bool,
) {
    let mol = input.molecule;
    let toggles = &input.options.draw;
    let style = &input.options.style;
    let palette = &input.options.palette;
    let atom = &mol.atoms()[index];

    let mut symbol = atom
        .r_group
        .map_or_else(|| atom.symbol.clone(), tables::r_group_text);
    let mut color = tables::DEFAULT_DRAW_COLOR;
    let mut halo_color = Rgba::TRANSPARENT;
    let mut force_draw = false;
    let mut force_halo = false;
    let mut highlighted = false;
    let mut is_stereo = false;
    let mut label_size = font_size;
    let mut attachments: Vec<Attachment> = Vec::new();

    if highlight_maps {
        if let Some(map) = atom.atom_map.filter(|&m| m > 0) {
            color = palette.color_for_map(map, toggles.highlight_monochromatic);
            if toggles.highlight_show_atom {
                force_draw = true;
            }
            highlighted = true;
        }
    } else if !toggles.greyscale {
        color = tables::element_color(&symbol);
    }

    if toggles.stereo_labels {
        if toggles.stereo_force_monochromatic {
            color = tables::DEFAULT_DRAW_COLOR;
        }
        if let Some(chirality) = stereo_descriptor(atom, toggles) {
            let (mut tag, tag_color) =
                resolve_stereo_tag(chirality, mol, toggles, palette);
            if !toggles.stereo_labels_parentheses {
                tag = tag.replace(['(', ')'], "");
            }
            is_stereo = true;
            if toggles.stereo_labels_replace_symbol {
                color = tag_color;
                if symbol == "C" {
                    symbol = tag;
                } else {
                    symbol.push_str(&tag);
                }
                force_draw = true;
                label_size = font_size * STEREO_TAG_SIZE_FACTOR;
            } else {
                if toggles.highlight_show_atom {
                    force_draw = true;
                }
                highlighted = true;
                color = tag_color.with_alpha(STEREO_HALO_ALPHA);
                force_halo = true;
                attachments.push(Attachment {
                    text: tag,
                    slots: None,
                    size_factor: STEREO_TAG_SIZE_FACTOR,
                    color: tag_color,
                });
            }
        }
    }

    // Carbon suppression policy. The decision uses only the flags known
    // so far (stereo/highlight forcing); charge, radical, and isotope
    // force the symbol through their own attachments below.
    let is_carbon = atom.symbol == "C" && atom.r_group.is_none();
    let bond_count = mol.bond_count(index);
    let marked = atom.charge != 0
        || atom.radical != 0
        || atom.mass_number.is_some();
    let (carbon_visible, mut draw_hydrogens) = if toggles.terminal_carbon {
        let show_h = if toggles.carbon {
            true
        } else if is_carbon {
            (force_draw && !is_stereo) || bond_count < 2 || marked
        } else {
            true
        };
        (toggles.carbon, show_h)
    } else {
        let visible = is_carbon && bond_count < 2 && (force_draw || marked);
        (visible, if is_carbon { visible } else { true })
    };
    draw_hydrogens = draw_hydrogens && toggles.implicit_hydrogen;

    let p = input.transform.apply(atom.position).as_vec();
    let extent = input.metrics.measure(&symbol, label_size);
    let frame = LabelFrame {
        origin: p,
        half_width: extent.width / 2.0,
        third_height: extent.height / 3.0,
    };
    let mut radius = frame.half_width.max(frame.third_height * 6.0 / 5.0)
        + 2.0 * frame.half_width / 10.0;

    if (toggles.highlight_with_halo && highlighted) || force_halo {
        let halo_radius = radius * HALO_RADIUS_FUDGE
            + HALO_RADIUS_GROW * input.transform.scale() * input.avg_bond_length;
        layout.halos.push(Primitive::FillDisc {
            center: Point2D::from_vec(p),
            radius: halo_radius,
            color,
        });
        halo_color = color;
        color = tables::DEFAULT_DRAW_COLOR;
    }

    if let Some(mass) = atom.mass_number {
        let text = tables::superscript_number(mass);
        if !text.is_empty() {
            attachments.push(Attachment {
                text,
                slots: Some(LEFT),
                size_factor: 1.0,
                color,
            });
            force_draw = true;
        }
    }

    let mut hydrogen_text = String::new();
    if atom.implicit_hydrogens > 0 && draw_hydrogens {
        hydrogen_text.push('H');
        if atom.implicit_hydrogens >= 2 {
            if let Some(digit) = tables::subscript_digit(atom.implicit_hydrogens)
            {
                hydrogen_text.push(digit);
            }
        }
    }

    if atom.charge != 0 {
        let mut text = String::new();
        let magnitude = atom.charge.unsigned_abs();
        if magnitude > 1 {
            text.push_str(&tables::superscript_number(magnitude));
        }
        text.push(if atom.charge > 0 {
            tables::SUPERSCRIPT_PLUS
        } else {
            tables::SUPERSCRIPT_MINUS
        });
        attachments.push(Attachment {
            text,
            slots: Some(RIGHT),
            size_factor: 1.0,
            color,
        });
        force_draw = true;
    }

    if !hydrogen_text.is_empty() {
        let slots = match bond_count {
            0 => {
                if tables::hydrogen_forced_left(&atom.symbol) {
                    LEFT
                } else {
                    RIGHT
                }
            }
            1 => RIGHT | LEFT,
            _ => ALL_SLOTS,
        };
        attachments.push(Attachment {
            text: hydrogen_text,
            slots: Some(slots),
            size_factor: 1.0,
            color,
        });
        force_draw = true;
    }

    if atom.radical != 0 {
        let text = match atom.radical {
            1 => Some("."),
            2 => Some("\u{200A}."),
            _ => None,
        };
        if let Some(text) = text {
            attachments.push(Attachment {
                text: text.to_owned(),
                slots: Some(BELOW | ABOVE),
                size_factor: 1.0,
                color,
            });
            force_draw = true;
        }
    }

    if toggles.atom_map_numbers {
        if let Some(map) = atom.atom_map.filter(|&m| m != 0) {
            let text = tables::superscript_number(map);
            if !text.is_empty() {
                attachments.push(Attachment {
                    text,
                    slots: Some(ALL_SLOTS),
                    size_factor: 1.0,
                    color,
                });
            }
        }
    }

    let mut draw_symbol = force_draw || !is_carbon || carbon_visible;
    if bond_count == 2 && is_carbon {
        let all_double = mol
            .bonds_of(index)
            .iter()
            .all(|&b| mol.bonds()[b].order == BondOrder::Double);
        if all_double {
            draw_symbol = ALLENE_CARBON_VISIBLE;
        }
    }

    if toggles.symbols {
        if !draw_symbol {
            radius = 0.0;
        }
        let mut used: u8 = 0;
        for attachment in &attachments {
            place_attachment(
                input,
                &mut layout.labels,
                attachment,
                &mut used,
                index,
                frame,
                font_size,
            );
        }
        if draw_symbol {
            layout.labels.push(Primitive::Glyphs(GlyphRun {
                text: symbol,
                origin: Point2D::from_vec(DVec2::new(
                    p.x - frame.half_width,
                    p.y + frame.third_height,
                )),
                size: label_size,
                color,
            }));
        }
    } else if draw_symbol {
        // Symbol-less rendering marks atom sites with plain discs.
        layout.labels.push(Primitive::FillDisc {
            center: Point2D::from_vec(p),
            radius,
            color,
        });
    } else {
        radius = 0.0;
    }

    radius *= style.label_bond_gap_fraction;
    let _ = layout.props.insert(
        index,
        AtomDrawProps {
            radius,
            color,
            halo_color,
            highlighted,
        },
    );
}

/// Chirality descriptor used for stereo labeling, either from the model
/// or reinterpreted from the atom-map value as a parity code.
fn stereo_descriptor(atom: &Atom, toggles: &DrawToggles) -> Option<Chirality> {
    if toggles.stereo_from_atom_maps {
        // Unmapped atoms read as parity 3, which is "either"; every
        // atom gets a descriptor in this mode.
        Some(Chirality::from_parity(atom.atom_map.unwrap_or(3)))
    } else {
        atom.chirality
    }
}

/// Map a chirality descriptor to its tag text and color.
fn resolve_stereo_tag(
    chirality: Chirality,
    mol: &Molecule,
    toggles: &DrawToggles,
    palette: &HighlightPalette,
) -> (String, Rgba) {
    let indeterminate = || {
        // A molecule flagged racemic or (+/-) is definitely R or S at
        // each center, just not resolved to one; that reads as a
        // confident "(RS)" rather than an uncertain "(*)".
        let racemic = mol.stereochemistry() == Some(StereochemistryType::Racemic)
            || mol.optical_activity() == Some(OpticalActivity::PlusMinus);
        if racemic {
            ("(RS)".to_owned(), palette.stereo_known)
        } else {
            ("(*)".to_owned(), palette.stereo_unknown)
        }
    };
    match chirality {
        Chirality::R => {
            if toggles.stereo_labels_as_relative {
                indeterminate()
            } else if toggles.stereo_labels_as_starred {
                ("(R*)".to_owned(), palette.stereo_known)
            } else {
                ("(R)".to_owned(), palette.stereo_known)
            }
        }
        Chirality::Either => indeterminate(),
        Chirality::S => {
            // Relative-mode S centers always read as unknown; only R
            // centers take the racemic disambiguation above. The
            // asymmetry is long-standing rendered output.
            if toggles.stereo_labels_as_relative {
                ("(*)".to_owned(), palette.stereo_unknown)
            } else if toggles.stereo_labels_as_starred {
                ("(S*)".to_owned(), palette.stereo_known)
            } else {
                ("(S)".to_owned(), palette.stereo_known)
            }
        }
    }
}

/// Place one attachment and emit its glyphs, one run per character so
/// subscript digits can take their baseline shift individually.
fn place_attachment(
    input: &AtomLayoutInput<'_>,
    out: &mut Vec<Primitive>,
    attachment: &Attachment,
    used: &mut u8,
    atom_index: usize,
    frame: LabelFrame,
    font_size: f64,
) {
    let size = font_size * attachment.size_factor;
    let offset = match attachment.slots {
        Some(mask) => {
            let available = mask & !*used;
            let slot = pick_slot(input.molecule, atom_index, available);
            *used |= slot.bit();
            slot_offset(slot, attachment, frame, input.metrics, size)
        }
        None => free_offset(input, atom_index, attachment, frame, size),
    };

    let mut advance = 0.0;
    for c in attachment.text.chars() {
        let glyph = c.to_string();
        let glyph_extent = input.metrics.measure(&glyph, size);
        let y_shift = if tables::is_subscript_glyph(c) {
            glyph_extent.height / 5.0
        } else {
            0.0
        };
        out.push(Primitive::Glyphs(GlyphRun {
            text: glyph,
            origin: Point2D::from_vec(DVec2::new(
                frame.origin.x - offset.x - frame.half_width + advance,
                frame.origin.y + offset.y + frame.third_height + y_shift,
            )),
            size,
            color: attachment.color,
        }));
        advance += glyph_extent.width;
    }
}

/// Pick the open slot whose characteristic neighbor direction is
/// nearest the atom's actual neighbor centroid. With every slot claimed
/// the right-hand slot is reused.
fn pick_slot(mol: &Molecule, atom_index: usize, available: u8) -> Slot {
    let pos = mol.atoms()[atom_index].position.as_vec();
    let mut centroid = DVec2::ZERO;
    let mut count = 0u32;
    for neighbor in mol.neighbors(atom_index) {
        centroid += mol.atoms()[neighbor].position.as_vec();
        count += 1;
    }
    let toward = if count > 0 {
        centroid / f64::from(count) - pos
    } else {
        DVec2::ZERO
    };
    let mut dir = scaled_or_default(toward, 1.0);
    dir.x -= CENTROID_X_BIAS;

    let mut best = Slot::Right;
    let mut best_dist = f64::INFINITY;
    for slot in Slot::ALL {
        if slot.bit() & available == 0 {
            continue;
        }
        let dist = (dir - slot.neighbor_dir()).length_squared();
        if dist <= best_dist {
            best_dist = dist;
            best = slot;
        }
    }
    best
}

/// Placement offset for a cardinal slot, in the pre-subtraction frame
/// shared with [`place_attachment`].
fn slot_offset(
    slot: Slot,
    attachment: &Attachment,
    frame: LabelFrame,
    metrics: &dyn TextMetrics,
    size: f64,
) -> DVec2 {
    let w = frame.half_width;
    let h = frame.third_height;
    match slot {
        Slot::Right => DVec2::new(-2.0 * w, 0.0),
        Slot::Below => DVec2::new(0.0, 2.0 * h + w / 10.0),
        Slot::Left => {
            DVec2::new(metrics.measure(&attachment.text, size).width, 0.0)
        }
        Slot::Above => DVec2::new(0.0, -2.0 * h - w / 10.0),
    }
}

/// Placement offset for a free attachment: project the outward
/// direction onto the ellipse spanned by the four cardinal offsets.
fn free_offset(
    input: &AtomLayoutInput<'_>,
    atom_index: usize,
    attachment: &Attachment,
    frame: LabelFrame,
    size: f64,
) -> DVec2 {
    let outward = outward_direction(input.molecule, atom_index);
    let w = frame.half_width;
    let h = frame.third_height;
    let max_x = input.metrics.measure(&attachment.text, size).width;
    let min_x = -2.0 * w;
    let max_y = 2.0 * h + w / 10.0;
    let min_y = -max_y;
    let center_x = (max_x + min_x) / 2.0;
    let center_y = (max_y + min_y) / 2.0;
    let rad_x = (max_x - min_x) / 2.0;
    let rad_y = (max_y - min_y) / 2.0;
    DVec2::new(
        center_x + outward.x * rad_x,
        center_y + outward.y * rad_y,
    )
}

/// Unit direction pointing away from an atom's bonded neighbors: the
/// bisector of the largest angular gap between consecutive neighbor
/// directions. A lone neighbor keeps the attachment on the bond axis;
/// an isolated atom defaults east.
fn outward_direction(mol: &Molecule, atom_index: usize) -> DVec2 {
    let atom = &mol.atoms()[atom_index];
    let mut angles: Vec<f64> = mol
        .neighbors(atom_index)
        .map(|n| atom.position.angle_to(mol.atoms()[n].position))
        .collect();
    match angles.len() {
        0 => DVec2::new(1.0, 0.0),
        1 => DVec2::new(angles[0].cos(), angles[0].sin()),
        _ => {
            angles.sort_by(f64::total_cmp);
            let mut max_gap = 0.0;
            let mut best = 0.0;
            for i in 0..angles.len() {
                let a1 = angles[i];
                let mut a2 = angles[(i + 1) % angles.len()];
                if a1 > a2 {
                    a2 += std::f64::consts::TAU;
                }
                let gap = a2 - a1;
                if gap > max_gap {
                    max_gap = gap;
                    best = (a1 + a2) / 2.0;
                }
            }
            let away = best + std::f64::consts::PI;
            DVec2::new(away.cos(), away.sin())
        }
    }
}
