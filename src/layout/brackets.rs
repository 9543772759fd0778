//! Substructure group bracket layout.
//!
//! Each group is framed by a left and right square bracket with short
//! serifs pointing inward, plus optional subscript (repeat range) and
//! superscript annotations on the right-hand bracket. Bracket
//! coordinates supplied by the source data are used directly when
//! trusted; otherwise the frame is recomputed from the member atoms.

use glam::DVec2;

use crate::geometry::{bounding_region_of, Point2D};
use crate::model::{GroupType, Molecule, SubstructureGroup};
use crate::options::RendererOptions;
use crate::primitives::{GlyphRun, Primitive, Stroke};
use crate::tables;
use crate::text::TextMetrics;
use crate::transform::ViewportTransform;

/// Padding around member atoms when bracket coordinates are recomputed.
const MEMBER_PADDING: f64 = 0.5;
/// Serif length as a fraction of the half frame width.
const SERIF_FRACTION: f64 = 0.2;
/// Bracket stroke width relative to the bond stroke width.
const BRACKET_STROKE_FACTOR: f64 = 0.7;
/// Bracket annotation font size relative to the atom label font size.
const BRACKET_FONT_FACTOR: f64 = 0.7;
/// Baseline drop of annotations below their anchor corner, as a
/// fraction of the annotation text height.
const TEXT_DROP_FRACTION: f64 = 0.33;
/// Superscript sentinel that marks crossing-bond metadata rather than a
/// printable annotation.
const NON_PRINTING_SUPERSCRIPT: &str = "eu";

/// Inputs shared by the bracket pass.
pub(crate) struct BracketLayoutInput<'a> {
    /// Molecule snapshot.
    pub molecule: &'a Molecule,
    /// Viewport transform for this render.
    pub transform: &'a ViewportTransform,
    /// Text measurement backend.
    pub metrics: &'a dyn TextMetrics,
    /// Immutable options snapshot.
    pub options: &'a RendererOptions,
    /// Mean bond length in molecule units.
    pub avg_bond_length: f64,
}

/// Emit bracket frames and annotations for every substructure group.
pub(crate) fn layout_brackets(input: &BracketLayoutInput<'_>) -> Vec<Primitive> {
    let mut out = Vec::new();
    for group in input.molecule.groups() {
        lay_out_group(input, &mut out, group);
    }
    out
}

fn lay_out_group(
    input: &BracketLayoutInput<'_>,
    out: &mut Vec<Primitive>,
    group: &SubstructureGroup,
) {
    let Some(frame) = frame_region(input.molecule, group) else {
        log::trace!("group without atoms or brackets skipped");
        return;
    };
    let (min, size) = frame;

    // Frame corners, y-flipped into viewport space. With y growing
    // downward on screen, `low` corners are the bottom ends of each
    // bracket and `high` the top ends.
    let left_low = input.transform.apply_vec(min);
    let left_high = input.transform.apply_vec(min + DVec2::new(0.0, size.y));
    let right_low = input.transform.apply_vec(min + DVec2::new(size.x, 0.0));
    let right_high = input.transform.apply_vec(min + size);

    let scale = input.transform.scale();
    let bond_width =
        input.options.style.stroke_width_fraction * scale * input.avg_bond_length;
    let stroke = Stroke::solid(BRACKET_STROKE_FACTOR * bond_width);
    let serif = (left_low.x - right_high.x).abs() / 2.0 * SERIF_FRACTION;

    out.push(bracket_path(left_low, left_high, serif, stroke));
    out.push(bracket_path(right_low, right_high, -serif, stroke));

    let font_size = BRACKET_FONT_FACTOR
        * input.options.style.label_font_fraction
        * scale
        * input.avg_bond_length;
    if let Some(text) = &group.subscript {
        out.push(annotation(input, text, right_low, font_size));
    }
    if let Some(text) = &group.superscript {
        if group.group_type != GroupType::Multiple
            && text != NON_PRINTING_SUPERSCRIPT
        {
            out.push(annotation(input, text, right_high, font_size));
        }
    }
}

/// The molecule-space frame for a group: origin and extent. Trusted
/// source brackets are used verbatim; otherwise the member atoms are
/// boxed with padding.
fn frame_region(
    mol: &Molecule,
    group: &SubstructureGroup,
) -> Option<(DVec2, DVec2)> {
    let (points, padding): (Vec<Point2D>, f64) =
        if group.brackets_trusted && !group.brackets.is_empty() {
            (
                group
                    .brackets
                    .iter()
                    .flat_map(|b| [b.p1, b.p2])
                    .collect(),
                0.0,
            )
        } else {
            (
                group
                    .atoms
                    .iter()
                    .filter_map(|&i| mol.atoms().get(i))
                    .map(|a| a.position)
                    .collect(),
                MEMBER_PADDING,
            )
        };
    let region = bounding_region_of(&points, padding).ok()?;
    Some((
        DVec2::new(region.min_x(), region.min_y()),
        DVec2::new(region.width(), region.height()),
    ))
}

/// A vertical bracket with horizontal serifs at both ends. Positive
/// `serif` points right (a left bracket), negative points left.
fn bracket_path(low: DVec2, high: DVec2, serif: f64, stroke: Stroke) -> Primitive {
    Primitive::StrokePath {
        points: vec![
            Point2D::from_vec(DVec2::new(low.x + serif, low.y)),
            Point2D::from_vec(low),
            Point2D::from_vec(high),
            Point2D::from_vec(DVec2::new(high.x + serif, high.y)),
        ],
        stroke,
        color: tables::DEFAULT_DRAW_COLOR,
    }
}

/// A space-prefixed annotation anchored just outside a bracket corner,
/// dropped by a fraction of its own height.
fn annotation(
    input: &BracketLayoutInput<'_>,
    text: &str,
    anchor: DVec2,
    font_size: f64,
) -> Primitive {
    let padded = format!(" {text}");
    let extent = input.metrics.measure(&padded, font_size);
    Primitive::Glyphs(GlyphRun {
        text: padded,
        origin: Point2D::from_vec(DVec2::new(
            anchor.x,
            anchor.y + extent.height * TEXT_DROP_FRACTION,
        )),
        size: font_size,
        color: tables::DEFAULT_DRAW_COLOR,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Atom, Bond, BondOrder, BracketLine};
    use crate::text::BoxTextMetrics;
    use crate::transform::{Viewport, ViewportTransform};

    fn chain(groups: Vec<SubstructureGroup>) -> Molecule {
        let atoms = vec![
            Atom::new("C", 0.0, 0.0).unwrap(),
            Atom::new("C", 1.0, 0.5).unwrap(),
            Atom::new("C", 2.0, 0.0).unwrap(),
        ];
        let bonds = vec![
            Bond::new(0, 1, BondOrder::Single),
            Bond::new(1, 2, BondOrder::Single),
        ];
        Molecule::new(atoms, bonds)
            .unwrap()
            .with_groups(groups)
            .unwrap()
    }

    fn sru(subscript: Option<&str>, superscript: Option<&str>) -> SubstructureGroup {
        SubstructureGroup {
            atoms: vec![0, 1, 2],
            group_type: GroupType::Sru,
            brackets: Vec::new(),
            brackets_trusted: false,
            subscript: subscript.map(str::to_owned),
            superscript: superscript.map(str::to_owned),
        }
    }

    fn render(mol: &Molecule) -> Vec<Primitive> {
        let points: Vec<Point2D> =
            mol.atoms().iter().map(|a| a.position).collect();
        let region = bounding_region_of(&points, 0.0).unwrap();
        let options = RendererOptions::default();
        let transform = ViewportTransform::fit(
            &region,
            &Viewport::sized(300.0, 300.0),
            1.0,
            &options.style,
            false,
            &BoxTextMetrics,
        );
        layout_brackets(&BracketLayoutInput {
            molecule: mol,
            transform: &transform,
            metrics: &BoxTextMetrics,
            options: &options,
            avg_bond_length: 1.0,
        })
    }

    fn paths(primitives: &[Primitive]) -> Vec<&Vec<Point2D>> {
        primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::StrokePath { points, .. } => Some(points),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn group_emits_two_brackets() {
        let mol = chain(vec![sru(Some("n"), None)]);
        let primitives = render(&mol);
        let frames = paths(&primitives);
        assert_eq!(frames.len(), 2);
        // Each bracket is a four-point polyline with a vertical spine.
        for frame in &frames {
            assert_eq!(frame.len(), 4);
            assert!((frame[1].x() - frame[2].x()).abs() < 1e-9);
        }
        // Left bracket serifs point right, right bracket serifs left.
        assert!(frames[0][0].x() > frames[0][1].x());
        assert!(frames[1][0].x() < frames[1][1].x());
    }

    #[test]
    fn member_frame_pads_past_atoms() {
        let mol = chain(vec![sru(None, None)]);
        let primitives = render(&mol);
        let frames = paths(&primitives);
        let left_x = frames[0][1].x();
        let right_x = frames[1][1].x();
        // Atoms span x 0..2 in molecule space; the frame spans 3 units
        // after the 0.5 padding, so the brackets sit strictly outside
        // every transformed atom.
        let points: Vec<Point2D> =
            mol.atoms().iter().map(|a| a.position).collect();
        let region = bounding_region_of(&points, 0.0).unwrap();
        let options = RendererOptions::default();
        let transform = ViewportTransform::fit(
            &region,
            &Viewport::sized(300.0, 300.0),
            1.0,
            &options.style,
            false,
            &BoxTextMetrics,
        );
        for atom in mol.atoms() {
            let p = transform.apply(atom.position);
            assert!(p.x() > left_x);
            assert!(p.x() < right_x);
        }
    }

    #[test]
    fn trusted_brackets_override_member_box() {
        let brackets = vec![
            BracketLine {
                p1: Point2D::new(0.8, -1.0).unwrap(),
                p2: Point2D::new(0.8, 1.0).unwrap(),
            },
            BracketLine {
                p1: Point2D::new(1.2, -1.0).unwrap(),
                p2: Point2D::new(1.2, 1.0).unwrap(),
            },
        ];
        let group = SubstructureGroup {
            atoms: vec![0, 1, 2],
            group_type: GroupType::Sru,
            brackets,
            brackets_trusted: true,
            subscript: None,
            superscript: None,
        };
        let mol = chain(vec![group]);
        let primitives = render(&mol);
        let frames = paths(&primitives);
        // The narrow trusted frame leaves the terminal atoms outside.
        let left_x = frames[0][1].x();
        let right_x = frames[1][1].x();
        let points: Vec<Point2D> =
            mol.atoms().iter().map(|a| a.position).collect();
        let region = bounding_region_of(&points, 0.0).unwrap();
        let options = RendererOptions::default();
        let transform = ViewportTransform::fit(
            &region,
            &Viewport::sized(300.0, 300.0),
            1.0,
            &options.style,
            false,
            &BoxTextMetrics,
        );
        let first = transform.apply(mol.atoms()[0].position);
        let last = transform.apply(mol.atoms()[2].position);
        assert!(first.x() < left_x);
        assert!(last.x() > right_x);
    }

    #[test]
    fn subscript_is_space_prefixed_at_bottom_right() {
        let mol = chain(vec![sru(Some("3-5"), None)]);
        let primitives = render(&mol);
        let runs: Vec<&GlyphRun> = primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Glyphs(run) => Some(run),
                _ => None,
            })
            .collect();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text, " 3-5");
        // Anchored at the right bracket's bottom corner, which has the
        // larger viewport y.
        let frames = paths(&primitives);
        let bottom = frames[1][1].y().max(frames[1][2].y());
        assert!(runs[0].origin.y() > bottom);
    }

    #[test]
    fn multiple_group_suppresses_superscript() {
        let mut group = sru(Some("4"), Some("ht"));
        group.group_type = GroupType::Multiple;
        let mol = chain(vec![group]);
        let runs = render(&mol)
            .iter()
            .filter(|p| matches!(p, Primitive::Glyphs(_)))
            .count();
        assert_eq!(runs, 1);
    }

    #[test]
    fn crossing_bond_sentinel_is_not_printed() {
        let mol = chain(vec![sru(None, Some("eu"))]);
        let runs = render(&mol)
            .iter()
            .filter(|p| matches!(p, Primitive::Glyphs(_)))
            .count();
        assert_eq!(runs, 0);
    }
}
