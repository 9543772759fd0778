//! Bond visual layout.
//!
//! Each bond is classified into a depiction kind (plain, offset or
//! centered double, triple, aromatic, wedge, dash), its geometry is
//! computed in viewport space, and every segment is clipped against the
//! endpoint atoms' occlusion circles. Converging plain bonds that cross
//! previously emitted segments are split apart so strokes do not pile
//! up at shared vertices.

use glam::DVec2;
use rustc_hash::FxHashMap;

use crate::color::Rgba;
use crate::geometry::Point2D;
use crate::layout::atoms::HALO_RADIUS_GROW;
use crate::layout::AtomDrawProps;
use crate::model::{BondOrder, BondStereo, Molecule};
use crate::options::RendererOptions;
use crate::primitives::{LineCap, Primitive, Stroke};
use crate::tables;
use crate::transform::ViewportTransform;

/// Ring-membership weight multiplier in the double-bond side heuristic.
const RING_BOND_WEIGHT: i64 = 4;
/// Multiplier applied per neighboring ring double/aromatic bond. The
/// product is truncated back to an integer each time (1 stays 1, 4
/// becomes 7); downstream depictions depend on the truncated values, so
/// this must not be done in floating point end to end.
const RING_DOUBLE_WEIGHT_FACTOR: f64 = 1.75;

/// Chosen visual rendering for a bond, independent of its formal order.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DepictionKind {
    /// Single solid line.
    Plain,
    /// Double bond offset toward the weighted neighbor centroid.
    Double {
        /// Side-selection target in molecule coordinates.
        toward: DVec2,
    },
    /// Double bond with both lines straddling the bond axis.
    DoubleCentered,
    /// Main line plus offset lines on both sides.
    Triple,
    /// Solid main line plus a shorter dashed inner line.
    Aromatic {
        /// Side-selection target in molecule coordinates.
        toward: DVec2,
    },
    /// Query bond drawn as crossed centered lines.
    SingleOrDouble,
    /// Hashed stereo bond pointing away from the viewer.
    DashDown,
    /// Solid wedge pointing toward the viewer.
    WedgeUp,
}

/// Inputs shared by the whole bond pass.
pub(crate) struct BondLayoutInput<'a> {
    /// Molecule snapshot.
    pub molecule: &'a Molecule,
    /// Viewport transform for this render.
    pub transform: &'a ViewportTransform,
    /// Immutable options snapshot.
    pub options: &'a RendererOptions,
    /// Per-atom draw properties from the atom pass.
    pub props: &'a FxHashMap<usize, AtomDrawProps>,
    /// Mean bond length in molecule units.
    pub avg_bond_length: f64,
}

/// An occlusion circle around a drawn atom label.
#[derive(Clone, Copy)]
struct Circle {
    center: DVec2,
    radius: f64,
}

impl Circle {
    fn contains(&self, p: DVec2) -> bool {
        self.center.distance_squared(p) < self.radius * self.radius
    }
}

type Segment = (DVec2, DVec2);

/// Classify every bond, then emit its geometry in bond order.
pub(crate) fn layout_bonds(input: &BondLayoutInput<'_>) -> Vec<Primitive> {
    let mut out = Vec::new();
    let mut painted: Vec<Segment> = Vec::new();
    for index in 0..input.molecule.bonds().len() {
        let kind = classify(input.molecule, index, input);
        emit_bond(input, &mut out, &mut painted, index, &kind);
    }
    out
}

/// Halo under-strokes for bonds whose endpoints are both highlighted.
///
/// Each qualifying bond gets one full-length line in the endpoint halo
/// colors, regardless of its depiction kind, with the stroke widened by
/// the same growth term as the atom halo discs. Emitted into the halo
/// layer, beneath every bond depiction.
pub(crate) fn layout_bond_halos(input: &BondLayoutInput<'_>) -> Vec<Primitive> {
    let mut out = Vec::new();
    let scale = input.transform.scale();
    let bond_width =
        input.options.style.stroke_width_fraction * scale * input.avg_bond_length;
    let stroke = Stroke::solid(
        bond_width + HALO_RADIUS_GROW * scale * input.avg_bond_length,
    );
    for bond in input.molecule.bonds() {
        let (ia, ib) = bond.atoms;
        let (Some(pa), Some(pb)) =
            (input.props.get(&ia), input.props.get(&ib))
        else {
            continue;
        };
        if !pa.highlighted || !pb.highlighted {
            continue;
        }
        let p1 = input
            .transform
            .apply(input.molecule.atoms()[ia].position)
            .as_vec();
        let p2 = input
            .transform
            .apply(input.molecule.atoms()[ib].position)
            .as_vec();
        if p1 == p2 {
            continue;
        }
        let circle1 = Circle {
            center: p1,
            radius: pa.radius,
        };
        let circle2 = Circle {
            center: p2,
            radius: pb.radius,
        };
        if let Some(seg) = bounded((p1, p2), circle1, circle2) {
            emit_split_line(&mut out, seg, stroke, pa.halo_color, pb.halo_color);
        } else {
            log::trace!("fully occluded bond halo dropped");
        }
    }
    out
}

/// Depiction selection for one bond.
fn classify(
    mol: &Molecule,
    bond_index: usize,
    input: &BondLayoutInput<'_>,
) -> DepictionKind {
    let toggles = &input.options.draw;
    let bond = &mol.bonds()[bond_index];
    if bond.order == BondOrder::SingleOrDouble {
        // Query bonds win over stereo flags.
        return DepictionKind::SingleOrDouble;
    }
    if toggles.stereo_bonds {
        match bond.stereo {
            BondStereo::Up => return DepictionKind::WedgeUp,
            BondStereo::Down => return DepictionKind::DashDown,
            BondStereo::None | BondStereo::Either => {}
        }
    }
    match bond.order {
        BondOrder::Triple => DepictionKind::Triple,
        BondOrder::Double | BondOrder::Aromatic => {
            let (a, b) = bond.atoms;
            if mol.bond_count(a) == 1 || mol.bond_count(b) == 1 {
                // A lone-endpoint double has no side preference; the
                // aromatic dash is dropped along with the offset.
                return DepictionKind::DoubleCentered;
            }
            let (toward, any_ring) = side_target(mol, bond_index);
            let ring = any_ring && bond.in_ring;
            if !ring && toggles.center_nonring_double_bonds {
                return DepictionKind::DoubleCentered;
            }
            if bond.order == BondOrder::Aromatic {
                DepictionKind::Aromatic { toward }
            } else if toggles.center_all_double_bonds {
                DepictionKind::DoubleCentered
            } else {
                DepictionKind::Double { toward }
            }
        }
        BondOrder::Single => DepictionKind::Plain,
        // Unreachable; kept for exhaustiveness.
        BondOrder::SingleOrDouble => DepictionKind::SingleOrDouble,
    }
}

/// Weighted neighbor centroid used to pick the side a double bond's
/// second line goes to. Ring bonds weigh four times as much, and each
/// ring double/aromatic bond adjacent to a neighbor multiplies its
/// weight again, so the second line lands on the ring-interior side.
#[allow(clippy::cast_precision_loss)]
fn side_target(mol: &Molecule, bond_index: usize) -> (DVec2, bool) {
    let bond = &mol.bonds()[bond_index];
    let mut sum = DVec2::ZERO;
    let mut total: i64 = 0;
    let mut any_ring = false;
    for &endpoint in &[bond.atoms.0, bond.atoms.1] {
        for &incident in mol.bonds_of(endpoint) {
            let neighbor_bond = &mol.bonds()[incident];
            let Some(neighbor) = neighbor_bond.other_atom(endpoint) else {
                continue;
            };
            let mut weight: i64 = 1;
            if neighbor_bond.in_ring {
                weight *= RING_BOND_WEIGHT;
                any_ring = true;
            }
            for &far in mol.bonds_of(neighbor) {
                let far_bond = &mol.bonds()[far];
                if far_bond.in_ring
                    && matches!(
                        far_bond.order,
                        BondOrder::Double | BondOrder::Aromatic
                    )
                {
                    weight = scaled_ring_weight(weight);
                }
            }
            let pos = mol.atoms()[neighbor].position.as_vec();
            sum += pos * weight as f64;
            total += weight;
        }
    }
    if total == 0 {
        return (DVec2::ZERO, any_ring);
    }
    (sum / total as f64, any_ring)
}

/// One truncating application of the ring-double weight factor.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn scaled_ring_weight(weight: i64) -> i64 {
    (weight as f64 * RING_DOUBLE_WEIGHT_FACTOR) as i64
}

#[allow(clippy::too_many_lines)]
fn emit_bond(
    input: &BondLayoutInput<'_>,
    out: &mut Vec<Primitive>,
    painted: &mut Vec<Segment>,
    bond_index: usize,
    kind: &DepictionKind,
) {
    let mol = input.molecule;
    let style = &input.options.style;
    let toggles = &input.options.draw;
    let scale = input.transform.scale();
    let bond = &mol.bonds()[bond_index];
    let (ia, ib) = bond.atoms;

    let p1 = input
        .transform
        .apply(mol.atoms()[ia].position)
        .as_vec();
    let p2 = input
        .transform
        .apply(mol.atoms()[ib].position)
        .as_vec();
    if p1 == p2 {
        return;
    }

    let circle1 = Circle {
        center: p1,
        radius: input.props.get(&ia).map_or(0.0, |p| p.radius),
    };
    let circle2 = Circle {
        center: p2,
        radius: input.props.get(&ib).map_or(0.0, |p| p.radius),
    };

    let (from_col, to_col) = if toggles.atom_color_on_bonds {
        (
            input
                .props
                .get(&ib)
                .map_or(tables::DEFAULT_DRAW_COLOR, |p| p.color),
            input
                .props
                .get(&ia)
                .map_or(tables::DEFAULT_DRAW_COLOR, |p| p.color),
        )
    } else {
        (tables::DEFAULT_DRAW_COLOR, tables::DEFAULT_DRAW_COLOR)
    };

    let bond_width =
        style.stroke_width_fraction * scale * input.avg_bond_length;
    let solid = Stroke::solid(bond_width);

    // Quarter bond vector and perpendicular offset shared by all
    // multi-line depictions.
    let dq = (p1 - p2) / 4.0;
    let gap = style.double_bond_gap_fraction * scale * input.avg_bond_length;
    let centered = matches!(
        kind,
        DepictionKind::DoubleCentered | DepictionKind::SingleOrDouble
    );
    let mut norm = gap / dq.length();
    if centered {
        norm *= 0.5;
    }
    let mid = (p1 + p2) / 2.0;
    let off = DVec2::new(-dq.y * norm, dq.x * norm);
    let mut near = mid + off;
    let mut far = mid - off;
    if let DepictionKind::Double { toward } | DepictionKind::Aromatic { toward } =
        kind
    {
        let target = input.transform.apply_vec(*toward);
        if near.distance_squared(target) > far.distance_squared(target) {
            std::mem::swap(&mut near, &mut far);
        }
    }
    let rat = if centered {
        2.0
    } else {
        style.double_bond_length_fraction * 2.0
    };

    match kind {
        DepictionKind::DashDown => {
            let max_wedge =
                input.avg_bond_length * style.wedge_half_angle.tan();
            let half_angle = max_wedge.atan2(mol.bond_length(bond_index));
            if toggles.dash_as_wedge {
                emit_dash_ticks(
                    input,
                    out,
                    (p1, p2),
                    (circle1, circle2),
                    half_angle,
                    solid,
                    (from_col, to_col),
                );
            } else {
                emit_dashed_segments(
                    input,
                    out,
                    (p1, p2),
                    (circle1, circle2),
                    solid,
                    (from_col, to_col),
                );
            }
        }
        DepictionKind::WedgeUp => {
            let max_wedge =
                input.avg_bond_length * style.wedge_half_angle.tan();
            let half_angle = max_wedge.atan2(mol.bond_length(bond_index));
            emit_wedge(
                out,
                (p1, p2),
                (circle1, circle2),
                half_angle,
                (from_col, to_col),
            );
        }
        DepictionKind::SingleOrDouble => {
            // Crossed centered lines: each runs from one offset start
            // to the other offset's end.
            let lines = [
                (far - rat * dq, near + rat * dq),
                (near - rat * dq, far + rat * dq),
            ];
            for seg in lines {
                if let Some(seg) = bounded(seg, circle1, circle2) {
                    emit_split_line(out, seg, solid, from_col, to_col);
                } else {
                    log::trace!("bond {bond_index}: occluded segment dropped");
                }
            }
        }
        DepictionKind::DoubleCentered => {
            for center in [far, near] {
                let seg = (center - rat * dq, center + rat * dq);
                if let Some(seg) = bounded(seg, circle1, circle2) {
                    emit_split_line(out, seg, solid, from_col, to_col);
                } else {
                    log::trace!("bond {bond_index}: occluded segment dropped");
                }
            }
        }
        DepictionKind::Triple => {
            for center in [far, near] {
                let seg = (center - rat * dq, center + rat * dq);
                if let Some(seg) = bounded(seg, circle1, circle2) {
                    emit_split_line(out, seg, solid, from_col, to_col);
                }
            }
            emit_main_line(
                out,
                painted,
                (p1, p2),
                (circle1, circle2),
                solid,
                (to_col, from_col),
            );
        }
        DepictionKind::Double { .. } => {
            let seg = (near - rat * dq, near + rat * dq);
            if let Some(seg) = bounded(seg, circle1, circle2) {
                emit_split_line(out, seg, solid, from_col, to_col);
            }
            emit_main_line(
                out,
                painted,
                (p1, p2),
                (circle1, circle2),
                solid,
                (to_col, from_col),
            );
        }
        DepictionKind::Aromatic { .. } => {
            // The inner line substitutes dashing for the second solid
            // parallel, at half weight.
            let dashed = Stroke::dashed(bond_width / 2.0, 2.0 * bond_width);
            let seg = (near - rat * dq, near + rat * dq);
            if let Some(seg) = bounded(seg, circle1, circle2) {
                emit_split_line(out, seg, dashed, from_col, to_col);
            }
            emit_main_line(
                out,
                painted,
                (p1, p2),
                (circle1, circle2),
                solid,
                (to_col, from_col),
            );
        }
        DepictionKind::Plain => {
            let split_gap = bond_width * style.overlap_split_fraction;
            match split_against_painted((p1, p2), painted, split_gap) {
                Some((first, second)) => {
                    let butt = Stroke::butt(bond_width);
                    for seg in [first, second] {
                        if let Some(seg) = bounded(seg, circle1, circle2) {
                            emit_split_line(out, seg, butt, to_col, from_col);
                        }
                    }
                }
                None => emit_main_line(
                    out,
                    painted,
                    (p1, p2),
                    (circle1, circle2),
                    solid,
                    (to_col, from_col),
                ),
            }
        }
    }
}

/// Clip, emit, and remember a full-length bond line.
fn emit_main_line(
    out: &mut Vec<Primitive>,
    painted: &mut Vec<Segment>,
    seg: Segment,
    circles: (Circle, Circle),
    stroke: Stroke,
    colors: (Rgba, Rgba),
) {
    if let Some(seg) = bounded(seg, circles.0, circles.1) {
        emit_split_line(out, seg, stroke, colors.0, colors.1);
        painted.push(seg);
    } else {
        log::trace!("fully occluded bond line dropped");
    }
}

/// Emit a line, split at its midpoint into two butt-capped halves when
/// the endpoint colors differ. The half that keeps which color is
/// decided by the stable color ordering so output is deterministic.
fn emit_split_line(
    out: &mut Vec<Primitive>,
    seg: Segment,
    stroke: Stroke,
    c1: Rgba,
    c2: Rgba,
) {
    let (from, to) = seg;
    if c1 == c2 {
        out.push(Primitive::StrokeLine {
            from: Point2D::from_vec(from),
            to: Point2D::from_vec(to),
            stroke,
            color: c1,
        });
        return;
    }
    let mid = (from + to) / 2.0;
    let mut halves = [(from, mid), (to, mid)];
    let (mut c1, mut c2) = (c1, c2);
    if c1 < c2 {
        halves.swap(0, 1);
        std::mem::swap(&mut c1, &mut c2);
    }
    let butt = Stroke {
        cap: LineCap::Butt,
        ..stroke
    };
    for (half, color) in halves.into_iter().zip([c1, c2]) {
        out.push(Primitive::StrokeLine {
            from: Point2D::from_vec(half.0),
            to: Point2D::from_vec(half.1),
            stroke: butt,
            color,
        });
    }
}

/// Filled wedge triangle from the narrow end at the segment start. When
/// the endpoint colors differ the narrow half is overlaid in the
/// near-atom color.
fn emit_wedge(
    out: &mut Vec<Primitive>,
    seg: Segment,
    circles: (Circle, Circle),
    half_angle: f64,
    colors: (Rgba, Rgba),
) {
    let Some(seg) = bounded(seg, circles.0, circles.1) else {
        log::trace!("fully occluded wedge dropped");
        return;
    };
    let (far_color, near_color) = colors;
    let corners = wedge_corners(seg, half_angle);
    out.push(Primitive::FillPath {
        points: vec![
            Point2D::from_vec(seg.0),
            Point2D::from_vec(corners.0),
            Point2D::from_vec(corners.1),
        ],
        color: far_color,
    });
    if far_color != near_color {
        let mid = (seg.0 + seg.1) / 2.0;
        let half_corners = wedge_corners((seg.0, mid), half_angle);
        out.push(Primitive::FillPath {
            points: vec![
                Point2D::from_vec(seg.0),
                Point2D::from_vec(half_corners.0),
                Point2D::from_vec(half_corners.1),
            ],
            color: near_color,
        });
    }
}

/// Wide-end corner points of a wedge over `seg` with the given
/// half-angle at the narrow end.
fn wedge_corners(seg: Segment, half_angle: f64) -> (DVec2, DVec2) {
    let d = seg.1 - seg.0;
    let mag = d.length() / half_angle.cos();
    let theta = d.y.atan2(d.x);
    (
        seg.0
            + mag * DVec2::new((theta + half_angle).cos(), (theta + half_angle).sin()),
        seg.0
            + mag * DVec2::new((theta - half_angle).cos(), (theta - half_angle).sin()),
    )
}

/// Hashed stereo bond: perpendicular tick marks interpolated from the
/// narrow end to the wedge's wide-end corners.
fn emit_dash_ticks(
    input: &BondLayoutInput<'_>,
    out: &mut Vec<Primitive>,
    seg: Segment,
    circles: (Circle, Circle),
    half_angle: f64,
    stroke: Stroke,
    colors: (Rgba, Rgba),
) {
    let Some(clipped) = bounded(seg, circles.0, circles.1) else {
        log::trace!("fully occluded dash bond dropped");
        return;
    };
    let (far_color, near_color) = colors;
    let count = tick_count(input, seg, clipped);
    if count == 0 {
        return;
    }
    let corners = wedge_corners(clipped, half_angle);
    let n = f64::from(count);
    for i in 0..=count {
        let color = if far_color != near_color && i > count / 2 {
            far_color
        } else {
            near_color
        };
        let t = f64::from(i) / n;
        let a = clipped.0.lerp(corners.0, t);
        let b = clipped.0.lerp(corners.1, t);
        out.push(Primitive::StrokeLine {
            from: Point2D::from_vec(a),
            to: Point2D::from_vec(b),
            stroke,
            color,
        });
    }
}

/// Hashed stereo bond rendered as short collinear dashes instead of a
/// tapered tick wedge.
fn emit_dashed_segments(
    input: &BondLayoutInput<'_>,
    out: &mut Vec<Primitive>,
    seg: Segment,
    circles: (Circle, Circle),
    stroke: Stroke,
    colors: (Rgba, Rgba),
) {
    let Some(clipped) = bounded(seg, circles.0, circles.1) else {
        log::trace!("fully occluded dash bond dropped");
        return;
    };
    let (far_color, near_color) = colors;
    let count = tick_count(input, seg, clipped);
    if count == 0 {
        return;
    }
    let denom = f64::from(count * 2);
    for i in (0..count * 2).step_by(2) {
        let color = if far_color != near_color && i >= count {
            far_color
        } else {
            near_color
        };
        let t0 = (f64::from(i) + 0.75) / denom;
        let t1 = (f64::from(i) + 1.25) / denom;
        out.push(Primitive::StrokeLine {
            from: Point2D::from_vec(clipped.0.lerp(clipped.1, t0)),
            to: Point2D::from_vec(clipped.0.lerp(clipped.1, t1)),
            stroke,
            color,
        });
    }
}

/// Dash tick count: fixed, or scaled by the clipped length relative to
/// the full segment when constant dash width is requested.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn tick_count(
    input: &BondLayoutInput<'_>,
    full: Segment,
    clipped: Segment,
) -> u32 {
    let base = input.options.style.dash_count;
    if input.options.draw.constant_dash_width {
        let l1 = full.0.distance(full.1);
        let l2 = clipped.0.distance(clipped.1);
        if l1 <= 0.0 {
            return 0;
        }
        (f64::from(base) * l2 / l1) as u32
    } else {
        base
    }
}

/// Clip a segment against both endpoint occlusion circles. Returns
/// `None` when an endpoint still sits inside the opposite circle after
/// clipping; such crowded segments are not drawn at all.
fn bounded(seg: Segment, c1: Circle, c2: Circle) -> Option<Segment> {
    let seg = pull_into_circle(seg, c1);
    let seg = pull_into_circle(seg, c2);
    if c1.contains(seg.0) || c2.contains(seg.1) {
        return None;
    }
    Some(seg)
}

/// Pull the segment endpoint nearest the circle onto the circle
/// boundary, using the line-circle intersections that lie within the
/// segment.
fn pull_into_circle(seg: Segment, circle: Circle) -> Segment {
    let (a, b) = seg;
    let length = a.distance(b);
    if length == 0.0 || circle.radius <= 0.0 {
        return seg;
    }
    let dir = (b - a) / length;
    let t = dir.dot(circle.center - a);
    let foot = a + t * dir;
    let perp = foot.distance(circle.center);
    if perp >= circle.radius {
        return seg;
    }
    let dt = (circle.radius * circle.radius - perp * perp).sqrt();

    let mut na = a;
    let mut nb = b;
    let mut a_changed = false;
    let mut b_changed = false;
    let a_nearer = circle.center.distance_squared(a)
        < circle.center.distance_squared(b);

    let hit1 = foot + dt * dir;
    if within_segment(hit1, a, b) {
        if a_nearer {
            na = hit1;
            a_changed = true;
        } else {
            nb = hit1;
            b_changed = true;
        }
    }
    let hit2 = foot - dt * dir;
    if within_segment(hit2, a, b) {
        if a_changed {
            nb = hit2;
        } else if b_changed {
            na = hit2;
        } else if a_nearer {
            na = hit2;
        } else {
            nb = hit2;
        }
    }
    (na, nb)
}

fn within_segment(p: DVec2, a: DVec2, b: DVec2) -> bool {
    between(p.x, a.x, b.x) && between(p.y, a.y, b.y)
}

fn between(x: f64, a: f64, b: f64) -> bool {
    (x >= a && x <= b) || (x <= a && x >= b)
}

/// Test a new plain-bond segment against previously emitted segments;
/// if it crosses one without sharing an endpoint, split it around the
/// crossing with a gap of `gap` on each side.
fn split_against_painted(
    seg: Segment,
    painted: &[Segment],
    gap: f64,
) -> Option<(Segment, Segment)> {
    let (start, end) = seg;
    let d = end - start;
    let length = d.length();
    if length == 0.0 {
        return None;
    }
    let half_gap = gap / length;
    for old in painted {
        if !segments_intersect(seg, *old) {
            continue;
        }
        if start == old.0 || start == old.1 || end == old.0 || end == old.1 {
            continue;
        }
        let od = old.1 - old.0;
        let denom = od.y * d.x - od.x * d.y;
        if denom == 0.0 {
            continue;
        }
        let t = (od.x * (start.y - old.0.y) - od.y * (start.x - old.0.x))
            / denom;
        let first = (start, start + d * (t - half_gap));
        let second = (start + d * (t + half_gap), end);
        return Some((first, second));
    }
    None
}

/// Segment intersection via straddle tests, including endpoint touches.
fn segments_intersect(s1: Segment, s2: Segment) -> bool {
    let cross = |o: DVec2, a: DVec2, b: DVec2| {
        (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
    };
    let on = |o: DVec2, a: DVec2, p: DVec2| {
        cross(o, a, p) == 0.0
            && between(p.x, o.x, a.x)
            && between(p.y, o.y, a.y)
    };
    let d1 = cross(s2.0, s2.1, s1.0);
    let d2 = cross(s2.0, s2.1, s1.1);
    let d3 = cross(s1.0, s1.1, s2.0);
    let d4 = cross(s1.0, s1.1, s2.1);
    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }
    on(s2.0, s2.1, s1.0)
        || on(s2.0, s2.1, s1.1)
        || on(s1.0, s1.1, s2.0)
        || on(s1.0, s1.1, s2.1)
}
