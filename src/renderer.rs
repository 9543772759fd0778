//! Top-level render orchestration.
//!
//! A [`MoleculeRenderer`] owns an options snapshot and turns molecule
//! snapshots into ordered primitive lists. Rendering is pure: the same
//! molecule, viewport, and options always produce the same primitives,
//! and a renderer can be shared by reference across threads.

use crate::error::RenderError;
use crate::geometry::{bounding_region_of, Point2D};
use crate::layout::atoms::{layout_atoms, AtomLayoutInput};
use crate::layout::bonds::{layout_bond_halos, layout_bonds, BondLayoutInput};
use crate::layout::brackets::{layout_brackets, BracketLayoutInput};
use crate::model::Molecule;
use crate::options::RendererOptions;
use crate::primitives::Primitive;
use crate::text::TextMetrics;
use crate::transform::{Viewport, ViewportTransform};

/// Renders molecule snapshots into drawing primitives.
#[derive(Debug, Clone, Default)]
pub struct MoleculeRenderer {
    options: RendererOptions,
}

impl MoleculeRenderer {
    /// A renderer with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A renderer with the given options.
    #[must_use]
    pub fn with_options(options: RendererOptions) -> Self {
        Self { options }
    }

    /// The current options snapshot.
    #[must_use]
    pub fn options(&self) -> &RendererOptions {
        &self.options
    }

    /// Mutable access to the options between renders.
    pub fn options_mut(&mut self) -> &mut RendererOptions {
        &mut self.options
    }

    /// Render `molecule` into `viewport`.
    ///
    /// Primitives are emitted back-to-front: highlight halos (atom
    /// discs, then bond under-strokes), bond depictions, atom labels,
    /// group brackets. Replaying them in order produces the finished
    /// depiction.
    pub fn render(
        &self,
        molecule: &Molecule,
        viewport: &Viewport,
        metrics: &dyn TextMetrics,
    ) -> Result<Vec<Primitive>, RenderError> {
        let region = bounding_region_of(&fit_points(molecule), 0.0)?;
        let avg_bond_length = self.average_bond_length(molecule);
        let transform = ViewportTransform::fit(
            &region,
            viewport,
            avg_bond_length,
            &self.options.style,
            self.options.draw.border,
            metrics,
        );

        let atoms = layout_atoms(&AtomLayoutInput {
            molecule,
            transform: &transform,
            metrics,
            options: &self.options,
            avg_bond_length,
        });
        let bond_input = BondLayoutInput {
            molecule,
            transform: &transform,
            options: &self.options,
            props: &atoms.props,
            avg_bond_length,
        };
        let bond_halos =
            if self.options.draw.bonds && self.options.draw.highlight_with_halo {
                layout_bond_halos(&bond_input)
            } else {
                Vec::new()
            };
        let bonds = if self.options.draw.bonds {
            layout_bonds(&bond_input)
        } else {
            Vec::new()
        };
        let brackets = layout_brackets(&BracketLayoutInput {
            molecule,
            transform: &transform,
            metrics,
            options: &self.options,
            avg_bond_length,
        });

        log::debug!(
            "rendered {} atoms, {} bonds at scale {:.2}",
            molecule.atoms().len(),
            molecule.bonds().len(),
            transform.scale()
        );

        let mut out = atoms.halos;
        out.extend(bond_halos);
        out.extend(bonds);
        out.extend(atoms.labels);
        out.extend(brackets);
        Ok(out)
    }

    /// Mean bond length in molecule units, or the configured expected
    /// length when the molecule has no bonds or proportional resize is
    /// off.
    #[allow(clippy::cast_precision_loss)]
    fn average_bond_length(&self, molecule: &Molecule) -> f64 {
        let bonds = molecule.bonds().len();
        if bonds == 0 || !self.options.draw.bond_length_proportional_resize {
            return self.options.style.expected_bond_length;
        }
        let total: f64 = (0..bonds).map(|b| molecule.bond_length(b)).sum();
        total / bonds as f64
    }
}

/// Points that must land inside the viewport: every atom plus the
/// endpoints of trusted group brackets, which may extend past the
/// atoms.
fn fit_points(molecule: &Molecule) -> Vec<Point2D> {
    let mut points: Vec<Point2D> =
        molecule.atoms().iter().map(|a| a.position).collect();
    for group in molecule.groups() {
        if group.brackets_trusted {
            for bracket in &group.brackets {
                points.push(bracket.p1);
                points.push(bracket.p2);
            }
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Atom, Bond, BondOrder};
    use crate::text::BoxTextMetrics;

    fn ethanol_fragment() -> Molecule {
        let atoms = vec![
            Atom::new("C", 0.0, 0.0).unwrap(),
            Atom::new("C", 1.0, 0.0).unwrap(),
            Atom::new("O", 1.5, 0.87).unwrap(),
        ];
        let bonds = vec![
            Bond::new(0, 1, BondOrder::Single),
            Bond::new(1, 2, BondOrder::Single),
        ];
        Molecule::new(atoms, bonds).unwrap()
    }

    #[test]
    fn empty_molecule_is_an_error() {
        let mol = Molecule::new(Vec::new(), Vec::new()).unwrap();
        let renderer = MoleculeRenderer::new();
        assert!(matches!(
            renderer.render(
                &mol,
                &Viewport::sized(100.0, 100.0),
                &BoxTextMetrics
            ),
            Err(RenderError::EmptyPointSet)
        ));
    }

    #[test]
    fn render_is_deterministic() {
        let mol = ethanol_fragment();
        let renderer = MoleculeRenderer::new();
        let viewport = Viewport::sized(200.0, 200.0);
        let a = renderer.render(&mol, &viewport, &BoxTextMetrics).unwrap();
        let b = renderer.render(&mol, &viewport, &BoxTextMetrics).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn bonds_toggle_suppresses_bond_strokes() {
        let mol = ethanol_fragment();
        let mut renderer = MoleculeRenderer::new();
        renderer.options_mut().draw.bonds = false;
        let primitives = renderer
            .render(&mol, &Viewport::sized(200.0, 200.0), &BoxTextMetrics)
            .unwrap();
        assert!(!primitives
            .iter()
            .any(|p| matches!(p, Primitive::StrokeLine { .. })));
    }

    #[test]
    fn methanol_depiction_end_to_end() {
        // C-O: the carbon is a plain terminal carbon and stays bare,
        // the oxygen gets a label, and the single bond is one stroke
        // trimmed back from the label.
        let atoms = vec![
            Atom::new("C", 0.0, 0.0).unwrap(),
            Atom::new("O", 1.0, 0.0).unwrap(),
        ];
        let bonds = vec![Bond::new(0, 1, BondOrder::Single)];
        let mol = Molecule::new(atoms, bonds).unwrap();
        let renderer = MoleculeRenderer::new();
        let primitives = renderer
            .render(&mol, &Viewport::sized(200.0, 200.0), &BoxTextMetrics)
            .unwrap();

        let lines: Vec<_> = primitives
            .iter()
            .filter(|p| matches!(p, Primitive::StrokeLine { .. }))
            .collect();
        assert_eq!(lines.len(), 1);

        let texts: Vec<&str> = primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Glyphs(run) => Some(run.text.as_str()),
                _ => None,
            })
            .collect();
        assert!(texts.contains(&"O"));
        assert!(!texts.contains(&"C"));
    }

    #[test]
    fn halos_precede_bonds_precede_labels() {
        let mut atoms = vec![
            Atom::new("N", 0.0, 0.0).unwrap(),
            Atom::new("C", 1.0, 0.0).unwrap(),
        ];
        atoms[0].atom_map = Some(1);
        let bonds = vec![Bond::new(0, 1, BondOrder::Single)];
        let mol = Molecule::new(atoms, bonds).unwrap();
        let mut renderer = MoleculeRenderer::new();
        renderer.options_mut().draw.highlight_mapped_atoms = true;
        renderer.options_mut().draw.highlight_with_halo = true;
        let primitives = renderer
            .render(&mol, &Viewport::sized(200.0, 200.0), &BoxTextMetrics)
            .unwrap();

        let position = |pred: &dyn Fn(&Primitive) -> bool| {
            primitives.iter().position(|p| pred(p))
        };
        let halo = position(&|p| matches!(p, Primitive::FillDisc { .. }));
        let bond = position(&|p| matches!(p, Primitive::StrokeLine { .. }));
        let label = position(&|p| matches!(p, Primitive::Glyphs(_)));
        assert!(halo.unwrap() < bond.unwrap());
        assert!(bond.unwrap() < label.unwrap());
    }

    #[test]
    fn bond_halo_stroke_renders_beneath_the_bond() {
        // Both endpoints mapped alike: one wide halo stroke under one
        // normal bond stroke, after the atom halo discs.
        let mut atoms = vec![
            Atom::new("N", 0.0, 0.0).unwrap(),
            Atom::new("O", 1.0, 0.0).unwrap(),
        ];
        atoms[0].atom_map = Some(2);
        atoms[1].atom_map = Some(2);
        let bonds = vec![Bond::new(0, 1, BondOrder::Single)];
        let mol = Molecule::new(atoms, bonds).unwrap();
        let mut renderer = MoleculeRenderer::new();
        renderer.options_mut().draw.highlight_mapped_atoms = true;
        renderer.options_mut().draw.highlight_with_halo = true;
        let primitives = renderer
            .render(&mol, &Viewport::sized(200.0, 200.0), &BoxTextMetrics)
            .unwrap();

        let first_disc = primitives
            .iter()
            .position(|p| matches!(p, Primitive::FillDisc { .. }))
            .unwrap();
        let widths: Vec<(usize, f64)> = primitives
            .iter()
            .enumerate()
            .filter_map(|(i, p)| match p {
                Primitive::StrokeLine { stroke, .. } => Some((i, stroke.width)),
                _ => None,
            })
            .collect();
        assert_eq!(widths.len(), 2);
        assert!(first_disc < widths[0].0);
        assert!(widths[0].1 > widths[1].1);
    }

    #[test]
    fn average_bond_length_falls_back_without_bonds() {
        let atoms = vec![Atom::new("C", 0.0, 0.0).unwrap()];
        let mol = Molecule::new(atoms, Vec::new()).unwrap();
        let mut renderer = MoleculeRenderer::new();
        renderer.options_mut().style.expected_bond_length = 2.5;
        assert!(
            (renderer.average_bond_length(&mol) - 2.5).abs() < f64::EPSILON
        );
    }
}
