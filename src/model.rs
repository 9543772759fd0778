//! Read-only molecular model consumed by the layout engine.
//!
//! The engine does not own chemistry: atoms, bonds, and substructure
//! groups arrive as a plain value snapshot with 2D coordinates already
//! assigned. Only the queries the layout algorithms need are exposed;
//! perception (ring finding, stereo assignment, implicit-H counting) is
//! the supplier's job and the flags here are taken at face value.

use crate::error::RenderError;
use crate::geometry::Point2D;

/// Formal bond order / delocalization tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BondOrder {
    /// Single bond.
    Single,
    /// Double bond.
    Double,
    /// Triple bond.
    Triple,
    /// Delocalized/aromatic bond.
    Aromatic,
    /// Query bond: single or double.
    SingleOrDouble,
}

/// Wedge/hash stereo flag on a bond, pointing from atom 1 to atom 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BondStereo {
    /// No stereo annotation.
    #[default]
    None,
    /// Solid wedge (toward the viewer).
    Up,
    /// Hashed wedge (away from the viewer).
    Down,
    /// Unspecified wavy bond.
    Either,
}

/// Chirality descriptor of a stereocenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chirality {
    /// Rectus.
    R,
    /// Sinister.
    S,
    /// Indeterminate / either parity.
    Either,
}

impl Chirality {
    /// Interpret an atom-map value as a parity code.
    ///
    /// Legacy quirk preserved from the reference renderer: only 1 and 2
    /// are defined parities; every other value — including 0 — means
    /// "either". Do not tidy this up; downstream data depends on it.
    #[must_use]
    pub fn from_parity(value: u32) -> Self {
        match value {
            1 => Self::R,
            2 => Self::S,
            _ => Self::Either,
        }
    }
}

/// Whole-molecule optical activity classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpticalActivity {
    /// Dextrorotatory `(+)`.
    Plus,
    /// Levorotatory `(-)`.
    Minus,
    /// Racemic mixture `(+/-)`.
    PlusMinus,
    /// Not determined.
    Unspecified,
}

/// Whole-molecule stereochemistry-type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StereochemistryType {
    /// All centers absolute.
    Absolute,
    /// Racemic.
    Racemic,
    /// Mixed/relative centers.
    Mixed,
    /// Not determined.
    Unknown,
}

/// One atom of the input molecule.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Element symbol (`"C"`, `"O"`, `"Cl"`, ...).
    pub symbol: String,
    /// 2D position in molecule coordinates.
    pub position: Point2D,
    /// Formal charge.
    pub charge: i32,
    /// Isotope mass number; `None` for the natural-abundance element.
    pub mass_number: Option<u32>,
    /// Radical multiplicity value; 0 for none.
    pub radical: u32,
    /// Implicit hydrogen count.
    pub implicit_hydrogens: u32,
    /// R-group placeholder index, when this atom is an R-group.
    pub r_group: Option<u32>,
    /// Atom-to-atom map value, when mapped.
    pub atom_map: Option<u32>,
    /// Stereocenter descriptor, when this atom is a defined center.
    pub chirality: Option<Chirality>,
}

impl Atom {
    /// A plain uncharged atom of the given element at a position.
    pub fn new(symbol: &str, x: f64, y: f64) -> Result<Self, RenderError> {
        Ok(Self {
            symbol: symbol.to_owned(),
            position: Point2D::new(x, y)?,
            charge: 0,
            mass_number: None,
            radical: 0,
            implicit_hydrogens: 0,
            r_group: None,
            atom_map: None,
            chirality: None,
        })
    }
}

/// One bond of the input molecule.
#[derive(Debug, Clone, PartialEq)]
pub struct Bond {
    /// Endpoint atom indices into the molecule's atom list.
    pub atoms: (usize, usize),
    /// Formal order / delocalization.
    pub order: BondOrder,
    /// Wedge/hash stereo flag.
    pub stereo: BondStereo,
    /// Whether the bond is a ring member.
    pub in_ring: bool,
}

impl Bond {
    /// A plain non-ring bond between two atoms.
    #[must_use]
    pub fn new(a: usize, b: usize, order: BondOrder) -> Self {
        Self {
            atoms: (a, b),
            order,
            stereo: BondStereo::None,
            in_ring: false,
        }
    }

    /// The endpoint opposite `atom`, or `None` if `atom` is not an
    /// endpoint.
    #[must_use]
    pub fn other_atom(&self, atom: usize) -> Option<usize> {
        if self.atoms.0 == atom {
            Some(self.atoms.1)
        } else if self.atoms.1 == atom {
            Some(self.atoms.0)
        } else {
            None
        }
    }
}

/// One bracket segment of a substructure group, in molecule
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BracketLine {
    /// First endpoint.
    pub p1: Point2D,
    /// Second endpoint.
    pub p2: Point2D,
}

/// Substructure group classification, as far as bracket rendering
/// cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupType {
    /// Structural repeat unit.
    Sru,
    /// Multiple group (repeat count); its superscript is suppressed.
    Multiple,
    /// Anything else that still wants brackets.
    Generic,
}

/// A substructure group requesting bracket rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct SubstructureGroup {
    /// Member atom indices.
    pub atoms: Vec<usize>,
    /// Group classification.
    pub group_type: GroupType,
    /// Bracket segments supplied by the source data; may be empty.
    pub brackets: Vec<BracketLine>,
    /// Whether the supplied bracket coordinates are reliable enough to
    /// use directly instead of recomputing from member atoms.
    pub brackets_trusted: bool,
    /// Subscript annotation (repeat range, multiplicity).
    pub subscript: Option<String>,
    /// Superscript annotation.
    pub superscript: Option<String>,
}

/// The immutable molecule snapshot handed to a render call.
#[derive(Debug, Clone)]
pub struct Molecule {
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
    groups: Vec<SubstructureGroup>,
    /// Bond indices incident to each atom, built once at construction.
    adjacency: Vec<Vec<usize>>,
    stereochemistry: Option<StereochemistryType>,
    optical_activity: Option<OpticalActivity>,
}

impl Molecule {
    /// Build a molecule from atoms and bonds, validating that every
    /// bond endpoint indexes an existing atom.
    pub fn new(atoms: Vec<Atom>, bonds: Vec<Bond>) -> Result<Self, RenderError> {
        let mut adjacency = vec![Vec::new(); atoms.len()];
        for (i, bond) in bonds.iter().enumerate() {
            let (a, b) = bond.atoms;
            if a >= atoms.len() || b >= atoms.len() {
                return Err(RenderError::InvalidAtomIndex {
                    index: a.max(b),
                });
            }
            adjacency[a].push(i);
            adjacency[b].push(i);
        }
        Ok(Self {
            atoms,
            bonds,
            groups: Vec::new(),
            adjacency,
            stereochemistry: None,
            optical_activity: None,
        })
    }

    /// Attach substructure groups. Member indices outside the atom list
    /// are rejected.
    pub fn with_groups(
        mut self,
        groups: Vec<SubstructureGroup>,
    ) -> Result<Self, RenderError> {
        for g in &groups {
            if let Some(&bad) =
                g.atoms.iter().find(|&&i| i >= self.atoms.len())
            {
                return Err(RenderError::InvalidAtomIndex { index: bad });
            }
        }
        self.groups = groups;
        Ok(self)
    }

    /// Set the whole-molecule stereochemistry classifications used to
    /// disambiguate indeterminate stereo labels.
    #[must_use]
    pub fn with_stereo_flags(
        mut self,
        stereochemistry: Option<StereochemistryType>,
        optical_activity: Option<OpticalActivity>,
    ) -> Self {
        self.stereochemistry = stereochemistry;
        self.optical_activity = optical_activity;
        self
    }

    /// All atoms in native order.
    #[must_use]
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// All bonds in native order.
    #[must_use]
    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    /// All substructure groups.
    #[must_use]
    pub fn groups(&self) -> &[SubstructureGroup] {
        &self.groups
    }

    /// Indices of bonds incident to `atom`.
    #[must_use]
    pub fn bonds_of(&self, atom: usize) -> &[usize] {
        self.adjacency.get(atom).map_or(&[], Vec::as_slice)
    }

    /// Number of bonds incident to `atom`.
    #[must_use]
    pub fn bond_count(&self, atom: usize) -> usize {
        self.bonds_of(atom).len()
    }

    /// Indices of atoms bonded to `atom`.
    pub fn neighbors(&self, atom: usize) -> impl Iterator<Item = usize> + '_ {
        self.bonds_of(atom)
            .iter()
            .filter_map(move |&b| self.bonds[b].other_atom(atom))
    }

    /// Euclidean length of a bond, from its endpoint coordinates.
    #[must_use]
    pub fn bond_length(&self, bond: usize) -> f64 {
        let (a, b) = self.bonds[bond].atoms;
        self.atoms[a]
            .position
            .distance_to(self.atoms[b].position)
    }

    /// Whether any atom carries an atom-to-atom map value.
    #[must_use]
    pub fn has_atom_maps(&self) -> bool {
        self.atoms.iter().any(|a| a.atom_map.is_some())
    }

    /// Whole-molecule stereochemistry-type classification, if computed.
    #[must_use]
    pub fn stereochemistry(&self) -> Option<StereochemistryType> {
        self.stereochemistry
    }

    /// Whole-molecule optical-activity classification, if computed.
    #[must_use]
    pub fn optical_activity(&self) -> Option<OpticalActivity> {
        self.optical_activity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ethanol_fragment() -> Molecule {
        // C-C-O chain
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
    fn adjacency_built_on_construction() {
        let m = ethanol_fragment();
        assert_eq!(m.bond_count(0), 1);
        assert_eq!(m.bond_count(1), 2);
        let n: Vec<usize> = m.neighbors(1).collect();
        assert_eq!(n, vec![0, 2]);
    }

    #[test]
    fn bad_bond_endpoint_rejected() {
        let atoms = vec![Atom::new("C", 0.0, 0.0).unwrap()];
        let bonds = vec![Bond::new(0, 5, BondOrder::Single)];
        assert!(matches!(
            Molecule::new(atoms, bonds),
            Err(RenderError::InvalidAtomIndex { index: 5 })
        ));
    }

    #[test]
    fn parity_fallback_quirk() {
        // Documented legacy behavior: everything except 1 and 2 --
        // including 0 -- is "either" parity.
        assert_eq!(Chirality::from_parity(1), Chirality::R);
        assert_eq!(Chirality::from_parity(2), Chirality::S);
        assert_eq!(Chirality::from_parity(0), Chirality::Either);
        assert_eq!(Chirality::from_parity(3), Chirality::Either);
        assert_eq!(Chirality::from_parity(42), Chirality::Either);
    }

    #[test]
    fn bond_length_from_coordinates() {
        let m = ethanol_fragment();
        assert!((m.bond_length(0) - 1.0).abs() < 1e-12);
    }
}
