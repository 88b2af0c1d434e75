use super::element::Element;
use super::functional_group::FunctionalGroup;
use nalgebra::Point2;
use std::fmt;
use std::str::FromStr;

/// Compass placement hint for implicit hydrogens or an attached functional
/// group label, relative to the atom position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompassPoint {
    North,
    East,
    South,
    West,
}

impl FromStr for CompassPoint {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "N" | "n" => Ok(CompassPoint::North),
            "E" | "e" => Ok(CompassPoint::East),
            "S" | "s" => Ok(CompassPoint::South),
            "W" | "w" => Ok(CompassPoint::West),
            _ => Err(()),
        }
    }
}

impl fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CompassPoint::North => "N",
            CompassPoint::East => "E",
            CompassPoint::South => "S",
            CompassPoint::West => "W",
        })
    }
}

/// What an atom node stands for.
///
/// Most atoms are periodic-table elements; some are composite functional
/// groups drawn as a single node; a symbol the import could not resolve is
/// kept verbatim so partially-valid input stays inspectable.
#[derive(Debug, Clone, PartialEq)]
pub enum AtomKind {
    Element(Element),
    Group(&'static FunctionalGroup),
    Unresolved(String),
}

impl AtomKind {
    /// Resolves a symbol: periodic table first, then the group registry.
    /// Isotope shorthands (D, T) collapse to their underlying element.
    pub fn resolve(symbol: &str) -> Option<AtomKind> {
        if let Some(element) = Element::from_symbol(symbol) {
            return Some(AtomKind::Element(element));
        }
        let group = FunctionalGroup::from_symbol(symbol)?;
        match group.shorthand_for {
            Some(element) => Some(AtomKind::Element(element)),
            None => Some(AtomKind::Group(group)),
        }
    }

    /// The symbol as it appears in serialized output.
    pub fn symbol(&self) -> &str {
        match self {
            AtomKind::Element(element) => element.symbol(),
            AtomKind::Group(group) => group.symbol,
            AtomKind::Unresolved(raw) => raw,
        }
    }
}

/// A single atom node in a molecule graph.
///
/// The exported string id is optional until id assignment runs; graph
/// wiring uses the owning molecule's [`AtomId`](super::ids::AtomId) key
/// instead. Structural problems found while reading this atom accumulate
/// in `messages` rather than aborting the read.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Schema-scoped string id, e.g. `"m1.a3"`. `None` until assigned.
    pub id: Option<String>,
    /// Element, functional group, or unresolved raw symbol.
    pub kind: AtomKind,
    /// 2D position in model units.
    pub position: Point2<f64>,
    /// Formal charge, absent when zero/unspecified.
    pub formal_charge: Option<i32>,
    /// Isotope mass number, absent for the natural mix.
    pub isotope_number: Option<u32>,
    /// Forces display of an otherwise-implicit carbon label.
    pub explicit_carbon: Option<bool>,
    /// Placement hint for implicit hydrogens.
    pub hydrogen_placement: Option<CompassPoint>,
    /// Placement hint for an attached functional-group label.
    pub group_placement: Option<CompassPoint>,
    /// Diagnostics accumulated while reading this atom.
    pub messages: Vec<String>,
}

impl Atom {
    /// Creates an atom with default values for everything but kind and
    /// position.
    pub fn new(kind: AtomKind, position: Point2<f64>) -> Self {
        Self {
            id: None,
            kind,
            position,
            formal_charge: None,
            isotope_number: None,
            explicit_carbon: None,
            hydrogen_placement: None,
            group_placement: None,
            messages: Vec::new(),
        }
    }

    pub fn element(&self) -> Option<Element> {
        match self.kind {
            AtomKind::Element(element) => Some(element),
            _ => None,
        }
    }

    /// True for a plain hydrogen atom with no isotope label and no charge.
    /// Such atoms are candidates for explicit-hydrogen removal.
    pub fn is_removable_hydrogen(&self) -> bool {
        self.element() == Some(Element::H)
            && self.isotope_number.is_none()
            && self.formal_charge.unwrap_or(0) == 0
    }

    pub fn is_functional_group(&self) -> bool {
        matches!(self.kind, AtomKind::Group(_))
    }
}
