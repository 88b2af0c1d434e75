use super::ids::AtomId;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("invalid bond order string: '{0}'")]
pub struct ParseBondOrderError(pub String);

/// Bond order, including the partial orders used for delocalized systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BondOrder {
    Single,
    Double,
    Triple,
    Aromatic,
    /// Order 1.5 (e.g. delocalized carboxylate).
    Partial,
    /// Order 2.5.
    PartialDouble,
}

impl Default for BondOrder {
    fn default() -> Self {
        BondOrder::Single
    }
}

impl FromStr for BondOrder {
    type Err = ParseBondOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" | "S" | "s" | "single" => Ok(Self::Single),
            "2" | "D" | "d" | "double" => Ok(Self::Double),
            "3" | "T" | "t" | "triple" => Ok(Self::Triple),
            "A" | "a" | "aromatic" => Ok(Self::Aromatic),
            "1.5" | "partial01" => Ok(Self::Partial),
            "2.5" | "partial12" => Ok(Self::PartialDouble),
            _ => Err(ParseBondOrderError(s.to_string())),
        }
    }
}

impl fmt::Display for BondOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Single => "1",
            Self::Double => "2",
            Self::Triple => "3",
            Self::Aromatic => "A",
            Self::Partial => "1.5",
            Self::PartialDouble => "2.5",
        })
    }
}

impl BondOrder {
    /// Numeric value used for mean/valence arithmetic.
    pub fn value(self) -> f64 {
        match self {
            Self::Single => 1.0,
            Self::Double => 2.0,
            Self::Triple => 3.0,
            Self::Aromatic => 1.5,
            Self::Partial => 1.5,
            Self::PartialDouble => 2.5,
        }
    }
}

/// Wedge/hash and cis/trans stereochemistry markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BondStereo {
    Wedge,
    Hatch,
    Cis,
    Trans,
}

impl FromStr for BondStereo {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "W" => Ok(Self::Wedge),
            "H" => Ok(Self::Hatch),
            "C" => Ok(Self::Cis),
            "T" => Ok(Self::Trans),
            _ => Err(()),
        }
    }
}

impl fmt::Display for BondStereo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Wedge => "W",
            Self::Hatch => "H",
            Self::Cis => "C",
            Self::Trans => "T",
        })
    }
}

/// Which side of the bond axis carries the second line of a double bond or
/// the stereo decoration. Serialized through the extension namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BondPlacement {
    Above,
    Below,
}

impl FromStr for BondPlacement {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "above" => Ok(Self::Above),
            "below" => Ok(Self::Below),
            _ => Err(()),
        }
    }
}

impl fmt::Display for BondPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Above => "above",
            Self::Below => "below",
        })
    }
}

/// An edge between two atoms of the same molecule.
///
/// Endpoints are internal ids; both must exist in the owning molecule and
/// must be distinct. The string id is optional until id assignment runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Bond {
    pub id: Option<String>,
    pub start: AtomId,
    pub end: AtomId,
    pub order: BondOrder,
    pub stereo: Option<BondStereo>,
    pub placement: Option<BondPlacement>,
}

impl Bond {
    pub fn new(start: AtomId, end: AtomId, order: BondOrder) -> Self {
        Self {
            id: None,
            start,
            end,
            order,
            stereo: None,
            placement: None,
        }
    }

    pub fn contains(&self, atom_id: AtomId) -> bool {
        self.start == atom_id || self.end == atom_id
    }

    /// The endpoint opposite to `atom_id`, if `atom_id` is an endpoint.
    pub fn other_end(&self, atom_id: AtomId) -> Option<AtomId> {
        if self.start == atom_id {
            Some(self.end)
        } else if self.end == atom_id {
            Some(self.start)
        } else {
            None
        }
    }
}
