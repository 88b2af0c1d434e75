use super::element::Element;
use phf::{Map, phf_map};

/// A named composite substituent ("OEt", "Ph", …) drawn as a single
/// pseudo-atom.
///
/// Groups carry their elemental composition so formula computation can
/// expand them. Entries flagged with `shorthand_for` are not real groups at
/// all but alternate spellings of a single element (deuterium, tritium);
/// the CML reader substitutes the underlying element without recording a
/// diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionalGroup {
    /// Symbol as written in the structure, e.g. `"OEt"`.
    pub symbol: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// Elemental composition, expanded for formula computation.
    pub composition: &'static [(Element, u32)],
    /// Set when the entry is a disguised spelling of one element.
    pub shorthand_for: Option<Element>,
}

static FUNCTIONAL_GROUPS: Map<&'static str, FunctionalGroup> = phf_map! {
    "Me" => FunctionalGroup {
        symbol: "Me",
        name: "methyl",
        composition: &[(Element::C, 1), (Element::H, 3)],
        shorthand_for: None,
    },
    "Et" => FunctionalGroup {
        symbol: "Et",
        name: "ethyl",
        composition: &[(Element::C, 2), (Element::H, 5)],
        shorthand_for: None,
    },
    "iPr" => FunctionalGroup {
        symbol: "iPr",
        name: "isopropyl",
        composition: &[(Element::C, 3), (Element::H, 7)],
        shorthand_for: None,
    },
    "tBu" => FunctionalGroup {
        symbol: "tBu",
        name: "tert-butyl",
        composition: &[(Element::C, 4), (Element::H, 9)],
        shorthand_for: None,
    },
    "Ph" => FunctionalGroup {
        symbol: "Ph",
        name: "phenyl",
        composition: &[(Element::C, 6), (Element::H, 5)],
        shorthand_for: None,
    },
    "Bn" => FunctionalGroup {
        symbol: "Bn",
        name: "benzyl",
        composition: &[(Element::C, 7), (Element::H, 7)],
        shorthand_for: None,
    },
    "OMe" => FunctionalGroup {
        symbol: "OMe",
        name: "methoxy",
        composition: &[(Element::O, 1), (Element::C, 1), (Element::H, 3)],
        shorthand_for: None,
    },
    "OEt" => FunctionalGroup {
        symbol: "OEt",
        name: "ethoxy",
        composition: &[(Element::O, 1), (Element::C, 2), (Element::H, 5)],
        shorthand_for: None,
    },
    "OH" => FunctionalGroup {
        symbol: "OH",
        name: "hydroxyl",
        composition: &[(Element::O, 1), (Element::H, 1)],
        shorthand_for: None,
    },
    "NH2" => FunctionalGroup {
        symbol: "NH2",
        name: "amino",
        composition: &[(Element::N, 1), (Element::H, 2)],
        shorthand_for: None,
    },
    "NO2" => FunctionalGroup {
        symbol: "NO2",
        name: "nitro",
        composition: &[(Element::N, 1), (Element::O, 2)],
        shorthand_for: None,
    },
    "CN" => FunctionalGroup {
        symbol: "CN",
        name: "nitrile",
        composition: &[(Element::C, 1), (Element::N, 1)],
        shorthand_for: None,
    },
    "CO2H" => FunctionalGroup {
        symbol: "CO2H",
        name: "carboxyl",
        composition: &[(Element::C, 1), (Element::O, 2), (Element::H, 1)],
        shorthand_for: None,
    },
    "CO2Me" => FunctionalGroup {
        symbol: "CO2Me",
        name: "methyl ester",
        composition: &[(Element::C, 2), (Element::O, 2), (Element::H, 3)],
        shorthand_for: None,
    },
    "CF3" => FunctionalGroup {
        symbol: "CF3",
        name: "trifluoromethyl",
        composition: &[(Element::C, 1), (Element::F, 3)],
        shorthand_for: None,
    },
    "CCl3" => FunctionalGroup {
        symbol: "CCl3",
        name: "trichloromethyl",
        composition: &[(Element::C, 1), (Element::Cl, 3)],
        shorthand_for: None,
    },
    "SO3H" => FunctionalGroup {
        symbol: "SO3H",
        name: "sulfo",
        composition: &[(Element::S, 1), (Element::O, 3), (Element::H, 1)],
        shorthand_for: None,
    },
    "D" => FunctionalGroup {
        symbol: "D",
        name: "deuterium",
        composition: &[(Element::H, 1)],
        shorthand_for: Some(Element::H),
    },
    "T" => FunctionalGroup {
        symbol: "T",
        name: "tritium",
        composition: &[(Element::H, 1)],
        shorthand_for: Some(Element::H),
    },
};

impl FunctionalGroup {
    /// Looks up a group by its symbol. Case-sensitive.
    pub fn from_symbol(symbol: &str) -> Option<&'static FunctionalGroup> {
        FUNCTIONAL_GROUPS.get(symbol)
    }

    /// Total atoms the group expands to.
    pub fn atom_count(&self) -> u32 {
        self.composition.iter().map(|&(_, n)| n).sum()
    }
}
