//! Namespace URIs, element/attribute names, and value conventions of the
//! CML dialect this crate reads and writes.

/// The CML schema namespace. Elements may appear in this namespace or with
/// no namespace at all; both spellings must be accepted everywhere.
pub const CML_NAMESPACE: &str = "http://www.xml-cml.org/schema";

/// CML conventions namespace, referenced by the `convention` attribute.
pub const CONVENTIONS_NAMESPACE: &str = "http://www.xml-cml.org/convention/";

/// Namespace for this project's drawing extensions (placement hints,
/// bracket display, arrow geometry, part-correlation GUID).
pub const EXT_NAMESPACE: &str = "http://www.chemink.dev/schema";

pub const CONVENTIONS_PREFIX: &str = "conventions";
pub const EXT_PREFIX: &str = "cik";

pub const MOLECULAR_CONVENTION: &str = "conventions:molecular";

// Element names (CML namespace or bare).
pub const EL_CML: &str = "cml";
pub const EL_MOLECULE: &str = "molecule";
pub const EL_ATOM_ARRAY: &str = "atomArray";
pub const EL_ATOM: &str = "atom";
pub const EL_BOND_ARRAY: &str = "bondArray";
pub const EL_BOND: &str = "bond";
pub const EL_BOND_STEREO: &str = "bondStereo";
pub const EL_FORMULA: &str = "formula";
pub const EL_NAME: &str = "name";
pub const EL_LABEL: &str = "label";
pub const EL_REACTION_SCHEME: &str = "reactionScheme";
pub const EL_REACTION: &str = "reaction";
pub const EL_REACTANT_LIST: &str = "reactantList";
pub const EL_REACTANT: &str = "reactant";
pub const EL_PRODUCT_LIST: &str = "productList";
pub const EL_PRODUCT: &str = "product";

// Extension elements (extension namespace).
pub const EL_REAGENT_TEXT: &str = "reagentText";
pub const EL_CONDITIONS_TEXT: &str = "conditionsText";

// Attribute names (bare or CML namespace).
pub const ATTR_ID: &str = "id";
pub const ATTR_CONVENTION: &str = "convention";
pub const ATTR_ELEMENT_TYPE: &str = "elementType";
pub const ATTR_X2: &str = "x2";
pub const ATTR_Y2: &str = "y2";
pub const ATTR_X3: &str = "x3";
pub const ATTR_Y3: &str = "y3";
pub const ATTR_FORMAL_CHARGE: &str = "formalCharge";
pub const ATTR_ISOTOPE_NUMBER: &str = "isotopeNumber";
pub const ATTR_SPIN_MULTIPLICITY: &str = "spinMultiplicity";
pub const ATTR_COUNT: &str = "count";
pub const ATTR_ATOM_REFS_2: &str = "atomRefs2";
pub const ATTR_ORDER: &str = "order";
pub const ATTR_DICT_REF: &str = "dictRef";
pub const ATTR_INLINE: &str = "inline";
pub const ATTR_VALUE: &str = "value";
pub const ATTR_REF: &str = "ref";
pub const ATTR_REACTION_TYPE: &str = "type";
pub const ATTR_REACTION_BIAS: &str = "bias";

// Attribute names (extension namespace).
pub const ATTR_EXPLICIT_CARBON: &str = "explicitC";
pub const ATTR_HYDROGEN_PLACEMENT: &str = "hydrogenPlacement";
pub const ATTR_GROUP_PLACEMENT: &str = "groupPlacement";
pub const ATTR_BOND_PLACEMENT: &str = "placement";
pub const ATTR_SHOW_BRACKETS: &str = "brackets";
pub const ATTR_CUSTOM_XML_PART_GUID: &str = "customXmlPartGuid";
pub const ATTR_ARROW_TAIL: &str = "arrowTail";
pub const ATTR_ARROW_HEAD: &str = "arrowHead";

/// Default dictionary references applied when the source omits one or uses
/// the legacy marker.
pub const DEFAULT_FORMULA_CONVENTION: &str = "chemink:Formula";
pub const DEFAULT_NAME_DICT_REF: &str = "chemink:Name";
pub const DEFAULT_CAPTION_DICT_REF: &str = "chemink:Caption";
pub const LEGACY_UNKNOWN_DICT_REF: &str = "unknown";

/// Serializes a coordinate with exactly four decimal digits and a `.`
/// separator. This precision is an interop contract with downstream CML
/// consumers; do not change it.
pub fn format_coordinate(value: f64) -> String {
    format!("{:.4}", value)
}

/// Serializes an arrow endpoint as `"x,y"` with coordinate precision.
pub fn format_point(x: f64, y: f64) -> String {
    format!("{},{}", format_coordinate(x), format_coordinate(y))
}

/// Parses an `"x,y"` arrow endpoint.
pub fn parse_point(text: &str) -> Option<(f64, f64)> {
    let (x, y) = text.split_once(',')?;
    Some((x.trim().parse().ok()?, y.trim().parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_always_carry_four_decimals() {
        assert_eq!(format_coordinate(1.0), "1.0000");
        assert_eq!(format_coordinate(-0.25), "-0.2500");
        assert_eq!(format_coordinate(2.00005), "2.0001");
        assert_eq!(format_coordinate(1234.5), "1234.5000");
    }

    #[test]
    fn points_round_trip() {
        let encoded = format_point(1.5, -2.0);
        assert_eq!(encoded, "1.5000,-2.0000");
        assert_eq!(parse_point(&encoded), Some((1.5, -2.0)));
        assert_eq!(parse_point("3, 4"), Some((3.0, 4.0)));
        assert_eq!(parse_point("garbage"), None);
        assert_eq!(parse_point("1;2"), None);
    }
}
