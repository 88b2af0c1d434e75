use super::ImportOptions;
use super::names;
use crate::core::io::error::CmlError;
use crate::core::models::atom::{Atom, AtomKind};
use crate::core::models::bond::{Bond, BondOrder};
use crate::core::models::ids::AtomId;
use crate::core::models::model::Model;
use crate::core::models::molecule::{Molecule, TextualProperty};
use crate::core::models::reaction::{Participant, Reaction, ReactionScheme, ReactionType};
use nalgebra::Point2;
use roxmltree::{Document, Node};
use std::collections::HashMap;
use tracing::{debug, instrument};

// ----- namespace-tolerant lookup helpers --------------------------------
//
// Producers disagree on whether CML elements and attributes are namespaced
// or bare. Every lookup in this reader goes through these four helpers so
// the union logic lives in exactly one place.

fn is_cml_named(node: Node, name: &str) -> bool {
    node.is_element()
        && node.tag_name().name() == name
        && matches!(
            node.tag_name().namespace(),
            None | Some(names::CML_NAMESPACE)
        )
}

fn cml_children<'a, 'input>(
    node: Node<'a, 'input>,
    name: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(move |child| is_cml_named(*child, name))
}

fn attribute<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attributes()
        .find(|attr| {
            attr.name() == name
                && matches!(attr.namespace(), None | Some(names::CML_NAMESPACE))
        })
        .map(|attr| attr.value())
}

fn ext_attribute<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attributes()
        .find(|attr| attr.name() == name && attr.namespace() == Some(names::EXT_NAMESPACE))
        .map(|attr| attr.value())
}

fn ext_child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|child| {
        child.is_element()
            && child.tag_name().name() == name
            && child.tag_name().namespace() == Some(names::EXT_NAMESPACE)
    })
}

// ----- document entry ----------------------------------------------------

/// Maps CML text onto a fresh [`Model`].
///
/// Tolerates a `<cml>` root or a bare `<molecule>` root, namespaced and
/// un-namespaced element names, and wrapped or bare atom/bond children.
/// Recoverable data problems become diagnostics on the nearest entity; the
/// only hard failures are unparsable XML and broken referential integrity.
#[instrument(skip_all)]
pub(crate) fn read_document(text: &str, options: &ImportOptions) -> Result<Model, CmlError> {
    let document = Document::parse(text)?;
    let root = document.root_element();

    let mut model = Model::new();
    model.custom_xml_part_guid =
        ext_attribute(root, names::ATTR_CUSTOM_XML_PART_GUID).map(String::from);

    if is_cml_named(root, names::EL_MOLECULE) {
        // Alternate producer convention: the molecule itself is the root.
        let molecule = read_molecule(&document, root)?;
        model.add_molecule(molecule);
    } else {
        for node in cml_children(root, names::EL_MOLECULE) {
            let molecule = read_molecule(&document, node)?;
            model.add_molecule(molecule);
        }
        let mut general = Vec::new();
        for node in cml_children(root, names::EL_REACTION_SCHEME) {
            let scheme = read_reaction_scheme(&document, node, &mut general);
            model.add_reaction_scheme(scheme);
        }
        model.general_errors.extend(general);
    }

    for molecule in &mut model.molecules {
        molecule.split_into_children();
        molecule.rebuild_rings();
    }

    model.set_protected_labels(options.protected_labels.clone());
    if model.protected_labels().is_some() {
        model.set_missing_ids();
    } else if options.relabel {
        model.relabel(true);
    } else {
        model.set_missing_ids();
    }
    model.refresh();

    debug!(
        molecules = model.molecules.len(),
        schemes = model.schemes.len(),
        atoms = model.total_atoms_count(),
        "import complete"
    );
    Ok(model)
}

// ----- molecules ---------------------------------------------------------

fn read_molecule(document: &Document, node: Node) -> Result<Molecule, CmlError> {
    let mut molecule = Molecule::new();
    molecule.id = attribute(node, names::ATTR_ID).map(String::from);
    molecule.formal_charge =
        parse_number_attribute(node, names::ATTR_FORMAL_CHARGE, &mut molecule.warnings);
    molecule.spin_multiplicity =
        parse_number_attribute(node, names::ATTR_SPIN_MULTIPLICITY, &mut molecule.warnings);
    molecule.count = parse_number_attribute(node, names::ATTR_COUNT, &mut molecule.warnings);
    molecule.show_brackets = ext_attribute(node, names::ATTR_SHOW_BRACKETS)
        .and_then(|raw| raw.trim().parse().ok());

    let mut id_map: HashMap<String, AtomId> = HashMap::new();
    let atom_nodes: Vec<Node> = cml_children(node, names::EL_ATOM_ARRAY)
        .flat_map(|wrapper| cml_children(wrapper, names::EL_ATOM))
        .chain(cml_children(node, names::EL_ATOM))
        .collect();
    for atom_node in atom_nodes {
        let atom = read_atom(atom_node);
        let string_id = atom.id.clone();
        let atom_id = molecule.add_atom(atom);
        if let Some(string_id) = string_id {
            if id_map.insert(string_id.clone(), atom_id).is_some() {
                return Err(CmlError::DuplicateAtomId(string_id));
            }
        }
    }

    let bond_nodes: Vec<Node> = cml_children(node, names::EL_BOND_ARRAY)
        .flat_map(|wrapper| cml_children(wrapper, names::EL_BOND))
        .chain(cml_children(node, names::EL_BOND))
        .collect();
    for bond_node in bond_nodes {
        if let Some(bond) = read_bond(bond_node, &id_map, &mut molecule.warnings)? {
            if molecule.add_bond(bond).is_none() {
                molecule
                    .warnings
                    .push("bond joining an atom to itself was skipped".to_string());
            }
        }
    }

    read_textual_properties(&mut molecule, node);

    for child_node in cml_children(node, names::EL_MOLECULE) {
        let child = read_molecule(document, child_node)?;
        molecule.children.push(child);
    }

    normalize_single_atom(&mut molecule);
    Ok(molecule)
}

fn read_atom(node: Node) -> Atom {
    let mut messages = Vec::new();

    let kind = match attribute(node, names::ATTR_ELEMENT_TYPE) {
        None => {
            messages.push("atom has no elementType attribute".to_string());
            AtomKind::Unresolved(String::new())
        }
        Some(symbol) => AtomKind::resolve(symbol).unwrap_or_else(|| {
            messages.push(format!("unrecognized element symbol '{}'", symbol));
            AtomKind::Unresolved(symbol.to_string())
        }),
    };
    let position = read_position(node, &mut messages);

    let mut atom = Atom::new(kind, position);
    atom.id = attribute(node, names::ATTR_ID).map(String::from);
    atom.formal_charge =
        parse_number_attribute(node, names::ATTR_FORMAL_CHARGE, &mut messages);
    atom.isotope_number =
        parse_number_attribute(node, names::ATTR_ISOTOPE_NUMBER, &mut messages);
    atom.explicit_carbon = ext_attribute(node, names::ATTR_EXPLICIT_CARBON)
        .and_then(|raw| raw.trim().parse().ok());
    atom.hydrogen_placement =
        parse_compass(node, names::ATTR_HYDROGEN_PLACEMENT, &mut messages);
    atom.group_placement = parse_compass(node, names::ATTR_GROUP_PLACEMENT, &mut messages);
    atom.messages = messages;
    atom
}

/// 2D coordinates win; 3D (z discarded) is the fallback; nothing usable is
/// a diagnostic, never a failure.
fn read_position(node: Node, messages: &mut Vec<String>) -> Point2<f64> {
    if let (Some(x), Some(y)) = (
        attribute(node, names::ATTR_X2),
        attribute(node, names::ATTR_Y2),
    ) {
        match (x.trim().parse(), y.trim().parse()) {
            (Ok(x), Ok(y)) => return Point2::new(x, y),
            _ => messages.push(format!("unparsable 2D coordinates x2='{}' y2='{}'", x, y)),
        }
    }
    if let (Some(x), Some(y)) = (
        attribute(node, names::ATTR_X3),
        attribute(node, names::ATTR_Y3),
    ) {
        match (x.trim().parse(), y.trim().parse()) {
            (Ok(x), Ok(y)) => return Point2::new(x, y),
            _ => messages.push(format!("unparsable 3D coordinates x3='{}' y3='{}'", x, y)),
        }
    }
    messages.push("atom has no usable coordinates".to_string());
    Point2::origin()
}

fn read_bond(
    node: Node,
    id_map: &HashMap<String, AtomId>,
    warnings: &mut Vec<String>,
) -> Result<Option<Bond>, CmlError> {
    let bond_id = attribute(node, names::ATTR_ID);

    let Some(refs) = attribute(node, names::ATTR_ATOM_REFS_2) else {
        warnings.push(format!(
            "bond '{}' has no atomRefs2 attribute and was skipped",
            bond_id.unwrap_or("<unnamed>")
        ));
        return Ok(None);
    };
    let tokens: Vec<&str> = refs.split_whitespace().collect();
    if tokens.len() != 2 {
        warnings.push(format!(
            "bond '{}' needs exactly two atom refs, got '{}'",
            bond_id.unwrap_or("<unnamed>"),
            refs
        ));
        return Ok(None);
    }
    let start = *id_map
        .get(tokens[0])
        .ok_or_else(|| CmlError::unknown_atom_ref(bond_id, tokens[0]))?;
    let end = *id_map
        .get(tokens[1])
        .ok_or_else(|| CmlError::unknown_atom_ref(bond_id, tokens[1]))?;

    let order = match attribute(node, names::ATTR_ORDER) {
        None => BondOrder::default(),
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warnings.push(format!(
                "bond order '{}' not recognized; treated as single",
                raw
            ));
            BondOrder::Single
        }),
    };

    let mut bond = Bond::new(start, end, order);
    bond.id = bond_id.map(String::from);

    if let Some(stereo_node) = cml_children(node, names::EL_BOND_STEREO).next() {
        if let Some(text) = stereo_node.text().map(str::trim).filter(|t| !t.is_empty()) {
            match text.parse() {
                Ok(stereo) => bond.stereo = Some(stereo),
                Err(()) => warnings.push(format!("bond stereo '{}' not recognized", text)),
            }
        }
    }
    if let Some(raw) = ext_attribute(node, names::ATTR_BOND_PLACEMENT) {
        match raw.trim().parse() {
            Ok(placement) => bond.placement = Some(placement),
            Err(()) => warnings.push(format!("bond placement '{}' not recognized", raw)),
        }
    }

    Ok(Some(bond))
}

fn read_textual_properties(molecule: &mut Molecule, node: Node) {
    for formula_node in cml_children(node, names::EL_FORMULA) {
        let value = attribute(formula_node, names::ATTR_INLINE)
            .map(String::from)
            .or_else(|| element_text(formula_node))
            .unwrap_or_default();
        molecule.formulas.push(TextualProperty {
            id: attribute(formula_node, names::ATTR_ID).map(String::from),
            dict_ref: normalize_dict_ref(
                attribute(formula_node, names::ATTR_CONVENTION),
                names::DEFAULT_FORMULA_CONVENTION,
            ),
            value,
        });
    }
    for name_node in cml_children(node, names::EL_NAME) {
        molecule.names.push(TextualProperty {
            id: attribute(name_node, names::ATTR_ID).map(String::from),
            dict_ref: normalize_dict_ref(
                attribute(name_node, names::ATTR_DICT_REF),
                names::DEFAULT_NAME_DICT_REF,
            ),
            value: element_text(name_node).unwrap_or_default(),
        });
    }
    for label_node in cml_children(node, names::EL_LABEL) {
        let value = attribute(label_node, names::ATTR_VALUE)
            .map(String::from)
            .or_else(|| element_text(label_node))
            .unwrap_or_default();
        molecule.captions.push(TextualProperty {
            id: attribute(label_node, names::ATTR_ID).map(String::from),
            dict_ref: normalize_dict_ref(
                attribute(label_node, names::ATTR_DICT_REF),
                names::DEFAULT_CAPTION_DICT_REF,
            ),
            value,
        });
    }
}

/// Charge, spin multiplicity, repeat count, bracket display and the
/// explicit-carbon flag are meaningless on a bare single atom; a molecule
/// that holds exactly one is normalized to carry none of them.
fn normalize_single_atom(molecule: &mut Molecule) {
    if molecule.children.is_empty() && molecule.atoms_iter().count() == 1 {
        molecule.formal_charge = None;
        molecule.spin_multiplicity = None;
        molecule.count = None;
        molecule.show_brackets = None;
        let atom_id = molecule
            .atoms_iter()
            .next()
            .map(|(id, _)| id)
            .expect("exactly one atom");
        if let Some(atom) = molecule.atom_mut(atom_id) {
            atom.explicit_carbon = None;
        }
    }
}

// ----- reactions ---------------------------------------------------------

fn read_reaction_scheme(
    document: &Document,
    node: Node,
    general: &mut Vec<String>,
) -> ReactionScheme {
    let mut scheme = ReactionScheme::new();
    scheme.id = attribute(node, names::ATTR_ID).map(String::from);
    for reaction_node in cml_children(node, names::EL_REACTION) {
        scheme
            .reactions
            .push(read_reaction(document, reaction_node, general));
    }
    scheme
}

fn read_reaction(document: &Document, node: Node, general: &mut Vec<String>) -> Reaction {
    let reaction_id = attribute(node, names::ATTR_ID);
    let tail = read_arrow_point(node, names::ATTR_ARROW_TAIL, reaction_id, general);
    let head = read_arrow_point(node, names::ATTR_ARROW_HEAD, reaction_id, general);

    let mut reaction = Reaction::new(tail, head);
    reaction.id = reaction_id.map(String::from);

    let kind = attribute(node, names::ATTR_REACTION_TYPE);
    let bias = attribute(node, names::ATTR_REACTION_BIAS);
    match ReactionType::from_attributes(kind, bias) {
        Some(reaction_type) => reaction.reaction_type = reaction_type,
        None => general.push(format!(
            "reaction '{}' has unrecognized type '{}'/bias '{}'",
            reaction_id.unwrap_or("<unnamed>"),
            kind.unwrap_or(""),
            bias.unwrap_or("")
        )),
    }

    reaction.reagent_text = inner_xml(document, ext_child(node, names::EL_REAGENT_TEXT));
    reaction.conditions_text =
        inner_xml(document, ext_child(node, names::EL_CONDITIONS_TEXT));

    read_participants(
        node,
        names::EL_REACTANT_LIST,
        names::EL_REACTANT,
        &mut reaction.reactants,
        general,
    );
    read_participants(
        node,
        names::EL_PRODUCT_LIST,
        names::EL_PRODUCT,
        &mut reaction.products,
        general,
    );

    reaction
}

fn read_arrow_point(
    node: Node,
    attr: &str,
    reaction_id: Option<&str>,
    general: &mut Vec<String>,
) -> Point2<f64> {
    match ext_attribute(node, attr) {
        None => Point2::origin(),
        Some(raw) => match names::parse_point(raw) {
            Some((x, y)) => Point2::new(x, y),
            None => {
                general.push(format!(
                    "reaction '{}' has unparsable arrow point {}='{}'",
                    reaction_id.unwrap_or("<unnamed>"),
                    attr,
                    raw
                ));
                Point2::origin()
            }
        },
    }
}

fn read_participants(
    node: Node,
    list_name: &'static str,
    entry_name: &'static str,
    out: &mut Vec<Participant>,
    general: &mut Vec<String>,
) {
    for list in cml_children(node, list_name) {
        for entry in cml_children(list, entry_name) {
            match attribute(entry, names::ATTR_REF) {
                Some(molecule_ref) => out.push(Participant {
                    id: attribute(entry, names::ATTR_ID).map(String::from),
                    molecule_ref: molecule_ref.to_string(),
                }),
                None => general.push(format!(
                    "{} entry without a ref attribute was skipped",
                    entry_name
                )),
            }
        }
    }
}

// ----- small shared helpers ----------------------------------------------

fn parse_number_attribute<T: std::str::FromStr>(
    node: Node,
    name: &str,
    diagnostics: &mut Vec<String>,
) -> Option<T> {
    let raw = attribute(node, name)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            diagnostics.push(format!("attribute {}='{}' could not be parsed", name, raw));
            None
        }
    }
}

fn parse_compass(
    node: Node,
    name: &str,
    diagnostics: &mut Vec<String>,
) -> Option<crate::core::models::atom::CompassPoint> {
    let raw = ext_attribute(node, name)?;
    match raw.trim().parse() {
        Ok(point) => Some(point),
        Err(()) => {
            diagnostics.push(format!("placement '{}' is not a compass point", raw));
            None
        }
    }
}

fn normalize_dict_ref(raw: Option<&str>, default: &str) -> String {
    match raw {
        None => default.to_string(),
        Some(names::LEGACY_UNKNOWN_DICT_REF) => default.to_string(),
        Some(other) => other.to_string(),
    }
}

fn element_text(node: Node) -> Option<String> {
    node.text()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(String::from)
}

/// The verbatim markup between an element's tags, `None` when empty.
fn inner_xml(document: &Document, node: Option<Node>) -> Option<String> {
    let node = node?;
    let first = node.first_child()?;
    let last = node.last_child()?;
    let text = document
        .input_text()
        .get(first.range().start..last.range().end)?;
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
