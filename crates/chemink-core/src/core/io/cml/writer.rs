use super::ExportOptions;
use super::names;
use crate::core::io::error::CmlError;
use crate::core::models::molecule::Molecule;
use crate::core::models::model::Model;
use crate::core::models::reaction::{Reaction, ReactionScheme};
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use std::io::Cursor;
use tracing::instrument;

type XmlWriter = Cursor<Vec<u8>>;

/// Serializes a model to CML text.
///
/// Ids are backfilled first (no element is ever emitted without one); the
/// caller's model is untouched; backfill happens on an internal copy.
/// The root is `<cml>` unless the caller asked for a molecule root and the
/// model holds exactly one molecule and no reactions.
#[instrument(skip_all)]
pub(crate) fn write_document(model: &Model, options: &ExportOptions) -> Result<String, CmlError> {
    let mut model = model.clone();
    model.set_missing_ids();

    let cursor = Cursor::new(Vec::new());
    let mut writer = if options.compressed {
        Writer::new(cursor)
    } else {
        Writer::new_with_indent(cursor, b' ', 2)
    };

    let single_molecule_root =
        !options.cml_is_root && model.schemes.is_empty() && model.molecules.len() == 1;
    if single_molecule_root {
        write_molecule(
            &mut writer,
            &model.molecules[0],
            true,
            model.custom_xml_part_guid.as_deref(),
        )?;
    } else {
        let mut root = BytesStart::new(names::EL_CML);
        push_namespace_declarations(&mut root);
        if let Some(guid) = model.custom_xml_part_guid.as_deref() {
            push_ext_attribute(&mut root, names::ATTR_CUSTOM_XML_PART_GUID, guid);
        }
        writer.write_event(Event::Start(root))?;
        for molecule in &model.molecules {
            write_molecule(&mut writer, molecule, false, None)?;
        }
        for scheme in &model.schemes {
            write_scheme(&mut writer, scheme)?;
        }
        writer.write_event(Event::End(BytesEnd::new(names::EL_CML)))?;
    }

    let bytes = writer.into_inner().into_inner();
    Ok(String::from_utf8(bytes)?)
}

fn push_namespace_declarations(element: &mut BytesStart) {
    element.push_attribute(("xmlns", names::CML_NAMESPACE));
    element.push_attribute((
        format!("xmlns:{}", names::CONVENTIONS_PREFIX).as_str(),
        names::CONVENTIONS_NAMESPACE,
    ));
    element.push_attribute((
        format!("xmlns:{}", names::EXT_PREFIX).as_str(),
        names::EXT_NAMESPACE,
    ));
    element.push_attribute((names::ATTR_CONVENTION, names::MOLECULAR_CONVENTION));
}

fn push_ext_attribute(element: &mut BytesStart, name: &str, value: &str) {
    element.push_attribute((format!("{}:{}", names::EXT_PREFIX, name).as_str(), value));
}

fn write_molecule(
    writer: &mut Writer<XmlWriter>,
    molecule: &Molecule,
    as_root: bool,
    guid: Option<&str>,
) -> Result<(), CmlError> {
    let mut start = BytesStart::new(names::EL_MOLECULE);
    if as_root {
        push_namespace_declarations(&mut start);
        if let Some(guid) = guid {
            push_ext_attribute(&mut start, names::ATTR_CUSTOM_XML_PART_GUID, guid);
        }
    }
    let id = molecule.id.as_deref().expect("ids backfilled before write");
    start.push_attribute((names::ATTR_ID, id));
    if let Some(charge) = molecule.formal_charge {
        start.push_attribute((names::ATTR_FORMAL_CHARGE, charge.to_string().as_str()));
    }
    if let Some(spin) = molecule.spin_multiplicity {
        start.push_attribute((names::ATTR_SPIN_MULTIPLICITY, spin.to_string().as_str()));
    }
    if let Some(count) = molecule.count {
        start.push_attribute((names::ATTR_COUNT, count.to_string().as_str()));
    }
    if let Some(brackets) = molecule.show_brackets {
        push_ext_attribute(
            &mut start,
            names::ATTR_SHOW_BRACKETS,
            if brackets { "true" } else { "false" },
        );
    }
    writer.write_event(Event::Start(start))?;

    if molecule.atoms_iter().next().is_some() {
        writer.write_event(Event::Start(BytesStart::new(names::EL_ATOM_ARRAY)))?;
        for (_, atom) in molecule.atoms_iter() {
            let mut element = BytesStart::new(names::EL_ATOM);
            element.push_attribute((
                names::ATTR_ID,
                atom.id.as_deref().expect("ids backfilled before write"),
            ));
            element.push_attribute((names::ATTR_ELEMENT_TYPE, atom.kind.symbol()));
            element.push_attribute((
                names::ATTR_X2,
                names::format_coordinate(atom.position.x).as_str(),
            ));
            element.push_attribute((
                names::ATTR_Y2,
                names::format_coordinate(atom.position.y).as_str(),
            ));
            if let Some(charge) = atom.formal_charge {
                element.push_attribute((names::ATTR_FORMAL_CHARGE, charge.to_string().as_str()));
            }
            if let Some(isotope) = atom.isotope_number {
                element
                    .push_attribute((names::ATTR_ISOTOPE_NUMBER, isotope.to_string().as_str()));
            }
            if let Some(explicit) = atom.explicit_carbon {
                push_ext_attribute(
                    &mut element,
                    names::ATTR_EXPLICIT_CARBON,
                    if explicit { "true" } else { "false" },
                );
            }
            if let Some(placement) = atom.hydrogen_placement {
                push_ext_attribute(
                    &mut element,
                    names::ATTR_HYDROGEN_PLACEMENT,
                    &placement.to_string(),
                );
            }
            if let Some(placement) = atom.group_placement {
                push_ext_attribute(
                    &mut element,
                    names::ATTR_GROUP_PLACEMENT,
                    &placement.to_string(),
                );
            }
            writer.write_event(Event::Empty(element))?;
        }
        writer.write_event(Event::End(BytesEnd::new(names::EL_ATOM_ARRAY)))?;
    }

    if !molecule.bonds().is_empty() {
        writer.write_event(Event::Start(BytesStart::new(names::EL_BOND_ARRAY)))?;
        for bond in molecule.bonds() {
            let start_ref = molecule
                .atom(bond.start)
                .and_then(|atom| atom.id.as_deref())
                .expect("bond endpoints exist with backfilled ids");
            let end_ref = molecule
                .atom(bond.end)
                .and_then(|atom| atom.id.as_deref())
                .expect("bond endpoints exist with backfilled ids");

            let mut element = BytesStart::new(names::EL_BOND);
            element.push_attribute((
                names::ATTR_ID,
                bond.id.as_deref().expect("ids backfilled before write"),
            ));
            element.push_attribute((
                names::ATTR_ATOM_REFS_2,
                format!("{} {}", start_ref, end_ref).as_str(),
            ));
            element.push_attribute((names::ATTR_ORDER, bond.order.to_string().as_str()));
            if let Some(placement) = bond.placement {
                push_ext_attribute(
                    &mut element,
                    names::ATTR_BOND_PLACEMENT,
                    &placement.to_string(),
                );
            }

            match bond.stereo {
                None => writer.write_event(Event::Empty(element))?,
                Some(stereo) => {
                    writer.write_event(Event::Start(element))?;
                    writer
                        .write_event(Event::Start(BytesStart::new(names::EL_BOND_STEREO)))?;
                    writer.write_event(Event::Text(BytesText::new(&stereo.to_string())))?;
                    writer.write_event(Event::End(BytesEnd::new(names::EL_BOND_STEREO)))?;
                    writer.write_event(Event::End(BytesEnd::new(names::EL_BOND)))?;
                }
            }
        }
        writer.write_event(Event::End(BytesEnd::new(names::EL_BOND_ARRAY)))?;
    }

    for formula in &molecule.formulas {
        let mut element = BytesStart::new(names::EL_FORMULA);
        element.push_attribute((
            names::ATTR_ID,
            formula.id.as_deref().expect("ids backfilled before write"),
        ));
        element.push_attribute((names::ATTR_CONVENTION, formula.dict_ref.as_str()));
        element.push_attribute((names::ATTR_INLINE, formula.value.as_str()));
        writer.write_event(Event::Empty(element))?;
    }
    for name in &molecule.names {
        let mut element = BytesStart::new(names::EL_NAME);
        element.push_attribute((
            names::ATTR_ID,
            name.id.as_deref().expect("ids backfilled before write"),
        ));
        element.push_attribute((names::ATTR_DICT_REF, name.dict_ref.as_str()));
        writer.write_event(Event::Start(element))?;
        writer.write_event(Event::Text(BytesText::new(&name.value)))?;
        writer.write_event(Event::End(BytesEnd::new(names::EL_NAME)))?;
    }
    for caption in &molecule.captions {
        let mut element = BytesStart::new(names::EL_LABEL);
        element.push_attribute((
            names::ATTR_ID,
            caption.id.as_deref().expect("ids backfilled before write"),
        ));
        element.push_attribute((names::ATTR_DICT_REF, caption.dict_ref.as_str()));
        element.push_attribute((names::ATTR_VALUE, caption.value.as_str()));
        writer.write_event(Event::Empty(element))?;
    }

    for child in &molecule.children {
        write_molecule(writer, child, false, None)?;
    }

    writer.write_event(Event::End(BytesEnd::new(names::EL_MOLECULE)))?;
    Ok(())
}

fn write_scheme(writer: &mut Writer<XmlWriter>, scheme: &ReactionScheme) -> Result<(), CmlError> {
    let mut start = BytesStart::new(names::EL_REACTION_SCHEME);
    start.push_attribute((
        names::ATTR_ID,
        scheme.id.as_deref().expect("ids backfilled before write"),
    ));
    writer.write_event(Event::Start(start))?;
    for reaction in &scheme.reactions {
        write_reaction(writer, reaction)?;
    }
    writer.write_event(Event::End(BytesEnd::new(names::EL_REACTION_SCHEME)))?;
    Ok(())
}

fn write_reaction(writer: &mut Writer<XmlWriter>, reaction: &Reaction) -> Result<(), CmlError> {
    let mut start = BytesStart::new(names::EL_REACTION);
    start.push_attribute((
        names::ATTR_ID,
        reaction.id.as_deref().expect("ids backfilled before write"),
    ));
    if let Some(kind) = reaction.reaction_type.type_attribute() {
        start.push_attribute((names::ATTR_REACTION_TYPE, kind));
    }
    if let Some(bias) = reaction.reaction_type.bias_attribute() {
        start.push_attribute((names::ATTR_REACTION_BIAS, bias));
    }
    push_ext_attribute(
        &mut start,
        names::ATTR_ARROW_TAIL,
        &names::format_point(reaction.tail.x, reaction.tail.y),
    );
    push_ext_attribute(
        &mut start,
        names::ATTR_ARROW_HEAD,
        &names::format_point(reaction.head.x, reaction.head.y),
    );
    writer.write_event(Event::Start(start))?;

    for (element_name, text) in [
        (names::EL_REAGENT_TEXT, &reaction.reagent_text),
        (names::EL_CONDITIONS_TEXT, &reaction.conditions_text),
    ] {
        if let Some(markup) = text {
            let qualified = format!("{}:{}", names::EXT_PREFIX, element_name);
            writer.write_event(Event::Start(BytesStart::new(qualified.as_str())))?;
            // Opaque rich text: emit the captured markup verbatim.
            writer.write_event(Event::Text(BytesText::from_escaped(markup.as_str())))?;
            writer.write_event(Event::End(BytesEnd::new(qualified.as_str())))?;
        }
    }

    for (list_name, entry_name, participants) in [
        (
            names::EL_REACTANT_LIST,
            names::EL_REACTANT,
            &reaction.reactants,
        ),
        (
            names::EL_PRODUCT_LIST,
            names::EL_PRODUCT,
            &reaction.products,
        ),
    ] {
        if participants.is_empty() {
            continue;
        }
        writer.write_event(Event::Start(BytesStart::new(list_name)))?;
        for participant in participants {
            let mut element = BytesStart::new(entry_name);
            element.push_attribute((
                names::ATTR_ID,
                participant
                    .id
                    .as_deref()
                    .expect("ids backfilled before write"),
            ));
            element.push_attribute((names::ATTR_REF, participant.molecule_ref.as_str()));
            writer.write_event(Event::Empty(element))?;
        }
        writer.write_event(Event::End(BytesEnd::new(list_name)))?;
    }

    writer.write_event(Event::End(BytesEnd::new(names::EL_REACTION)))?;
    Ok(())
}
