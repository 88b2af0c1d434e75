use super::molecule::Molecule;
use super::reaction::ReactionScheme;
use crate::core::geometry::{self, BoundingBox};
use nalgebra::Point2;
use std::collections::HashSet;
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// Differences below this are considered "already at the target length".
const BOND_LENGTH_TOLERANCE: f64 = 1e-4;
/// A mean bond length below this is degenerate and scaling is a no-op.
const DEGENERATE_LENGTH: f64 = 1e-9;

/// The root aggregate: every top-level molecule and reaction scheme of one
/// loaded structure document.
///
/// A model is built empty, populated by the CML importer, edited in place,
/// and serialized back out; it is replaced wholesale rather than diffed.
/// Derived scalar properties are cached and recomputed only by
/// [`Model::refresh`]; call it after any bulk mutation before reading
/// them.
#[derive(Debug, Clone, Default)]
pub struct Model {
    pub molecules: Vec<Molecule>,
    pub schemes: Vec<ReactionScheme>,
    /// Correlates this model with the host document's stored XML part.
    pub custom_xml_part_guid: Option<String>,
    /// Diagnostics that belong to no particular entity.
    pub general_errors: Vec<String>,
    protected_labels: Option<Vec<String>>,
    concise_formula: String,
    mean_bond_length: f64,
    total_atoms_count: usize,
    has_reactions: bool,
    has_functional_groups: bool,
    has_nested_molecules: bool,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_molecule(&mut self, molecule: Molecule) {
        self.molecules.push(molecule);
    }

    pub fn add_reaction_scheme(&mut self, scheme: ReactionScheme) {
        self.schemes.push(scheme);
    }

    pub fn molecule_by_id(&self, id: &str) -> Option<&Molecule> {
        self.molecules
            .iter()
            .find(|molecule| molecule.id.as_deref() == Some(id))
    }

    /// Ids that must survive relabeling unchanged (used to keep externally
    /// referenced property ids stable across a re-import).
    pub fn set_protected_labels(&mut self, labels: Option<Vec<String>>) {
        self.protected_labels = labels;
    }

    pub fn protected_labels(&self) -> Option<&[String]> {
        self.protected_labels.as_deref()
    }

    // ----- cached derived properties -------------------------------------

    /// Recomputes every cached derived property from current structural
    /// state. Not triggered automatically by mutation.
    pub fn refresh(&mut self) {
        self.concise_formula = self.compute_concise_formula();
        self.mean_bond_length = self.compute_mean_bond_length();
        self.total_atoms_count = self
            .molecules
            .iter()
            .map(Molecule::atom_count)
            .sum::<usize>();
        self.has_reactions = self.schemes.iter().any(|s| !s.reactions.is_empty());
        self.has_functional_groups = self
            .molecules
            .iter()
            .any(Molecule::has_functional_groups);
        self.has_nested_molecules = self.molecules.iter().any(|m| !m.children.is_empty());
    }

    /// Cached at the last [`Model::refresh`].
    pub fn concise_formula(&self) -> &str {
        &self.concise_formula
    }

    /// Cached at the last [`Model::refresh`].
    pub fn mean_bond_length(&self) -> f64 {
        self.mean_bond_length
    }

    /// Cached at the last [`Model::refresh`].
    pub fn total_atoms_count(&self) -> usize {
        self.total_atoms_count
    }

    pub fn has_reactions(&self) -> bool {
        self.has_reactions
    }

    pub fn has_functional_groups(&self) -> bool {
        self.has_functional_groups
    }

    pub fn has_nested_molecules(&self) -> bool {
        self.has_nested_molecules
    }

    fn compute_concise_formula(&self) -> String {
        let parts: Vec<String> = self
            .molecules
            .iter()
            .map(Molecule::concise_formula)
            .filter(|formula| !formula.is_empty())
            .collect();
        parts.join(" · ")
    }

    fn compute_mean_bond_length(&self) -> f64 {
        let lengths: Vec<f64> = self
            .molecules
            .iter()
            .flat_map(|molecule| molecule.bond_lengths())
            .collect();
        if lengths.is_empty() {
            0.0
        } else {
            lengths.iter().sum::<f64>() / lengths.len() as f64
        }
    }

    // ----- diagnostics ---------------------------------------------------

    /// Every error attached to the model or any of its entities.
    pub fn all_errors(&self) -> Vec<String> {
        let mut errors = self.general_errors.clone();
        for molecule in &self.molecules {
            collect_errors(molecule, &mut errors);
        }
        errors
    }

    /// Every warning attached to any molecule, atoms included.
    pub fn all_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        for molecule in &self.molecules {
            collect_warnings(molecule, &mut warnings);
        }
        warnings
    }

    // ----- id management -------------------------------------------------

    /// Assigns an id to every entity that lacks one, leaving existing ids
    /// untouched.
    pub fn set_missing_ids(&mut self) {
        self.relabel(false);
    }

    /// Assigns canonical hierarchical string ids.
    ///
    /// Molecules are numbered depth-first across the model (`m1`, `m2`, …);
    /// atoms, bonds and textual properties are prefixed by their owning
    /// molecule id (`m2.a1`, `m2.b3`, `m2.f1`); schemes and reactions use
    /// `rs{n}`/`r{n}`. With `force == false` only missing ids are filled
    /// in; existing ids are never reused for another entity. Protected
    /// labels survive in both modes, and internal ids are never touched,
    /// so live graph edges stay valid. Reaction participant refs are
    /// remapped along with their molecules.
    #[instrument(skip(self))]
    pub fn relabel(&mut self, force: bool) {
        let protected: HashSet<String> = self
            .protected_labels
            .iter()
            .flatten()
            .cloned()
            .collect();

        let mut used: HashSet<String> = HashSet::new();
        if !force {
            for molecule in &self.molecules {
                collect_used_ids(molecule, &mut used);
            }
        }
        used.extend(protected.iter().cloned());

        let mut molecule_counter = 0usize;
        let mut renames: Vec<(String, String)> = Vec::new();
        let mut molecules = std::mem::take(&mut self.molecules);
        for molecule in &mut molecules {
            relabel_molecule(
                molecule,
                force,
                &protected,
                &mut used,
                &mut molecule_counter,
                &mut renames,
            );
        }
        self.molecules = molecules;

        let mut scheme_counter = 0usize;
        let mut reaction_counter = 0usize;
        for scheme in &mut self.schemes {
            assign_id(
                &mut scheme.id,
                force,
                &protected,
                &mut used,
                || {
                    scheme_counter += 1;
                    format!("rs{}", scheme_counter)
                },
            );
            for reaction in &mut scheme.reactions {
                assign_id(
                    &mut reaction.id,
                    force,
                    &protected,
                    &mut used,
                    || {
                        reaction_counter += 1;
                        format!("r{}", reaction_counter)
                    },
                );
                let reaction_id = reaction.id.clone().unwrap_or_default();
                let mut participant_counter = 0usize;
                for participant in reaction
                    .reactants
                    .iter_mut()
                    .chain(reaction.products.iter_mut())
                {
                    assign_id(
                        &mut participant.id,
                        force,
                        &protected,
                        &mut used,
                        || {
                            participant_counter += 1;
                            format!("{}.p{}", reaction_id, participant_counter)
                        },
                    );
                }
                for (old, new) in &renames {
                    reaction.remap_participant(old, new);
                }
            }
        }

        debug!(molecules = molecule_counter, "relabel complete");
    }

    /// Replaces every structural id with a freshly generated UUID, making
    /// the model's labels globally unique (e.g. before merging models).
    /// Internal ids are untouched.
    pub fn relabel_guids(&mut self) {
        let mut renames: Vec<(String, String)> = Vec::new();
        let mut molecules = std::mem::take(&mut self.molecules);
        for molecule in &mut molecules {
            relabel_molecule_guids(molecule, &mut renames);
        }
        self.molecules = molecules;

        for scheme in &mut self.schemes {
            scheme.id = Some(new_guid());
            for reaction in &mut scheme.reactions {
                reaction.id = Some(new_guid());
                for participant in reaction
                    .reactants
                    .iter_mut()
                    .chain(reaction.products.iter_mut())
                {
                    participant.id = Some(new_guid());
                }
                for (old, new) in &renames {
                    reaction.remap_participant(old, new);
                }
            }
        }
    }

    // ----- geometry operations -------------------------------------------

    /// Bounding box over every atom position, `None` for an empty model.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.molecules
            .iter()
            .filter_map(Molecule::bounding_box)
            .reduce(|a, b| a.union(&b))
    }

    /// Mean of every atom position, `None` for an empty model.
    pub fn centroid(&self) -> Option<Point2<f64>> {
        geometry::centroid(
            self.molecules
                .iter()
                .flat_map(|molecule| molecule.positions()),
        )
    }

    /// Uniformly rescales every atom position so the mean bond length
    /// becomes `target`, scaling about the model centroid so the visual
    /// anchor is stable. A degenerate current mean (no bonds, coincident
    /// atoms) makes this a no-op. Refreshes cached properties.
    #[instrument(skip(self))]
    pub fn scale_to_average_bond_length(&mut self, target: f64) {
        let current = self.compute_mean_bond_length();
        if current <= DEGENERATE_LENGTH || target <= 0.0 {
            debug!(current, target, "scale skipped for degenerate input");
            self.refresh();
            return;
        }

        let origin = self.centroid().expect("bonds imply atoms");
        let factor = target / current;
        for molecule in &mut self.molecules {
            molecule.scale_about(origin, factor);
        }
        info!(from = current, to = target, "rescaled to target bond length");
        self.refresh();
    }

    /// Rescales to `target` when `enabled` and the current mean differs
    /// beyond tolerance. Returns a description of the change, or an empty
    /// string when nothing happened (including the disabled case).
    pub fn ensure_bond_length(&mut self, target: f64, enabled: bool) -> String {
        if !enabled {
            return String::new();
        }
        let current = self.compute_mean_bond_length();
        if current <= DEGENERATE_LENGTH || (current - target).abs() <= BOND_LENGTH_TOLERANCE {
            return String::new();
        }

        self.scale_to_average_bond_length(target);
        format!(
            "Structure rescaled from a mean bond length of {:.4} to {:.4}",
            current, target
        )
    }

    /// Removes plain explicit hydrogens everywhere, then rebuilds ring
    /// caches and refreshes derived properties. Returns the number of
    /// atoms removed.
    #[instrument(skip(self))]
    pub fn remove_explicit_hydrogens(&mut self) -> usize {
        let removed: usize = self
            .molecules
            .iter_mut()
            .map(Molecule::remove_explicit_hydrogens)
            .sum();
        if removed > 0 {
            for molecule in &mut self.molecules {
                molecule.rebuild_rings();
            }
            info!(removed, "explicit hydrogens removed");
        }
        self.refresh();
        removed
    }
}

fn collect_errors(molecule: &Molecule, out: &mut Vec<String>) {
    out.extend(molecule.errors.iter().cloned());
    for (_, atom) in molecule.atoms_iter() {
        out.extend(atom.messages.iter().cloned());
    }
    for child in &molecule.children {
        collect_errors(child, out);
    }
}

fn collect_warnings(molecule: &Molecule, out: &mut Vec<String>) {
    out.extend(molecule.warnings.iter().cloned());
    for child in &molecule.children {
        collect_warnings(child, out);
    }
}

fn collect_used_ids(molecule: &Molecule, used: &mut HashSet<String>) {
    used.extend(molecule.id.iter().cloned());
    for (_, atom) in molecule.atoms_iter() {
        used.extend(atom.id.iter().cloned());
    }
    for bond in molecule.bonds() {
        used.extend(bond.id.iter().cloned());
    }
    for property in molecule
        .formulas
        .iter()
        .chain(molecule.names.iter())
        .chain(molecule.captions.iter())
    {
        used.extend(property.id.iter().cloned());
    }
    for child in &molecule.children {
        collect_used_ids(child, used);
    }
}

/// Assigns the next generated id unless the current one is protected or
/// (in non-force mode) already present. Generated candidates skip over ids
/// in use.
fn assign_id(
    id: &mut Option<String>,
    force: bool,
    protected: &HashSet<String>,
    used: &mut HashSet<String>,
    mut next: impl FnMut() -> String,
) {
    if let Some(current) = id.as_deref() {
        if protected.contains(current) || !force {
            return;
        }
    }
    let mut candidate = next();
    while used.contains(&candidate) {
        candidate = next();
    }
    used.insert(candidate.clone());
    *id = Some(candidate);
}

fn relabel_molecule(
    molecule: &mut Molecule,
    force: bool,
    protected: &HashSet<String>,
    used: &mut HashSet<String>,
    molecule_counter: &mut usize,
    renames: &mut Vec<(String, String)>,
) {
    let old_id = molecule.id.clone();
    assign_id(&mut molecule.id, force, protected, used, || {
        *molecule_counter += 1;
        format!("m{}", molecule_counter)
    });
    if let (Some(old), Some(new)) = (old_id.as_deref(), molecule.id.as_deref()) {
        if old != new {
            renames.push((old.to_string(), new.to_string()));
        }
    }

    let prefix = molecule.id.clone().unwrap_or_default();
    let mut atom_counter = 0usize;
    let atom_ids: Vec<_> = molecule.atoms_iter().map(|(id, _)| id).collect();
    for atom_id in atom_ids {
        let atom = molecule.atom_mut(atom_id).expect("atom id just listed");
        assign_id(&mut atom.id, force, protected, used, || {
            atom_counter += 1;
            format!("{}.a{}", prefix, atom_counter)
        });
    }

    let mut bond_counter = 0usize;
    for bond in molecule.bonds_iter_mut() {
        assign_id(&mut bond.id, force, protected, used, || {
            bond_counter += 1;
            format!("{}.b{}", prefix, bond_counter)
        });
    }

    for (marker, properties) in [
        ("f", &mut molecule.formulas),
        ("n", &mut molecule.names),
        ("l", &mut molecule.captions),
    ] {
        let mut property_counter = 0usize;
        for property in properties.iter_mut() {
            assign_id(&mut property.id, force, protected, used, || {
                property_counter += 1;
                format!("{}.{}{}", prefix, marker, property_counter)
            });
        }
    }

    for child in &mut molecule.children {
        relabel_molecule(child, force, protected, used, molecule_counter, renames);
    }
}

fn relabel_molecule_guids(molecule: &mut Molecule, renames: &mut Vec<(String, String)>) {
    if let Some(old) = molecule.id.clone() {
        let new = new_guid();
        renames.push((old, new.clone()));
        molecule.id = Some(new);
    } else {
        molecule.id = Some(new_guid());
    }

    let atom_ids: Vec<_> = molecule.atoms_iter().map(|(id, _)| id).collect();
    for atom_id in atom_ids {
        molecule.atom_mut(atom_id).expect("atom id just listed").id = Some(new_guid());
    }
    for bond in molecule.bonds_iter_mut() {
        bond.id = Some(new_guid());
    }
    for property in molecule
        .formulas
        .iter_mut()
        .chain(molecule.names.iter_mut())
        .chain(molecule.captions.iter_mut())
    {
        property.id = Some(new_guid());
    }
    for child in &mut molecule.children {
        relabel_molecule_guids(child, renames);
    }
}

fn new_guid() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::{Atom, AtomKind};
    use crate::core::models::bond::{Bond, BondOrder};
    use crate::core::models::element::Element;
    use crate::core::models::reaction::{Participant, Reaction};

    const TOLERANCE: f64 = 1e-9;

    fn two_carbon_model(separation: f64) -> Model {
        let mut molecule = Molecule::new();
        let a = molecule.add_atom(Atom::new(
            AtomKind::Element(Element::C),
            Point2::new(0.0, 0.0),
        ));
        let b = molecule.add_atom(Atom::new(
            AtomKind::Element(Element::C),
            Point2::new(separation, 0.0),
        ));
        molecule.add_bond(Bond::new(a, b, BondOrder::Single)).unwrap();

        let mut model = Model::new();
        model.add_molecule(molecule);
        model.refresh();
        model
    }

    mod derived_properties {
        use super::*;

        #[test]
        fn refresh_is_explicit() {
            let mut model = two_carbon_model(4.0);
            assert_eq!(model.total_atoms_count(), 2);
            assert!((model.mean_bond_length() - 4.0).abs() < TOLERANCE);

            let mut extra = Molecule::new();
            extra.add_atom(Atom::new(
                AtomKind::Element(Element::O),
                Point2::new(9.0, 9.0),
            ));
            model.add_molecule(extra);

            // Stale until refresh runs.
            assert_eq!(model.total_atoms_count(), 2);
            model.refresh();
            assert_eq!(model.total_atoms_count(), 3);
        }

        #[test]
        fn empty_model_has_neutral_derived_values() {
            let mut model = Model::new();
            model.refresh();
            assert_eq!(model.concise_formula(), "");
            assert_eq!(model.mean_bond_length(), 0.0);
            assert_eq!(model.total_atoms_count(), 0);
            assert!(!model.has_reactions());
            assert!(!model.has_nested_molecules());
        }

        #[test]
        fn formula_joins_top_level_molecules() {
            let mut model = two_carbon_model(1.0);
            let mut water = Molecule::new();
            let o = water.add_atom(Atom::new(
                AtomKind::Element(Element::O),
                Point2::new(5.0, 0.0),
            ));
            for dx in [-0.5, 0.5] {
                let h = water.add_atom(Atom::new(
                    AtomKind::Element(Element::H),
                    Point2::new(5.0 + dx, 1.0),
                ));
                water.add_bond(Bond::new(o, h, BondOrder::Single)).unwrap();
            }
            model.add_molecule(water);
            model.refresh();

            assert_eq!(model.concise_formula(), "C2 · H2O");
        }
    }

    mod scaling {
        use super::*;

        #[test]
        fn scales_to_target_about_the_centroid() {
            let mut model = two_carbon_model(4.0);
            let midpoint_before = model.centroid().unwrap();

            model.scale_to_average_bond_length(1.0);

            assert!((model.mean_bond_length() - 1.0).abs() < TOLERANCE);
            let midpoint_after = model.centroid().unwrap();
            assert!((midpoint_after.x - midpoint_before.x).abs() < TOLERANCE);
            assert!((midpoint_after.y - midpoint_before.y).abs() < TOLERANCE);
        }

        #[test]
        fn scaling_round_trip_restores_positions() {
            let mut model = two_carbon_model(4.0);
            let original: Vec<Point2<f64>> = model.molecules[0].positions();

            model.scale_to_average_bond_length(1.7);
            model.scale_to_average_bond_length(4.0);

            let restored = model.molecules[0].positions();
            for (before, after) in original.iter().zip(restored.iter()) {
                assert!((before.x - after.x).abs() < TOLERANCE);
                assert!((before.y - after.y).abs() < TOLERANCE);
            }
        }

        #[test]
        fn degenerate_mean_is_a_no_op() {
            let mut molecule = Molecule::new();
            molecule.add_atom(Atom::new(
                AtomKind::Element(Element::C),
                Point2::new(3.0, 4.0),
            ));
            let mut model = Model::new();
            model.add_molecule(molecule);
            model.refresh();

            model.scale_to_average_bond_length(2.0);

            let position = model.molecules[0].positions()[0];
            assert_eq!(position, Point2::new(3.0, 4.0));
        }

        #[test]
        fn ensure_bond_length_reports_only_real_changes() {
            let mut model = two_carbon_model(4.0);

            assert_eq!(model.ensure_bond_length(1.0, false), "");
            assert!((model.mean_bond_length() - 4.0).abs() < TOLERANCE);

            let message = model.ensure_bond_length(1.0, true);
            assert!(message.contains("4.0000"));
            assert!(message.contains("1.0000"));
            assert!((model.mean_bond_length() - 1.0).abs() < TOLERANCE);

            assert_eq!(model.ensure_bond_length(1.0, true), "");
        }
    }

    mod relabeling {
        use super::*;

        fn labelled_model() -> Model {
            let mut model = two_carbon_model(1.0);
            let mut second = Molecule::new();
            second.add_atom(Atom::new(
                AtomKind::Element(Element::N),
                Point2::new(8.0, 0.0),
            ));
            model.add_molecule(second);
            model
        }

        #[test]
        fn relabel_assigns_hierarchical_ids() {
            let mut model = labelled_model();
            model.relabel(true);

            assert_eq!(model.molecules[0].id.as_deref(), Some("m1"));
            assert_eq!(model.molecules[1].id.as_deref(), Some("m2"));
            let atom_ids: Vec<_> = model.molecules[0]
                .atoms_iter()
                .map(|(_, atom)| atom.id.clone().unwrap())
                .collect();
            assert_eq!(atom_ids, vec!["m1.a1", "m1.a2"]);
            assert_eq!(model.molecules[0].bonds()[0].id.as_deref(), Some("m1.b1"));
        }

        #[test]
        fn relabel_is_idempotent() {
            let mut model = labelled_model();
            model.relabel(true);
            let first: Vec<_> = model.molecules[0]
                .atoms_iter()
                .map(|(_, atom)| atom.id.clone())
                .collect();

            model.relabel(true);
            let second: Vec<_> = model.molecules[0]
                .atoms_iter()
                .map(|(_, atom)| atom.id.clone())
                .collect();

            assert_eq!(first, second);
        }

        #[test]
        fn set_missing_ids_preserves_existing_ones() {
            let mut model = labelled_model();
            model.molecules[0].id = Some("keepme".to_string());

            model.set_missing_ids();

            assert_eq!(model.molecules[0].id.as_deref(), Some("keepme"));
            assert!(model.molecules[1].id.is_some());
            for (_, atom) in model.molecules[0].atoms_iter() {
                assert!(atom.id.is_some());
            }
        }

        #[test]
        fn protected_labels_survive_forced_relabeling() {
            let mut model = labelled_model();
            model.relabel(true);
            let protected_atom = model.molecules[0]
                .atoms_iter()
                .next()
                .map(|(_, atom)| atom.id.clone().unwrap())
                .unwrap();
            model.set_protected_labels(Some(vec![protected_atom.clone()]));

            // Shuffle everything else.
            model.molecules.swap(0, 1);
            model.relabel(true);

            let survivors: Vec<_> = model
                .molecules
                .iter()
                .flat_map(|m| m.atoms_iter().map(|(_, atom)| atom.id.clone().unwrap()))
                .collect();
            assert!(survivors.contains(&protected_atom));
        }

        #[test]
        fn relabel_remaps_reaction_participants() {
            let mut model = labelled_model();
            model.molecules[0].id = Some("old-molecule".to_string());
            let mut scheme = ReactionScheme::new();
            let mut reaction = Reaction::new(Point2::origin(), Point2::new(1.0, 0.0));
            reaction.reactants.push(Participant {
                id: None,
                molecule_ref: "old-molecule".to_string(),
            });
            scheme.reactions.push(reaction);
            model.add_reaction_scheme(scheme);

            model.relabel(true);

            let new_id = model.molecules[0].id.clone().unwrap();
            assert_eq!(
                model.schemes[0].reactions[0].reactants[0].molecule_ref,
                new_id
            );
            assert_eq!(model.schemes[0].id.as_deref(), Some("rs1"));
            assert_eq!(model.schemes[0].reactions[0].id.as_deref(), Some("r1"));
        }

        #[test]
        fn guid_relabel_makes_every_id_unique() {
            let mut model = labelled_model();
            model.relabel(true);
            model.relabel_guids();

            let mut seen = HashSet::new();
            for molecule in &model.molecules {
                assert!(seen.insert(molecule.id.clone().unwrap()));
                for (_, atom) in molecule.atoms_iter() {
                    assert!(seen.insert(atom.id.clone().unwrap()));
                }
                for bond in molecule.bonds() {
                    assert!(seen.insert(bond.id.clone().unwrap()));
                }
            }
            assert!(seen.iter().all(|id| id.len() == 36));
        }
    }

    mod hydrogen_removal {
        use super::*;

        #[test]
        fn removal_updates_caches() {
            let mut molecule = Molecule::new();
            let c = molecule.add_atom(Atom::new(
                AtomKind::Element(Element::C),
                Point2::new(0.0, 0.0),
            ));
            let h = molecule.add_atom(Atom::new(
                AtomKind::Element(Element::H),
                Point2::new(1.0, 0.0),
            ));
            molecule.add_bond(Bond::new(c, h, BondOrder::Single)).unwrap();
            let mut model = Model::new();
            model.add_molecule(molecule);
            model.refresh();
            assert_eq!(model.total_atoms_count(), 2);

            let removed = model.remove_explicit_hydrogens();

            assert_eq!(removed, 1);
            assert_eq!(model.total_atoms_count(), 1);
            assert_eq!(model.mean_bond_length(), 0.0);
        }
    }
}
