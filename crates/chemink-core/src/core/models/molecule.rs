use super::atom::{Atom, AtomKind};
use super::bond::Bond;
use super::ids::AtomId;
use super::rings::{self, Ring};
use crate::core::geometry::{self, BoundingBox};
use nalgebra::{Point2, Vector2};
use slotmap::{SecondaryMap, SlotMap};
use std::collections::{BTreeMap, VecDeque};

/// A formula, name, or caption attached to a molecule.
///
/// `dict_ref` identifies the dictionary the value belongs to (e.g. a
/// convention marker for formulas or a naming authority for names).
#[derive(Debug, Clone, PartialEq)]
pub struct TextualProperty {
    pub id: Option<String>,
    pub dict_ref: String,
    pub value: String,
}

/// A molecule: a flat atom/bond graph plus zero or more child molecules.
///
/// Molecules form a shallow tree: a parent may be a disconnected aggregate
/// (a salt, a multi-component structure) whose internally-connected parts
/// live in `children`. Atoms are stored in a slot map whose keys are the
/// internal ids all graph wiring uses; bonds keep insertion order.
///
/// The adjacency cache is maintained by every mutator. The ring cache is
/// NOT: callers must invoke [`Molecule::rebuild_rings`] after structural
/// edits before reading [`Molecule::rings`].
#[derive(Debug, Clone, Default)]
pub struct Molecule {
    /// Schema-scoped string id, e.g. `"m1"`. `None` until assigned.
    pub id: Option<String>,
    atoms: SlotMap<AtomId, Atom>,
    bonds: Vec<Bond>,
    adjacency: SecondaryMap<AtomId, Vec<AtomId>>,
    rings: Vec<Ring>,
    /// Internally-connected sub-molecules of a compound structure.
    pub children: Vec<Molecule>,
    pub formulas: Vec<TextualProperty>,
    pub names: Vec<TextualProperty>,
    pub captions: Vec<TextualProperty>,
    pub formal_charge: Option<i32>,
    pub spin_multiplicity: Option<i32>,
    /// Repeat count for bracketed fragments.
    pub count: Option<u32>,
    pub show_brackets: Option<bool>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl Molecule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieves an atom by its internal id.
    pub fn atom(&self, id: AtomId) -> Option<&Atom> {
        self.atoms.get(id)
    }

    pub fn atom_mut(&mut self, id: AtomId) -> Option<&mut Atom> {
        self.atoms.get_mut(id)
    }

    /// Iterates this molecule's own atoms (children excluded).
    pub fn atoms_iter(&self) -> impl Iterator<Item = (AtomId, &Atom)> {
        self.atoms.iter()
    }

    pub fn atoms_iter_mut(&mut self) -> impl Iterator<Item = (AtomId, &mut Atom)> {
        self.atoms.iter_mut()
    }

    /// This molecule's own bonds (children excluded), in insertion order.
    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    pub fn bonds_iter_mut(&mut self) -> impl Iterator<Item = &mut Bond> {
        self.bonds.iter_mut()
    }

    /// Adds an atom and initializes its adjacency entry.
    pub fn add_atom(&mut self, atom: Atom) -> AtomId {
        let atom_id = self.atoms.insert(atom);
        self.adjacency.insert(atom_id, Vec::new());
        atom_id
    }

    /// Adds a bond between two existing, distinct atoms.
    ///
    /// Returns `None` without mutating anything when either endpoint is
    /// missing or the endpoints coincide; a bond may never precede its
    /// atoms. Adding a bond over an already-bonded pair is idempotent.
    pub fn add_bond(&mut self, bond: Bond) -> Option<()> {
        if bond.start == bond.end {
            return None;
        }
        if !self.atoms.contains_key(bond.start) || !self.atoms.contains_key(bond.end) {
            return None;
        }

        if let Some(neighbors) = self.adjacency.get(bond.start) {
            if neighbors.contains(&bond.end) {
                return Some(());
            }
        }

        self.adjacency[bond.start].push(bond.end);
        self.adjacency[bond.end].push(bond.start);
        self.bonds.push(bond);
        Some(())
    }

    /// Removes an atom together with its incident bonds, repairing the
    /// adjacency cache. The ring cache is left stale; rebuild it after a
    /// batch of edits.
    pub fn remove_atom(&mut self, atom_id: AtomId) -> Option<Atom> {
        let atom = self.atoms.remove(atom_id)?;

        let original_bonds = std::mem::take(&mut self.bonds);
        self.bonds = original_bonds
            .into_iter()
            .filter(|bond| !bond.contains(atom_id))
            .collect();

        let neighbors = self.adjacency.remove(atom_id).unwrap_or_default();
        for neighbor_id in neighbors {
            if let Some(adjacency) = self.adjacency.get_mut(neighbor_id) {
                adjacency.retain(|&id| id != atom_id);
            }
        }

        Some(atom)
    }

    /// Bonded neighbors of an atom, from the adjacency cache.
    pub fn neighbors(&self, atom_id: AtomId) -> Option<&[AtomId]> {
        self.adjacency.get(atom_id).map(|v| v.as_slice())
    }

    /// The bond joining two atoms, if one exists.
    pub fn bond_between(&self, a: AtomId, b: AtomId) -> Option<&Bond> {
        self.bonds
            .iter()
            .find(|bond| bond.contains(a) && bond.contains(b))
    }

    pub(crate) fn bond_index_between(&self, a: AtomId, b: AtomId) -> Option<usize> {
        self.bonds
            .iter()
            .position(|bond| bond.contains(a) && bond.contains(b))
    }

    /// Maximal sets of atoms mutually reachable via bonds, in first-seen
    /// order. Every atom appears in exactly one component.
    pub fn connected_components(&self) -> Vec<Vec<AtomId>> {
        let mut visited: SecondaryMap<AtomId, ()> = SecondaryMap::new();
        let mut components = Vec::new();

        for (start, _) in self.atoms.iter() {
            if visited.contains_key(start) {
                continue;
            }
            let mut component = Vec::new();
            let mut queue = VecDeque::new();
            visited.insert(start, ());
            queue.push_back(start);
            while let Some(current) = queue.pop_front() {
                component.push(current);
                for &neighbor in self.adjacency.get(current).map(|v| v.as_slice()).unwrap_or(&[])
                {
                    if !visited.contains_key(neighbor) {
                        visited.insert(neighbor, ());
                        queue.push_back(neighbor);
                    }
                }
            }
            components.push(component);
        }

        components
    }

    /// Partitions a flat multi-component molecule into internally-connected
    /// child molecules and re-parents atoms and bonds into them.
    ///
    /// A molecule with fewer than two components is left untouched. After a
    /// split the parent owns no atoms or bonds of its own; molecule-level
    /// properties (names, charge, brackets…) stay on the parent. Returns
    /// the number of children produced (0 when untouched).
    pub fn split_into_children(&mut self) -> usize {
        let components = self.connected_components();
        if components.len() < 2 {
            return 0;
        }

        let bonds = std::mem::take(&mut self.bonds);
        let mut atoms = std::mem::take(&mut self.atoms);
        self.adjacency.clear();
        self.rings.clear();

        let mut produced = 0;
        for component in components {
            let mut child = Molecule::new();
            let mut remap: SecondaryMap<AtomId, AtomId> = SecondaryMap::new();
            for old_id in &component {
                let atom = atoms.remove(*old_id).expect("component atom exists");
                let new_id = child.add_atom(atom);
                remap.insert(*old_id, new_id);
            }
            for bond in bonds.iter().filter(|b| remap.contains_key(b.start)) {
                let mut moved = bond.clone();
                moved.start = remap[bond.start];
                moved.end = remap[bond.end];
                child
                    .add_bond(moved)
                    .expect("both endpoints were moved with the component");
            }
            self.children.push(child);
            produced += 1;
        }

        produced
    }

    /// Recomputes the minimal-cycle set for this molecule and its children.
    ///
    /// Ring perception is never triggered automatically: run this after any
    /// batch of atom/bond edits before reading [`Molecule::rings`].
    pub fn rebuild_rings(&mut self) {
        self.rings = rings::perceive(self);
        for child in &mut self.children {
            child.rebuild_rings();
        }
    }

    /// The cached ring set. Stale until [`Molecule::rebuild_rings`] runs.
    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    /// Deletes explicit hydrogens that are plain (no isotope, no charge),
    /// carry no stereo bond, and hang off exactly one heavy atom. Other
    /// hydrogens are silently kept. Recurses into children. Returns the
    /// number of atoms removed.
    pub fn remove_explicit_hydrogens(&mut self) -> usize {
        let mut removable = Vec::new();
        for (atom_id, atom) in self.atoms.iter() {
            if !atom.is_removable_hydrogen() {
                continue;
            }
            let neighbors = match self.neighbors(atom_id) {
                Some(n) if n.len() == 1 => n,
                _ => continue,
            };
            let heavy = neighbors[0];
            let neighbor_is_heavy = self
                .atom(heavy)
                .map(|a| !a.is_removable_hydrogen())
                .unwrap_or(false);
            if !neighbor_is_heavy {
                continue;
            }
            let bond_ok = self
                .bond_between(atom_id, heavy)
                .map(|b| b.stereo.is_none())
                .unwrap_or(false);
            if bond_ok {
                removable.push(atom_id);
            }
        }

        let mut removed = removable.len();
        for atom_id in removable {
            self.remove_atom(atom_id);
        }
        for child in &mut self.children {
            removed += child.remove_explicit_hydrogens();
        }
        removed
    }

    /// Own plus descendant atom count.
    pub fn atom_count(&self) -> usize {
        self.atoms.len() + self.children.iter().map(Molecule::atom_count).sum::<usize>()
    }

    /// Own plus descendant bond count.
    pub fn bond_count(&self) -> usize {
        self.bonds.len() + self.children.iter().map(Molecule::bond_count).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.atom_count() == 0
    }

    pub fn has_functional_groups(&self) -> bool {
        self.atoms.values().any(Atom::is_functional_group)
            || self.children.iter().any(Molecule::has_functional_groups)
    }

    /// Every atom position in this molecule and its children.
    pub fn positions(&self) -> Vec<Point2<f64>> {
        let mut out = Vec::with_capacity(self.atom_count());
        self.collect_positions(&mut out);
        out
    }

    fn collect_positions(&self, out: &mut Vec<Point2<f64>>) {
        out.extend(self.atoms.values().map(|atom| atom.position));
        for child in &self.children {
            child.collect_positions(out);
        }
    }

    /// Euclidean length of every bond, children included.
    pub fn bond_lengths(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.bond_count());
        self.collect_bond_lengths(&mut out);
        out
    }

    fn collect_bond_lengths(&self, out: &mut Vec<f64>) {
        for bond in &self.bonds {
            if let (Some(start), Some(end)) = (self.atom(bond.start), self.atom(bond.end)) {
                out.push(nalgebra::distance(&start.position, &end.position));
            }
        }
        for child in &self.children {
            child.collect_bond_lengths(out);
        }
    }

    /// Bounding box of all atom positions, `None` for an empty molecule.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::of_points(self.positions())
    }

    /// Mean of all atom positions, `None` for an empty molecule.
    pub fn centroid(&self) -> Option<Point2<f64>> {
        geometry::centroid(self.positions())
    }

    /// Rigid translation of the whole molecule tree.
    pub fn translate(&mut self, offset: Vector2<f64>) {
        for atom in self.atoms.values_mut() {
            atom.position += offset;
        }
        for child in &mut self.children {
            child.translate(offset);
        }
    }

    /// Uniform scale of every atom position about `origin`.
    pub fn scale_about(&mut self, origin: Point2<f64>, factor: f64) {
        for atom in self.atoms.values_mut() {
            atom.position = geometry::scale_about(atom.position, origin, factor);
        }
        for child in &mut self.children {
            child.scale_about(origin, factor);
        }
    }

    /// Hill-order formula over explicit atoms (functional groups expanded
    /// through their composition): carbon, hydrogen, then alphabetical.
    /// Unresolved symbols are appended verbatim after the known elements.
    pub fn concise_formula(&self) -> String {
        let mut elements: BTreeMap<&str, u32> = BTreeMap::new();
        let mut unresolved: BTreeMap<String, u32> = BTreeMap::new();
        self.accumulate_formula(&mut elements, &mut unresolved);

        let mut parts = Vec::new();
        for symbol in ["C", "H"] {
            if let Some(count) = elements.remove(symbol) {
                parts.push(format_count(symbol, count));
            }
        }
        for (symbol, count) in &elements {
            parts.push(format_count(symbol, *count));
        }
        for (symbol, count) in &unresolved {
            parts.push(format_count(symbol, *count));
        }

        let mut formula = parts.concat();
        if formula.is_empty() {
            return formula;
        }
        if let Some(count) = self.count.filter(|&c| c > 1) {
            formula = format!("{}{}", count, formula);
        }
        if let Some(charge) = self.formal_charge.filter(|&c| c != 0) {
            formula.push_str(&charge_suffix(charge));
        }
        formula
    }

    fn accumulate_formula(
        &self,
        elements: &mut BTreeMap<&'static str, u32>,
        unresolved: &mut BTreeMap<String, u32>,
    ) {
        for atom in self.atoms.values() {
            match &atom.kind {
                AtomKind::Element(element) => {
                    *elements.entry(element.symbol()).or_insert(0) += 1;
                }
                AtomKind::Group(group) => {
                    for &(element, count) in group.composition {
                        *elements.entry(element.symbol()).or_insert(0) += count;
                    }
                }
                AtomKind::Unresolved(raw) => {
                    *unresolved.entry(raw.clone()).or_insert(0) += 1;
                }
            }
        }
        for child in &self.children {
            child.accumulate_formula(elements, unresolved);
        }
    }

}

fn format_count(symbol: &str, count: u32) -> String {
    if count == 1 {
        symbol.to_string()
    } else {
        format!("{}{}", symbol, count)
    }
}

fn charge_suffix(charge: i32) -> String {
    let sign = if charge > 0 { '+' } else { '-' };
    let magnitude = charge.abs();
    if magnitude == 1 {
        sign.to_string()
    } else {
        format!("{}{}", magnitude, sign)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::bond::{BondOrder, BondStereo};
    use crate::core::models::element::Element;

    fn element_atom(element: Element, x: f64, y: f64) -> Atom {
        Atom::new(AtomKind::Element(element), Point2::new(x, y))
    }

    /// Ethanol with explicit hydrogens: CH3-CH2-OH.
    fn create_ethanol() -> (Molecule, Vec<AtomId>) {
        let mut molecule = Molecule::new();
        let c1 = molecule.add_atom(element_atom(Element::C, 0.0, 0.0));
        let c2 = molecule.add_atom(element_atom(Element::C, 1.0, 0.0));
        let o = molecule.add_atom(element_atom(Element::O, 2.0, 0.0));

        let mut hydrogens = Vec::new();
        for (heavy, offsets) in [
            (c1, vec![(-0.5, 0.5), (-0.5, -0.5), (0.0, -1.0)]),
            (c2, vec![(1.0, 1.0), (1.0, -1.0)]),
            (o, vec![(2.5, 0.5)]),
        ] {
            for (x, y) in offsets {
                let h = molecule.add_atom(element_atom(Element::H, x, y));
                molecule
                    .add_bond(Bond::new(heavy, h, BondOrder::Single))
                    .unwrap();
                hydrogens.push(h);
            }
        }
        molecule
            .add_bond(Bond::new(c1, c2, BondOrder::Single))
            .unwrap();
        molecule
            .add_bond(Bond::new(c2, o, BondOrder::Single))
            .unwrap();

        (molecule, vec![c1, c2, o])
    }

    /// Two disconnected two-atom clusters in one flat molecule.
    fn create_disconnected_pair() -> Molecule {
        let mut molecule = Molecule::new();
        let a1 = molecule.add_atom(element_atom(Element::C, 0.0, 0.0));
        let a2 = molecule.add_atom(element_atom(Element::C, 1.0, 0.0));
        let b1 = molecule.add_atom(element_atom(Element::O, 10.0, 0.0));
        let b2 = molecule.add_atom(element_atom(Element::H, 11.0, 0.0));
        molecule
            .add_bond(Bond::new(a1, a2, BondOrder::Single))
            .unwrap();
        molecule
            .add_bond(Bond::new(b1, b2, BondOrder::Single))
            .unwrap();
        molecule
    }

    mod graph_mutation {
        use super::*;

        #[test]
        fn add_bond_rejects_missing_and_self_references() {
            let mut molecule = Molecule::new();
            let a = molecule.add_atom(element_atom(Element::C, 0.0, 0.0));
            let b = molecule.add_atom(element_atom(Element::C, 1.0, 0.0));
            let mut other = Molecule::new();
            let foreign = other.add_atom(element_atom(Element::N, 0.0, 0.0));

            assert!(molecule.add_bond(Bond::new(a, a, BondOrder::Single)).is_none());
            assert!(
                molecule
                    .add_bond(Bond::new(a, foreign, BondOrder::Single))
                    .is_none()
            );
            assert_eq!(molecule.bonds().len(), 0);

            assert!(molecule.add_bond(Bond::new(a, b, BondOrder::Single)).is_some());
            assert_eq!(molecule.bonds().len(), 1);
        }

        #[test]
        fn add_bond_is_idempotent_for_duplicate_pairs() {
            let mut molecule = Molecule::new();
            let a = molecule.add_atom(element_atom(Element::C, 0.0, 0.0));
            let b = molecule.add_atom(element_atom(Element::C, 1.0, 0.0));

            molecule.add_bond(Bond::new(a, b, BondOrder::Single)).unwrap();
            molecule.add_bond(Bond::new(b, a, BondOrder::Double)).unwrap();

            assert_eq!(molecule.bonds().len(), 1);
            assert_eq!(molecule.neighbors(a).unwrap(), &[b]);
        }

        #[test]
        fn remove_atom_repairs_bonds_and_adjacency() {
            let (mut molecule, heavy) = create_ethanol();
            let c2 = heavy[1];
            let before = molecule.atom_count();

            let removed = molecule.remove_atom(c2).unwrap();
            assert_eq!(removed.element(), Some(Element::C));
            assert_eq!(molecule.atom_count(), before - 1);
            assert!(molecule.atom(c2).is_none());
            assert!(molecule.neighbors(c2).is_none());
            assert!(!molecule.bonds().iter().any(|b| b.contains(c2)));
            assert!(!molecule.neighbors(heavy[0]).unwrap().contains(&c2));
        }
    }

    mod components_and_splitting {
        use super::*;

        #[test]
        fn connected_molecule_has_one_component() {
            let (molecule, _) = create_ethanol();
            assert_eq!(molecule.connected_components().len(), 1);
        }

        #[test]
        fn split_partitions_atoms_exactly() {
            let mut molecule = create_disconnected_pair();
            let before = molecule.atom_count();

            let produced = molecule.split_into_children();

            assert_eq!(produced, 2);
            assert_eq!(molecule.children.len(), 2);
            assert_eq!(molecule.atoms.len(), 0);
            assert_eq!(molecule.bonds().len(), 0);
            assert_eq!(
                molecule.children.iter().map(Molecule::atom_count).sum::<usize>(),
                before
            );
            for child in &molecule.children {
                assert_eq!(child.connected_components().len(), 1);
                assert_eq!(child.bond_count(), 1);
            }
        }

        #[test]
        fn split_leaves_connected_molecules_untouched() {
            let (mut molecule, _) = create_ethanol();
            let before = molecule.atom_count();

            assert_eq!(molecule.split_into_children(), 0);
            assert!(molecule.children.is_empty());
            assert_eq!(molecule.atom_count(), before);
        }

        #[test]
        fn singleton_atoms_become_their_own_components() {
            let mut molecule = Molecule::new();
            molecule.add_atom(element_atom(Element::Na, 0.0, 0.0));
            molecule.add_atom(element_atom(Element::Cl, 2.0, 0.0));

            assert_eq!(molecule.split_into_children(), 2);
            for child in &molecule.children {
                assert_eq!(child.atom_count(), 1);
                assert_eq!(child.bond_count(), 0);
            }
        }
    }

    mod hydrogen_removal {
        use super::*;

        #[test]
        fn removes_exactly_the_plain_terminal_hydrogens() {
            let (mut molecule, heavy) = create_ethanol();
            assert_eq!(molecule.atom_count(), 9);

            let removed = molecule.remove_explicit_hydrogens();

            assert_eq!(removed, 6);
            assert_eq!(molecule.atom_count(), 3);
            assert_eq!(molecule.bonds().len(), 2);
            assert!(molecule.bond_between(heavy[0], heavy[1]).is_some());
            assert!(molecule.bond_between(heavy[1], heavy[2]).is_some());
        }

        #[test]
        fn keeps_isotopic_charged_and_stereo_hydrogens() {
            let mut molecule = Molecule::new();
            let c = molecule.add_atom(element_atom(Element::C, 0.0, 0.0));

            let deuterium_id = {
                let mut atom = element_atom(Element::H, 1.0, 0.0);
                atom.isotope_number = Some(2);
                molecule.add_atom(atom)
            };
            let proton_id = {
                let mut atom = element_atom(Element::H, -1.0, 0.0);
                atom.formal_charge = Some(1);
                molecule.add_atom(atom)
            };
            let wedge_id = molecule.add_atom(element_atom(Element::H, 0.0, 1.0));
            let plain_id = molecule.add_atom(element_atom(Element::H, 0.0, -1.0));

            for &h in &[deuterium_id, proton_id, plain_id] {
                molecule.add_bond(Bond::new(c, h, BondOrder::Single)).unwrap();
            }
            let mut wedge_bond = Bond::new(c, wedge_id, BondOrder::Single);
            wedge_bond.stereo = Some(BondStereo::Wedge);
            molecule.add_bond(wedge_bond).unwrap();

            let removed = molecule.remove_explicit_hydrogens();

            assert_eq!(removed, 1);
            assert!(molecule.atom(plain_id).is_none());
            assert!(molecule.atom(deuterium_id).is_some());
            assert!(molecule.atom(proton_id).is_some());
            assert!(molecule.atom(wedge_id).is_some());
        }

        #[test]
        fn bare_hydrogen_molecule_is_left_alone() {
            let mut molecule = Molecule::new();
            let h1 = molecule.add_atom(element_atom(Element::H, 0.0, 0.0));
            let h2 = molecule.add_atom(element_atom(Element::H, 1.0, 0.0));
            molecule.add_bond(Bond::new(h1, h2, BondOrder::Single)).unwrap();

            assert_eq!(molecule.remove_explicit_hydrogens(), 0);
            assert_eq!(molecule.atom_count(), 2);
        }
    }

    mod geometry_queries {
        use super::*;

        const TOLERANCE: f64 = 1e-9;

        #[test]
        fn translate_moves_children_too() {
            let mut molecule = create_disconnected_pair();
            molecule.split_into_children();
            let before = molecule.centroid().unwrap();

            molecule.translate(Vector2::new(3.0, -2.0));

            let after = molecule.centroid().unwrap();
            assert!((after.x - before.x - 3.0).abs() < TOLERANCE);
            assert!((after.y - before.y + 2.0).abs() < TOLERANCE);
        }

        #[test]
        fn bond_lengths_cover_children() {
            let mut molecule = create_disconnected_pair();
            molecule.split_into_children();
            let lengths = molecule.bond_lengths();
            assert_eq!(lengths.len(), 2);
            for length in lengths {
                assert!((length - 1.0).abs() < TOLERANCE);
            }
        }

        #[test]
        fn scale_about_fixed_origin_is_invertible() {
            let (mut molecule, heavy) = create_ethanol();
            let origin = molecule.centroid().unwrap();
            let original = molecule.atom(heavy[0]).unwrap().position;

            molecule.scale_about(origin, 2.5);
            molecule.scale_about(origin, 1.0 / 2.5);

            let restored = molecule.atom(heavy[0]).unwrap().position;
            assert!((restored.x - original.x).abs() < TOLERANCE);
            assert!((restored.y - original.y).abs() < TOLERANCE);
        }
    }

    mod formulas {
        use super::*;

        #[test]
        fn hill_order_puts_carbon_and_hydrogen_first() {
            let (molecule, _) = create_ethanol();
            assert_eq!(molecule.concise_formula(), "C2H6O");
        }

        #[test]
        fn functional_groups_expand_through_composition() {
            let mut molecule = Molecule::new();
            let c = molecule.add_atom(element_atom(Element::C, 0.0, 0.0));
            let group = Atom::new(
                AtomKind::resolve("OEt").unwrap(),
                Point2::new(1.0, 0.0),
            );
            let g = molecule.add_atom(group);
            molecule.add_bond(Bond::new(c, g, BondOrder::Single)).unwrap();

            assert_eq!(molecule.concise_formula(), "C3H5O");
            assert!(molecule.has_functional_groups());
        }

        #[test]
        fn count_and_charge_decorate_the_formula() {
            let mut molecule = Molecule::new();
            molecule.add_atom(element_atom(Element::O, 0.0, 0.0));
            molecule.count = Some(2);
            molecule.formal_charge = Some(-2);

            assert_eq!(molecule.concise_formula(), "2O2-");
        }

        #[test]
        fn empty_molecule_has_empty_formula() {
            assert_eq!(Molecule::new().concise_formula(), "");
        }
    }
}
