use super::ids::AtomId;
use super::molecule::Molecule;
use slotmap::SecondaryMap;
use std::collections::VecDeque;

/// One minimal cycle of a molecule's bond graph, stored as the atom walk
/// around the cycle (closing edge implied).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ring {
    atoms: Vec<AtomId>,
}

impl Ring {
    pub fn atoms(&self) -> &[AtomId] {
        &self.atoms
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn contains_atom(&self, atom_id: AtomId) -> bool {
        self.atoms.contains(&atom_id)
    }

    /// True when the ring walk traverses the `a`–`b` edge (either
    /// direction). Used to pick the inner side for double-bond rendering.
    pub fn contains_bond(&self, a: AtomId, b: AtomId) -> bool {
        let n = self.atoms.len();
        (0..n).any(|i| {
            let (p, q) = (self.atoms[i], self.atoms[(i + 1) % n]);
            (p == a && q == b) || (p == b && q == a)
        })
    }
}

/// Computes the minimal-cycle set of a molecule's own (flat) bond graph.
///
/// The number of independent rings is the cyclomatic number
/// `bonds - atoms + components`. Candidates are the shortest cycle through
/// each bond; an edge-bitvector basis over GF(2) keeps exactly one
/// independent set of that size, smallest rings first.
pub(crate) fn perceive(molecule: &Molecule) -> Vec<Ring> {
    let atom_count = molecule.atoms_iter().count();
    let bond_count = molecule.bonds().len();
    let component_count = molecule.connected_components().len();
    let expected = (bond_count + component_count).saturating_sub(atom_count);
    if expected == 0 {
        return Vec::new();
    }

    let mut candidates: Vec<Ring> = molecule
        .bonds()
        .iter()
        .filter_map(|bond| shortest_cycle_through(molecule, bond.start, bond.end))
        .map(|atoms| Ring {
            atoms: normalize_walk(atoms),
        })
        .collect();
    candidates.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.atoms.cmp(&b.atoms)));
    candidates.dedup();

    let mut basis: Vec<(usize, Vec<u64>)> = Vec::new();
    let mut rings = Vec::with_capacity(expected);
    for ring in candidates {
        if rings.len() >= expected {
            break;
        }
        let Some(bv) = edge_bitvector(molecule, &ring, bond_count) else {
            continue;
        };
        if add_to_basis(&mut basis, bv) {
            rings.push(ring);
        }
    }

    rings
}

/// Shortest path from `start` to `end` that does not use the direct
/// `start`–`end` edge, closed into a cycle. `None` when the bond is a
/// bridge (no alternative route).
fn shortest_cycle_through(
    molecule: &Molecule,
    start: AtomId,
    end: AtomId,
) -> Option<Vec<AtomId>> {
    let mut predecessor: SecondaryMap<AtomId, AtomId> = SecondaryMap::new();
    let mut visited: SecondaryMap<AtomId, ()> = SecondaryMap::new();
    visited.insert(start, ());
    let mut queue = VecDeque::new();
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for &neighbor in molecule.neighbors(current).unwrap_or(&[]) {
            if current == start && neighbor == end {
                continue; // the excluded edge itself
            }
            if visited.contains_key(neighbor) {
                continue;
            }
            visited.insert(neighbor, ());
            predecessor.insert(neighbor, current);
            if neighbor == end {
                let mut path = vec![end];
                let mut cursor = end;
                while cursor != start {
                    cursor = predecessor[cursor];
                    path.push(cursor);
                }
                path.reverse();
                return Some(path);
            }
            queue.push_back(neighbor);
        }
    }

    None
}

/// Rotates/reflects the cycle walk into a canonical form so identical
/// cycles found through different bonds compare equal.
fn normalize_walk(atoms: Vec<AtomId>) -> Vec<AtomId> {
    if atoms.is_empty() {
        return atoms;
    }
    let n = atoms.len();
    let pivot = (0..n).min_by_key(|&i| atoms[i]).expect("non-empty walk");

    let forward: Vec<AtomId> = (0..n).map(|i| atoms[(pivot + i) % n]).collect();
    let backward: Vec<AtomId> = (0..n).map(|i| atoms[(pivot + n - i) % n]).collect();
    forward.min(backward)
}

fn edge_bitvector(molecule: &Molecule, ring: &Ring, bond_count: usize) -> Option<Vec<u64>> {
    let words = bond_count.div_ceil(64);
    let mut bv = vec![0u64; words];
    let n = ring.atoms.len();
    for i in 0..n {
        let a = ring.atoms[i];
        let b = ring.atoms[(i + 1) % n];
        let index = molecule.bond_index_between(a, b)?;
        bv[index / 64] |= 1 << (index % 64);
    }
    Some(bv)
}

fn leading_bit(bv: &[u64]) -> Option<usize> {
    for (word_index, &word) in bv.iter().enumerate().rev() {
        if word != 0 {
            return Some(word_index * 64 + 63 - word.leading_zeros() as usize);
        }
    }
    None
}

/// GF(2) row reduction: returns true when `bv` was independent of the
/// current basis (and was added to it).
fn add_to_basis(basis: &mut Vec<(usize, Vec<u64>)>, mut bv: Vec<u64>) -> bool {
    while let Some(lead) = leading_bit(&bv) {
        match basis.iter().find(|(existing_lead, _)| *existing_lead == lead) {
            Some((_, existing)) => {
                for (target, source) in bv.iter_mut().zip(existing.iter()) {
                    *target ^= source;
                }
            }
            None => {
                basis.push((lead, bv));
                return true;
            }
        }
    }
    false
}
