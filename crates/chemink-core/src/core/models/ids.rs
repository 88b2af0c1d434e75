use slotmap::new_key_type;

new_key_type! {
    /// Process-local internal identity of an atom.
    ///
    /// This key wires the graph together (bond endpoints, adjacency, ring
    /// membership). It is independent of the exported string id, so
    /// relabeling string ids never invalidates live edges.
    pub struct AtomId;
}
