//! # Core Models Module
//!
//! Data structures representing 2D chemical structures: atoms, bonds,
//! molecules, reactions, and the model root that owns them all.
//!
//! ## Overview
//!
//! Every structural entity carries two identities. Graph wiring (bond
//! endpoints, ring membership, adjacency) uses process-local slot-map keys
//! ([`ids::AtomId`]); serialization and cross-referencing use schema-scoped
//! string ids that can be rewritten at any time without touching a single
//! edge. Molecules form a shallow tree so compound structures (salts,
//! multi-component mixtures) keep their internally-connected parts as
//! child molecules.
//!
//! Two caches are deliberately manual: ring perception
//! ([`molecule::Molecule::rebuild_rings`]) and the model's derived scalar
//! properties ([`model::Model::refresh`]). Edit surfaces must invoke them
//! after structural changes; nothing recomputes behind the caller's back.
//!
//! ## Key Components
//!
//! - [`ids`] - Internal slot-map key types for graph wiring
//! - [`element`] - The periodic table
//! - [`functional_group`] - Composite substituents drawn as single nodes
//! - [`atom`] - Atom nodes with position, charge, isotope, placement hints
//! - [`bond`] - Bonds with order, stereochemistry and drawing placement
//! - [`rings`] - Minimal-cycle perception over the bond graph
//! - [`molecule`] - The molecule tree and its structural operations
//! - [`reaction`] - Reaction arrows, schemes, and participant references
//! - [`model`] - The root aggregate with id management and scaling

pub mod atom;
pub mod bond;
pub mod element;
pub mod functional_group;
pub mod ids;
pub mod model;
pub mod molecule;
pub mod reaction;
pub mod rings;
