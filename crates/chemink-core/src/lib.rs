//! # chemink Core Library
//!
//! A typed in-memory model of 2D chemical structures with schema-tolerant
//! CML interchange, built as the reusable core of a structure editor.
//!
//! ## Architectural Philosophy
//!
//! The library separates the durable parts of a chemistry editor, the
//! entity graph and its wire format, from everything host-bound. Editing
//! surfaces, rendering, and document storage live elsewhere and talk to
//! this crate through a small number of entry points.
//!
//! - **[`core`]: The Foundation.** The atom/bond/molecule/reaction graph
//!   with dual string/internal identity, 2D geometric primitives, and the
//!   CML converter (`core::io::cml`).
//!
//! - **[`layout`]: Geometric Post-Processing.** Rigid-body packing of
//!   molecules and the scaling utilities edit commands run after import or
//!   before export.
//!
//! ## Identity Model
//!
//! Every structural entity has two identities: a transient internal key
//! used for graph wiring ([`AtomId`]) and an exported string id used for
//! serialization and cross-referencing. Relabeling rewrites only the
//! latter, so no edit can sever a live bond reference.
//!
//! ## Typical Usage
//!
//! ```ignore
//! use chemink::core::io::cml;
//!
//! let mut model = cml::import(&cml_text)?;
//! if model.all_errors().is_empty() {
//!     model.ensure_bond_length(20.0, true);
//!     let exported = cml::export(&model)?;
//! }
//! ```

pub mod core;
pub mod layout;

pub use crate::core::io::cml::{CmlFile, ExportOptions, ImportOptions};
pub use crate::core::io::error::CmlError;
pub use crate::core::io::traits::StructureFile;
pub use crate::core::models::atom::{Atom, AtomKind, CompassPoint};
pub use crate::core::models::bond::{Bond, BondOrder, BondPlacement, BondStereo};
pub use crate::core::models::element::Element;
pub use crate::core::models::functional_group::FunctionalGroup;
pub use crate::core::models::ids::AtomId;
pub use crate::core::models::model::Model;
pub use crate::core::models::molecule::{Molecule, TextualProperty};
pub use crate::core::models::reaction::{Reaction, ReactionScheme, ReactionType};
pub use crate::core::models::rings::Ring;
pub use crate::layout::Packer;
