//! # File I/O
//!
//! Reading and writing chemical structure documents. CML is the native
//! wire format ([`cml`]); the [`traits::StructureFile`] seam keeps room
//! for sibling formats without touching the model layer.
//!
//! The error policy is split deliberately: [`error::CmlError`] covers only
//! structural impossibilities (unparsable XML, broken atom references);
//! everything recoverable lands as diagnostics on the imported entities.

pub mod cml;
pub mod error;
pub mod traits;
