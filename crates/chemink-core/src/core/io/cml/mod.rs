//! Schema-tolerant CML (Chemical Markup Language) import and export.
//!
//! The reader accepts the dialect variations real producers emit: a
//! `<cml>` root or a bare `<molecule>` root, namespaced or un-namespaced
//! element names, wrapped or bare atom/bond arrays, and maps them onto
//! one canonical [`Model`]. The writer emits the canonical form: a `<cml>`
//! root with namespace declarations and the molecular convention marker,
//! coordinates with exactly four decimal digits.
//!
//! Recoverable data problems (unknown symbols, missing coordinates,
//! malformed optional attributes) never fail an import; they surface as
//! diagnostics on the nearest owning entity. Only unparsable XML and
//! broken atom references are hard errors.

pub mod names;
mod reader;
mod writer;

use crate::core::io::error::CmlError;
use crate::core::io::traits::StructureFile;
use crate::core::models::model::Model;
use std::io::{BufRead, Write};

/// Options for [`import_with`].
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Ids that relabeling must leave untouched (externally referenced
    /// property ids that have to survive a re-import).
    pub protected_labels: Option<Vec<String>>,
    /// Re-assign all ids canonically after reading. When `false`, only
    /// missing ids are filled in.
    pub relabel: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            protected_labels: None,
            relabel: true,
        }
    }
}

/// Options for [`export_with`].
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Emit without indentation.
    pub compressed: bool,
    /// Keep `<cml>` as the document root even for a single bare molecule.
    /// With `false`, a model holding exactly one molecule and no reactions
    /// is written with the molecule element as the root.
    pub cml_is_root: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            compressed: false,
            cml_is_root: true,
        }
    }
}

/// Imports CML text with default options (relabel, no protected ids).
pub fn import(cml: &str) -> Result<Model, CmlError> {
    import_with(cml, &ImportOptions::default())
}

/// Imports CML text.
pub fn import_with(cml: &str, options: &ImportOptions) -> Result<Model, CmlError> {
    reader::read_document(cml, options)
}

/// Exports a model with default options (indented, `<cml>` root).
pub fn export(model: &Model) -> Result<String, CmlError> {
    export_with(model, &ExportOptions::default())
}

/// Exports a model to CML text.
pub fn export_with(model: &Model, options: &ExportOptions) -> Result<String, CmlError> {
    writer::write_document(model, options)
}

/// CML as a pluggable structure file format.
pub struct CmlFile;

impl StructureFile for CmlFile {
    type Error = CmlError;

    fn read_from(reader: &mut impl BufRead) -> Result<Model, Self::Error> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        import(&text)
    }

    fn write_to(model: &Model, writer: &mut impl Write) -> Result<(), Self::Error> {
        let text = export(model)?;
        writer.write_all(text.as_bytes())?;
        Ok(())
    }
}
