use thiserror::Error;

/// Structural failures of the CML converter.
///
/// Only problems that make the document impossible to map onto the graph
/// surface here: unparsable XML, referential-integrity violations, and
/// writer/IO failures. Recoverable data problems (bad coordinates, unknown
/// symbols, malformed optional attributes) never raise an error; they are
/// recorded as diagnostics on the entity being read.
#[derive(Debug, Error)]
pub enum CmlError {
    #[error("failed to parse XML document: {source}")]
    Xml {
        #[from]
        source: roxmltree::Error,
    },

    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("bond '{bond}' references unknown atom id '{atom_ref}'")]
    UnknownAtomRef { bond: String, atom_ref: String },

    #[error("duplicate atom id '{0}' within one molecule element")]
    DuplicateAtomId(String),

    #[error("exported document was not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

impl CmlError {
    pub(crate) fn unknown_atom_ref(bond: Option<&str>, atom_ref: &str) -> Self {
        Self::UnknownAtomRef {
            bond: bond.unwrap_or("<unnamed>").to_string(),
            atom_ref: atom_ref.to_string(),
        }
    }
}
