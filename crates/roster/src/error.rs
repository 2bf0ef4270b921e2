//! Roster errors

use thiserror::Error;

use crate::record::RecordKind;

/// Errors raised while parsing records or resolving identifiers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// Identifier does not resolve to a record in its relation
    #[error("{kind} '{id}' not found")]
    NotFound {
        /// Relation that was searched
        kind: RecordKind,
        /// Identifier that was looked up
        id: String,
    },

    /// Identifier appears more than once in its relation
    #[error("duplicate {kind} identifier '{id}'")]
    DuplicateId {
        /// Relation holding the duplicate
        kind: RecordKind,
        /// Repeated identifier
        id: String,
    },

    /// Required column missing or blank in a record
    #[error("{kind} record is missing field '{field}'")]
    MissingField {
        /// Relation the record belongs to
        kind: RecordKind,
        /// Column name
        field: String,
    },

    /// Status cell holds an unrecognized value
    #[error("unknown status '{0}'")]
    UnknownStatus(String),
}

/// Result alias for roster operations
pub type Result<T> = std::result::Result<T, RosterError>;
