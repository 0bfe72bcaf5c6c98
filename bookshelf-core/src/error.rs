use std::fmt;

use thiserror::Error;

/// Which lookup table a key was resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    Author,
    Genre,
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupKind::Author => f.write_str("author"),
            LookupKind::Genre => f.write_str("genre"),
        }
    }
}

/// Why a raw record was rejected at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    Missing,
    DuplicateId(String),
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedReason::Missing => f.write_str("is missing"),
            MalformedReason::DuplicateId(id) => {
                write!(f, "repeats id '{id}'")
            }
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A raw record lacks a required field. Fatal to load.
    #[error("record {index}: field `{field}` {reason}")]
    MalformedRecord {
        index: usize,
        field: &'static str,
        reason: MalformedReason,
    },

    /// A key has no entry in its lookup table.
    #[error("unknown {table} key '{key}'")]
    UnknownKey { table: LookupKind, key: String },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
