// src/utils/error.rs
use std::fmt;
use thiserror::Error;

/// Mandatory report sections. Their absence aborts a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Structural,
    Collarette,
}

impl Section {
    pub fn name(&self) -> &'static str {
        match self {
            Section::Structural => "structural",
            Section::Collarette => "collarette",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Missing mandatory section: {0}")]
    MissingSection(Section),
}

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Report not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Report is empty: {0}")]
    Empty(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Report source failed: {0}")]
    Source(#[from] SourceError),

    #[error("Parsing failed: {0}")]
    Parse(#[from] ParseError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Data processing failed: {0}")]
    Processing(String),
}
