//! Error taxonomy for the extraction pipeline
//!
//! Only a few conditions are real failures. Missing captures, parse recovery
//! nodes and unresolved references are expected data and never show up here.

use crate::extractors::base::ExtractorKind;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// No grammar is registered for the language identifier
    #[error("Unsupported language: '{language}'")]
    UnsupportedLanguage { language: String },

    /// A built-in query pattern does not compile against its grammar
    #[error("Malformed {kind} query for {language}: {message}")]
    MalformedQuery {
        language: String,
        kind: ExtractorKind,
        message: String,
    },

    /// The grammar was built for an incompatible tree-sitter ABI
    #[error("Failed to set parser language for {language}: {message}")]
    ParserInit { language: String, message: String },

    /// tree-sitter returned no tree at all
    #[error("Failed to parse file: {path}")]
    ParseFailed { path: String },
}

impl AnalysisError {
    /// Whether the failure removes the file from the aggregated project
    pub fn skips_file(&self) -> bool {
        !matches!(self, AnalysisError::MalformedQuery { .. })
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
