// Classmap Core - tree-sitter class maps with cross-file resolution
//
// Parses project files, extracts classes, methods, heritage clauses and call
// sites, then links them across files. The Python module is an optional
// hand-off layer (`--features python`); the Rust API stands on its own.

pub mod analyzer;
pub mod config;
pub mod error;
pub mod extractors;
pub mod language;
pub mod project;
pub mod resolver;

// PyO3 bindings layer
#[cfg(feature = "python")]
pub mod bindings;

pub use analyzer::{AnalysisReport, FileFailure, ProjectAnalyzer, SourceFile};
pub use config::AnalysisConfig;
pub use error::{AnalysisError, Result};
pub use extractors::{ExtractorKind, ExtractorManager, FileExtraction};
pub use language::{detect_language_from_extension, parse, LanguageId, SyntaxTree};
pub use project::{
    aggregate, ClassDetail, FileDetails, FlatProject, MethodDetail, MethodUsageRef, ProjectFile,
};
pub use resolver::{resolve_inheritance, resolve_method_usages, ClassIndex, MethodIndex};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Classmap Core Python module
///
/// Whole-project analysis for TypeScript, JavaScript, C#, Java and Python.
#[cfg(feature = "python")]
#[pymodule]
fn classmap_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    m.add_function(wrap_pyfunction!(bindings::analyze_project, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::detect_language, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::supported_languages, m)?)?;

    Ok(())
}
