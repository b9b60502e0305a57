// API Functions - PyO3-exposed functions for Python

use crate::analyzer::{ProjectAnalyzer, SourceFile};
use crate::config::AnalysisConfig;
use crate::extractors::ExtractorManager;
use crate::language::detect_language_from_extension;
use anyhow::Context;
use pyo3::prelude::*;
use std::path::Path;

/// Analyze a whole project and return the resolved model as JSON
///
/// Extraction runs on all cores with the GIL released. Files in an
/// unsupported language are listed under "failures" instead of raising.
///
/// Args:
///     files (list[tuple[str, str, str]]): (file_path, language, content) triples,
///         in the order the project should keep
///     config_json (str | None): AnalysisConfig as JSON, missing keys default to true
///
/// Returns:
///     str: JSON object with "project", "failures", "resolvedParents", "linkedUsages"
///
/// Raises:
///     ValueError: If config_json is not a valid configuration
///
/// Example:
///     >>> report = json.loads(analyze_project([
///     ...     ("src/base.ts", "typescript", "class Base {}"),
///     ...     ("src/derived.ts", "typescript", "class Derived extends Base {}"),
///     ... ]))
///     >>> report["project"]["files"][1]["details"]["classes"][0]["parentClasses"]
///     ['Base']
#[pyfunction]
#[pyo3(signature = (files, config_json=None))]
pub fn analyze_project(
    py: Python<'_>,
    files: Vec<(String, String, String)>,
    config_json: Option<&str>,
) -> PyResult<String> {
    let config = match config_json {
        Some(json) => AnalysisConfig::from_json(json)
            .map_err(|e| pyo3::exceptions::PyValueError::new_err(format!("Invalid config: {}", e)))?,
        None => AnalysisConfig::default(),
    };

    let sources: Vec<SourceFile> = files
        .into_iter()
        .map(|(path, language, content)| SourceFile::new(path, language, content))
        .collect();

    // Release GIL for parallel processing
    let json = py.detach(move || -> anyhow::Result<String> {
        let report = ProjectAnalyzer::new(config).analyze(&sources);
        serde_json::to_string(&report).context("Failed to serialize analysis report")
    })?;

    Ok(json)
}

/// Detect the language identifier for a file path
///
/// Returns:
///     str | None: Identifier accepted by analyze_project, None for unknown extensions
#[pyfunction]
#[pyo3(signature = (file_path))]
pub fn detect_language(file_path: &str) -> Option<String> {
    let extension = Path::new(file_path)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");

    detect_language_from_extension(extension).map(|lang| lang.to_string())
}

/// Get list of all supported language identifiers
#[pyfunction]
pub fn supported_languages() -> Vec<String> {
    let manager = ExtractorManager::new();
    manager
        .supported_languages()
        .iter()
        .map(|&s| s.to_string())
        .collect()
}
