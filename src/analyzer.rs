//! ProjectAnalyzer - whole-project pipeline
//!
//! Extracts every file (on the rayon pool when enabled), waits for all of
//! them, aggregates in input order and then runs the resolvers on a single
//! thread. A failing file never costs its siblings their results.

use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, Result};
use crate::extractors::{ExtractorManager, FileExtraction};
use crate::project::{aggregate, FlatProject};
use crate::resolver::{resolve_inheritance, resolve_method_usages};
use rayon::prelude::*;
use serde::{Deserialize, Serialize, Serializer};

/// One already-loaded source file, as handed over by file discovery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    pub path: String,
    /// Language identifier, mapped from the extension by the caller
    pub language: String,
    pub content: String,
}

impl SourceFile {
    pub fn new(path: impl Into<String>, language: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            language: language.into(),
            content: content.into(),
        }
    }
}

/// A file-scoped failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileFailure {
    pub path: String,
    #[serde(serialize_with = "serialize_error")]
    pub error: AnalysisError,
    /// Whether the file was left out of the project
    pub skipped: bool,
}

fn serialize_error<S: Serializer>(error: &AnalysisError, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&error.to_string())
}

/// Resolved project plus everything that went wrong along the way
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub project: FlatProject,
    pub failures: Vec<FileFailure>,
    /// Parent names that resolved to project classes
    pub resolved_parents: usize,
    /// Usage backlinks appended
    pub linked_usages: usize,
}

impl AnalysisReport {
    pub fn skipped_files(&self) -> impl Iterator<Item = &FileFailure> {
        self.failures.iter().filter(|failure| failure.skipped)
    }
}

pub struct ProjectAnalyzer {
    config: AnalysisConfig,
    manager: ExtractorManager,
}

impl Default for ProjectAnalyzer {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}

impl ProjectAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            config,
            manager: ExtractorManager::new(),
        }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Run extraction, aggregation and resolution over `files`
    ///
    /// File order in the project is the input order, with skipped files
    /// removed, whether or not extraction ran in parallel.
    pub fn analyze(&self, files: &[SourceFile]) -> AnalysisReport {
        let outcomes: Vec<Result<FileExtraction>> = if self.config.parallel {
            files.par_iter().map(|file| self.extract(file)).collect()
        } else {
            files.iter().map(|file| self.extract(file)).collect()
        };

        let mut extracted = Vec::with_capacity(files.len());
        let mut failures = Vec::new();
        for (source, outcome) in files.iter().zip(outcomes) {
            match outcome {
                Ok(extraction) => {
                    failures.extend(extraction.query_errors.into_iter().map(|error| FileFailure {
                        path: source.path.clone(),
                        error,
                        skipped: false,
                    }));
                    extracted.push(extraction.file);
                }
                Err(error) => {
                    tracing::warn!("Skipping {}: {}", source.path, error);
                    failures.push(FileFailure {
                        path: source.path.clone(),
                        skipped: error.skips_file(),
                        error,
                    });
                }
            }
        }

        let mut project = aggregate(extracted);

        let resolved_parents = if self.config.resolve_inheritance {
            resolve_inheritance(&mut project)
        } else {
            0
        };
        let linked_usages = if self.config.resolve_method_usages {
            resolve_method_usages(&mut project)
        } else {
            0
        };

        let report = AnalysisReport {
            project,
            failures,
            resolved_parents,
            linked_usages,
        };

        tracing::info!(
            "Analyzed {} files ({} skipped): {} classes, {} parents resolved, {} usages linked",
            report.project.files.len(),
            report.skipped_files().count(),
            report.project.class_count(),
            resolved_parents,
            linked_usages
        );
        report
    }

    fn extract(&self, file: &SourceFile) -> Result<FileExtraction> {
        self.manager
            .extract_file(&file.path, &file.language, &file.content)
    }
}
