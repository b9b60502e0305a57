//! ExtractorManager - Public API for per-file extraction
//!
//! Parses one file, runs every extractor over its tree and assembles the
//! facts into a `ProjectFile`. Methods, call sites, heritage clauses and
//! declarations are attributed to the innermost class containing them;
//! anything outside every class is not part of the model.

use crate::error::{AnalysisError, Result};
use crate::extractors::base::{extract_with, DeclaredType, FactExtractor, QuerySet};
use crate::extractors::classes::{innermost_class, ClassExtractor};
use crate::extractors::declared_types::DeclaredTypeExtractor;
use crate::extractors::inheritance::InheritanceExtractor;
use crate::extractors::method_usage::MethodUsageExtractor;
use crate::extractors::methods::MethodExtractor;
use crate::extractors::object_type::ReceiverScope;
use crate::language::{parse, LanguageId, SyntaxTree};
use crate::project::{ClassDetail, MethodDetail, MethodUsageRef, ProjectFile};

/// Result of extracting one file
///
/// `query_errors` lists extractors that could not run (malformed patterns);
/// the file itself is still usable with whatever the other extractors found.
#[derive(Debug, Clone)]
pub struct FileExtraction {
    pub file: ProjectFile,
    pub query_errors: Vec<AnalysisError>,
}

/// Manager for all fact extractors
pub struct ExtractorManager {
    // Stateless: grammars and compiled queries are process-wide
}

impl Default for ExtractorManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractorManager {
    pub fn new() -> Self {
        Self {}
    }

    /// Canonical identifiers of the registered grammars
    pub fn supported_languages(&self) -> Vec<&'static str> {
        LanguageId::ALL.iter().map(|language| language.as_str()).collect()
    }

    /// Extract one file with the built-in queries of its language
    pub fn extract_file(&self, path: &str, language_id: &str, content: &str) -> Result<FileExtraction> {
        let language = LanguageId::from_id(language_id)?;
        self.extract_file_with(path, language, content, QuerySet::for_language(language))
    }

    /// Extract one file with an explicit query set
    pub fn extract_file_with(
        &self,
        path: &str,
        language: LanguageId,
        content: &str,
        queries: &QuerySet,
    ) -> Result<FileExtraction> {
        let tree = parse(language, content, path)?;
        if tree.has_errors() {
            tracing::debug!("{} has syntax errors, extracting what parses", path);
        }

        let mut query_errors = Vec::new();
        let classes = run(&ClassExtractor, &tree, queries, &mut query_errors);
        let methods = run(&MethodExtractor, &tree, queries, &mut query_errors);
        let heritage = run(&InheritanceExtractor, &tree, queries, &mut query_errors);
        let calls = run(&MethodUsageExtractor, &tree, queries, &mut query_errors);
        let declarations: Vec<DeclaredType> = run(&DeclaredTypeExtractor, &tree, queries, &mut query_errors)
            .into_iter()
            .flatten()
            .collect();

        let mut details: Vec<ClassDetail> = classes
            .iter()
            .map(|class| ClassDetail::new(class.name.clone()))
            .collect();

        let mut superclasses: Vec<Option<String>> = vec![None; classes.len()];
        for fact in heritage {
            if let Some(owner) = innermost_class(&classes, fact.offset) {
                details[owner].inheritance.extend(fact.parents);
                if superclasses[owner].is_none() {
                    superclasses[owner] = fact.superclass;
                }
            }
        }

        for method in methods {
            if let Some(owner) = innermost_class(&classes, method.span.start_byte) {
                details[owner].methods.push(MethodDetail::new(method.name));
            }
        }

        let mut declared_by_class: Vec<Vec<DeclaredType>> = vec![Vec::new(); classes.len()];
        for declaration in declarations {
            if let Some(owner) = innermost_class(&classes, declaration.offset) {
                declared_by_class[owner].push(declaration);
            }
        }

        let call_count = calls.len();
        let mut attributed = 0;
        for call in calls {
            let Some(owner) = innermost_class(&classes, call.offset) else {
                continue;
            };
            let scope = ReceiverScope {
                language,
                class_name: &details[owner].name,
                superclass: superclasses[owner].as_deref(),
                declared: &declared_by_class[owner],
            };
            let usage = MethodUsageRef {
                class_used_in: details[owner].name.clone(),
                method_name: call.name.clone(),
                object_type: scope.object_type(call.receiver.as_deref(), call.offset),
            };
            details[owner].methods_used.push(usage);
            attributed += 1;
        }

        tracing::debug!(
            "Extracted {} classes and {} of {} call sites from {} file: {}",
            details.len(),
            attributed,
            call_count,
            language,
            path
        );

        Ok(FileExtraction {
            file: ProjectFile::new(path, details),
            query_errors,
        })
    }
}

/// Run one extractor; a missing or malformed query yields no facts
fn run<E: FactExtractor>(
    extractor: &E,
    tree: &SyntaxTree<'_>,
    queries: &QuerySet,
    errors: &mut Vec<AnalysisError>,
) -> Vec<E::Fact> {
    match extract_with(extractor, tree, queries) {
        Ok(facts) => facts,
        Err(e) => {
            errors.push(e);
            Vec::new()
        }
    }
}
