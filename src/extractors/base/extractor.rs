// FactExtractor - one variant per fact type
//
// A variant owns a query (looked up by its kind) and a mapping from a match
// to a typed fact. Adding a fact type means adding a variant and its
// patterns; the engine does not change.

use super::query::{run_query, QueryMatch, QuerySet};
use super::types::ExtractorKind;
use crate::error::Result;
use crate::language::SyntaxTree;

pub trait FactExtractor {
    type Fact;

    fn kind(&self) -> ExtractorKind;

    /// Map one match to a fact
    ///
    /// Must not fail: absent captures degrade to empty strings and zero rows.
    fn map_match(&self, query_match: &QueryMatch<'_>) -> Self::Fact;
}

/// Run an extractor with the built-in queries of the tree's language
pub fn extract<E: FactExtractor>(extractor: &E, tree: &SyntaxTree<'_>) -> Result<Vec<E::Fact>> {
    extract_with(extractor, tree, QuerySet::for_language(tree.language()))
}

/// Run an extractor with an explicit query set
///
/// One fact per match, in match order.
pub fn extract_with<E: FactExtractor>(
    extractor: &E,
    tree: &SyntaxTree<'_>,
    queries: &QuerySet,
) -> Result<Vec<E::Fact>> {
    let query = queries.query(extractor.kind())?;
    Ok(run_query(tree, query)
        .iter()
        .map(|query_match| extractor.map_match(query_match))
        .collect())
}
