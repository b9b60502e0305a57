//! Method extraction

use crate::extractors::base::{ExtractorKind, FactExtractor, MethodFact, QueryMatch, Span};

pub struct MethodExtractor;

impl FactExtractor for MethodExtractor {
    type Fact = MethodFact;

    fn kind(&self) -> ExtractorKind {
        ExtractorKind::Method
    }

    fn map_match(&self, query_match: &QueryMatch<'_>) -> MethodFact {
        let name = query_match
            .capture("method.name")
            .map(|node| node.text().to_string())
            .unwrap_or_default();
        let span = query_match
            .capture("method.definition")
            .map(|node| node.span())
            .unwrap_or(Span::default());

        MethodFact { name, span }
    }
}
