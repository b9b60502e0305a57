// Base extractor machinery
//
// - types.rs: extractor tags and the per-file facts
// - query.rs: query engine (compile, run, capture views)
// - extractor.rs: the FactExtractor trait and the generic runner
// - tree_methods.rs: node helpers shared by the mappers

pub mod extractor;
pub mod query;
pub mod tree_methods;
pub mod types;

pub use extractor::{extract, extract_with, FactExtractor};
pub use query::{compile_query, run_query, CaptureNode, QueryMatch, QuerySet};
pub use tree_methods::{
    heritage_parents, heritage_superclass, normalize_type_name, strip_self_prefix,
};
pub use types::{
    CallSite, ClassFact, DeclaredType, ExtractorKind, InheritanceFact, MethodFact, Span,
};
