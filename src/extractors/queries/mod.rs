//! Built-in query patterns
//!
//! One pattern source per (language, extractor). Capture names are shared by
//! every language so the extractors stay grammar-agnostic:
//!
//! - class: `@class.name`, `@class.definition`
//! - method: `@method.name`, `@method.definition`
//! - method-usage: `@method.name`, `@method.object` (receiver), `@method.call`
//! - inheritance: `@class.parent` or `@class.heritage` (a clause the mapper unpacks)
//! - declared-type: `@decl.name` + `@decl.type`, or `@decl.node`

mod csharp;
mod java;
mod javascript;
mod python;
mod typescript;

use crate::extractors::base::ExtractorKind;
use crate::language::LanguageId;

pub(crate) fn patterns(language: LanguageId) -> &'static [(ExtractorKind, &'static str)] {
    match language {
        // TSX shares the TypeScript node types
        LanguageId::TypeScript | LanguageId::Tsx => typescript::PATTERNS,
        LanguageId::JavaScript => javascript::PATTERNS,
        LanguageId::CSharp => csharp::PATTERNS,
        LanguageId::Java => java::PATTERNS,
        LanguageId::Python => python::PATTERNS,
    }
}
