//! Fact extractors
//!
//! Tree-sitter based extraction of class-level facts from one source file.
//!
//! # Architecture
//!
//! - `base` - query engine, `FactExtractor` trait and fact types
//! - `queries` - built-in patterns per language (private)
//! - one module per fact type (classes, methods, call sites, heritage
//!   clauses, declared types)
//! - `object_type` - receiver typing for call sites
//! - `manager` - ExtractorManager public API, assembles a `ProjectFile`

pub mod base;
pub mod classes;
pub mod declared_types;
pub mod inheritance;
pub mod manager;
pub mod method_usage;
pub mod methods;
pub mod object_type;
mod queries;

// Re-export the public API
pub use base::{
    CallSite, ClassFact, DeclaredType, ExtractorKind, FactExtractor, InheritanceFact, MethodFact,
    Span,
};
pub use manager::{ExtractorManager, FileExtraction};
