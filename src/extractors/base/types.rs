// Base Extractor Types
//
// Extractor tags plus the file-scoped facts each extractor produces.
// Facts are owned copies: nothing here points back into a syntax tree.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Extractor variants, one per fact type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtractorKind {
    Class,
    Method,
    MethodUsage,
    Inheritance,
    DeclaredType,
}

impl ExtractorKind {
    pub const ALL: [ExtractorKind; 5] = [
        ExtractorKind::Class,
        ExtractorKind::Method,
        ExtractorKind::MethodUsage,
        ExtractorKind::Inheritance,
        ExtractorKind::DeclaredType,
    ];
}

impl fmt::Display for ExtractorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractorKind::Class => write!(f, "class"),
            ExtractorKind::Method => write!(f, "method"),
            ExtractorKind::MethodUsage => write!(f, "method-usage"),
            ExtractorKind::Inheritance => write!(f, "inheritance"),
            ExtractorKind::DeclaredType => write!(f, "declared-type"),
        }
    }
}

/// Byte range of a node in its source file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Span {
    pub start_byte: usize,
    pub end_byte: usize,
}

impl Span {
    pub fn contains(&self, offset: usize) -> bool {
        self.start_byte <= offset && offset < self.end_byte
    }

    pub fn len(&self) -> usize {
        self.end_byte.saturating_sub(self.start_byte)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A class-like declaration (class, interface, struct, record)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassFact {
    pub name: String,
    pub span: Span,
}

/// A method declaration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodFact {
    pub name: String,
    pub span: Span,
}

/// A call site
///
/// `start_position`/`end_position` are the 0-based rows of the callee name.
/// `arguments` stays empty unless a pattern captures `method.arg`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallSite {
    pub name: String,
    pub arguments: Vec<String>,
    pub start_position: usize,
    pub end_position: usize,
    /// Receiver expression text (`repo` in `repo.save()`), absent for bare calls
    pub receiver: Option<String>,
    /// Byte offset used to find the enclosing class
    pub offset: usize,
}

/// Parent names declared by one heritage clause
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InheritanceFact {
    pub parents: Vec<String>,
    /// The parent `super` / `base` refers to, when the clause names one
    pub superclass: Option<String>,
    pub offset: usize,
}

/// A variable, field, property or parameter with a known type name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclaredType {
    pub name: String,
    pub type_name: String,
    pub offset: usize,
}
