//! Cross-reference resolution
//!
//! Both resolvers run after every file has been aggregated. Each builds a
//! name table in one pass and links references in a second pass, in file,
//! class and call-site order. They only set `parentClasses` or append to
//! `usedIn`; nothing is removed or reordered.

pub mod inheritance;
pub mod method_usage;

pub use inheritance::{resolve_inheritance, ClassIndex, ClassLocation};
pub use method_usage::{resolve_method_usages, MethodIndex, MethodLocation};
