//! Receiver typing for call sites
//!
//! Supplies `objectType` for a usage from the receiver text and what the
//! enclosing class declares. This is input preparation for the usage
//! resolver, not type inference: anything it cannot place is passed through
//! as written and simply never resolves.

use crate::extractors::base::{normalize_type_name, DeclaredType};
use crate::language::LanguageId;
use once_cell::sync::Lazy;
use regex::Regex;

static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap());

/// `objectType` of a call that targets no class
pub const NO_OBJECT_TYPE: &str = "";

/// Whether an unqualified call can target a method of the enclosing class
///
/// Java and C# have an implicit `this`. JavaScript, TypeScript and Python
/// need `this.` / `self.`, so a bare `f()` is a free function or builtin.
fn has_implicit_receiver(language: LanguageId) -> bool {
    matches!(language, LanguageId::Java | LanguageId::CSharp)
}

/// What a call site can see of its enclosing class
#[derive(Debug, Clone, Copy)]
pub struct ReceiverScope<'a> {
    pub language: LanguageId,
    pub class_name: &'a str,
    /// Extended class named by the heritage clauses, unresolved
    pub superclass: Option<&'a str>,
    /// Declarations inside the class, in source order
    pub declared: &'a [DeclaredType],
}

impl<'a> ReceiverScope<'a> {
    /// Type of the receiver of a call at byte `offset`
    pub fn object_type(&self, receiver: Option<&str>, offset: usize) -> String {
        let Some(receiver) = receiver.map(str::trim).filter(|r| !r.is_empty()) else {
            if has_implicit_receiver(self.language) {
                return self.class_name.to_string();
            }
            return NO_OBJECT_TYPE.to_string();
        };

        match receiver {
            "this" | "self" => return self.class_name.to_string(),
            "super" | "base" | "super()" => {
                return self.superclass.unwrap_or(self.class_name).to_string();
            }
            _ => {}
        }

        let member = receiver
            .strip_prefix("this.")
            .or_else(|| receiver.strip_prefix("self."));
        if let Some(member) = member {
            return self
                .declared_type(member.trim(), offset)
                .unwrap_or_else(|| receiver.to_string());
        }

        if let Some(constructed) = receiver.strip_prefix("new ") {
            let type_name = normalize_type_name(constructed);
            if !type_name.is_empty() {
                return type_name;
            }
        }

        if IDENTIFIER.is_match(receiver) {
            if let Some(type_name) = self.declared_type(receiver, offset) {
                return type_name;
            }
            if receiver.starts_with(|c: char| c.is_ascii_uppercase()) {
                return receiver.to_string();
            }
        }

        receiver.to_string()
    }

    /// Nearest declaration of `name` before `offset`, else any declaration
    fn declared_type(&self, name: &str, offset: usize) -> Option<String> {
        let mut named = self.declared.iter().filter(|decl| decl.name == name);

        let preceding = named
            .clone()
            .filter(|decl| decl.offset <= offset)
            .max_by_key(|decl| decl.offset);

        preceding
            .or_else(|| named.next())
            .map(|decl| decl.type_name.clone())
    }
}
