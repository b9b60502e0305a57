// Node helpers shared by the fact mappers

use super::query::CaptureNode;
use once_cell::sync::Lazy;
use regex::Regex;

static TYPE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*(\.[A-Za-z_$][A-Za-z0-9_$]*)*").unwrap()
});

/// Leading dotted identifier of a type expression
///
/// `Base<T>` → `Base`, `Base(arg)` → `Base`, `ns.Base` → `ns.Base`,
/// anything without a leading identifier → empty.
pub fn normalize_type_name(text: &str) -> String {
    TYPE_NAME
        .find(text.trim())
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Drop a `this.` / `self.` qualifier from a member reference
pub fn strip_self_prefix(text: &str) -> &str {
    let text = text.trim();
    text.strip_prefix("this.")
        .or_else(|| text.strip_prefix("self."))
        .unwrap_or(text)
        .trim()
}

/// Clause wrappers whose children are the actual parent types
const HERITAGE_WRAPPERS: &[&str] = &[
    "class_heritage",
    "extends_clause",
    "implements_clause",
    "extends_type_clause",
    "superclass",
    "super_interfaces",
    "extends_interfaces",
    "type_list",
    "base_list",
    "argument_list",
];

/// Children that never name a parent type
const HERITAGE_NOISE: &[&str] = &[
    "comment",
    "type_arguments",
    "type_argument_list",
    "keyword_argument",
    "list_splat",
    "dictionary_splat",
];

/// Parent type names declared by a heritage clause, in source order
pub fn heritage_parents(node: CaptureNode<'_>) -> Vec<String> {
    let mut parents = Vec::new();
    collect_heritage_parents(node, &mut parents);
    parents
}

/// The extended class of a heritage clause, if it has one
///
/// Interface lists (`implements`, Java `super_interfaces`, interface
/// `extends`) never name a superclass. C# base lists and Python superclass
/// lists cannot tell a class from an interface, so their first entry is used.
pub fn heritage_superclass(node: CaptureNode<'_>) -> Option<String> {
    match node.kind() {
        "super_interfaces" | "extends_interfaces" | "extends_type_clause" | "implements_clause" => {
            None
        }
        "class_heritage" => {
            let children = node.named_children();
            if let Some(extends) = children.iter().find(|child| child.kind() == "extends_clause") {
                return heritage_parents(*extends).into_iter().next();
            }
            if children.iter().any(|child| child.kind() == "implements_clause") {
                return None;
            }
            // JavaScript: the clause is the extends expression itself
            heritage_parents(node).into_iter().next()
        }
        _ => heritage_parents(node).into_iter().next(),
    }
}

fn collect_heritage_parents(node: CaptureNode<'_>, parents: &mut Vec<String>) {
    for child in node.named_children() {
        if HERITAGE_NOISE.contains(&child.kind()) {
            continue;
        }
        if HERITAGE_WRAPPERS.contains(&child.kind()) {
            collect_heritage_parents(child, parents);
            continue;
        }

        let name = normalize_type_name(child.text());
        if !name.is_empty() {
            parents.push(name);
        }
    }
}
