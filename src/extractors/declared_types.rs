//! Declared-type extraction
//!
//! Collects `name: Type` pairs from fields, properties, parameters, locals and
//! `new` initializers. They feed receiver typing for call sites; nothing here
//! is type inference. One match may declare several names (`int a, b;`), so a
//! match maps to a list.

use crate::extractors::base::{
    normalize_type_name, strip_self_prefix, CaptureNode, DeclaredType, ExtractorKind,
    FactExtractor, QueryMatch,
};

pub struct DeclaredTypeExtractor;

impl FactExtractor for DeclaredTypeExtractor {
    type Fact = Vec<DeclaredType>;

    fn kind(&self) -> ExtractorKind {
        ExtractorKind::DeclaredType
    }

    fn map_match(&self, query_match: &QueryMatch<'_>) -> Vec<DeclaredType> {
        let mut declared = Vec::new();

        if let (Some(name), Some(type_node)) =
            (query_match.capture("decl.name"), query_match.capture("decl.type"))
        {
            push_declared(
                &mut declared,
                strip_self_prefix(name.text()),
                type_node.text(),
                name.span().start_byte,
            );
        }

        for node in query_match.captures_named("decl.node") {
            unpack_declaration(node, &mut declared);
        }

        declared
    }
}

fn push_declared(declared: &mut Vec<DeclaredType>, name: &str, type_text: &str, offset: usize) {
    let type_name = normalize_type_name(type_text);
    if name.is_empty() || type_name.is_empty() {
        return;
    }
    declared.push(DeclaredType {
        name: name.to_string(),
        type_name,
        offset,
    });
}

/// Unpack a whole declaration node into its declared names
fn unpack_declaration(node: CaptureNode<'_>, declared: &mut Vec<DeclaredType>) {
    match node.kind() {
        // C#: `Type a = ..., b;` (fields and locals)
        "variable_declaration" => {
            let type_node = node.field("type").or_else(|| {
                node.named_children()
                    .into_iter()
                    .find(|child| child.kind() != "variable_declarator")
            });
            let type_text = type_node.map(|t| t.text()).unwrap_or("");

            for declarator in node
                .named_children()
                .into_iter()
                .filter(|child| child.kind() == "variable_declarator")
            {
                let Some(name) = declarator_name(declarator) else {
                    continue;
                };
                let resolved = effective_type(type_text, declarator);
                push_declared(declared, name.text(), resolved, name.span().start_byte);
            }
        }
        // Java: `Type a = ..., b;`
        "field_declaration" | "local_variable_declaration" => {
            let type_text = node.field("type").map(|t| t.text()).unwrap_or("");

            for declarator in node
                .named_children()
                .into_iter()
                .filter(|child| child.kind() == "variable_declarator")
            {
                let Some(name) = declarator_name(declarator) else {
                    continue;
                };
                let resolved = effective_type(type_text, declarator);
                push_declared(declared, name.text(), resolved, name.span().start_byte);
            }
        }
        // C# `parameter` / `property_declaration`, Java `formal_parameter`
        "parameter" | "property_declaration" | "formal_parameter" => {
            if let (Some(name), Some(type_node)) = (node.field("name"), node.field("type")) {
                push_declared(declared, name.text(), type_node.text(), name.span().start_byte);
            }
        }
        // Python `name: Type` parameter has no name field
        "typed_parameter" => {
            let name = node
                .named_children()
                .into_iter()
                .find(|child| child.kind() == "identifier");
            if let (Some(name), Some(type_node)) = (name, node.field("type")) {
                push_declared(declared, name.text(), type_node.text(), name.span().start_byte);
            }
        }
        _ => {}
    }
}

fn declarator_name<'t>(declarator: CaptureNode<'t>) -> Option<CaptureNode<'t>> {
    declarator.field("name").or_else(|| {
        declarator
            .named_children()
            .into_iter()
            .find(|child| child.kind() == "identifier")
    })
}

/// `var x = new T()` declares `T`
fn effective_type<'t>(declared_type: &'t str, declarator: CaptureNode<'t>) -> &'t str {
    if declared_type.trim() != "var" {
        return declared_type;
    }
    initializer_type(declarator).unwrap_or("")
}

fn initializer_type<'t>(declarator: CaptureNode<'t>) -> Option<&'t str> {
    let value = declarator.field("value").or_else(|| {
        declarator.named_children().into_iter().find_map(|child| match child.kind() {
            "object_creation_expression" => Some(child),
            // older C# grammars wrap the initializer
            "equals_value_clause" => child
                .named_children()
                .into_iter()
                .find(|inner| inner.kind() == "object_creation_expression"),
            _ => None,
        })
    })?;

    if value.kind() != "object_creation_expression" {
        return None;
    }
    value.field("type").map(|t| t.text())
}
