//! C# patterns

use crate::extractors::base::ExtractorKind;

const CLASS_QUERY: &str = r#"
(class_declaration
  name: (identifier) @class.name) @class.definition

(interface_declaration
  name: (identifier) @class.name) @class.definition

(struct_declaration
  name: (identifier) @class.name) @class.definition

(record_declaration
  name: (identifier) @class.name) @class.definition
"#;

const METHOD_QUERY: &str = r#"
(method_declaration
  name: (identifier) @method.name) @method.definition
"#;

/// `this` and `base` are anonymous tokens, so the receiver is `_`, not `(_)`
const METHOD_USAGE_QUERY: &str = r#"
(invocation_expression
  function: (identifier) @method.name) @method.call

(invocation_expression
  function: (member_access_expression
    expression: _ @method.object
    name: (identifier) @method.name)) @method.call
"#;

/// Enums also take a `base_list` (underlying type), so anchor on the owner
const INHERITANCE_QUERY: &str = r#"
(class_declaration
  (base_list) @class.heritage)

(interface_declaration
  (base_list) @class.heritage)

(struct_declaration
  (base_list) @class.heritage)

(record_declaration
  (base_list) @class.heritage)
"#;

/// Declarators are unpacked by the mapper (`var` needs the initializer)
const DECLARED_TYPE_QUERY: &str = r#"
(variable_declaration) @decl.node

(parameter) @decl.node

(property_declaration) @decl.node
"#;

pub(super) const PATTERNS: &[(ExtractorKind, &str)] = &[
    (ExtractorKind::Class, CLASS_QUERY),
    (ExtractorKind::Method, METHOD_QUERY),
    (ExtractorKind::MethodUsage, METHOD_USAGE_QUERY),
    (ExtractorKind::Inheritance, INHERITANCE_QUERY),
    (ExtractorKind::DeclaredType, DECLARED_TYPE_QUERY),
];
