//! JavaScript patterns

use crate::extractors::base::ExtractorKind;

const CLASS_QUERY: &str = r#"
(class_declaration
  name: (identifier) @class.name) @class.definition
"#;

/// Object-literal methods are not class members
const METHOD_QUERY: &str = r#"
(class_body
  (method_definition
    name: (_) @method.name) @method.definition)
"#;

const METHOD_USAGE_QUERY: &str = r#"
(call_expression
  function: (identifier) @method.name) @method.call

(call_expression
  function: (member_expression
    object: (_) @method.object
    property: [
      (property_identifier)
      (private_property_identifier)
    ] @method.name)) @method.call
"#;

const INHERITANCE_QUERY: &str = r#"
(class_declaration
  (class_heritage) @class.heritage)
"#;

/// Plain JavaScript has no annotations; only `new` initializers carry a type
const DECLARED_TYPE_QUERY: &str = r#"
(variable_declarator
  name: (identifier) @decl.name
  value: (new_expression
    constructor: (_) @decl.type))

(field_definition
  property: (property_identifier) @decl.name
  value: (new_expression
    constructor: (_) @decl.type))

(assignment_expression
  left: (member_expression
    object: (this)
    property: (property_identifier) @decl.name)
  right: (new_expression
    constructor: (_) @decl.type))
"#;

pub(super) const PATTERNS: &[(ExtractorKind, &str)] = &[
    (ExtractorKind::Class, CLASS_QUERY),
    (ExtractorKind::Method, METHOD_QUERY),
    (ExtractorKind::MethodUsage, METHOD_USAGE_QUERY),
    (ExtractorKind::Inheritance, INHERITANCE_QUERY),
    (ExtractorKind::DeclaredType, DECLARED_TYPE_QUERY),
];
