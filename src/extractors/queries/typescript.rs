//! TypeScript / TSX patterns
//!
//! TypeScript names classes with `type_identifier`, unlike JavaScript.

use crate::extractors::base::ExtractorKind;

const CLASS_QUERY: &str = r#"
(class_declaration
  name: (type_identifier) @class.name) @class.definition

(abstract_class_declaration
  name: (type_identifier) @class.name) @class.definition

(interface_declaration
  name: (type_identifier) @class.name) @class.definition
"#;

const METHOD_QUERY: &str = r#"
(class_body
  (method_definition
    name: (_) @method.name) @method.definition)

(class_body
  (abstract_method_signature
    name: (_) @method.name) @method.definition)

(interface_body
  (method_signature
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

/// `class_heritage` holds `extends_clause` / `implements_clause`
const INHERITANCE_QUERY: &str = r#"
(class_declaration
  (class_heritage) @class.heritage)

(abstract_class_declaration
  (class_heritage) @class.heritage)

(interface_declaration
  (extends_type_clause) @class.heritage)
"#;

const DECLARED_TYPE_QUERY: &str = r#"
(public_field_definition
  name: (_) @decl.name
  type: (type_annotation (_) @decl.type))

(public_field_definition
  name: (_) @decl.name
  value: (new_expression
    constructor: (_) @decl.type))

(required_parameter
  pattern: (identifier) @decl.name
  type: (type_annotation (_) @decl.type))

(optional_parameter
  pattern: (identifier) @decl.name
  type: (type_annotation (_) @decl.type))

(variable_declarator
  name: (identifier) @decl.name
  type: (type_annotation (_) @decl.type))

(variable_declarator
  name: (identifier) @decl.name
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
