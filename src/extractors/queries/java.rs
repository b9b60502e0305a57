//! Java patterns

use crate::extractors::base::ExtractorKind;

const CLASS_QUERY: &str = r#"
(class_declaration
  name: (identifier) @class.name) @class.definition

(interface_declaration
  name: (identifier) @class.name) @class.definition

(enum_declaration
  name: (identifier) @class.name) @class.definition

(record_declaration
  name: (identifier) @class.name) @class.definition
"#;

const METHOD_QUERY: &str = r#"
(method_declaration
  name: (identifier) @method.name) @method.definition
"#;

const METHOD_USAGE_QUERY: &str = r#"
(method_invocation
  object: (_)? @method.object
  name: (identifier) @method.name) @method.call
"#;

const INHERITANCE_QUERY: &str = r#"
(class_declaration
  (superclass) @class.heritage)

(class_declaration
  (super_interfaces) @class.heritage)

(interface_declaration
  (extends_interfaces) @class.heritage)

(enum_declaration
  (super_interfaces) @class.heritage)

(record_declaration
  (super_interfaces) @class.heritage)
"#;

const DECLARED_TYPE_QUERY: &str = r#"
(field_declaration) @decl.node

(local_variable_declaration) @decl.node

(formal_parameter) @decl.node
"#;

pub(super) const PATTERNS: &[(ExtractorKind, &str)] = &[
    (ExtractorKind::Class, CLASS_QUERY),
    (ExtractorKind::Method, METHOD_QUERY),
    (ExtractorKind::MethodUsage, METHOD_USAGE_QUERY),
    (ExtractorKind::Inheritance, INHERITANCE_QUERY),
    (ExtractorKind::DeclaredType, DECLARED_TYPE_QUERY),
];
