//! Python patterns

use crate::extractors::base::ExtractorKind;

const CLASS_QUERY: &str = r#"
(class_definition
  name: (identifier) @class.name) @class.definition
"#;

/// Direct members of the class body only; nested helpers are not methods
const METHOD_QUERY: &str = r#"
(class_definition
  body: (block
    (function_definition
      name: (identifier) @method.name) @method.definition))

(class_definition
  body: (block
    (decorated_definition
      definition: (function_definition
        name: (identifier) @method.name) @method.definition)))
"#;

const METHOD_USAGE_QUERY: &str = r#"
(call
  function: (identifier) @method.name) @method.call

(call
  function: (attribute
    object: (_) @method.object
    attribute: (identifier) @method.name)) @method.call
"#;

const INHERITANCE_QUERY: &str = r#"
(class_definition
  superclasses: (argument_list) @class.heritage)
"#;

/// Constructor calls count only when the callee looks like a class name
const DECLARED_TYPE_QUERY: &str = r#"
(typed_parameter) @decl.node

(typed_default_parameter
  name: (identifier) @decl.name
  type: (type) @decl.type)

(assignment
  left: (_) @decl.name
  type: (type) @decl.type)

(assignment
  left: (_) @decl.name
  right: (call
    function: (identifier) @decl.type)
  (#match? @decl.type "^[A-Z]"))
"#;

pub(super) const PATTERNS: &[(ExtractorKind, &str)] = &[
    (ExtractorKind::Class, CLASS_QUERY),
    (ExtractorKind::Method, METHOD_QUERY),
    (ExtractorKind::MethodUsage, METHOD_USAGE_QUERY),
    (ExtractorKind::Inheritance, INHERITANCE_QUERY),
    (ExtractorKind::DeclaredType, DECLARED_TYPE_QUERY),
];
