//! Inheritance-declaration extraction
//!
//! Each match yields the parent names of one heritage clause, normalized to
//! their leading dotted identifier. The mapper does not resolve anything; a
//! name that matches no project class is kept as written.

use crate::extractors::base::{
    heritage_parents, heritage_superclass, normalize_type_name, ExtractorKind, FactExtractor,
    InheritanceFact, QueryMatch,
};

pub struct InheritanceExtractor;

impl FactExtractor for InheritanceExtractor {
    type Fact = InheritanceFact;

    fn kind(&self) -> ExtractorKind {
        ExtractorKind::Inheritance
    }

    fn map_match(&self, query_match: &QueryMatch<'_>) -> InheritanceFact {
        let mut parents: Vec<String> = query_match
            .captures_named("class.parent")
            .map(|node| normalize_type_name(node.text()))
            .filter(|name| !name.is_empty())
            .collect();

        // a bare parent capture says nothing about the clause it sits in
        let mut superclass = parents.first().cloned();
        for heritage in query_match.captures_named("class.heritage") {
            parents.extend(heritage_parents(heritage));
            superclass = superclass.or_else(|| heritage_superclass(heritage));
        }

        let offset = query_match
            .capture("class.heritage")
            .or_else(|| query_match.capture("class.parent"))
            .map(|node| node.span().start_byte)
            .unwrap_or(0);

        InheritanceFact {
            parents,
            superclass,
            offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::base::{extract, extract_with, QuerySet};
    use crate::language::{parse, LanguageId};

    fn parents(language: LanguageId, source: &str) -> Vec<Vec<String>> {
        let tree = parse(language, source, "test").unwrap();
        extract(&InheritanceExtractor, &tree)
            .unwrap()
            .into_iter()
            .map(|fact| fact.parents)
            .collect()
    }

    #[test]
    fn test_typescript_extends_and_implements() {
        let source = r#"
class Repository<T> extends BaseRepository<T> implements Disposable, Loggable {}
interface Admin extends User, Auditable {}
class Plain {}
"#;
        assert_eq!(
            parents(LanguageId::TypeScript, source),
            vec![
                vec!["BaseRepository", "Disposable", "Loggable"],
                vec!["User", "Auditable"],
            ]
        );
    }

    #[test]
    fn test_javascript_extends_member_expression() {
        let source = "class Button extends React.Component {}\nclass Plain {}\n";
        assert_eq!(
            parents(LanguageId::JavaScript, source),
            vec![vec!["React.Component"]]
        );
    }

    #[test]
    fn test_csharp_base_list() {
        let source = r#"
public class OrderService : ServiceBase<Order>, IOrderService { }
public interface IOrderService : IDisposable { }
public enum Status : byte { Active }
"#;
        assert_eq!(
            parents(LanguageId::CSharp, source),
            vec![
                vec!["ServiceBase", "IOrderService"],
                vec!["IDisposable"],
            ]
        );
    }

    #[test]
    fn test_java_superclass_and_interfaces() {
        let source = r#"
public class Dog extends Animal implements Comparable<Dog>, Serializable { }
interface Pet extends Named { }
"#;
        assert_eq!(
            parents(LanguageId::Java, source),
            vec![
                vec!["Animal"],
                vec!["Comparable", "Serializable"],
                vec!["Named"],
            ]
        );
    }

    #[test]
    fn test_python_superclasses_skip_keywords() {
        let source = r#"
class Model(Base, mixins.Auditable, metaclass=ABCMeta):
    pass

class Empty():
    pass
"#;
        assert_eq!(
            parents(LanguageId::Python, source),
            vec![vec!["Base", "mixins.Auditable"], vec![]]
        );
    }

    fn superclasses(language: LanguageId, source: &str) -> Vec<Option<String>> {
        let tree = parse(language, source, "test").unwrap();
        extract(&InheritanceExtractor, &tree)
            .unwrap()
            .into_iter()
            .map(|fact| fact.superclass)
            .collect()
    }

    #[test]
    fn test_superclass_only_from_extends_clauses() {
        let typescript = r#"
class Repo extends BaseRepo implements Disposable {}
class Plain implements Disposable {}
interface Admin extends User {}
"#;
        assert_eq!(
            superclasses(LanguageId::TypeScript, typescript),
            vec![Some("BaseRepo".to_string()), None, None]
        );

        let java = r#"
class Dog extends Animal implements Pet { }
class Cat implements Pet { }
"#;
        assert_eq!(
            superclasses(LanguageId::Java, java),
            vec![Some("Animal".to_string()), None, None]
        );

        assert_eq!(
            superclasses(LanguageId::JavaScript, "class B extends A {}"),
            vec![Some("A".to_string())]
        );
        assert_eq!(
            superclasses(LanguageId::Python, "class B(A, Mixin):\n    pass\n"),
            vec![Some("A".to_string())]
        );
    }

    #[test]
    fn test_offset_points_into_owning_class() {
        let source = "class A {}\nclass B extends A {}\n";
        let tree = parse(LanguageId::TypeScript, source, "test.ts").unwrap();
        let facts = extract(&InheritanceExtractor, &tree).unwrap();

        assert_eq!(facts.len(), 1);
        assert!(facts[0].offset > source.find("class B").unwrap());
    }

    #[test]
    fn test_single_parent_capture() {
        let set = QuerySet::compile(
            LanguageId::JavaScript,
            &[(
                ExtractorKind::Inheritance,
                "(class_declaration (class_heritage (identifier) @class.parent))",
            )],
        );
        let tree = parse(LanguageId::JavaScript, "class B extends A {}", "test.js").unwrap();

        let facts = extract_with(&InheritanceExtractor, &tree, &set).unwrap();

        assert_eq!(facts.len(), 1);
        assert_eq!(facts[0].parents, vec!["A"]);
        assert_eq!(facts[0].offset, "class B extends ".len());
    }
}
