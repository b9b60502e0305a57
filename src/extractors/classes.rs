//! Class extraction
//!
//! Class-like declarations: classes, abstract classes, interfaces, structs,
//! records and (Java) enums. The definition span is what later attributes
//! methods, call sites and heritage clauses to their owning class.

use crate::extractors::base::{ClassFact, ExtractorKind, FactExtractor, QueryMatch, Span};

pub struct ClassExtractor;

impl FactExtractor for ClassExtractor {
    type Fact = ClassFact;

    fn kind(&self) -> ExtractorKind {
        ExtractorKind::Class
    }

    fn map_match(&self, query_match: &QueryMatch<'_>) -> ClassFact {
        let name = query_match
            .capture("class.name")
            .map(|node| node.text().to_string())
            .unwrap_or_default();
        let span = query_match
            .capture("class.definition")
            .map(|node| node.span())
            .unwrap_or(Span::default());

        ClassFact { name, span }
    }
}

/// Index of the innermost class whose definition contains `offset`
pub fn innermost_class(classes: &[ClassFact], offset: usize) -> Option<usize> {
    classes
        .iter()
        .enumerate()
        .filter(|(_, class)| class.span.contains(offset))
        .min_by_key(|(_, class)| class.span.len())
        .map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::base::extract;
    use crate::language::{parse, LanguageId};

    fn class_names(language: LanguageId, source: &str) -> Vec<String> {
        let tree = parse(language, source, "test").unwrap();
        extract(&ClassExtractor, &tree)
            .unwrap()
            .into_iter()
            .map(|class| class.name)
            .collect()
    }

    #[test]
    fn test_typescript_classes_and_interfaces() {
        let source = r#"
export class UserService {}
abstract class Repository {}
interface Identifiable {}
"#;
        assert_eq!(
            class_names(LanguageId::TypeScript, source),
            vec!["UserService", "Repository", "Identifiable"]
        );
    }

    #[test]
    fn test_csharp_class_like_declarations() {
        let source = r#"
namespace App {
    public class Order {}
    public interface IOrder {}
    public struct Point {}
}
"#;
        assert_eq!(
            class_names(LanguageId::CSharp, source),
            vec!["Order", "IOrder", "Point"]
        );
    }

    #[test]
    fn test_nested_classes_keep_source_order() {
        let source = r#"
class Outer {
    static class Inner {}
}
"#;
        assert_eq!(class_names(LanguageId::Java, source), vec!["Outer", "Inner"]);
    }

    #[test]
    fn test_innermost_class_prefers_smallest_span() {
        let classes = vec![
            ClassFact {
                name: "Outer".to_string(),
                span: Span {
                    start_byte: 0,
                    end_byte: 100,
                },
            },
            ClassFact {
                name: "Inner".to_string(),
                span: Span {
                    start_byte: 20,
                    end_byte: 60,
                },
            },
        ];

        assert_eq!(innermost_class(&classes, 10), Some(0));
        assert_eq!(innermost_class(&classes, 30), Some(1));
        assert_eq!(innermost_class(&classes, 70), Some(0));
        assert_eq!(innermost_class(&classes, 150), None);
    }
}
