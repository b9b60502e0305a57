//! Method-usage (call site) extraction
//!
//! One `CallSite` per match, in match order, no deduplication. The default
//! patterns never capture `method.arg`, so `arguments` is always empty for
//! them; the field is filled only by patterns that add the capture.

use crate::extractors::base::{CallSite, ExtractorKind, FactExtractor, QueryMatch};

pub struct MethodUsageExtractor;

impl FactExtractor for MethodUsageExtractor {
    type Fact = CallSite;

    fn kind(&self) -> ExtractorKind {
        ExtractorKind::MethodUsage
    }

    fn map_match(&self, query_match: &QueryMatch<'_>) -> CallSite {
        let name_node = query_match.capture("method.name");

        let name = name_node
            .map(|node| node.text().to_string())
            .unwrap_or_default();
        let arguments = query_match
            .captures_named("method.arg")
            .map(|node| node.text().to_string())
            .collect();
        let start_position = name_node.map(|node| node.start_row()).unwrap_or(0);
        let end_position = name_node.map(|node| node.end_row()).unwrap_or(0);

        let receiver = query_match
            .capture("method.object")
            .map(|node| node.text().trim().to_string())
            .filter(|text| !text.is_empty());

        let offset = query_match
            .capture("method.call")
            .or(name_node)
            .map(|node| node.span().start_byte)
            .unwrap_or(0);

        CallSite {
            name,
            arguments,
            start_position,
            end_position,
            receiver,
            offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::base::{compile_query, extract, extract_with, run_query, QuerySet};
    use crate::language::{parse, LanguageId};

    fn call_sites(language: LanguageId, source: &str) -> Vec<CallSite> {
        let tree = parse(language, source, "test").unwrap();
        extract(&MethodUsageExtractor, &tree).unwrap()
    }

    #[test]
    fn test_bare_call_inside_class() {
        let source = r#"
class Worker {
    run() {
        doSomething();
    }
}
"#;
        let calls = call_sites(LanguageId::TypeScript, source);

        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].name, "doSomething");
        assert!(calls[0].arguments.is_empty());
        assert_eq!(calls[0].start_position, 3);
        assert_eq!(calls[0].end_position, 3);
        assert_eq!(calls[0].receiver, None);
    }

    #[test]
    fn test_bare_call_in_csharp_and_java() {
        let csharp = "class Worker {\n    void Run() {\n        doSomething();\n    }\n}\n";
        let java = "class Worker {\n    void run() {\n        doSomething();\n    }\n}\n";

        for (language, source) in [(LanguageId::CSharp, csharp), (LanguageId::Java, java)] {
            let calls = call_sites(language, source);
            assert_eq!(calls.len(), 1, "{}", language);
            assert_eq!(calls[0].name, "doSomething");
            assert!(calls[0].arguments.is_empty());
            assert_eq!(calls[0].start_position, 2);
            assert_eq!(calls[0].end_position, 2);
        }
    }

    #[test]
    fn test_member_calls_capture_receiver() {
        let source = "repo.save(user);\nthis.logger.info('saved');\n";
        let calls = call_sites(LanguageId::JavaScript, source);

        let pairs: Vec<(&str, Option<&str>)> = calls
            .iter()
            .map(|call| (call.name.as_str(), call.receiver.as_deref()))
            .collect();
        assert_eq!(
            pairs,
            vec![("save", Some("repo")), ("info", Some("this.logger"))]
        );
    }

    #[test]
    fn test_repeated_calls_are_not_deduplicated() {
        let calls = call_sites(LanguageId::Python, "ping()\nping()\nping()\n");
        assert_eq!(calls.len(), 3);
        assert!(calls.iter().all(|call| call.name == "ping"));
        let rows: Vec<usize> = calls.iter().map(|call| call.start_position).collect();
        assert_eq!(rows, vec![0, 1, 2]);
    }

    #[test]
    fn test_one_fact_per_match() {
        let source = r#"
class Checkout {
    void Pay() {
        cart.Total();
        Validate(cart.Items());
        gateway.Charge(cart.Total());
    }
}
"#;
        let tree = parse(LanguageId::CSharp, source, "Checkout.cs").unwrap();
        let queries = QuerySet::for_language(LanguageId::CSharp);
        let query = queries.query(ExtractorKind::MethodUsage).unwrap();

        let match_count = run_query(&tree, query).len();
        let facts = extract(&MethodUsageExtractor, &tree).unwrap();

        assert_eq!(facts.len(), match_count);
        let names: Vec<&str> = facts.iter().map(|call| call.name.as_str()).collect();
        assert_eq!(names, vec!["Total", "Validate", "Items", "Charge", "Total"]);
    }

    #[test]
    fn test_missing_name_capture_defaults() {
        let tree = parse(LanguageId::JavaScript, "\nrun();", "test.js").unwrap();
        let set = QuerySet::compile(
            LanguageId::JavaScript,
            &[(ExtractorKind::MethodUsage, "(call_expression) @method.call")],
        );

        let calls = extract_with(&MethodUsageExtractor, &tree, &set).unwrap();

        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].name, "");
        assert!(calls[0].arguments.is_empty());
        assert_eq!(calls[0].start_position, 0);
        assert_eq!(calls[0].end_position, 0);
        assert_eq!(calls[0].offset, 1);
    }

    #[test]
    fn test_argument_capture_when_pattern_provides_it() {
        let pattern = r#"
(call_expression
  function: (identifier) @method.name
  arguments: (arguments (_) @method.arg)) @method.call
"#;
        assert!(compile_query(LanguageId::JavaScript, ExtractorKind::MethodUsage, pattern).is_ok());

        let tree = parse(LanguageId::JavaScript, "send(a);", "test.js").unwrap();
        let set = QuerySet::compile(LanguageId::JavaScript, &[(ExtractorKind::MethodUsage, pattern)]);
        let calls = extract_with(&MethodUsageExtractor, &tree, &set).unwrap();

        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].arguments, vec!["a".to_string()]);
    }
}
