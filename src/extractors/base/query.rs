// Query engine
//
// Thin, language-agnostic runner over tree-sitter queries. Pattern semantics
// belong to the grammar; this module compiles patterns, runs them and hands
// back matches whose capture views borrow the syntax tree.

use super::types::{ExtractorKind, Span};
use crate::error::{AnalysisError, Result};
use crate::language::{LanguageId, SyntaxTree};
use once_cell::sync::OnceCell;
use std::cmp::Reverse;
use std::collections::HashMap;
use streaming_iterator::StreamingIterator;
use tree_sitter::{Node, Query, QueryCursor};

/// Read-only view of a captured node
///
/// Borrows the tree it points into, so it cannot outlive it.
#[derive(Debug, Clone, Copy)]
pub struct CaptureNode<'t> {
    node: Node<'t>,
    source: &'t str,
}

impl<'t> CaptureNode<'t> {
    pub fn new(node: Node<'t>, source: &'t str) -> Self {
        Self { node, source }
    }

    /// Source text covered by the node (empty on a UTF-8 boundary mismatch)
    pub fn text(&self) -> &'t str {
        self.node.utf8_text(self.source.as_bytes()).unwrap_or("")
    }

    pub fn start_row(&self) -> usize {
        self.node.start_position().row
    }

    pub fn end_row(&self) -> usize {
        self.node.end_position().row
    }

    pub fn span(&self) -> Span {
        Span {
            start_byte: self.node.start_byte(),
            end_byte: self.node.end_byte(),
        }
    }

    pub fn kind(&self) -> &'static str {
        self.node.kind()
    }

    pub fn node(&self) -> Node<'t> {
        self.node
    }

    /// View of another node of the same tree
    pub fn with_node(&self, node: Node<'t>) -> Self {
        Self {
            node,
            source: self.source,
        }
    }

    pub fn field(&self, field_name: &str) -> Option<CaptureNode<'t>> {
        self.node
            .child_by_field_name(field_name)
            .map(|child| self.with_node(child))
    }

    pub fn named_children(&self) -> Vec<CaptureNode<'t>> {
        let mut cursor = self.node.walk();
        self.node
            .named_children(&mut cursor)
            .map(|child| self.with_node(child))
            .collect()
    }
}

/// Captures bound by one successful pattern match
#[derive(Debug, Clone)]
pub struct QueryMatch<'t> {
    pub pattern_index: usize,
    captures: Vec<(&'t str, CaptureNode<'t>)>,
}

impl<'t> QueryMatch<'t> {
    /// First capture with the given name
    pub fn capture(&self, name: &str) -> Option<CaptureNode<'t>> {
        self.captures
            .iter()
            .find(|(capture_name, _)| *capture_name == name)
            .map(|(_, node)| *node)
    }

    /// All captures with the given name, in capture order
    pub fn captures_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = CaptureNode<'t>> + 'a {
        self.captures
            .iter()
            .filter(move |(capture_name, _)| *capture_name == name)
            .map(|(_, node)| *node)
    }

    pub fn capture_names(&self) -> impl Iterator<Item = &'t str> + '_ {
        self.captures.iter().map(|(name, _)| *name)
    }

    /// Smallest range covering every capture
    pub fn span(&self) -> Span {
        let start_byte = self
            .captures
            .iter()
            .map(|(_, node)| node.span().start_byte)
            .min()
            .unwrap_or(0);
        let end_byte = self
            .captures
            .iter()
            .map(|(_, node)| node.span().end_byte)
            .max()
            .unwrap_or(0);
        Span {
            start_byte,
            end_byte,
        }
    }
}

/// Run a compiled query over a tree
///
/// Matches come back in pre-order of their covering span: earlier start first,
/// and the enclosing match before the nested one when both start together.
pub fn run_query<'t>(tree: &'t SyntaxTree<'_>, query: &'t Query) -> Vec<QueryMatch<'t>> {
    let source: &'t str = tree.source();
    let names = query.capture_names();
    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(query, tree.root_node(), source.as_bytes());

    let mut results = Vec::new();
    while let Some(query_match) = matches.next() {
        let captures = query_match
            .captures
            .iter()
            .filter_map(|capture| {
                names
                    .get(capture.index as usize)
                    .map(|name| (*name, CaptureNode::new(capture.node, source)))
            })
            .collect();

        results.push(QueryMatch {
            pattern_index: query_match.pattern_index,
            captures,
        });
    }

    results.sort_by_key(|m| {
        let span = m.span();
        (span.start_byte, Reverse(span.end_byte))
    });
    results
}

/// Compile one pattern against a language's grammar
pub fn compile_query(language: LanguageId, kind: ExtractorKind, pattern: &str) -> Result<Query> {
    Query::new(language.grammar(), pattern).map_err(|e| AnalysisError::MalformedQuery {
        language: language.to_string(),
        kind,
        message: e.to_string(),
    })
}

/// Compiled queries of one language, keyed by extractor
///
/// A pattern that fails to compile only disables its own extractor.
pub struct QuerySet {
    language: LanguageId,
    queries: HashMap<ExtractorKind, Result<Query>>,
}

impl QuerySet {
    pub fn compile(language: LanguageId, patterns: &[(ExtractorKind, &str)]) -> Self {
        let mut queries = HashMap::new();
        for (kind, pattern) in patterns {
            let compiled = compile_query(language, *kind, pattern);
            if let Err(e) = &compiled {
                tracing::error!("{}", e);
            }
            queries.insert(*kind, compiled);
        }
        Self { language, queries }
    }

    /// Built-in queries for a language, compiled on first use
    pub fn for_language(language: LanguageId) -> &'static QuerySet {
        static TYPESCRIPT: OnceCell<QuerySet> = OnceCell::new();
        static TSX: OnceCell<QuerySet> = OnceCell::new();
        static JAVASCRIPT: OnceCell<QuerySet> = OnceCell::new();
        static CSHARP: OnceCell<QuerySet> = OnceCell::new();
        static JAVA: OnceCell<QuerySet> = OnceCell::new();
        static PYTHON: OnceCell<QuerySet> = OnceCell::new();

        let cell = match language {
            LanguageId::TypeScript => &TYPESCRIPT,
            LanguageId::Tsx => &TSX,
            LanguageId::JavaScript => &JAVASCRIPT,
            LanguageId::CSharp => &CSHARP,
            LanguageId::Java => &JAVA,
            LanguageId::Python => &PYTHON,
        };

        cell.get_or_init(|| {
            QuerySet::compile(language, crate::extractors::queries::patterns(language))
        })
    }

    pub fn language(&self) -> LanguageId {
        self.language
    }

    pub fn query(&self, kind: ExtractorKind) -> Result<&Query> {
        match self.queries.get(&kind) {
            Some(Ok(query)) => Ok(query),
            Some(Err(e)) => Err(e.clone()),
            None => Err(AnalysisError::MalformedQuery {
                language: self.language.to_string(),
                kind,
                message: "no pattern registered".to_string(),
            }),
        }
    }

    /// Compilation failures, in extractor order
    pub fn errors(&self) -> Vec<AnalysisError> {
        ExtractorKind::ALL
            .iter()
            .filter_map(|kind| match self.queries.get(kind) {
                Some(Err(e)) => Some(e.clone()),
                _ => None,
            })
            .collect()
    }
}
