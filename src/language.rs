//! Language Support - Grammar adapter
//!
//! Maps a language identifier to its tree-sitter grammar and parses source text
//! into a [`SyntaxTree`]. Grammars are loaded lazily, once per language, and
//! shared read-only across threads afterwards.

use crate::error::{AnalysisError, Result};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::fmt;
use tree_sitter::{Language, Parser, Tree};

/// Languages with a registered grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageId {
    TypeScript,
    Tsx,
    JavaScript,
    CSharp,
    Java,
    Python,
}

impl LanguageId {
    pub const ALL: [LanguageId; 6] = [
        LanguageId::TypeScript,
        LanguageId::Tsx,
        LanguageId::JavaScript,
        LanguageId::CSharp,
        LanguageId::Java,
        LanguageId::Python,
    ];

    /// Resolve a caller-supplied identifier
    ///
    /// Accepts the canonical names plus the common aliases ("ts", "jsx",
    /// "c-sharp", "cs", "py").
    pub fn from_id(id: &str) -> Result<Self> {
        match id {
            "typescript" | "ts" => Ok(LanguageId::TypeScript),
            "tsx" => Ok(LanguageId::Tsx),
            "javascript" | "js" | "jsx" => Ok(LanguageId::JavaScript),
            "csharp" | "c-sharp" | "cs" => Ok(LanguageId::CSharp),
            "java" => Ok(LanguageId::Java),
            "python" | "py" => Ok(LanguageId::Python),
            _ => Err(AnalysisError::UnsupportedLanguage {
                language: id.to_string(),
            }),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LanguageId::TypeScript => "typescript",
            LanguageId::Tsx => "tsx",
            LanguageId::JavaScript => "javascript",
            LanguageId::CSharp => "csharp",
            LanguageId::Java => "java",
            LanguageId::Python => "python",
        }
    }

    /// Get the memoized tree-sitter grammar for this language
    pub fn grammar(self) -> &'static Language {
        static TYPESCRIPT: OnceCell<Language> = OnceCell::new();
        static TSX: OnceCell<Language> = OnceCell::new();
        static JAVASCRIPT: OnceCell<Language> = OnceCell::new();
        static CSHARP: OnceCell<Language> = OnceCell::new();
        static JAVA: OnceCell<Language> = OnceCell::new();
        static PYTHON: OnceCell<Language> = OnceCell::new();

        let cell = match self {
            LanguageId::TypeScript => &TYPESCRIPT,
            LanguageId::Tsx => &TSX,
            LanguageId::JavaScript => &JAVASCRIPT,
            LanguageId::CSharp => &CSHARP,
            LanguageId::Java => &JAVA,
            LanguageId::Python => &PYTHON,
        };

        cell.get_or_init(|| {
            tracing::debug!("Loading tree-sitter grammar for {}", self);
            load_grammar(self)
        })
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn load_grammar(language: LanguageId) -> Language {
    match language {
        LanguageId::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        LanguageId::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        LanguageId::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
        LanguageId::CSharp => tree_sitter_c_sharp::LANGUAGE.into(),
        LanguageId::Java => tree_sitter_java::LANGUAGE.into(),
        LanguageId::Python => tree_sitter_python::LANGUAGE.into(),
    }
}

/// Detect language from file extension
///
/// Convenience for callers that only have a path. Returns an identifier that
/// [`LanguageId::from_id`] accepts.
pub fn detect_language_from_extension(extension: &str) -> Option<&'static str> {
    match extension {
        "ts" | "mts" | "cts" => Some("typescript"),
        "tsx" => Some("tsx"),
        "js" | "jsx" | "mjs" | "cjs" => Some("javascript"),
        "cs" => Some("csharp"),
        "java" => Some("java"),
        "py" | "pyi" => Some("python"),
        _ => None,
    }
}

/// One source file parsed under one grammar
///
/// Error-recovery nodes are kept as-is: queries simply stop matching inside
/// broken regions.
pub struct SyntaxTree<'src> {
    language: LanguageId,
    tree: Tree,
    source: &'src str,
}

impl<'src> SyntaxTree<'src> {
    pub fn language(&self) -> LanguageId {
        self.language
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    pub fn root_node(&self) -> tree_sitter::Node<'_> {
        self.tree.root_node()
    }

    /// Whether the grammar had to recover from syntax errors anywhere
    pub fn has_errors(&self) -> bool {
        self.tree.root_node().has_error()
    }
}

/// Parse source text under a language's grammar
pub fn parse<'src>(language: LanguageId, source: &'src str, path: &str) -> Result<SyntaxTree<'src>> {
    let mut parser = Parser::new();
    parser
        .set_language(language.grammar())
        .map_err(|e| AnalysisError::ParserInit {
            language: language.to_string(),
            message: e.to_string(),
        })?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| AnalysisError::ParseFailed {
            path: path.to_string(),
        })?;

    Ok(SyntaxTree {
        language,
        tree,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id_accepts_aliases() {
        assert_eq!(LanguageId::from_id("typescript").unwrap(), LanguageId::TypeScript);
        assert_eq!(LanguageId::from_id("c-sharp").unwrap(), LanguageId::CSharp);
        assert_eq!(LanguageId::from_id("csharp").unwrap(), LanguageId::CSharp);
        assert_eq!(LanguageId::from_id("jsx").unwrap(), LanguageId::JavaScript);
        assert_eq!(LanguageId::from_id("py").unwrap(), LanguageId::Python);
    }

    #[test]
    fn test_from_id_rejects_unknown_language() {
        let err = LanguageId::from_id("cobol").unwrap_err();
        assert_eq!(
            err,
            AnalysisError::UnsupportedLanguage {
                language: "cobol".to_string()
            }
        );
    }

    #[test]
    fn test_canonical_names_round_trip() {
        for language in LanguageId::ALL {
            assert_eq!(LanguageId::from_id(language.as_str()).unwrap(), language);
        }
    }

    #[test]
    fn test_every_grammar_parses_empty_source() {
        for language in LanguageId::ALL {
            let tree = parse(language, "", "empty").unwrap();
            assert_eq!(tree.language(), language);
            assert!(!tree.has_errors(), "{} should accept empty source", language);
        }
    }

    #[test]
    fn test_broken_source_still_produces_tree() {
        let tree = parse(LanguageId::TypeScript, "class A { foo( {", "broken.ts").unwrap();
        assert!(tree.has_errors());
        assert_eq!(tree.root_node().kind(), "program");
    }

    #[test]
    fn test_grammar_is_memoized() {
        let first = LanguageId::Java.grammar() as *const Language;
        let second = LanguageId::Java.grammar() as *const Language;
        assert_eq!(first, second);
    }

    #[test]
    fn test_detect_language_from_extension() {
        assert_eq!(detect_language_from_extension("ts"), Some("typescript"));
        assert_eq!(detect_language_from_extension("cs"), Some("csharp"));
        assert_eq!(detect_language_from_extension("rs"), None);
    }
}
