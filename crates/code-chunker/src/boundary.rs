//! Line-start patterns recognizing top-level definitions.
//!
//! Every pattern is anchored at column zero, so an indented definition
//! (a method inside a class, a closure inside a function) never opens a new
//! chunk. Detection is textual: a line inside a string literal or a comment
//! that happens to start with `class ` at column zero is still reported as a
//! boundary. That approximation is accepted; this module is not a parser.

use crate::language::Language;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Language tag → line-start pattern. Languages absent from the table have no
/// structural boundaries and always take the small-file or fallback path.
const BOUNDARY_PATTERNS: &[(Language, &str)] = &[
    (Language::Python, r"^(?:def |class |async def )"),
    (
        Language::JavaScript,
        concat!(
            r"^(?:",
            r"(?:export\s+)?(?:default\s+)?(?:async\s+)?function[\s*]|",
            r"(?:export\s+)?(?:const|let|var)\s+\w+\s*=\s*(?:\(|async)|",
            r"(?:export\s+)?(?:default\s+)?class\s",
            r")",
        ),
    ),
    (
        Language::TypeScript,
        concat!(
            r"^(?:",
            r"(?:export\s+)?(?:default\s+)?(?:async\s+)?function[\s*]|",
            r"(?:export\s+)?(?:const|let|var)\s+\w+\s*=\s*(?:\(|async)|",
            r"(?:export\s+)?(?:default\s+)?(?:abstract\s+)?(?:class|interface|type|enum)\s",
            r")",
        ),
    ),
    (
        Language::Java,
        concat!(
            r"^(?:(?:public|private|protected|static|final|abstract|sealed|synchronized)\s+)*",
            r"(?:",
            r"(?:class|interface|enum|record)\s|",
            r"[\w<>\[\],.?]+\s+\w+\s*\(",
            r")",
        ),
    ),
    (Language::Go, r"^(?:func|type)\s"),
    (
        Language::Rust,
        concat!(
            r"^(?:pub(?:\([^)]*\))?\s+)?(?:(?:async|const|unsafe)\s+)*",
            r"(?:fn\s|struct\s|enum\s|impl[\s<]|trait\s|mod\s)",
        ),
    ),
    (
        Language::Cpp,
        r"^(?:(?:class|struct|namespace)\s|\w[\w\s*\&:<>]*[\s*\&:]\w+\s*\()",
    ),
    (Language::C, r"^(?:(?:struct|typedef)\s|\w[\w\s*]*[\s*]\w+\s*\()"),
];

static COMPILED_PATTERNS: Lazy<HashMap<Language, Regex>> = Lazy::new(|| {
    BOUNDARY_PATTERNS
        .iter()
        .map(|(language, pattern)| {
            let regex = Regex::new(pattern)
                .unwrap_or_else(|e| panic!("invalid boundary pattern for {language}: {e}"));
            (*language, regex)
        })
        .collect()
});

/// Return the boundary pattern for a language, or `None` if it has no
/// structural boundaries.
pub fn boundary_pattern(language: Language) -> Option<&'static Regex> {
    COMPILED_PATTERNS.get(&language)
}

/// Check whether `line` starts a top-level definition in `language`.
pub fn is_boundary(line: &str, language: Language) -> bool {
    boundary_pattern(language).is_some_and(|pattern| pattern.is_match(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_compile() {
        assert_eq!(COMPILED_PATTERNS.len(), BOUNDARY_PATTERNS.len());
    }

    #[test]
    fn test_languages_without_patterns() {
        for language in [
            Language::Markdown,
            Language::Json,
            Language::Yaml,
            Language::Css,
            Language::Html,
            Language::Sql,
            Language::Shell,
            Language::PlainText,
        ] {
            assert!(boundary_pattern(language).is_none(), "{language}");
        }
    }

    #[test]
    fn test_python_boundaries() {
        assert!(is_boundary("def hello():\n", Language::Python));
        assert!(is_boundary("class Engine:\n", Language::Python));
        assert!(is_boundary("async def fetch():\n", Language::Python));
        assert!(!is_boundary("    def method(self):\n", Language::Python));
        assert!(!is_boundary("import sys\n", Language::Python));
        assert!(!is_boundary("default = 1\n", Language::Python));
    }

    #[test]
    fn test_javascript_boundaries() {
        assert!(is_boundary("function handler_0(req, res) {\n", Language::JavaScript));
        assert!(is_boundary("export default function App() {\n", Language::JavaScript));
        assert!(is_boundary("export async function load() {\n", Language::JavaScript));
        assert!(is_boundary("const greet = (name) => {\n", Language::JavaScript));
        assert!(is_boundary("let run = async () => {\n", Language::JavaScript));
        assert!(is_boundary("export class Store {\n", Language::JavaScript));
        assert!(!is_boundary("const limit = 10;\n", Language::JavaScript));
        assert!(!is_boundary("  function inner() {\n", Language::JavaScript));
        assert!(!is_boundary("module.exports = { greet };\n", Language::JavaScript));
    }

    #[test]
    fn test_typescript_boundaries() {
        assert!(is_boundary("export interface Props {\n", Language::TypeScript));
        assert!(is_boundary("type Id = string;\n", Language::TypeScript));
        assert!(is_boundary("export enum Color {\n", Language::TypeScript));
        assert!(is_boundary("export abstract class Base {\n", Language::TypeScript));
        assert!(!is_boundary("    interface Nested {}\n", Language::TypeScript));
    }

    #[test]
    fn test_java_boundaries() {
        assert!(is_boundary("public class Main {\n", Language::Java));
        assert!(is_boundary("final class Util {\n", Language::Java));
        assert!(is_boundary("interface Shape {\n", Language::Java));
        assert!(is_boundary("public static void main(String[] args) {\n", Language::Java));
        assert!(!is_boundary("    public void run() {\n", Language::Java));
        assert!(!is_boundary("import java.util.List;\n", Language::Java));
    }

    #[test]
    fn test_go_boundaries() {
        assert!(is_boundary("func main() {\n", Language::Go));
        assert!(is_boundary("type Server struct {\n", Language::Go));
        assert!(!is_boundary("package main\n", Language::Go));
    }

    #[test]
    fn test_rust_boundaries() {
        assert!(is_boundary("fn main() {\n", Language::Rust));
        assert!(is_boundary("pub fn new() -> Self {\n", Language::Rust));
        assert!(is_boundary("pub(crate) struct Inner {\n", Language::Rust));
        assert!(is_boundary("pub async fn serve() {\n", Language::Rust));
        assert!(is_boundary("impl<T> Store<T> {\n", Language::Rust));
        assert!(is_boundary("impl Display for Point {\n", Language::Rust));
        assert!(is_boundary("trait Shape {\n", Language::Rust));
        assert!(is_boundary("mod tests {\n", Language::Rust));
        assert!(!is_boundary("    fn method(&self) {}\n", Language::Rust));
        assert!(!is_boundary("use std::fmt;\n", Language::Rust));
        assert!(!is_boundary("const LIMIT: usize = 3;\n", Language::Rust));
    }

    #[test]
    fn test_c_family_boundaries() {
        assert!(is_boundary("int main(void) {\n", Language::C));
        assert!(is_boundary("static char *dup(const char *s) {\n", Language::C));
        assert!(is_boundary("typedef struct node node_t;\n", Language::C));
        assert!(!is_boundary("    return helper(x);\n", Language::C));
        assert!(!is_boundary("#include <stdio.h>\n", Language::C));

        assert!(is_boundary("namespace app {\n", Language::Cpp));
        assert!(is_boundary("class Widget {\n", Language::Cpp));
        assert!(is_boundary("std::vector<int> Widget::items() {\n", Language::Cpp));
        assert!(!is_boundary("  int local(3);\n", Language::Cpp));
    }

    #[test]
    fn test_comment_lines_can_misfire() {
        // Textual detection: a docstring line starting with `class ` counts.
        assert!(is_boundary("class of problems handled here\n", Language::Python));
    }
}
