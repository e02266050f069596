//! Known snippet languages and their display names.
//!
//! The language field of a snippet is free-form; this list only drives
//! pickers and pretty names. Anything not listed is shown verbatim.

use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const LANGUAGES: &[&str] = &[
    "javascript",
    "typescript",
    "python",
    "java",
    "csharp",
    "php",
    "ruby",
    "go",
    "rust",
    "html",
    "css",
    "sql",
    "bash",
    "json",
    "yaml",
    "markdown",
    "xml",
    "c",
    "cpp",
    "swift",
    "kotlin",
    "dart",
];

static DISPLAY_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("javascript", "JavaScript"),
        ("typescript", "TypeScript"),
        ("python", "Python"),
        ("java", "Java"),
        ("csharp", "C#"),
        ("php", "PHP"),
        ("ruby", "Ruby"),
        ("go", "Go"),
        ("rust", "Rust"),
        ("html", "HTML"),
        ("css", "CSS"),
        ("sql", "SQL"),
        ("bash", "Bash"),
        ("json", "JSON"),
        ("yaml", "YAML"),
        ("markdown", "Markdown"),
        ("xml", "XML"),
        ("c", "C"),
        ("cpp", "C++"),
        ("swift", "Swift"),
        ("kotlin", "Kotlin"),
        ("dart", "Dart"),
    ])
});

/// Pretty name for a language tag, or the tag itself when unknown.
pub fn display_name(language: &str) -> &str {
    DISPLAY_NAMES.get(language).copied().unwrap_or(language)
}

pub fn is_known(language: &str) -> bool {
    LANGUAGES.contains(&language)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_known_language_has_a_display_name() {
        for lang in LANGUAGES {
            assert!(DISPLAY_NAMES.contains_key(lang), "missing {}", lang);
        }
    }

    #[test]
    fn display_names() {
        assert_eq!(display_name("csharp"), "C#");
        assert_eq!(display_name("cpp"), "C++");
        assert_eq!(display_name("elixir"), "elixir");
    }

    #[test]
    fn free_form_languages_are_not_known() {
        assert!(is_known("rust"));
        assert!(!is_known("Rust"));
        assert!(!is_known("zig"));
    }
}
