//! Filtered, sorted views over the snippet list.
//!
//! `run` is a pure function of its inputs: it clones the matches out of the
//! slice it is given and never mutates or persists anything.

use crate::commands::CmdResult;
use crate::model::Snippet;
use crate::tags::has_all;
use icu_collator::{Collator, CollatorOptions, Strength};
use log::warn;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

const WILDCARD: &str = "all";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnippetFilter {
    /// Case-insensitive substring matched against title, description, tags and code.
    pub search: Option<String>,
    /// Exact language; `None`, empty or `"all"` match everything.
    pub language: Option<String>,
    /// Exact category id; same wildcard rules as `language`.
    pub category: Option<String>,
    /// Every listed tag must be present.
    pub tags: Vec<String>,
    pub favorites_only: bool,
}

impl SnippetFilter {
    pub fn matches(&self, snippet: &Snippet) -> bool {
        self.matches_search(snippet)
            && exact_or_wildcard(self.language.as_deref(), &snippet.language)
            && exact_or_wildcard(self.category.as_deref(), &snippet.category)
            && has_all(snippet, &self.tags)
            && (!self.favorites_only || snippet.favorite)
    }

    fn matches_search(&self, snippet: &Snippet) -> bool {
        let term = match self.search.as_deref() {
            Some(t) if !t.is_empty() => t.to_lowercase(),
            _ => return true,
        };

        snippet.title.to_lowercase().contains(&term)
            || snippet.description.to_lowercase().contains(&term)
            || snippet
                .tags
                .iter()
                .any(|t| t.to_lowercase().contains(&term))
            || snippet.code.to_lowercase().contains(&term)
    }
}

fn exact_or_wildcard(wanted: Option<&str>, actual: &str) -> bool {
    match wanted {
        None | Some("") | Some(WILDCARD) => true,
        Some(w) => w == actual,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Most recently updated first.
    #[default]
    Newest,
    /// Least recently updated first.
    Oldest,
    /// Title A-Z.
    Az,
    /// Title Z-A.
    Za,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
            SortOrder::Az => "az",
            SortOrder::Za => "za",
        }
    }

    fn compare(&self, a: &Snippet, b: &Snippet) -> Ordering {
        match self {
            SortOrder::Newest => b.updated_at.cmp(&a.updated_at),
            SortOrder::Oldest => a.updated_at.cmp(&b.updated_at),
            SortOrder::Az => locale_cmp(&a.title, &b.title),
            SortOrder::Za => locale_cmp(&b.title, &a.title),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "newest" => Ok(SortOrder::Newest),
            "oldest" => Ok(SortOrder::Oldest),
            "az" | "a-z" | "title" => Ok(SortOrder::Az),
            "za" | "z-a" => Ok(SortOrder::Za),
            other => Err(format!(
                "unknown sort order '{}' (expected newest, oldest, az or za)",
                other
            )),
        }
    }
}

thread_local! {
    static COLLATOR: Option<Collator> = root_collator();
}

fn root_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Tertiary);
    match Collator::try_new(&Default::default(), options) {
        Ok(collator) => Some(collator),
        Err(e) => {
            warn!("collator unavailable, falling back to case-folded order: {}", e);
            None
        }
    }
}

/// Locale-aware string ordering using the root collation.
///
/// Accents and case are secondary and tertiary differences: "Éclair" sorts
/// between "apple" and "Fudge", and "a" sorts before "A". Punctuation and
/// symbols come before digits, digits before letters.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| match collator {
        Some(c) => c.compare(a, b),
        None => folded_cmp(a, b),
    })
}

fn folded_cmp(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| b.cmp(a))
}

pub fn run(snippets: &[Snippet], filter: &SnippetFilter, sort: SortOrder) -> CmdResult {
    let mut listed: Vec<Snippet> = snippets
        .iter()
        .filter(|s| filter.matches(s))
        .cloned()
        .collect();

    // Stable: equal keys keep insertion order.
    listed.sort_by(|a, b| sort.compare(a, b));

    CmdResult::default().with_listed_snippets(listed)
}
