//! Tag handling.
//!
//! Tags are free-form strings typed as comma-separated text. Unlike
//! categories there is no registry: the set of known tags is whatever the
//! snippets currently carry.

use crate::model::Snippet;
use std::collections::BTreeSet;

/// Splits raw comma-separated input into tags.
///
/// Tokens are trimmed and empty ones dropped. Duplicates are kept, in input
/// order.
///
/// ```
/// use snipz::tags::parse_tags;
///
/// assert_eq!(parse_tags(" react, hooks,,state "), vec!["react", "hooks", "state"]);
/// assert_eq!(parse_tags("a, a"), vec!["a", "a"]);
/// assert!(parse_tags(" , ").is_empty());
/// ```
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Sorted, de-duplicated union of every tag in `snippets`.
pub fn all_tags(snippets: &[Snippet]) -> Vec<String> {
    snippets
        .iter()
        .flat_map(|s| s.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// True when `snippet` carries every tag in `required`.
pub fn has_all(snippet: &Snippet, required: &[String]) -> bool {
    required.iter().all(|t| snippet.tags.contains(t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::fixtures::snippet;

    #[test]
    fn parse_keeps_insertion_order() {
        assert_eq!(parse_tags("zeta,alpha"), vec!["zeta", "alpha"]);
    }

    #[test]
    fn parse_empty_input() {
        assert!(parse_tags("").is_empty());
    }

    #[test]
    fn all_tags_is_sorted_and_unique() {
        let mut a = snippet("a", "A");
        a.tags = vec!["react".into(), "hooks".into()];
        let mut b = snippet("b", "B");
        b.tags = vec!["hooks".into(), "css".into()];

        assert_eq!(all_tags(&[a, b]), vec!["css", "hooks", "react"]);
    }

    #[test]
    fn has_all_requires_every_tag() {
        let mut s = snippet("a", "A");
        s.tags = vec!["react".into(), "hooks".into(), "state".into()];

        assert!(has_all(&s, &["hooks".into(), "react".into()]));
        assert!(!has_all(&s, &["react".into(), "redux".into()]));
        assert!(has_all(&s, &[]));
    }
}
