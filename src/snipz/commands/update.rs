use crate::clock::Clock;
use crate::collection::Collection;
use crate::commands::{validate_required, CmdMessage, CmdResult, SnippetPatch};
use crate::error::{Result, SnipzError};
use crate::model::GENERAL_CATEGORY_ID;

pub fn run<C: Clock>(
    collection: &mut Collection,
    clock: &C,
    id: &str,
    patch: SnippetPatch,
) -> Result<CmdResult> {
    let current = collection
        .find(id)
        .ok_or_else(|| SnipzError::SnippetNotFound(id.to_string()))?;

    // Merge into a copy so a validation failure leaves the collection alone.
    let mut snippet = current.clone();
    if let Some(title) = patch.title {
        snippet.title = title;
    }
    if let Some(language) = patch.language {
        snippet.language = language;
    }
    if let Some(code) = patch.code {
        snippet.code = code;
    }
    if let Some(description) = patch.description {
        snippet.description = description;
    }
    if let Some(tags) = patch.tags {
        snippet.tags = tags.into_tags();
    }
    if let Some(category) = patch.category {
        snippet.category = if category.trim().is_empty() {
            GENERAL_CATEGORY_ID.to_string()
        } else {
            category
        };
    }

    validate_required(&snippet.title, &snippet.language, &snippet.code)?;

    snippet.updated_at = clock.now().max(snippet.created_at);

    if let Some(slot) = collection.find_mut(id) {
        *slot = snippet.clone();
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Snippet updated ({}): {}",
        snippet.id, snippet.title
    )));
    result.affected_snippets.push(snippet);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::collection::fixtures::{snippet, CollectionFixture};
    use crate::commands::TagsInput;
    use chrono::Duration;

    fn setup() -> (Collection, ManualClock) {
        let collection = CollectionFixture::new()
            .with_snippet(snippet("a", "Alpha"))
            .with_snippet(snippet("b", "Beta"))
            .build();
        let clock = ManualClock::default();
        clock.advance(Duration::hours(1));
        (collection, clock)
    }

    #[test]
    fn merges_patch_and_bumps_updated_at() {
        let (mut collection, clock) = setup();
        let patch = SnippetPatch {
            code: Some("console.log(2)".into()),
            tags: Some(TagsInput::Raw("x, y".into())),
            ..Default::default()
        };

        let result = run(&mut collection, &clock, "a", patch).unwrap();
        let s = result.snippet().unwrap();
        assert_eq!(s.title, "Alpha");
        assert_eq!(s.code, "console.log(2)");
        assert_eq!(s.tags, vec!["x", "y"]);
        assert_eq!(s.updated_at, clock.now());
        assert!(s.updated_at > s.created_at);
        assert_eq!(collection.find("a").unwrap(), s);
    }

    #[test]
    fn created_at_is_preserved() {
        let (mut collection, clock) = setup();
        let before = collection.find("a").unwrap().created_at;
        let patch = SnippetPatch {
            title: Some("Renamed".into()),
            ..Default::default()
        };
        run(&mut collection, &clock, "a", patch).unwrap();
        assert_eq!(collection.find("a").unwrap().created_at, before);
    }

    #[test]
    fn updated_at_never_precedes_created_at() {
        let (mut collection, clock) = setup();
        collection.find_mut("a").unwrap().created_at = clock.now() + Duration::days(1);

        let patch = SnippetPatch {
            title: Some("Skewed".into()),
            ..Default::default()
        };
        let result = run(&mut collection, &clock, "a", patch).unwrap();
        let s = result.snippet().unwrap();
        assert!(s.updated_at >= s.created_at);
    }

    #[test]
    fn list_tags_are_kept_verbatim() {
        let (mut collection, clock) = setup();
        let patch = SnippetPatch {
            tags: Some(TagsInput::List(vec!["a,b".into()])),
            ..Default::default()
        };
        let result = run(&mut collection, &clock, "a", patch).unwrap();
        assert_eq!(result.snippet().unwrap().tags, vec!["a,b"]);
    }

    #[test]
    fn missing_id_is_not_found_and_unchanged() {
        let (mut collection, clock) = setup();
        let before = collection.clone();
        let err = run(&mut collection, &clock, "zzz", SnippetPatch::default()).unwrap_err();
        assert!(matches!(err, SnipzError::SnippetNotFound(id) if id == "zzz"));
        assert_eq!(collection, before);
    }

    #[test]
    fn emptying_required_field_is_rejected() {
        let (mut collection, clock) = setup();
        let before = collection.clone();
        let patch = SnippetPatch {
            title: Some("New".into()),
            language: Some("".into()),
            ..Default::default()
        };
        let err = run(&mut collection, &clock, "b", patch).unwrap_err();
        assert!(matches!(err, SnipzError::Validation(_)));
        assert_eq!(collection, before);
    }

    #[test]
    fn order_is_preserved() {
        let (mut collection, clock) = setup();
        let patch = SnippetPatch {
            description: Some("desc".into()),
            ..Default::default()
        };
        run(&mut collection, &clock, "a", patch).unwrap();
        let ids: Vec<_> = collection.snippets.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
