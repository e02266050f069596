use crate::clock::Clock;
use crate::collection::Collection;
use crate::commands::{fresh_id, validate_required, CmdMessage, CmdResult, NewSnippet};
use crate::error::Result;
use crate::model::{Snippet, GENERAL_CATEGORY_ID};
use crate::tags::parse_tags;

pub fn run<C: Clock>(collection: &mut Collection, clock: &C, input: NewSnippet) -> Result<CmdResult> {
    validate_required(&input.title, &input.language, &input.code)?;

    let id = fresh_id(collection);
    let mut snippet = Snippet::new(id, input.title, input.language, input.code, clock.now());
    snippet.description = input.description;
    snippet.tags = parse_tags(&input.tags);
    snippet.category = match input.category {
        Some(c) if !c.trim().is_empty() => c,
        _ => GENERAL_CATEGORY_ID.to_string(),
    };

    collection.snippets.push(snippet.clone());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Snippet added ({}): {}",
        snippet.id, snippet.title
    )));
    result.affected_snippets.push(snippet);
    Ok(result)
}
