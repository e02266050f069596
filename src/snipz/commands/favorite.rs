use crate::collection::Collection;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Flips the favorite flag. A missing id is not an error.
///
/// Starring is not an edit, so `updated_at` is left alone.
pub fn toggle(collection: &mut Collection, id: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match collection.find_mut(id) {
        Some(snippet) => {
            snippet.favorite = !snippet.favorite;
            let verb = if snippet.favorite {
                "starred"
            } else {
                "unstarred"
            };
            result.add_message(CmdMessage::success(format!(
                "Snippet {} ({}): {}",
                verb, snippet.id, snippet.title
            )));
            result.affected_snippets.push(snippet.clone());
        }
        None => {
            result.add_message(CmdMessage::info(format!("No snippet with id {}", id)));
        }
    }

    Ok(result)
}
