use crate::collection::Collection;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Removes the snippet with `id`. A missing id is not an error.
pub fn run(collection: &mut Collection, id: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match collection.snippets.iter().position(|s| s.id == id) {
        Some(pos) => {
            let removed = collection.snippets.remove(pos);
            result.add_message(CmdMessage::success(format!(
                "Snippet deleted ({}): {}",
                removed.id, removed.title
            )));
            result.affected_snippets.push(removed);
        }
        None => {
            result.add_message(CmdMessage::info(format!("No snippet with id {}", id)));
        }
    }

    Ok(result)
}
