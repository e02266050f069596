use crate::collection::Collection;
use crate::commands::CmdResult;
use crate::tags::all_tags;

/// Every tag in use, sorted and de-duplicated.
pub fn list(collection: &Collection) -> CmdResult {
    CmdResult::default().with_tags(all_tags(&collection.snippets))
}
