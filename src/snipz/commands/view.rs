use crate::collection::Collection;
use crate::commands::{find_snippet, CmdResult};
use crate::error::Result;

pub fn run(collection: &Collection, ids: &[String]) -> Result<CmdResult> {
    let snippets = ids
        .iter()
        .map(|id| find_snippet(collection, id).cloned())
        .collect::<Result<Vec<_>>>()?;
    Ok(CmdResult::default().with_listed_snippets(snippets))
}
