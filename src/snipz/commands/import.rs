use crate::clock::Clock;
use crate::collection::Collection;
use crate::commands::{fresh_id, CmdMessage, CmdResult};
use crate::error::{Result, SnipzError};
use crate::model::{Snippet, GENERAL_CATEGORY_ID};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One element of an import payload. Every field may be missing.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ImportRecord {
    id: Option<String>,
    title: String,
    language: String,
    code: String,
    description: String,
    tags: Vec<String>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
    favorite: bool,
    category: Option<String>,
}

/// Appends every record in `serialized` to the collection.
///
/// The payload must be a JSON array of objects. Records are taken as they
/// are: ids are not checked against existing snippets and nothing is
/// re-validated. Missing fields get a fresh id, the clock's time, or an
/// empty value. If the payload does not parse, nothing is appended.
pub fn run<C: Clock>(
    collection: &mut Collection,
    clock: &C,
    serialized: &str,
) -> Result<CmdResult> {
    let records = parse(serialized)?;
    let now = clock.now();

    let mut imported = Vec::with_capacity(records.len());
    for record in records {
        let id = match record.id {
            Some(id) => id,
            None => fresh_id(collection),
        };
        let created_at = record.created_at.or(record.updated_at).unwrap_or(now);
        let snippet = Snippet {
            id,
            title: record.title,
            language: record.language,
            code: record.code,
            description: record.description,
            tags: record.tags,
            created_at,
            updated_at: record.updated_at.unwrap_or(created_at),
            favorite: record.favorite,
            category: record
                .category
                .unwrap_or_else(|| GENERAL_CATEGORY_ID.to_string()),
        };
        // pushed one by one so later generated ids see earlier ones
        collection.snippets.push(snippet.clone());
        imported.push(snippet);
    }

    let count = imported.len();
    let mut result = CmdResult::default().with_affected_snippets(imported);
    result.add_message(CmdMessage::success(format!(
        "{} snippet(s) imported",
        count
    )));
    Ok(result)
}

fn parse(serialized: &str) -> Result<Vec<ImportRecord>> {
    serde_json::from_str(serialized).map_err(|e| SnipzError::ImportFormat(e.to_string()))
}
