use crate::error::Result;
use crate::model::Snippet;
use chrono::{DateTime, Utc};

/// Default file name for exports, matching the browser build.
pub const EXPORT_FILENAME: &str = "code-snippets.json";

/// Pretty-printed JSON array of every snippet. Categories are not included.
pub fn run(snippets: &[Snippet]) -> Result<String> {
    Ok(serde_json::to_string_pretty(snippets)?)
}

/// Timestamped alternative to [`EXPORT_FILENAME`] for repeated exports.
pub fn timestamped_filename(now: DateTime<Utc>) -> String {
    format!("code-snippets-{}.json", now.format("%Y-%m-%d_%H-%M-%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::Collection;
    use chrono::TimeZone;

    #[test]
    fn exports_pretty_json_array() {
        let collection = Collection::seeded(DateTime::<Utc>::UNIX_EPOCH);
        let json = run(&collection.snippets).unwrap();

        assert!(json.starts_with('['));
        assert!(json.contains("\n  {"));
        let parsed: Vec<Snippet> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, collection.snippets);
    }

    #[test]
    fn empty_collection_exports_empty_array() {
        assert_eq!(run(&[]).unwrap(), "[]");
    }

    #[test]
    fn filename_is_sortable() {
        let now = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap();
        assert_eq!(
            timestamped_filename(now),
            "code-snippets-2024-03-09_14-05-00.json"
        );
    }
}
