//! Category management.
//!
//! Category ids are derived from names and are not deduplicated: adding
//! "Tools" twice yields two entries with id `tools`. Lookups resolve to the
//! first entry and removal drops every entry sharing the id.

use crate::collection::Collection;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, SnipzError};
use crate::model::{Category, PaletteColor, GENERAL_CATEGORY_ID};

/// A category together with how many snippets point at its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryUsage {
    pub category: Category,
    pub snippet_count: usize,
}

/// Snippet counts per category entry. Only exact id matches count, so
/// snippets whose category no longer exists are not added to General.
pub fn usage(collection: &Collection) -> Vec<CategoryUsage> {
    collection
        .categories
        .iter()
        .map(|c| CategoryUsage {
            category: c.clone(),
            snippet_count: collection
                .snippets
                .iter()
                .filter(|s| s.category == c.id)
                .count(),
        })
        .collect()
}

pub fn list(collection: &Collection) -> CmdResult {
    CmdResult::default()
        .with_categories(collection.categories.clone())
        .with_category_usage(usage(collection))
}

pub fn add(collection: &mut Collection, name: &str, color: PaletteColor) -> Result<CmdResult> {
    if name.trim().is_empty() {
        return Err(SnipzError::Validation(
            "category name cannot be empty".to_string(),
        ));
    }

    let category = Category::new(name, color);
    let duplicate = collection.category(&category.id).is_some();
    collection.categories.push(category.clone());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Category added ({}): {}",
        category.id, category.name
    )));
    if duplicate {
        result.add_message(CmdMessage::warning(format!(
            "Another category already uses id '{}'; lookups will use the first one",
            category.id
        )));
    }
    Ok(result.with_categories(vec![category]))
}

/// Drops the category definition. Snippets keep pointing at the old id and
/// resolve to the sentinel category from then on.
pub fn remove(collection: &mut Collection, id: &str) -> Result<CmdResult> {
    if id == GENERAL_CATEGORY_ID {
        return Err(SnipzError::Validation(
            "the general category cannot be removed".to_string(),
        ));
    }

    let (removed, kept): (Vec<Category>, Vec<Category>) = collection
        .categories
        .drain(..)
        .partition(|c| c.id == id);
    collection.categories = kept;

    if removed.is_empty() {
        return Err(SnipzError::CategoryNotFound(id.to_string()));
    }

    let orphaned = collection
        .snippets
        .iter()
        .filter(|s| s.category == id)
        .count();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Category removed: {}", id)));
    if orphaned > 0 {
        result.add_message(CmdMessage::info(format!(
            "{} snippet(s) now fall back to General",
            orphaned
        )));
    }
    Ok(result.with_categories(removed))
}
