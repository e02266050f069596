//! # API Facade
//!
//! [`SnipzApi`] is the snippet store as callers see it. It owns the in-memory
//! [`Collection`], the persistence collaborator and the clock, and is the
//! single entry point for every operation regardless of UI.
//!
//! ## Role and Responsibilities
//!
//! - **Dispatches** to the command layer (`commands/*.rs`), where the logic lives
//! - **Loads** the collection at session start (persisted state, else seed)
//! - **Writes through** after every successful mutation
//!
//! ## Write-through policy
//!
//! After each mutation the whole affected document is serialized and handed
//! to the [`KeyValueStore`]. A failed write is logged at `warn` level and
//! swallowed: the in-memory collection stays the source of truth for the rest
//! of the session and the caller still gets `Ok`. Validation and lookup
//! failures never reach the store.
//!
//! ## Generic Over Store and Clock
//!
//! - Production: `SnipzApi<FileStore, SystemClock>`
//! - Testing: `SnipzApi<InMemoryStore, ManualClock>`

use crate::clock::Clock;
use crate::collection::Collection;
use crate::commands;
use crate::error::{Result, SnipzError};
use crate::model::{Category, PaletteColor, Snippet};
use crate::store::{KeyValueStore, CATEGORIES_KEY, SNIPPETS_KEY};
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use std::path::Path;

/// What to start from when nothing has been persisted yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Seed {
    /// The sample snippets and default categories.
    #[default]
    Samples,
    /// No snippets, only the sentinel category.
    Empty,
}

/// The main API facade for snippet-store operations.
pub struct SnipzApi<S: KeyValueStore, C: Clock> {
    store: S,
    clock: C,
    collection: Collection,
    failed_writes: usize,
}

impl<S: KeyValueStore, C: Clock> SnipzApi<S, C> {
    /// Rehydrates from `store`, falling back to `seed` for missing documents.
    ///
    /// A document that exists but does not parse is logged and replaced in
    /// memory by the seed; it is not overwritten until the next mutation.
    pub fn open(store: S, clock: C, seed: Seed) -> Result<Self> {
        let fallback = match seed {
            Seed::Samples => Collection::seeded(clock.now()),
            Seed::Empty => Collection::empty(),
        };

        let (snippets, snippets_missing) =
            load_document::<_, Vec<Snippet>>(&store, SNIPPETS_KEY)?;
        let (categories, categories_missing) =
            load_document::<_, Vec<Category>>(&store, CATEGORIES_KEY)?;

        let mut collection = Collection {
            snippets: snippets.unwrap_or(fallback.snippets),
            categories: categories.unwrap_or(fallback.categories),
        };
        if collection.ensure_general_category() {
            debug!("general category missing from persisted data; re-inserted");
        }

        let mut api = Self {
            store,
            clock,
            collection,
            failed_writes: 0,
        };

        if snippets_missing {
            info!("no persisted snippets; starting from {:?} seed", seed);
            api.persist_snippets();
        }
        if categories_missing {
            api.persist_categories();
        }

        Ok(api)
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn snippets(&self) -> &[Snippet] {
        &self.collection.snippets
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Writes that failed and were swallowed during this session.
    pub fn failed_writes(&self) -> usize {
        self.failed_writes
    }

    // --- Snippets ---

    pub fn create_snippet(&mut self, input: commands::NewSnippet) -> Result<commands::CmdResult> {
        let result = commands::create::run(&mut self.collection, &self.clock, input)?;
        self.persist_snippets();
        Ok(result)
    }

    pub fn update_snippet(
        &mut self,
        id: &str,
        patch: commands::SnippetPatch,
    ) -> Result<commands::CmdResult> {
        let result = commands::update::run(&mut self.collection, &self.clock, id, patch)?;
        self.persist_snippets();
        Ok(result)
    }

    pub fn delete_snippet(&mut self, id: &str) -> Result<commands::CmdResult> {
        let result = commands::delete::run(&mut self.collection, id)?;
        self.persist_snippets();
        Ok(result)
    }

    pub fn toggle_favorite(&mut self, id: &str) -> Result<commands::CmdResult> {
        let result = commands::favorite::toggle(&mut self.collection, id)?;
        self.persist_snippets();
        Ok(result)
    }

    pub fn get_snippet(&self, id: &str) -> Result<&Snippet> {
        self.collection
            .find(id)
            .ok_or_else(|| SnipzError::SnippetNotFound(id.to_string()))
    }

    pub fn view_snippets(&self, ids: &[String]) -> Result<commands::CmdResult> {
        commands::view::run(&self.collection, ids)
    }

    pub fn query(&self, filter: &SnippetFilter, sort: SortOrder) -> commands::CmdResult {
        commands::query::run(&self.collection.snippets, filter, sort)
    }

    pub fn list_tags(&self) -> commands::CmdResult {
        commands::tags::list(&self.collection)
    }

    // --- Categories ---

    pub fn list_categories(&self) -> commands::CmdResult {
        commands::categories::list(&self.collection)
    }

    pub fn add_category(&mut self, name: &str, color: PaletteColor) -> Result<commands::CmdResult> {
        let result = commands::categories::add(&mut self.collection, name, color)?;
        self.persist_categories();
        Ok(result)
    }

    pub fn remove_category(&mut self, id: &str) -> Result<commands::CmdResult> {
        let result = commands::categories::remove(&mut self.collection, id)?;
        self.persist_categories();
        Ok(result)
    }

    /// Effective category name, "General" when the id is unknown.
    pub fn category_name(&self, id: &str) -> &str {
        self.collection.category_name(id)
    }

    pub fn category_color(&self, id: &str) -> PaletteColor {
        self.collection.category_color(id)
    }

    // --- Export / Import / Share ---

    pub fn export_all(&self) -> Result<String> {
        commands::export::run(&self.collection.snippets)
    }

    pub fn import_all(&mut self, serialized: &str) -> Result<commands::CmdResult> {
        let result = commands::import::run(&mut self.collection, &self.clock, serialized)?;
        self.persist_snippets();
        Ok(result)
    }

    pub fn share_snippet(&self, id: &str) -> Result<ShareLink> {
        commands::share::run(&self.collection, id)
    }

    // --- Write-through ---

    fn persist_snippets(&mut self) {
        let payload = serde_json::to_string(&self.collection.snippets);
        self.write_through(SNIPPETS_KEY, payload);
    }

    fn persist_categories(&mut self) {
        let payload = serde_json::to_string(&self.collection.categories);
        self.write_through(CATEGORIES_KEY, payload);
    }

    fn write_through(&mut self, key: &str, payload: serde_json::Result<String>) {
        let outcome = payload
            .map_err(SnipzError::from)
            .and_then(|json| self.store.set(key, &json));

        match outcome {
            Ok(()) => debug!("persisted '{}'", key),
            Err(e) => {
                self.failed_writes += 1;
                warn!("{}; keeping in-memory state", e);
            }
        }
    }
}

/// Reads and parses one document. Returns `(value, missing)`: `value` is
/// `None` when the key is absent, not text, or not valid JSON; `missing`
/// only when absent.
fn load_document<S: KeyValueStore, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<(Option<T>, bool)> {
    let stored = match store.get(key) {
        Ok(stored) => stored,
        Err(e @ SnipzError::UnreadableDocument { .. }) => {
            warn!("ignoring {}", e);
            return Ok((None, false));
        }
        Err(e) => return Err(e),
    };

    match stored {
        None => Ok((None, true)),
        Some(text) => match serde_json::from_str(&text) {
            Ok(value) => Ok((Some(value), false)),
            Err(e) => {
                warn!("ignoring unreadable '{}' document: {}", key, e);
                Ok((None, false))
            }
        },
    }
}

/// Configuration lives beside the data, outside the key-value store.
pub fn config(dir: &Path, action: ConfigAction) -> Result<commands::CmdResult> {
    commands::config::run(dir, action)
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::query::{SnippetFilter, SortOrder};
pub use crate::commands::share::{decode as decode_share, ShareLink, SharedSnippet};
pub use crate::commands::{
    CmdMessage, CmdResult, MessageLevel, NewSnippet, SnippetPatch, TagsInput,
};
