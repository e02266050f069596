//! # Command Layer
//!
//! Business logic for every snippet-store operation. Commands operate on a
//! [`Collection`] snapshot plus an injected [`crate::clock::Clock`] and return
//! plain Rust values. They never touch storage: persisting after a mutation is
//! the facade's job (see [`crate::api`]).

use crate::collection::Collection;
use crate::commands::categories::CategoryUsage;
use crate::config::SnipzConfig;
use crate::error::{Result, SnipzError};
use crate::model::{Category, Snippet};
use crate::tags::parse_tags;
use uuid::Uuid;

pub mod categories;
pub mod config;
pub mod create;
pub mod delete;
pub mod export;
pub mod favorite;
pub mod import;
pub mod query;
pub mod share;
pub mod tags;
pub mod update;
pub mod view;

pub(crate) const ID_LEN: usize = 8;

/// Short random id that does not collide with anything in `collection`.
pub(crate) fn fresh_id(collection: &Collection) -> String {
    loop {
        let candidate = Uuid::new_v4().simple().to_string()[..ID_LEN].to_string();
        if !collection.contains(&candidate) {
            return candidate;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_snippets: Vec<Snippet>,
    pub listed_snippets: Vec<Snippet>,
    pub categories: Vec<Category>,
    pub category_usage: Vec<CategoryUsage>,
    pub tags: Vec<String>,
    pub config: Option<SnipzConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_snippets(mut self, snippets: Vec<Snippet>) -> Self {
        self.affected_snippets = snippets;
        self
    }

    pub fn with_listed_snippets(mut self, snippets: Vec<Snippet>) -> Self {
        self.listed_snippets = snippets;
        self
    }

    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_category_usage(mut self, usage: Vec<CategoryUsage>) -> Self {
        self.category_usage = usage;
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_config(mut self, config: SnipzConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// The single snippet a create/update produced.
    pub fn snippet(&self) -> Option<&Snippet> {
        self.affected_snippets.first()
    }
}

/// Input for [`create::run`].
#[derive(Debug, Clone, Default)]
pub struct NewSnippet {
    pub title: String,
    pub language: String,
    pub code: String,
    pub description: String,
    /// Raw comma-separated tag text.
    pub tags: String,
    /// Category id; `None` or blank means the sentinel category.
    pub category: Option<String>,
}

impl NewSnippet {
    pub fn new(
        title: impl Into<String>,
        language: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            language: language.into(),
            code: code.into(),
            ..Self::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn tags(mut self, raw: impl Into<String>) -> Self {
        self.tags = raw.into();
        self
    }

    pub fn category(mut self, id: impl Into<String>) -> Self {
        self.category = Some(id.into());
        self
    }
}

/// How tags arrive in a [`SnippetPatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagsInput {
    /// Comma-separated text, re-split like on create.
    Raw(String),
    /// An already split list, stored as given.
    List(Vec<String>),
}

impl TagsInput {
    pub fn into_tags(self) -> Vec<String> {
        match self {
            TagsInput::Raw(raw) => parse_tags(&raw),
            TagsInput::List(list) => list,
        }
    }
}

/// Partial edit for [`update::run`]. `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct SnippetPatch {
    pub title: Option<String>,
    pub language: Option<String>,
    pub code: Option<String>,
    pub description: Option<String>,
    pub tags: Option<TagsInput>,
    pub category: Option<String>,
}

impl SnippetPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.language.is_none()
            && self.code.is_none()
            && self.description.is_none()
            && self.tags.is_none()
            && self.category.is_none()
    }
}

/// Rejects records missing any of title, language, or code. Only the empty
/// string counts as missing; whitespace is content.
pub(crate) fn validate_required(title: &str, language: &str, code: &str) -> Result<()> {
    let missing: Vec<&str> = [("title", title), ("language", language), ("code", code)]
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(SnipzError::Validation(format!(
            "missing required field(s): {}",
            missing.join(", ")
        )))
    }
}

pub(crate) fn find_snippet<'a>(collection: &'a Collection, id: &str) -> Result<&'a Snippet> {
    collection
        .find(id)
        .ok_or_else(|| SnipzError::SnippetNotFound(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_lists_every_missing_field() {
        let err = validate_required("", "", "x").unwrap_err();
        match err {
            SnipzError::Validation(msg) => {
                assert!(msg.contains("title"));
                assert!(msg.contains("language"));
                assert!(!msg.contains("code"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn whitespace_only_fields_are_present() {
        assert!(validate_required("   ", "\t", " ").is_ok());
    }

    #[test]
    fn tags_input_raw_is_split() {
        let tags = TagsInput::Raw("a, b ,".into()).into_tags();
        assert_eq!(tags, vec!["a", "b"]);
    }

    #[test]
    fn tags_input_list_is_verbatim() {
        let tags = TagsInput::List(vec![" a ".into(), "".into()]).into_tags();
        assert_eq!(tags, vec![" a ", ""]);
    }

    #[test]
    fn empty_patch() {
        assert!(SnippetPatch::default().is_empty());
        let patch = SnippetPatch {
            code: Some("x".into()),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }
}
