//! Share links.
//!
//! A shared snippet travels as a `share` query parameter holding its
//! shareable fields as JSON, percent-encoded with the same character set as
//! JavaScript's `encodeURIComponent`.

use crate::collection::Collection;
use crate::commands::find_snippet;
use crate::error::{Result, SnipzError};
use crate::model::Snippet;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// Characters `encodeURIComponent` leaves alone.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub const SHARE_PARAM: &str = "share";

/// The fields of a snippet that leave the library when shared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedSnippet {
    pub title: String,
    pub language: String,
    pub code: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<&Snippet> for SharedSnippet {
    fn from(s: &Snippet) -> Self {
        Self {
            title: s.title.clone(),
            language: s.language.clone(),
            code: s.code.clone(),
            description: s.description.clone(),
            tags: s.tags.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    /// Percent-encoded JSON, ready to drop into a query string.
    pub payload: String,
}

impl ShareLink {
    pub fn url(&self, base: &str) -> String {
        let sep = if base.contains('?') { '&' } else { '?' };
        format!("{}{}{}={}", base, sep, SHARE_PARAM, self.payload)
    }
}

pub fn run(collection: &Collection, id: &str) -> Result<ShareLink> {
    let snippet = find_snippet(collection, id)?;
    encode(&SharedSnippet::from(snippet))
}

pub fn encode(shared: &SharedSnippet) -> Result<ShareLink> {
    let json = serde_json::to_string(shared)?;
    Ok(ShareLink {
        payload: utf8_percent_encode(&json, COMPONENT).to_string(),
    })
}

/// Reverses [`encode`]. Accepts either a bare payload or a full URL
/// carrying a `share=` parameter.
pub fn decode(input: &str) -> Result<SharedSnippet> {
    let payload = extract_param(input).unwrap_or(input);
    let json = percent_decode_str(payload)
        .decode_utf8()
        .map_err(|e| SnipzError::ShareFormat(e.to_string()))?;
    serde_json::from_str(&json).map_err(|e| SnipzError::ShareFormat(e.to_string()))
}

fn extract_param(input: &str) -> Option<&str> {
    let (_, query) = input.split_once('?')?;
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == SHARE_PARAM).then_some(value)
    })
}
