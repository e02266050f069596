use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of the sentinel category every snippet falls back to.
pub const GENERAL_CATEGORY_ID: &str = "general";
pub const GENERAL_CATEGORY_NAME: &str = "General";

fn default_category() -> String {
    GENERAL_CATEGORY_ID.to_string()
}

/// A saved code example.
///
/// Serialized with camelCase keys so exported files stay compatible with the
/// browser version of the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub id: String,
    pub title: String,
    pub language: String,
    pub code: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default = "default_category")]
    pub category: String,
}

impl Snippet {
    pub fn new(
        id: String,
        title: String,
        language: String,
        code: String,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            language,
            code,
            description: String::new(),
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
            favorite: false,
            category: default_category(),
        }
    }
}

/// Fixed palette for category badges.
///
/// The browser build stored CSS class tokens (`bg-red-500`); those are
/// accepted when reading old data and normalized to the bare color name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteColor {
    #[serde(alias = "bg-red-500")]
    Red,
    #[serde(alias = "bg-blue-500")]
    Blue,
    #[serde(alias = "bg-green-500")]
    Green,
    #[serde(alias = "bg-yellow-500")]
    Yellow,
    #[serde(alias = "bg-purple-500")]
    Purple,
    #[serde(alias = "bg-pink-500")]
    Pink,
    #[serde(alias = "bg-indigo-500")]
    Indigo,
    #[serde(alias = "bg-gray-500")]
    Gray,
    #[serde(alias = "bg-orange-500")]
    Orange,
    #[serde(alias = "bg-teal-500")]
    Teal,
}

impl PaletteColor {
    pub const ALL: [PaletteColor; 10] = [
        PaletteColor::Red,
        PaletteColor::Blue,
        PaletteColor::Green,
        PaletteColor::Yellow,
        PaletteColor::Purple,
        PaletteColor::Pink,
        PaletteColor::Indigo,
        PaletteColor::Gray,
        PaletteColor::Orange,
        PaletteColor::Teal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaletteColor::Red => "red",
            PaletteColor::Blue => "blue",
            PaletteColor::Green => "green",
            PaletteColor::Yellow => "yellow",
            PaletteColor::Purple => "purple",
            PaletteColor::Pink => "pink",
            PaletteColor::Indigo => "indigo",
            PaletteColor::Gray => "gray",
            PaletteColor::Orange => "orange",
            PaletteColor::Teal => "teal",
        }
    }
}

impl fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaletteColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_lowercase();
        let bare = token
            .strip_prefix("bg-")
            .and_then(|rest| rest.strip_suffix("-500"))
            .unwrap_or(&token);
        PaletteColor::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == bare)
            .ok_or_else(|| {
                let names: Vec<_> = PaletteColor::ALL.iter().map(|c| c.as_str()).collect();
                format!("unknown color '{}' (expected one of: {})", s, names.join(", "))
            })
    }
}

/// A named, colored grouping of snippets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub color: PaletteColor,
}

impl Category {
    /// Builds a category whose id is derived from `name`.
    pub fn new(name: impl Into<String>, color: PaletteColor) -> Self {
        let name = name.into();
        Self {
            id: category_id(&name),
            name,
            color,
        }
    }

    pub fn general() -> Self {
        Self {
            id: GENERAL_CATEGORY_ID.to_string(),
            name: GENERAL_CATEGORY_NAME.to_string(),
            color: PaletteColor::Gray,
        }
    }
}

/// Lower-cases `name` and replaces every run of whitespace with one hyphen.
///
/// Leading and trailing whitespace is not trimmed, it becomes a hyphen too.
pub fn category_id(name: &str) -> String {
    let mut id = String::with_capacity(name.len());
    let mut in_space = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_space {
                id.push('-');
            }
            in_space = true;
        } else {
            id.extend(c.to_lowercase());
            in_space = false;
        }
    }
    id
}
