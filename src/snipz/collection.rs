//! In-memory snippet and category state.
//!
//! A [`Collection`] is the snapshot the command layer reads and mutates.
//! Snippets keep insertion order. Categories keep insertion order too and
//! always include the sentinel `general` entry once loaded through
//! [`Collection::ensure_general_category`].

use crate::model::{
    Category, PaletteColor, Snippet, GENERAL_CATEGORY_ID, GENERAL_CATEGORY_NAME,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    pub snippets: Vec<Snippet>,
    pub categories: Vec<Category>,
}

impl Collection {
    /// An empty snippet list with only the sentinel category.
    pub fn empty() -> Self {
        Self {
            snippets: Vec::new(),
            categories: vec![Category::general()],
        }
    }

    /// The starter library shown on first run.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        Self {
            snippets: seed_snippets(now),
            categories: default_categories(),
        }
    }

    pub fn find(&self, id: &str) -> Option<&Snippet> {
        self.snippets.iter().find(|s| s.id == id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Snippet> {
        self.snippets.iter_mut().find(|s| s.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// First category with `id`. Duplicate ids are possible; the earliest wins.
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Display name for a category id, falling back to the sentinel's name.
    pub fn category_name(&self, id: &str) -> &str {
        self.category(id)
            .map(|c| c.name.as_str())
            .unwrap_or(GENERAL_CATEGORY_NAME)
    }

    pub fn category_color(&self, id: &str) -> PaletteColor {
        self.category(id)
            .map(|c| c.color)
            .unwrap_or(PaletteColor::Gray)
    }

    /// Re-inserts the sentinel at the front if persisted data lost it.
    /// Returns true when it had to be added.
    pub fn ensure_general_category(&mut self) -> bool {
        if self.category(GENERAL_CATEGORY_ID).is_some() {
            return false;
        }
        self.categories.insert(0, Category::general());
        true
    }
}

pub fn default_categories() -> Vec<Category> {
    vec![
        Category::general(),
        Category::new("Frontend", PaletteColor::Blue),
        Category::new("Backend", PaletteColor::Green),
        Category::new("DevOps", PaletteColor::Orange),
        Category::new("Database", PaletteColor::Purple),
    ]
}

fn seed_snippets(now: DateTime<Utc>) -> Vec<Snippet> {
    let seed = |id: &str,
                title: &str,
                language: &str,
                code: &str,
                description: &str,
                tags: &[&str],
                favorite: bool,
                category: &str| {
        let mut s = Snippet::new(
            id.to_string(),
            title.to_string(),
            language.to_string(),
            code.to_string(),
            now,
        );
        s.description = description.to_string();
        s.tags = tags.iter().map(|t| t.to_string()).collect();
        s.favorite = favorite;
        s.category = category.to_string();
        s
    };

    vec![
        seed(
            "1",
            "React useState Hook",
            "javascript",
            "const [state, setState] = useState(initialState);",
            "Basic React useState hook example",
            &["react", "hooks", "state"],
            true,
            "frontend",
        ),
        seed(
            "2",
            "Python List Comprehension",
            "python",
            "squares = [x**2 for x in range(10)]",
            "Create a list of squares using list comprehension",
            &["python", "list", "comprehension"],
            false,
            "backend",
        ),
        seed(
            "3",
            "SQL SELECT Query",
            "sql",
            "SELECT column1, column2\nFROM table_name\nWHERE condition;",
            "Basic SQL SELECT query with WHERE clause",
            &["sql", "query", "select"],
            false,
            "database",
        ),
        seed(
            "4",
            "Docker Compose Example",
            "yaml",
            "version: '3'\nservices:\n  web:\n    image: nginx:alpine\n    ports:\n      - \"80:80\"\n  db:\n    image: postgres:13\n    environment:\n      POSTGRES_PASSWORD: example",
            "Simple Docker Compose file with Nginx and Postgres",
            &["docker", "compose", "yaml"],
            true,
            "devops",
        ),
    ]
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// A minimal valid snippet stamped at the epoch.
    pub fn snippet(id: &str, title: &str) -> Snippet {
        Snippet::new(
            id.to_string(),
            title.to_string(),
            "javascript".to_string(),
            "console.log(1)".to_string(),
            DateTime::<Utc>::UNIX_EPOCH,
        )
    }

    pub struct CollectionFixture {
        pub collection: Collection,
    }

    impl Default for CollectionFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl CollectionFixture {
        pub fn new() -> Self {
            Self {
                collection: Collection::empty(),
            }
        }

        pub fn with_snippets(mut self, count: usize) -> Self {
            for i in 0..count {
                let id = format!("s{}", i + 1);
                let title = format!("Test Snippet {}", i + 1);
                self.collection.snippets.push(snippet(&id, &title));
            }
            self
        }

        pub fn with_snippet(mut self, snippet: Snippet) -> Self {
            self.collection.snippets.push(snippet);
            self
        }

        pub fn with_category(mut self, name: &str, color: PaletteColor) -> Self {
            self.collection.categories.push(Category::new(name, color));
            self
        }

        pub fn build(self) -> Collection {
            self.collection
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn seed_has_four_snippets_and_five_categories() {
        let c = Collection::seeded(DateTime::<Utc>::UNIX_EPOCH);
        assert_eq!(c.snippets.len(), 4);
        assert_eq!(c.categories.len(), 5);
        assert_eq!(c.categories[0].id, GENERAL_CATEGORY_ID);
        assert_eq!(c.category("devops").unwrap().name, "DevOps");
    }

    #[test]
    fn seed_snippets_reference_seed_categories() {
        let c = Collection::seeded(DateTime::<Utc>::UNIX_EPOCH);
        for s in &c.snippets {
            assert!(c.category(&s.category).is_some(), "{}", s.category);
        }
    }

    #[test]
    fn unknown_category_falls_back_to_general() {
        let c = Collection::empty();
        assert_eq!(c.category_name("gone"), "General");
        assert_eq!(c.category_color("gone"), PaletteColor::Gray);
    }

    #[test]
    fn duplicate_category_ids_resolve_to_first() {
        let c = CollectionFixture::new()
            .with_category("Tools", PaletteColor::Red)
            .with_category("tools", PaletteColor::Blue)
            .build();
        assert_eq!(c.category_name("tools"), "Tools");
        assert_eq!(c.category_color("tools"), PaletteColor::Red);
    }

    #[test]
    fn ensure_general_category_reinserts_sentinel() {
        let mut c = Collection {
            snippets: Vec::new(),
            categories: vec![Category::new("Frontend", PaletteColor::Blue)],
        };
        assert!(c.ensure_general_category());
        assert_eq!(c.categories[0].id, GENERAL_CATEGORY_ID);
        assert!(!c.ensure_general_category());
        assert_eq!(c.categories.len(), 2);
    }

    #[test]
    fn find_mut_edits_in_place() {
        let mut c = CollectionFixture::new().with_snippets(2).build();
        c.find_mut("s2").unwrap().favorite = true;
        assert!(c.find("s2").unwrap().favorite);
        assert!(!c.contains("s3"));
    }
}
