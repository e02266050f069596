use clap::{Parser, Subcommand};
use snipz::api::SortOrder;
use snipz::model::PaletteColor;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "snipz")]
#[command(about = "A small library of reusable code snippets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the snippet library (overrides $SNIPZ_HOME)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new snippet
    #[command(alias = "new")]
    Add {
        title: String,

        /// Language id (e.g. rust, python, javascript)
        #[arg(short, long)]
        language: String,

        /// Code body; read from stdin when omitted
        #[arg(short, long)]
        code: Option<String>,

        #[arg(short, long, default_value = "")]
        description: String,

        /// Comma-separated tags
        #[arg(short, long, default_value = "")]
        tags: String,

        /// Category id
        #[arg(long)]
        category: Option<String>,
    },

    /// List snippets
    #[command(alias = "ls")]
    List {
        /// Case-insensitive search over title, description, tags and code
        #[arg(short, long)]
        search: Option<String>,

        #[arg(short, long)]
        language: Option<String>,

        /// Category id
        #[arg(short, long)]
        category: Option<String>,

        /// Require a tag (repeatable; all must match)
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// Only favorites
        #[arg(short, long)]
        favorites: bool,

        /// newest, oldest, az or za (defaults to the configured order)
        #[arg(long)]
        sort: Option<SortOrder>,
    },

    /// Show one or more snippets in full
    #[command(alias = "v")]
    Show {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Change fields of a snippet
    #[command(alias = "e")]
    Edit {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(short, long)]
        language: Option<String>,

        #[arg(short, long)]
        code: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        /// Comma-separated tags, replacing the current ones
        #[arg(short, long)]
        tags: Option<String>,

        #[arg(long)]
        category: Option<String>,
    },

    /// Delete one or more snippets
    #[command(alias = "delete")]
    Rm {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Toggle the favorite flag
    Fav {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// List every tag in use
    Tags,

    /// Manage categories
    #[command(subcommand)]
    Category(CategoryCommands),

    /// List the known languages
    Languages,

    /// Export all snippets as JSON
    Export {
        /// Output file (defaults to code-snippets.json; `-` for stdout)
        path: Option<PathBuf>,

        /// Stamp the default file name with the current time
        #[arg(long, conflicts_with = "path")]
        timestamped: bool,
    },

    /// Import snippets from a JSON export
    Import { path: PathBuf },

    /// Print a share link for a snippet
    Share {
        #[arg(required_unless_present = "decode")]
        id: Option<String>,

        /// Decode a share link or payload instead
        #[arg(long, conflicts_with = "id")]
        decode: Option<String>,
    },

    /// Copy a snippet's code (or share link) to the clipboard
    #[command(alias = "cp")]
    Copy {
        id: String,

        /// Copy the share link instead of the code
        #[arg(long)]
        link: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (share-base-url, default-sort, seed-samples)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// List categories
    #[command(alias = "ls")]
    List,

    /// Add a category
    Add {
        name: String,

        /// red, blue, green, yellow, purple, pink, indigo, gray, orange or teal
        #[arg(short, long, default_value = "blue")]
        color: PaletteColor,
    },

    /// Remove a category by id
    Rm { id: String },
}
