use chrono::{DateTime, Utc};
use colored::*;
use snipz::api::{CmdMessage, MessageLevel, SharedSnippet};
use snipz::collection::Collection;
use snipz::commands::categories::CategoryUsage;
use snipz::config::{SnipzConfig, CONFIG_KEYS};
use snipz::language::display_name;
use snipz::model::{PaletteColor, Snippet};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const ID_WIDTH: usize = 10;
const TIME_WIDTH: usize = 14;
const FAV_MARKER: &str = "★";

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// One line per snippet: marker, id, title, language and category, age.
pub fn print_snippets(snippets: &[Snippet], collection: &Collection) {
    if snippets.is_empty() {
        println!("No snippets found.");
        return;
    }

    for s in snippets {
        let marker = if s.favorite {
            format!("{} ", FAV_MARKER)
        } else {
            "  ".to_string()
        };
        let id = format!("{:<width$}", s.id, width = ID_WIDTH);
        let meta = format!(
            " [{} · {}]",
            display_name(&s.language),
            collection.category_name(&s.category)
        );

        let fixed = marker.width() + ID_WIDTH + meta.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let title = truncate_to_width(&s.title, available);
        let padding = available.saturating_sub(title.width());

        println!(
            "{}{}{}{}{}{}",
            marker.yellow(),
            id.dimmed(),
            title.bold(),
            paint(&meta, collection.category_color(&s.category)),
            " ".repeat(padding),
            format_time_ago(s.updated_at).dimmed()
        );
    }
}

pub fn print_full_snippets(snippets: &[Snippet], collection: &Collection) {
    for (i, s) in snippets.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        let star = if s.favorite { FAV_MARKER } else { "" };
        println!("{} {} {}", s.id.yellow(), s.title.bold(), star.yellow());
        println!(
            "{} · {}",
            display_name(&s.language),
            paint(
                collection.category_name(&s.category),
                collection.category_color(&s.category)
            )
        );
        if !s.description.is_empty() {
            println!("{}", s.description.italic());
        }
        if !s.tags.is_empty() {
            println!("{}", format_tags(&s.tags).cyan());
        }
        println!(
            "{}",
            format!(
                "Created: {}  Updated: {}",
                format_date(s.created_at),
                format_date(s.updated_at)
            )
            .dimmed()
        );
        println!("--------------------------------");
        println!("{}", s.code);
    }
}

pub fn print_shared(shared: &SharedSnippet) {
    println!("{}", shared.title.bold());
    println!("{}", display_name(&shared.language));
    if !shared.description.is_empty() {
        println!("{}", shared.description.italic());
    }
    if !shared.tags.is_empty() {
        println!("{}", format_tags(&shared.tags).cyan());
    }
    println!("--------------------------------");
    println!("{}", shared.code);
}

pub fn print_categories(usage: &[CategoryUsage]) {
    for u in usage {
        let c = &u.category;
        let label = format!("● {}", c.name);
        let padding = 24usize.saturating_sub(label.width());
        println!(
            "{:<16} {}{}{}",
            c.id.dimmed(),
            paint(&label, c.color),
            " ".repeat(padding),
            u.snippet_count.to_string().dimmed()
        );
    }
}

pub fn print_tags(tags: &[String]) {
    if tags.is_empty() {
        println!("No tags in use.");
        return;
    }
    for tag in tags {
        println!("{}", tag);
    }
}

pub fn print_config(config: &SnipzConfig) {
    for key in CONFIG_KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

fn format_tags(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!("#{}", t))
        .collect::<Vec<_>>()
        .join(" ")
}

fn paint(text: &str, color: PaletteColor) -> ColoredString {
    match color {
        PaletteColor::Red => text.red(),
        PaletteColor::Blue => text.blue(),
        PaletteColor::Green => text.green(),
        PaletteColor::Yellow => text.yellow(),
        PaletteColor::Purple => text.purple(),
        PaletteColor::Pink => text.bright_magenta(),
        PaletteColor::Indigo => text.bright_blue(),
        PaletteColor::Gray => text.bright_black(),
        PaletteColor::Orange => text.truecolor(249, 115, 22),
        PaletteColor::Teal => text.cyan(),
    }
}

/// Cuts `s` to fit in `max_width` columns, ending in an ellipsis when
/// anything had to be dropped.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M").to_string()
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
