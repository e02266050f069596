use chrono::Utc;
use clap::Parser;
use directories::ProjectDirs;
use env_logger::{Builder, Env};
use snipz::api::{
    decode_share, ConfigAction, NewSnippet, Seed, SnipzApi, SnippetFilter, SnippetPatch,
    SortOrder, TagsInput,
};
use snipz::clipboard::{copy_to_clipboard, format_for_clipboard};
use snipz::clock::SystemClock;
use snipz::commands::export::{timestamped_filename, EXPORT_FILENAME};
use snipz::config::SnipzConfig;
use snipz::error::{Result, SnipzError};
use snipz::language::{display_name, is_known, LANGUAGES};
use snipz::store::fs::FileStore;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

mod args;
mod render;
use args::{CategoryCommands, Cli, Commands};
use render::*;

const HOME_ENV: &str = "SNIPZ_HOME";

fn main() {
    Builder::from_env(Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: SnipzApi<FileStore, SystemClock>,
    data_dir: PathBuf,
    config: SnipzConfig,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            title,
            language,
            code,
            description,
            tags,
            category,
        }) => handle_add(&mut ctx, title, language, code, description, tags, category),
        Some(Commands::List {
            search,
            language,
            category,
            tags,
            favorites,
            sort,
        }) => {
            let filter = SnippetFilter {
                search,
                language,
                category,
                tags,
                favorites_only: favorites,
            };
            handle_list(&ctx, filter, sort)
        }
        Some(Commands::Show { ids }) => handle_show(&ctx, ids),
        Some(Commands::Edit {
            id,
            title,
            language,
            code,
            description,
            tags,
            category,
        }) => {
            let patch = SnippetPatch {
                title,
                language,
                code,
                description,
                tags: tags.map(TagsInput::Raw),
                category,
            };
            handle_edit(&mut ctx, id, patch)
        }
        Some(Commands::Rm { ids }) => handle_rm(&mut ctx, ids),
        Some(Commands::Fav { ids }) => handle_fav(&mut ctx, ids),
        Some(Commands::Tags) => handle_tags(&ctx),
        Some(Commands::Category(cmd)) => handle_category(&mut ctx, cmd),
        Some(Commands::Languages) => handle_languages(),
        Some(Commands::Export { path, timestamped }) => handle_export(&ctx, path, timestamped),
        Some(Commands::Import { path }) => handle_import(&mut ctx, path),
        Some(Commands::Share { id, decode }) => handle_share(&ctx, id, decode),
        Some(Commands::Copy { id, link }) => handle_copy(&ctx, id, link),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, SnippetFilter::default(), None),
    }
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "snipz", "snipz")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| SnipzError::Config("could not determine a data directory".into()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli)?;
    let config = SnipzConfig::load(&data_dir)?;
    let seed = if config.seed_samples {
        Seed::Samples
    } else {
        Seed::Empty
    };

    let store = FileStore::new(data_dir.clone());
    let api = SnipzApi::open(store, SystemClock, seed)?;

    Ok(AppContext {
        api,
        data_dir,
        config,
    })
}

fn handle_add(
    ctx: &mut AppContext,
    title: String,
    language: String,
    code: Option<String>,
    description: String,
    tags: String,
    category: Option<String>,
) -> Result<()> {
    let code = match code {
        Some(code) => code,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    if !is_known(&language) {
        log::warn!("unknown language '{}'; it will be shown as-is", language);
    }

    let mut input = NewSnippet::new(title, language, code)
        .description(description)
        .tags(tags);
    if let Some(category) = category {
        input = input.category(category);
    }

    let result = ctx.api.create_snippet(input)?;
    if let Some(s) = result.snippet() {
        println!("{}", s.id);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, filter: SnippetFilter, sort: Option<SortOrder>) -> Result<()> {
    let sort = sort.unwrap_or(ctx.config.default_sort);
    let result = ctx.api.query(&filter, sort);
    print_snippets(&result.listed_snippets, ctx.api.collection());
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, ids: Vec<String>) -> Result<()> {
    let result = ctx.api.view_snippets(&ids)?;
    print_full_snippets(&result.listed_snippets, ctx.api.collection());
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, id: String, patch: SnippetPatch) -> Result<()> {
    if patch.is_empty() {
        return Err(SnipzError::Validation("nothing to change".into()));
    }
    let result = ctx.api.update_snippet(&id, patch)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_rm(ctx: &mut AppContext, ids: Vec<String>) -> Result<()> {
    for id in &ids {
        let result = ctx.api.delete_snippet(id)?;
        print_messages(&result.messages);
    }
    Ok(())
}

fn handle_fav(ctx: &mut AppContext, ids: Vec<String>) -> Result<()> {
    for id in &ids {
        let result = ctx.api.toggle_favorite(id)?;
        print_messages(&result.messages);
    }
    Ok(())
}

fn handle_tags(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_tags();
    print_tags(&result.tags);
    Ok(())
}

fn handle_category(ctx: &mut AppContext, cmd: CategoryCommands) -> Result<()> {
    let result = match cmd {
        CategoryCommands::List => {
            let result = ctx.api.list_categories();
            print_categories(&result.category_usage);
            result
        }
        CategoryCommands::Add { name, color } => ctx.api.add_category(&name, color)?,
        CategoryCommands::Rm { id } => ctx.api.remove_category(&id)?,
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_languages() -> Result<()> {
    for lang in LANGUAGES {
        println!("{:<12} {}", lang, display_name(lang));
    }
    Ok(())
}

fn handle_export(ctx: &AppContext, path: Option<PathBuf>, timestamped: bool) -> Result<()> {
    let json = ctx.api.export_all()?;
    let path = match path {
        Some(path) => path,
        None if timestamped => PathBuf::from(timestamped_filename(Utc::now())),
        None => PathBuf::from(EXPORT_FILENAME),
    };
    if path == Path::new("-") {
        println!("{}", json);
        return Ok(());
    }
    fs::write(&path, json)?;
    println!(
        "Exported {} snippet(s) to {}",
        ctx.api.snippets().len(),
        path.display()
    );
    Ok(())
}

fn handle_import(ctx: &mut AppContext, path: PathBuf) -> Result<()> {
    let text = fs::read_to_string(&path)?;
    let result = ctx.api.import_all(&text)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_share(ctx: &AppContext, id: Option<String>, decode: Option<String>) -> Result<()> {
    if let Some(input) = decode {
        print_shared(&decode_share(&input)?);
        return Ok(());
    }
    let id = id.ok_or_else(|| SnipzError::Validation("a snippet id is required".into()))?;
    let link = ctx.api.share_snippet(&id)?;
    println!("{}", link.url(&ctx.config.share_base_url));
    Ok(())
}

fn handle_copy(ctx: &AppContext, id: String, link: bool) -> Result<()> {
    let text = if link {
        ctx.api
            .share_snippet(&id)?
            .url(&ctx.config.share_base_url)
    } else {
        format_for_clipboard(ctx.api.get_snippet(&id)?)
    };
    copy_to_clipboard(&text)?;
    let what = if link { "Share link" } else { "Code" };
    println!("{} copied to clipboard.", what);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = snipz::api::config(&ctx.data_dir, action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
