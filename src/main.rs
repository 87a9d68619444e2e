//! patternkit gallery - Entry Point

use clap::Parser;
use patternkit::model::{AppError, ViewMode};
use patternkit::source::{load_catalog_file, Catalog};
use patternkit::state::{GallerySettings, GalleryState};
use patternkit::stories::{find_story, fixtures, STORIES};
use std::path::PathBuf;
use tracing::info;

/// patternkit - terminal gallery of headless UI patterns
#[derive(Parser, Debug)]
#[command(name = "patternkit")]
#[command(version)]
#[command(about = "Terminal gallery for the patternkit UI state machines")]
pub struct Args {
    /// Path to a JSON item catalog (built-in demo items if not provided)
    #[arg(long)]
    pub items: Option<PathBuf>,

    /// Collection page size (0 shows every item)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Initial collection view mode
    #[arg(long)]
    pub view_mode: Option<ViewMode>,

    /// Story to open first (see --list-stories)
    #[arg(long)]
    pub story: Option<String>,

    /// Print the available stories and exit
    #[arg(long)]
    pub list_stories: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.list_stories {
        for story in STORIES.iter() {
            println!("{:<12} {}", story.id, story.title);
        }
        return Ok(());
    }

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = patternkit::config::load_config_with_precedence(args.config.clone())?;
        let merged = patternkit::config::merge_config(config_file);
        let with_env = patternkit::config::apply_env_overrides(merged)?;
        patternkit::config::apply_cli_overrides(with_env, args.page_size, args.view_mode)
            .validate()?
    };

    patternkit::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let catalog = load_items(args.items.as_ref())?;
    info!(items = catalog.len(), "Catalog loaded");

    let settings = GallerySettings {
        page_size: config.page_size,
        view_mode: config.default_view_mode,
        zoom: config.zoom,
        feed_batch_size: config.feed_batch_size,
    };
    let mut state = GalleryState::new(catalog, settings)?;

    if let Some(id) = args.story.as_deref() {
        let (index, _) = find_story(id).ok_or_else(|| AppError::UnknownStory(id.to_string()))?;
        state.select_story(index);
    }

    let colors = patternkit::view::ColorConfig::from_env_and_args(args.no_color);
    patternkit::view::run(state, config.theme, colors)?;

    Ok(())
}

fn load_items(path: Option<&PathBuf>) -> Result<Catalog, AppError> {
    let catalog = match path {
        Some(path) => load_catalog_file(path)?,
        None => fixtures::demo_catalog()?,
    };
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["patternkit", "--help"]);
        let err = result.expect_err("help exits early");
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["patternkit", "--version"]);
        let err = result.expect_err("version exits early");
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["patternkit"]);
        assert_eq!(args.items, None);
        assert_eq!(args.page_size, None);
        assert_eq!(args.view_mode, None);
        assert_eq!(args.story, None);
        assert!(!args.list_stories);
        assert!(!args.no_color);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_view_mode_parses_case_insensitively() {
        let args = Args::parse_from(["patternkit", "--view-mode", "LIST"]);
        assert_eq!(args.view_mode, Some(ViewMode::List));
    }

    #[test]
    fn test_invalid_view_mode_is_rejected() {
        let result = Args::try_parse_from(["patternkit", "--view-mode", "carousel"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_page_size_must_be_a_number() {
        let result = Args::try_parse_from(["patternkit", "--page-size", "many"]);
        assert!(result.is_err());
        let args = Args::parse_from(["patternkit", "--page-size", "0"]);
        assert_eq!(args.page_size, Some(0));
    }

    #[test]
    fn test_story_and_items_paths() {
        let args = Args::parse_from([
            "patternkit",
            "--story",
            "feed",
            "--items",
            "catalog.json",
        ]);
        assert_eq!(args.story.as_deref(), Some("feed"));
        assert_eq!(args.items, Some(PathBuf::from("catalog.json")));
    }

    #[test]
    fn test_demo_items_load_without_path() {
        let catalog = load_items(None).expect("demo catalog");
        assert_eq!(catalog.len(), 24);
    }

    #[test]
    fn test_missing_items_file_is_an_error() {
        let missing = PathBuf::from("/definitely/not/here/items.json");
        assert!(matches!(
            load_items(Some(&missing)),
            Err(AppError::Catalog(_))
        ));
    }
}
