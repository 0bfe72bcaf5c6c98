use std::io::Write;

use anyhow::Result;
use bookshelf_config::{
    BrowseConfig, CatalogData, ConfigLoad, ConfigLoadError, ConfigLoader,
    PreferenceStore,
};
use bookshelf_contracts::browse::BrowseCommands;
use bookshelf_core::{
    BookPreview, BrowseController, Catalog, SelectOption, ShowMore,
};
use bookshelf_model::prelude::{BookId, FilterCriteria, Theme};
use tracing::debug;

use crate::cli::{BrowseArgs, Cli, Command};

const EMPTY_MESSAGE: &str =
    "No results found. Your filters might be too narrow.";

pub fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let ConfigLoad { mut config, source } = ConfigLoader::new()
        .with_env_file(cli.env_file.clone())
        .load()?;
    debug!("Using browse configuration from {:?}", source);

    if let Some(data) = cli.data {
        config.data_path = Some(data);
    }
    if let Some(page_size) = cli.page_size {
        config.page_size = page_size;
    }
    if let Some(preferences) = cli.preferences {
        config.preferences_path = Some(preferences);
    }

    match cli.command {
        Command::Browse(args) => {
            let catalog = open_catalog(&config)?;
            let mut browse =
                BrowseController::new(&catalog, config.page_size()?);
            browse_command(&mut browse, &args, out)
        }
        Command::Show { id } => {
            let catalog = open_catalog(&config)?;
            let browse = BrowseController::new(&catalog, config.page_size()?);
            show_command(&browse, &id, out)
        }
        Command::Authors => {
            let catalog = open_catalog(&config)?;
            let browse = BrowseController::new(&catalog, config.page_size()?);
            print_options(&browse.author_options(), out)
        }
        Command::Genres => {
            let catalog = open_catalog(&config)?;
            let browse = BrowseController::new(&catalog, config.page_size()?);
            print_options(&browse.genre_options(), out)
        }
        Command::Theme { theme } => {
            let store =
                PreferenceStore::resolve(config.preferences_path.as_deref())?;
            theme_command(&store, theme, out)
        }
    }
}

fn open_catalog(config: &BrowseConfig) -> Result<Catalog> {
    let path = config
        .data_path
        .as_deref()
        .ok_or(ConfigLoadError::MissingDataPath)?;
    Ok(CatalogData::load_from_file(path)?.into_catalog()?)
}

/// Submit the search, then expand until `args.pages` pages are shown or
/// nothing remains.
pub fn browse_command(
    browse: &mut BrowseController<'_>,
    args: &BrowseArgs,
    out: &mut impl Write,
) -> Result<()> {
    let criteria =
        FilterCriteria::from_form(&args.title, &args.author, &args.genre);
    let refresh = browse.on_filter_submit(criteria);
    if refresh.show_empty_message {
        writeln!(out, "{EMPTY_MESSAGE}")?;
        return Ok(());
    }

    write_previews(&refresh.items, out)?;
    let mut show_more: ShowMore = refresh.show_more;
    for _ in 1..args.pages.get() {
        if !show_more.is_enabled() {
            break;
        }
        let append = browse.on_expand_requested();
        write_previews(&append.items, out)?;
        show_more = append.show_more;
    }

    writeln!(out, "{show_more}")?;
    Ok(())
}

pub fn show_command(
    browse: &BrowseController<'_>,
    id: &str,
    out: &mut impl Write,
) -> Result<()> {
    let detail = BookId::new(id)
        .ok()
        .and_then(|id| browse.on_record_selected(&id));

    match detail {
        Some(detail) => {
            writeln!(out, "{}", detail.title)?;
            writeln!(out, "{}", detail.subtitle())?;
            if !detail.image.is_empty() {
                writeln!(out, "{}", detail.image)?;
            }
            writeln!(out)?;
            writeln!(out, "{}", detail.description)?;
        }
        None => writeln!(out, "No book with id '{id}'")?,
    }
    Ok(())
}

fn print_options(options: &[SelectOption], out: &mut impl Write) -> Result<()> {
    for option in options {
        writeln!(out, "{}\t{}", option.value, option.label)?;
    }
    Ok(())
}

fn theme_command(
    store: &PreferenceStore,
    theme: Option<Theme>,
    out: &mut impl Write,
) -> Result<()> {
    let theme = match theme {
        Some(theme) => {
            store.save_theme(theme)?;
            theme
        }
        None => store.stored_theme(),
    };

    let palette = theme.palette();
    writeln!(out, "theme: {theme}")?;
    writeln!(out, "color-dark: {}", palette.dark)?;
    writeln!(out, "color-light: {}", palette.light)?;
    Ok(())
}

fn write_previews(items: &[BookPreview], out: &mut impl Write) -> Result<()> {
    for item in items {
        writeln!(out, "{}  {} by {}", item.id, item.title, item.author_name)?;
    }
    Ok(())
}
