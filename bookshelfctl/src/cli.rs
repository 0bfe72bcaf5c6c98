use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::str::FromStr;

use bookshelf_model::Theme;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "bookshelfctl", about = "Browse a Bookshelf catalog")]
pub struct Cli {
    /// Catalog data file (JSON with books, authors and genres)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,
    /// Books per page, overriding the configured value
    #[arg(long, global = true)]
    pub page_size: Option<usize>,
    /// Env file to load instead of ./.env
    #[arg(long, global = true)]
    pub env_file: Option<PathBuf>,
    /// Preferences file holding the stored theme
    #[arg(long, global = true)]
    pub preferences: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List matching books, one page at a time
    Browse(BrowseArgs),
    /// Show the detail view of one book
    Show {
        /// Book id
        id: String,
    },
    /// List author filter options
    Authors,
    /// List genre filter options
    Genres,
    /// Print the stored theme, or store a new one
    Theme {
        /// day or night
        #[arg(value_parser = Theme::from_str)]
        theme: Option<Theme>,
    },
}

#[derive(Debug, Args)]
pub struct BrowseArgs {
    /// Case-insensitive title substring
    #[arg(long, default_value = "")]
    pub title: String,
    /// Author key, or "any"
    #[arg(long, default_value = "any")]
    pub author: String,
    /// Genre key, or "any"
    #[arg(long, default_value = "any")]
    pub genre: String,
    /// Number of pages to render, at least one
    #[arg(long, default_value_t = NonZeroUsize::MIN)]
    pub pages: NonZeroUsize,
}
