//! CLI for browsing the folio project catalog.

mod commands;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use folio_core::config::{self, FolioConfig};
use folio_core::Catalog;
use std::path::PathBuf;

use commands::{
    run_categories, run_completions, run_featured, run_list, run_man, run_meta, run_show,
};

/// Top-level CLI for the folio portfolio catalog.
#[derive(Debug, Parser)]
#[command(name = "folio")]
#[command(about = "folio: browse and search the portfolio project catalog", long_about = None)]
pub struct Cli {
    /// Catalog JSON file to use instead of the configured or bundled one.
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// List category filters ("all" first).
    Categories,

    /// List projects matching a search term and category.
    List {
        /// Case-insensitive text matched against title, description and technologies.
        #[arg(long, short, default_value = "")]
        search: String,
        /// Category to restrict to ("all" for every category).
        #[arg(long, short, default_value = folio_core::ALL_CATEGORIES)]
        category: String,
    },

    /// Show featured projects.
    Featured {
        /// Maximum number of projects (defaults to featured_limit from config).
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
    },

    /// Show one project by slug, with related projects.
    Show {
        /// Project slug.
        slug: String,
        /// Maximum related projects (defaults to related_limit from config).
        #[arg(long, value_name = "N")]
        related: Option<usize>,
    },

    /// Print page metadata tags for a project page.
    Meta {
        /// Project slug.
        slug: String,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },

    /// Print a roff man page.
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Completions { shell } => return run_completions(&mut Cli::command(), shell),
            CliCommand::Man => return run_man(Cli::command()),
            _ => {}
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let catalog = load_catalog(cli.catalog, &cfg)?;

        match cli.command {
            CliCommand::Categories => run_categories(&catalog),
            CliCommand::List { search, category } => run_list(&catalog, &cfg, search, category),
            CliCommand::Featured { limit } => {
                run_featured(&catalog, &cfg, limit.unwrap_or(cfg.featured_limit))
            }
            CliCommand::Show { slug, related } => run_show(
                &catalog,
                &cfg,
                &slug,
                related.unwrap_or(cfg.related_limit),
            ),
            CliCommand::Meta { slug } => run_meta(&catalog, &cfg, &slug),
            CliCommand::Completions { .. } | CliCommand::Man => Ok(()),
        }
    }
}

/// The command-line path wins over the configured one; neither means bundled.
/// Any integrity fault aborts here, before a single query runs.
fn load_catalog(cli_path: Option<PathBuf>, cfg: &FolioConfig) -> Result<Catalog> {
    let path = cli_path.or_else(|| cfg.catalog_path.clone());
    let catalog = Catalog::load(path.as_deref()).with_context(|| match &path {
        Some(p) => format!("load catalog {}", p.display()),
        None => "load bundled catalog".to_string(),
    })?;
    tracing::debug!(projects = catalog.len(), "catalog ready");
    Ok(catalog)
}

#[cfg(test)]
mod tests;
