//! tola-collections: inspect collection queries, relations and redirects.

mod cli;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use tola_collections::Site;
use tola_collections::config::SiteConfig;
use tola_collections::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(&cli.config)?;
    let site = Site::from_config(&config)?;

    match &cli.command {
        Commands::Query { args } => cli::query::run_query(&site, args),
        Commands::Queries => cli::query::list_queries(&site),
        Commands::Resolve { paths } => cli::resolve::run_resolve(&site, paths),
        Commands::Paths { kind } => cli::paths::run_paths(&site, *kind),
        Commands::Relations {
            collection,
            slug,
            output,
        } => cli::relations::run_relations(&site, collection, slug, output),
        Commands::Check => cli::check::run_check(&config, &site),
    }
}
