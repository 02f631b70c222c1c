//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Inspect collection queries, relations and redirects
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, `.toml` or `.json` (default: collections.toml)
    #[arg(short = 'C', long, global = true, default_value = "collections.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Execute a named query and print its entries as JSON
    #[command(visible_alias = "q")]
    Query {
        #[command(flatten)]
        args: QueryArgs,
    },

    /// List every registered query
    Queries,

    /// Resolve request paths through aliases and redirects
    #[command(visible_alias = "r")]
    Resolve {
        /// Request paths such as `/service/web-design` or `/seo`
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// List the static routes to generate
    #[command(visible_alias = "p")]
    Paths {
        /// Only this kind of route
        #[arg(short, long, value_enum)]
        kind: Option<PathKind>,
    },

    /// Show direct and reverse references of one item
    Relations {
        /// Collection of the item
        collection: String,

        /// Item slug
        slug: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Validate the configuration and detect URL conflicts
    #[command(visible_alias = "c")]
    Check,
}

/// Route kinds listed by `paths`.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// `/<collection>` roots
    Collections,
    /// `/<collection>/<slug>` routes
    Two,
    /// `/<slug>` routes
    Single,
}

/// Query command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct QueryArgs {
    /// Query name, e.g. `RelatedServices` or `NavMenu`
    pub name: String,

    /// Slug of the current item
    #[arg(short, long)]
    pub slug: Option<String>,

    /// Collection of the current item (or the collection to aggregate)
    #[arg(short = 'c', long = "collection")]
    pub current_collection: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// JSON output options shared by `query` and `relations`.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Filter out null/empty values from output
    #[arg(short = 'E', long)]
    pub filter_empty: bool,

    /// Filter output to specific fields (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub fields: Option<Vec<String>>,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}
