use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "storefront", version, about = "Localized product storefront")]
pub struct Cli {
    /// Path to config.toml (defaults to conf/config.toml or ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Import products from a JSON file into the catalog
    Seed {
        /// JSON array of {"name": ..., "price": ...} objects
        file: PathBuf,
    },
}
