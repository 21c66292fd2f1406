use std::path::PathBuf;

use clap::{Args, Subcommand};

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List registered schema names.
    List(ListArgs),
    /// Show one schema definition.
    Get(GetArgs),
    /// Group schema names by display category.
    Categories,
    /// Report collisions, unclassified names, and category drift.
    Check,
    /// Export the OpenAPI document.
    Export(ExportArgs),
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only list schemas in this category (e.g. docker, vm, async_operations).
    #[arg(short, long)]
    pub category: Option<String>,
}

#[derive(Debug, Args)]
pub struct GetArgs {
    /// Exact, case-sensitive schema name.
    pub name: String,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Write the document to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit only the `components` object.
    #[arg(long)]
    pub components_only: bool,
}
