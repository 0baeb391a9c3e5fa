//! CLI argument definitions for the Pathwise binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

/// Path-based access to JSON documents
#[derive(Parser, Debug)]
#[command(name = "pathwise")]
#[command(about = "Pathwise: read, write, flatten and prune nested JSON documents by path")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// JSON document to read (defaults to stdin)
    #[arg(short, long, global = true, env = "PATHWISE_INPUT")]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json", env = "PATHWISE_FORMAT")]
    pub format: OutputFormat,

    /// File of known symbol names, one per line.
    /// Object keys matching a known name are loaded as symbols.
    #[arg(long, global = true, env = "PATHWISE_SYMBOLS")]
    pub symbols: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the value at a path
    Get(GetArgs),
    /// Write a value at a path and print the document
    Put(PutArgs),
    /// Delete the value at a path and print the document
    Delete(PathArgs),
    /// Project several paths into a sparse document
    Pick(PickArgs),
    /// Print one entry per leaf under composite keys
    Flatten(FlattenArgs),
    /// Rebuild a document from flattened entries
    Unflatten(FlattenArgs),
    /// Remove nulls and empty containers
    Prune,
}

/// Arguments for the get command
#[derive(clap::Args, Debug)]
pub struct GetArgs {
    /// Dotted path; numeric components are list positions
    pub path: String,

    /// Value printed when the final key is missing (JSON, or plain text)
    #[arg(short, long)]
    pub default: Option<String>,
}

/// Arguments for the put command
#[derive(clap::Args, Debug)]
pub struct PutArgs {
    /// Dotted path; numeric components are list positions
    pub path: String,

    /// Value to write (JSON, or plain text)
    pub value: String,
}

/// Arguments for commands taking a single path
#[derive(clap::Args, Debug)]
pub struct PathArgs {
    /// Dotted path; numeric components are list positions
    pub path: String,
}

/// Arguments for the pick command
#[derive(clap::Args, Debug)]
pub struct PickArgs {
    /// Dotted paths to project
    #[arg(required = true)]
    pub paths: Vec<String>,
}

/// Arguments for the flatten and unflatten commands
#[derive(clap::Args, Debug)]
pub struct FlattenArgs {
    /// Text placed between key components
    #[arg(short, long, default_value = ".", env = "PATHWISE_SEPARATOR")]
    pub separator: String,

    /// Keep field names as they are instead of rendering them in snake_case
    #[arg(long)]
    pub no_normalize: bool,

    /// Number given to the first list element
    #[arg(long, default_value_t = 1, env = "PATHWISE_INDEX_START")]
    pub index_start: usize,
}
