use clap::Parser;
use pathwise::value::SymbolTable;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod input;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing; stdout is reserved for documents
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("pathwise=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Some(path) = &cli.symbols {
        let table = input::read_symbols(path)?;
        tracing::info!(symbols = table.len(), "Loaded symbol table from {}", path.display());
        if SymbolTable::install(table).is_err() {
            tracing::warn!("Symbol table already installed; ignoring {}", path.display());
        }
    }

    let mut document = input::read_document(cli.input.as_deref())?;
    if cli.symbols.is_some() {
        document = input::symbolize(document, SymbolTable::global());
    }

    let result = match &cli.command {
        Commands::Get(args) => commands::access::get(&document, args),
        Commands::Put(args) => commands::access::put(document, args),
        Commands::Delete(args) => commands::access::delete(document, args),
        Commands::Pick(args) => commands::access::pick(&document, args),
        Commands::Flatten(args) => commands::flatten::run_flatten(&document, args),
        Commands::Unflatten(args) => commands::flatten::run_unflatten(document, args)?,
        Commands::Prune => commands::prune::run(document),
    };

    output::emit(&result, cli.format)
}
