use anyhow::{Context, Result};
use clap::Parser;

use blogql::cli::handlers::{
    CommandContext, handle_mutate, handle_query, handle_schema, handle_serve,
};
use blogql::cli::{Cli, Commands};
use blogql::config::BlogConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = BlogConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;

    let verbose = cli.verbose || config.logging.verbose;
    let log_file = cli.log_file.clone().or_else(|| config.logging.file.clone());
    blogql::logging::init(verbose, log_file);

    let ctx = CommandContext::new(config);

    match cli.command {
        Commands::Serve { host, port } => handle_serve(ctx, host, port),
        Commands::Query { query, variables } => handle_query(ctx, query, variables),
        Commands::Mutate {
            mutation,
            variables,
        } => handle_mutate(ctx, mutation, variables),
        Commands::Schema => handle_schema(ctx),
    }
}
