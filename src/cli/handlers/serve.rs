use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use crate::graphql::run_server;

pub fn handle_serve(mut ctx: CommandContext, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(h) = host {
        ctx.config.server.host = h;
    }
    if let Some(p) = port {
        ctx.config.server.port = p;
    }

    let settings = ctx.config.server.clone();
    let schema = ctx.schema();

    println!(
        "Starting GraphQL server on {}",
        format!("http://{}:{}{}", settings.host, settings.port, settings.graphql_path).cyan()
    );
    println!(
        "GraphiQL explorer: {}",
        format!("http://{}:{}{}", settings.host, settings.port, settings.graphiql_path).cyan()
    );

    tokio::runtime::Runtime::new()?.block_on(async { run_server(schema, &settings).await })?;
    Ok(())
}
