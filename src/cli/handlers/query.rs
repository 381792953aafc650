use anyhow::{Context, Result};

use super::CommandContext;

pub fn handle_query(ctx: CommandContext, query: String, variables: Option<String>) -> Result<()> {
    execute_and_print(&ctx, &query, variables)
}

pub(super) fn parse_variables(variables: Option<String>) -> Result<async_graphql::Variables> {
    match variables {
        Some(v) => serde_json::from_str(&v).context("Failed to parse --variables as JSON"),
        None => Ok(async_graphql::Variables::default()),
    }
}

pub(super) fn execute_and_print(
    ctx: &CommandContext,
    document: &str,
    variables: Option<String>,
) -> Result<()> {
    let vars = parse_variables(variables)?;
    let schema = ctx.schema();

    let request = async_graphql::Request::new(document).variables(vars);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

    if !response.errors.is_empty() {
        tracing::debug!(errors = response.errors.len(), "Query returned errors");
    }

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
