use anyhow::Result;

use super::CommandContext;
use crate::graphql::schema_sdl;

pub fn handle_schema(ctx: CommandContext) -> Result<()> {
    print!("{}", schema_sdl(&ctx.schema()));
    Ok(())
}
