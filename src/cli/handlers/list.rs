use anyhow::Result;
use std::io::Write;

use super::SessionContext;
use super::utils::print_todo_list;

pub fn handle_list(ctx: &SessionContext, out: &mut dyn Write, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(ctx.state.records())?)?;
    } else {
        print_todo_list(out, &ctx.state.snapshot(), ctx.display.numbered)?;
    }
    Ok(())
}
