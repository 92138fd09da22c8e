use crate::error::TodoError;
use crate::validation::position_to_index;
use anyhow::Result;
use colored::Colorize;
use std::io::Write;

use super::SessionContext;

pub fn handle_done(ctx: &mut SessionContext, out: &mut dyn Write, position: usize) -> Result<()> {
    let records = ctx.state.records();
    let index = position_to_index(position, records.len())
        .ok_or_else(|| TodoError::NotFound(format!("#{}", position)))?;

    let record = records[index].clone();
    ctx.state.complete_item(&record);
    writeln!(out, "{} {}", "Done".green(), record.text)?;
    Ok(())
}
