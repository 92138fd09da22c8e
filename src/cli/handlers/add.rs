use crate::state::NewItemForm;
use anyhow::Result;
use colored::Colorize;
use std::io::Write;

use super::SessionContext;

pub fn handle_add(
    ctx: &mut SessionContext,
    out: &mut dyn Write,
    priority: Option<String>,
    text: &str,
) -> Result<()> {
    let form = NewItemForm {
        new_item: Some(text.to_string()),
        priority,
    };

    if ctx.state.add_item(&form) {
        writeln!(out, "{} {}", "Added".green(), form.text().trim())?;
    } else {
        writeln!(out, "{}", "Nothing to add.".dimmed())?;
    }
    Ok(())
}
