use crate::model::Priority;
use anyhow::Result;
use std::io::Write;

use super::utils::format_priority;

pub fn handle_priorities(out: &mut dyn Write) -> Result<()> {
    let levels: Vec<String> = Priority::ALL
        .iter()
        .map(|p| format_priority(*p).to_string())
        .collect();
    writeln!(out, "Priorities: {}", levels.join(", "))?;
    Ok(())
}
