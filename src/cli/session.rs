//! Interactive session loop.
//!
//! Reads one command per line, dispatches it to a handler, and re-renders the
//! list whenever the state reports a change.

use super::commands::{SessionCommand, SessionLine, raw_add_text};
use super::handlers::{
    SessionContext, handle_add, handle_done, handle_list, handle_priorities, print_todo_list,
};
use anyhow::Result;
use colored::Colorize;
use std::{
    cell::Cell,
    io::{BufRead, Write},
    rc::Rc,
};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub fn run_session<R: BufRead>(
    ctx: &mut SessionContext,
    input: R,
    out: &mut dyn Write,
    prompt: bool,
) -> Result<()> {
    let dirty = Rc::new(Cell::new(false));
    let subscription = ctx.display.auto_list.then(|| {
        let flag = Rc::clone(&dirty);
        ctx.state.subscribe(move |_| flag.set(true))
    });

    if prompt {
        writeln!(out, "{}", "Todo Manager".bold())?;
        writeln!(out, "{}", "Type `help` for commands.".dimmed())?;
    }
    print_todo_list(out, &ctx.state.snapshot(), ctx.display.numbered)?;
    show_prompt(out, prompt)?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            show_prompt(out, prompt)?;
            continue;
        }

        match execute_line(ctx, out, line) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => writeln!(out, "{} {}", "Error:".red(), e)?,
        }

        if dirty.replace(false) {
            print_todo_list(out, &ctx.state.snapshot(), ctx.display.numbered)?;
        }
        show_prompt(out, prompt)?;
    }

    if let Some(id) = subscription {
        ctx.state.unsubscribe(id);
    }
    debug!(remaining = ctx.state.len(), "session ended");
    Ok(())
}

/// Parses and runs a single command line.
///
/// Malformed lines print clap's message and keep the session going.
pub fn execute_line(ctx: &mut SessionContext, out: &mut dyn Write, line: &str) -> Result<Flow> {
    let parsed = match SessionLine::parse_line(line) {
        Ok(parsed) => parsed,
        Err(e) => {
            write!(out, "{}", e.render())?;
            return Ok(Flow::Continue);
        }
    };

    match parsed.command {
        SessionCommand::Add { priority, .. } => {
            handle_add(ctx, out, priority, raw_add_text(line))?
        }
        SessionCommand::Done { position } => handle_done(ctx, out, position)?,
        SessionCommand::List { json } => handle_list(ctx, out, json)?,
        SessionCommand::Priorities => handle_priorities(out)?,
        SessionCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

fn show_prompt(out: &mut dyn Write, prompt: bool) -> std::io::Result<()> {
    if prompt {
        write!(out, "> ")?;
        out.flush()?;
    }
    Ok(())
}
