//! Console frontend: argument parsing, session loop, and command handlers.

pub mod commands;
pub mod handlers;
pub mod session;

pub use commands::{Cli, SessionCommand, SessionLine};
