use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "todos")]
#[command(
    author,
    version,
    about = "A single-session todo list with priority levels"
)]
pub struct Cli {
    /// Path to config file (searches upward for .todos.yml by default)
    #[arg(long, env = "TODOS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, env = "TODOS_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Start without the example items
    #[arg(long)]
    pub empty: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// One line of input inside a session.
#[derive(Parser, Debug)]
#[command(
    name = "todos",
    no_binary_name = true,
    disable_version_flag = true,
    subcommand_required = true
)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

impl SessionLine {
    pub fn parse_line(line: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(line.split_whitespace())
    }
}

/// Returns the todo text of an `add` line exactly as typed.
///
/// Skips the command word, then any `-p VALUE`, `--priority VALUE` or
/// `--priority=VALUE` options and a `--` separator. Whitespace inside the
/// remaining text is preserved.
pub fn raw_add_text(line: &str) -> &str {
    let (_, mut rest) = split_word(line);
    loop {
        let (word, after) = split_word(rest);
        match word {
            "-p" | "--priority" => rest = split_word(after).1,
            "--" => return after.trim_start(),
            _ if word.starts_with("--priority=") => rest = after,
            _ => return rest.trim_start(),
        }
    }
}

fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.find(char::is_whitespace) {
        Some(end) => input.split_at(end),
        None => (input, ""),
    }
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    /// Add a todo
    #[command(visible_alias = "a", visible_alias = "new")]
    Add {
        /// Priority level (Low, Medium, High); anything else means Medium
        #[arg(short, long)]
        priority: Option<String>,

        /// Text of the todo, taken verbatim from the rest of the line
        #[arg(num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Complete a todo, removing it from the list
    #[command(visible_alias = "d", visible_alias = "complete")]
    Done {
        /// Position in the list, starting at 1
        position: usize,
    },

    /// Show the list
    #[command(visible_alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the available priority levels
    Priorities,

    /// End the session
    #[command(visible_alias = "exit", visible_alias = "q")]
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
        SessionLine::command().debug_assert();
    }

    #[test]
    fn test_parse_add_with_priority() {
        let line = SessionLine::parse_line("add -p High Buy some milk").unwrap();
        assert_eq!(
            line.command,
            SessionCommand::Add {
                priority: Some("High".to_string()),
                text: vec!["Buy".into(), "some".into(), "milk".into()],
            }
        );
    }

    #[test]
    fn test_parse_add_without_text() {
        let line = SessionLine::parse_line("add").unwrap();
        assert_eq!(
            line.command,
            SessionCommand::Add {
                priority: None,
                text: Vec::new(),
            }
        );
    }

    #[test]
    fn test_parse_add_hyphen_leading_text() {
        let line = SessionLine::parse_line("add -5 degrees outside").unwrap();
        assert_eq!(
            line.command,
            SessionCommand::Add {
                priority: None,
                text: vec!["-5".into(), "degrees".into(), "outside".into()],
            }
        );

        let line = SessionLine::parse_line("add -p Low -5 degrees").unwrap();
        assert!(matches!(
            line.command,
            SessionCommand::Add { priority: Some(ref p), .. } if p == "Low"
        ));
    }

    #[test]
    fn test_raw_add_text_keeps_inner_whitespace() {
        assert_eq!(raw_add_text("add Buy   milk"), "Buy   milk");
        assert_eq!(raw_add_text("add -p High  Buy \t milk"), "Buy \t milk");
        assert_eq!(raw_add_text("a --priority Low x  y"), "x  y");
        assert_eq!(raw_add_text("new --priority=Low x  y"), "x  y");
    }

    #[test]
    fn test_raw_add_text_edge_cases() {
        assert_eq!(raw_add_text("add"), "");
        assert_eq!(raw_add_text("add -p High"), "");
        assert_eq!(raw_add_text("add -5 degrees"), "-5 degrees");
        assert_eq!(raw_add_text("add -- -p is text"), "-p is text");
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!(
            SessionLine::parse_line("d 2").unwrap().command,
            SessionCommand::Done { position: 2 }
        );
        assert_eq!(
            SessionLine::parse_line("ls --json").unwrap().command,
            SessionCommand::List { json: true }
        );
        assert_eq!(
            SessionLine::parse_line("exit").unwrap().command,
            SessionCommand::Quit
        );
    }

    #[test]
    fn test_parse_rejects_unknown_command() {
        assert!(SessionLine::parse_line("frobnicate").is_err());
        assert!(SessionLine::parse_line("done two").is_err());
    }
}
