use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system
///
/// # Arguments
/// * `verbose` - Enable verbose (DEBUG) logging
/// * `log_file` - Optional path to log file. If None, logs only to stderr
pub fn init(verbose: bool, log_file: Option<PathBuf>) {
    // RUST_LOG wins over the verbose flag
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // Session output goes to stdout, so logs stay on stderr
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false) // Don't show module path
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    let Some(log_path) = log_file else {
        // A global subscriber may already be installed
        let _ = subscriber.try_init();
        return;
    };

    let (directory, file_name) = split_log_path(&log_path);
    let _ = std::fs::create_dir_all(&directory);

    // Rotated daily, one JSON object per event
    let file_layer = fmt::layer()
        .with_writer(tracing_appender::rolling::daily(directory, file_name))
        .with_ansi(false) // No colors in file
        .json();

    let _ = subscriber.with(file_layer).try_init();
}

/// Splits a log path into the rolling appender's directory and file prefix.
fn split_log_path(log_path: &Path) -> (PathBuf, OsString) {
    let directory = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file_name = log_path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| "todos.log".into());
    (directory, file_name)
}

fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("todos={}", level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Once;

    static INIT: Once = Once::new();

    fn init_test_logging() {
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_test_writer()
                .with_max_level(tracing::Level::DEBUG)
                .try_init();
        });
    }

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "todos=info");
        assert_eq!(default_directive(true), "todos=debug");
    }

    #[test]
    fn test_split_log_path() {
        let (dir, name) = split_log_path(Path::new("/var/log/todos/session.log"));
        assert_eq!(dir, PathBuf::from("/var/log/todos"));
        assert_eq!(name, OsString::from("session.log"));

        let (dir, name) = split_log_path(Path::new("session.log"));
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(name, OsString::from("session.log"));

        let (_, name) = split_log_path(Path::new("/"));
        assert_eq!(name, OsString::from("todos.log"));
    }

    #[test]
    fn test_init_after_global_subscriber_is_noop() {
        init_test_logging();
        // A subscriber is already installed, so this must not panic
        init(true, None);
        tracing::debug!("still logging");
    }
}
