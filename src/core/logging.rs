//! Structured logging setup.
//!
//! The probe emits one JSON object per log event on stderr. stdout belongs
//! to the protocol stream and must never receive log output, so the writer
//! is pinned to stderr here and nowhere else. Events are flattened so that
//! `timestamp`, `level`, `target`, `message`, and the event fields all
//! appear as top-level keys, the shape the log viewer parses.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging subsystem.
///
/// Configures tracing with the given level as the default directive; an
/// explicit `RUST_LOG` still takes precedence through the env filter.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::from_default_env().add_directive(parse_level(level).into());

    fmt()
        .json()
        .flatten_event(true)
        .with_current_span(false)
        .with_span_list(false)
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level_known_names() {
        assert_eq!(parse_level("trace"), Level::TRACE);
        assert_eq!(parse_level("DEBUG"), Level::DEBUG);
        assert_eq!(parse_level("Info"), Level::INFO);
        assert_eq!(parse_level("warn"), Level::WARN);
        assert_eq!(parse_level("error"), Level::ERROR);
    }

    #[test]
    fn test_parse_level_defaults_to_info() {
        assert_eq!(parse_level("verbose"), Level::INFO);
        assert_eq!(parse_level(""), Level::INFO);
    }
}
