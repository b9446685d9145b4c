//! Table-row and banner formatting for the log viewer.
//!
//! Plain ANSI escapes, matching the rest of the output: the viewer is a
//! line-oriented filter, not a full-screen terminal app.

use serde_json::Value;

/// ANSI color escapes used by the table renderer.
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RED: &str = "\x1b[31m";
    pub const GRAY: &str = "\x1b[90m";
}

/// Render an ISO-8601 timestamp as `HH:MM:SS`.
///
/// Falls back to the first eight characters when the input does not parse.
pub fn format_timestamp(ts: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(ts) {
        Ok(dt) => dt.format("%H:%M:%S").to_string(),
        Err(_) => ts.chars().take(8).collect(),
    }
}

/// Compact `key=value` summary of a tool's argument object.
///
/// The server logs arguments either as a JSON object or as a JSON-encoded
/// string; both shapes are accepted here.
pub fn args_summary(arguments: Option<&Value>) -> String {
    match arguments {
        Some(Value::Object(map)) => join_pairs(map),
        Some(Value::String(text)) => match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(map)) => join_pairs(&map),
            _ => String::new(),
        },
        _ => String::new(),
    }
}

fn join_pairs(map: &serde_json::Map<String, Value>) -> String {
    map.iter()
        .map(|(k, v)| format!("{k}={}", compact_value(v)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn compact_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Truncate to at most `max_chars` characters.
pub fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// One table row for a completed call.
pub fn success_line(ts: &str, tool: &str, args: &str, duration_ms: f64, size: u64) -> String {
    use colors::*;
    format!(
        "{GRAY}{ts}{RESET} {GREEN}\u{2713}{RESET} {BOLD}{tool:<20}{RESET} \
         {CYAN}{args:<25}{RESET} {YELLOW}{duration_ms:>6.2}ms{RESET} {DIM}{size:>4}b{RESET}"
    )
}

/// One table row for a failed call; the error text is cut at 50 characters.
pub fn failure_line(ts: &str, tool: &str, error: &str) -> String {
    use colors::*;
    let error = truncate(error, 50);
    format!("{GRAY}{ts}{RESET} {RED}\u{2717}{RESET} {BOLD}{tool:<20}{RESET} {RED}{error}{RESET}")
}

/// Banner printed when the server reports startup.
pub fn start_banner(version: &str) -> String {
    use colors::*;
    let rule = "\u{2550}".repeat(80);
    format!("\n{GREEN}{rule}\n\u{1f680} MCP probe v{version}\n{rule}{RESET}\n")
}

/// Marker printed when the server reports shutdown.
pub fn stop_line() -> String {
    use colors::*;
    format!("{YELLOW}\u{23f9}  Stopped{RESET}")
}

/// Marker printed when the viewer itself is interrupted.
pub fn interrupt_line() -> String {
    use colors::*;
    format!("\n{GRAY}Stopped{RESET}")
}

/// Column-header banner, reprinted every 20 rendered rows.
pub fn header(container: &str) -> String {
    use colors::*;
    let rule = "\u{2500}".repeat(80);
    format!(
        "\n{DIM}{rule}{RESET}\n\
         {BOLD}Probe Log Viewer{RESET} - Container: {CYAN}{container}{RESET}\n\
         {DIM}Time     St Tool                 Arguments                  Duration Size{RESET}\n\
         {DIM}{rule}{RESET}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp_rfc3339() {
        assert_eq!(
            format_timestamp("2026-08-06T12:34:56.123456+00:00"),
            "12:34:56"
        );
        assert_eq!(format_timestamp("2026-08-06T01:02:03Z"), "01:02:03");
    }

    #[test]
    fn test_format_timestamp_fallback() {
        assert_eq!(format_timestamp("garbage-timestamp"), "garbage-");
        assert_eq!(format_timestamp(""), "");
    }

    #[test]
    fn test_args_summary_from_object() {
        let value = serde_json::json!({"count": 5, "include_delay": true});
        assert_eq!(args_summary(Some(&value)), "count=5 include_delay=true");
    }

    #[test]
    fn test_args_summary_from_encoded_string() {
        let value = serde_json::json!("{\"message\":\"hi\"}");
        assert_eq!(args_summary(Some(&value)), "message=hi");
    }

    #[test]
    fn test_args_summary_empty_cases() {
        assert_eq!(args_summary(None), "");
        assert_eq!(args_summary(Some(&serde_json::json!("not json"))), "");
        assert_eq!(args_summary(Some(&serde_json::json!(7))), "");
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("héllo wörld", 5), "héllo");
        assert_eq!(truncate("short", 50), "short");
    }

    #[test]
    fn test_success_line_layout() {
        let line = success_line("12:00:00", "echo", "message=hi", 12.34, 100);
        assert!(line.contains("\u{2713}"));
        assert!(line.contains("echo                "));
        assert!(line.contains(" 12.34ms"));
        assert!(line.contains(" 100b"));
    }

    #[test]
    fn test_failure_line_truncates_error() {
        let long_error = "x".repeat(80);
        let line = failure_line("12:00:00", "echo", &long_error);
        assert!(line.contains("\u{2717}"));
        assert!(line.contains(&"x".repeat(50)));
        assert!(!line.contains(&"x".repeat(51)));
    }
}
