//! Single-slot request correlation.
//!
//! Reconstructs request/response pairs from the diagnostic stream: a
//! "tool called" event opens a pending slot, the matching "tool completed"
//! or "tool failed" event closes it and yields one rendered row.
//!
//! The slot is deliberately not a queue. Calls do not overlap in the
//! observed stream, so a second "tool called" before resolution silently
//! overwrites the slot; if the displaced call's completion ever arrives it
//! renders nothing, and a failure without a slot renders with the event's
//! own tool name and timestamp. Documented limitation, preserved as-is.

use serde_json::Value;

use super::format;

/// State held between a "tool called" event and its resolution.
#[derive(Debug, Clone)]
struct PendingCall {
    timestamp: String,
    tool: String,
    args: String,
}

/// Single-slot correlation state machine.
#[derive(Debug, Default)]
pub struct RequestTracker {
    pending: Option<PendingCall>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter and parse one raw line, then feed it through the tracker.
    ///
    /// Blank lines, raw protocol frames, and lines that are not valid JSON
    /// records are silently dropped; log streams are inherently noisy.
    pub fn process_line(&mut self, line: &str) -> Option<String> {
        let line = line.trim();
        if line.is_empty() || line.starts_with("{\"jsonrpc\":") {
            return None;
        }
        let record: Value = serde_json::from_str(line).ok()?;
        self.process(&record)
    }

    /// Advance the state machine with one structured record.
    ///
    /// Returns a rendered row for events that produce output; events that
    /// do not match a known message pattern are ignored.
    pub fn process(&mut self, record: &Value) -> Option<String> {
        let message = field(record, "message").and_then(Value::as_str).unwrap_or("");
        let timestamp = format::format_timestamp(
            field(record, "timestamp").and_then(Value::as_str).unwrap_or(""),
        );

        if message.contains("tool called") {
            self.pending = Some(PendingCall {
                timestamp,
                tool: field(record, "tool_name")
                    .and_then(Value::as_str)
                    .unwrap_or("?")
                    .to_string(),
                args: format::args_summary(field(record, "arguments")),
            });
            return None;
        }

        if message.contains("tool completed") {
            let pending = self.pending.take()?;
            let duration = field(record, "duration_ms")
                .and_then(Value::as_f64)
                .unwrap_or(0.0);
            let size = field(record, "response_length")
                .and_then(Value::as_u64)
                .unwrap_or(0);
            return Some(format::success_line(
                &pending.timestamp,
                &pending.tool,
                &pending.args,
                duration,
                size,
            ));
        }

        if message.contains("tool failed") {
            let pending = self.pending.take();
            let tool = pending
                .as_ref()
                .map(|p| p.tool.clone())
                .or_else(|| {
                    field(record, "tool_name")
                        .and_then(Value::as_str)
                        .map(String::from)
                })
                .unwrap_or_else(|| "?".to_string());
            // Start context is lost for displaced calls; fall back to the
            // failure event's own timestamp.
            let ts = pending.map(|p| p.timestamp).unwrap_or(timestamp);
            let error = field(record, "error").and_then(Value::as_str).unwrap_or("");
            return Some(format::failure_line(&ts, &tool, error));
        }

        if message.contains("server starting") {
            let version = field(record, "version").and_then(Value::as_str).unwrap_or("?");
            return Some(format::start_banner(version));
        }

        if message.contains("server stopped") {
            return Some(format::stop_line());
        }

        None
    }
}

/// Look a key up at the top level, falling back to a nested `fields`
/// object for unflattened subscriber output.
fn field<'a>(record: &'a Value, key: &str) -> Option<&'a Value> {
    record
        .get(key)
        .or_else(|| record.get("fields").and_then(|f| f.get(key)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn called(tool: &str, args: &str, ts: &str) -> String {
        serde_json::json!({
            "timestamp": ts,
            "level": "INFO",
            "message": "tool called",
            "tool_name": tool,
            "arguments": args,
        })
        .to_string()
    }

    fn completed(tool: &str, duration: f64, size: u64) -> String {
        serde_json::json!({
            "timestamp": "2026-08-06T12:00:01+00:00",
            "level": "INFO",
            "message": "tool completed",
            "tool_name": tool,
            "duration_ms": duration,
            "response_length": size,
        })
        .to_string()
    }

    fn failed(tool: &str, error: &str) -> String {
        serde_json::json!({
            "timestamp": "2026-08-06T12:00:02+00:00",
            "level": "ERROR",
            "message": "tool failed",
            "tool_name": tool,
            "error": error,
        })
        .to_string()
    }

    #[test]
    fn test_call_completion_pair_renders_one_row() {
        let mut tracker = RequestTracker::new();

        assert!(
            tracker
                .process_line(&called("echo", "{\"message\":\"hi\"}", "2026-08-06T12:00:00Z"))
                .is_none()
        );
        let row = tracker.process_line(&completed("echo", 12.0, 100)).unwrap();
        assert!(row.contains("\u{2713}"));
        assert!(row.contains("echo"));
        assert!(row.contains("message=hi"));
        assert!(row.contains("100b"));
        assert!(row.contains("12:00:00"));
    }

    #[test]
    fn test_success_then_failure_sequence() {
        let mut tracker = RequestTracker::new();

        tracker.process_line(&called("tool-a", "{}", "2026-08-06T12:00:00Z"));
        let first = tracker.process_line(&completed("tool-a", 12.0, 100)).unwrap();
        tracker.process_line(&called("tool-b", "{}", "2026-08-06T12:00:05Z"));
        let second = tracker.process_line(&failed("tool-b", "boom")).unwrap();

        assert!(first.contains("\u{2713}"));
        assert!(first.contains("tool-a"));
        assert!(second.contains("\u{2717}"));
        assert!(second.contains("tool-b"));
        assert!(second.contains("boom"));
    }

    #[test]
    fn test_second_call_overwrites_pending_slot() {
        let mut tracker = RequestTracker::new();

        tracker.process_line(&called("tool-a", "{}", "2026-08-06T12:00:00Z"));
        tracker.process_line(&called("tool-b", "{}", "2026-08-06T12:00:01Z"));
        let row = tracker.process_line(&completed("tool-a", 5.0, 42)).unwrap();

        // The displaced call's context is gone; the row reflects tool-b.
        assert!(row.contains("tool-b"));
        assert!(!row.contains("tool-a"));
    }

    #[test]
    fn test_orphan_completion_renders_nothing() {
        let mut tracker = RequestTracker::new();
        assert!(tracker.process_line(&completed("echo", 1.0, 10)).is_none());
    }

    #[test]
    fn test_orphan_failure_uses_event_context() {
        let mut tracker = RequestTracker::new();
        let row = tracker.process_line(&failed("echo", "boom")).unwrap();
        assert!(row.contains("echo"));
        assert!(row.contains("12:00:02"));
    }

    #[test]
    fn test_noise_is_silently_dropped() {
        let mut tracker = RequestTracker::new();
        assert!(tracker.process_line("").is_none());
        assert!(tracker.process_line("   ").is_none());
        assert!(tracker.process_line("not json at all").is_none());
        assert!(
            tracker
                .process_line("{\"jsonrpc\":\"2.0\",\"id\":1,\"result\":{}}")
                .is_none()
        );
        assert!(tracker.process_line("{\"message\":\"unrelated event\"}").is_none());
    }

    #[test]
    fn test_banner_and_stop_marker() {
        let mut tracker = RequestTracker::new();
        let banner = tracker
            .process_line(
                &serde_json::json!({
                    "timestamp": "2026-08-06T12:00:00Z",
                    "message": "server starting",
                    "version": "0.1.0",
                })
                .to_string(),
            )
            .unwrap();
        assert!(banner.contains("v0.1.0"));

        let stop = tracker
            .process_line(&serde_json::json!({"message": "server stopped"}).to_string())
            .unwrap();
        assert!(stop.contains("Stopped"));
    }

    #[test]
    fn test_unflattened_fields_object_is_accepted() {
        let mut tracker = RequestTracker::new();
        let record = serde_json::json!({
            "timestamp": "2026-08-06T12:00:00Z",
            "fields": {
                "message": "tool called",
                "tool_name": "echo",
                "arguments": "{}",
            },
        });
        assert!(tracker.process(&record).is_none());
        let row = tracker.process_line(&completed("echo", 1.0, 10)).unwrap();
        assert!(row.contains("echo"));
    }
}
