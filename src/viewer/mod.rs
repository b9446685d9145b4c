//! Log-correlation and presentation layer.
//!
//! Consumes the probe's diagnostic stream (one JSON object per line,
//! possibly interleaved with raw protocol frames and other noise) and
//! reconstructs request/response pairs into a compact table: one row per
//! completed or failed tool call.
//!
//! - `tracker.rs` - single-slot correlation state machine
//! - `format.rs` - ANSI table rows, banners, and field formatting
//! - `source.rs` - container discovery and merged log tailing

pub mod format;
pub mod source;
pub mod tracker;

pub use source::{LogStream, discover_container};
pub use tracker::RequestTracker;
