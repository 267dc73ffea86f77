//! Destinations for rendered log records.
//!
//! A [`Logger`][crate::Logger] hands every record to its [`Sink`] as a handful of pre-rendered segments:
//!
//! - info records: `[name, level, msg, bound values, call values]`
//! - error records: `[name, error, msg, bound values, call values]`
//!
//! How the segments are joined is up to the sink.
//! The logger never inspects the outcome of a sink call, so sinks must deal with their own failures.
//!
//! # Built-in Sinks
//!
//! - [`ConsoleSink`] - Prints one line per record to stdout or stderr, captured by the test harness
//! - [`WriterSink`] - Writes one line per record to any [`std::io::Write`]
//! - [`MemorySink`] - Collects records in memory for testing purposes
//! - [`TracingSink`] - Forwards records as [`tracing`] events

mod console;
mod memory;
mod tracing_bridge;
mod writer;

use core::fmt::Debug;

pub use console::ConsoleSink;
pub use memory::{MemorySink, Record};
pub use tracing_bridge::TracingSink;
pub use writer::WriterSink;

/// Trait for writing rendered log records somewhere.
///
/// # Examples
///
/// ```rust
/// use veecle_logr::Sink;
///
/// #[derive(Debug)]
/// struct CustomSink;
///
/// impl Sink for CustomSink {
///     fn log(&self, segments: &[&str]) {
///         // Custom output logic here
///         println!("{segments:?}");
///     }
/// }
/// ```
pub trait Sink: Debug {
    /// Writes the segments of a single record.
    fn log(&self, segments: &[&str]);
}

/// Joins the non-empty `segments` with single spaces.
///
/// Segments are empty e.g. for a root logger's name or when no values are bound.
///
/// ```rust
/// use veecle_logr::sink::render_line;
///
/// assert_eq!(
///     render_line(&["", r#""msg"="hi""#, "", r#""a"=1"#]),
///     r#""msg"="hi" "a"=1"#
/// );
/// ```
pub fn render_line(segments: &[&str]) -> String {
    segments
        .iter()
        .filter(|segment| !segment.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}
