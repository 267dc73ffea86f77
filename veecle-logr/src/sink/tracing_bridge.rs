use super::{Sink, render_line};

/// Sink that forwards records to [`tracing`] as info events.
///
/// The logger name is recorded in the `logger` field, the remaining segments are rendered into the event message.
/// Events use the `veecle_logr` target so subscribers can filter them.
///
/// ```rust
/// use veecle_logr::{Logger, TracingSink, values};
///
/// let logger = Logger::new(TracingSink::DEFAULT).with_name("bridge");
/// logger.info("forwarded", values!("count", 3));
/// ```
#[derive(Debug, Default)]
pub struct TracingSink(());

impl TracingSink {
    /// A `const` version of `TracingSink::default()` to allow use in constants.
    pub const DEFAULT: Self = TracingSink(());
}

impl Sink for TracingSink {
    fn log(&self, segments: &[&str]) {
        let (name, fields) = match segments {
            [name, fields @ ..] => (*name, fields),
            [] => ("", segments),
        };
        tracing::info!(target: "veecle_logr", logger = name, "{}", render_line(fields));
    }
}
