use std::io::Write;
use std::sync::{Mutex, PoisonError};

use super::{Sink, render_line};

/// Sink that writes one newline-terminated line per record to a [`Write`] implementor.
///
/// Writes are serialized through a mutex, so a single writer can be shared by loggers on different threads.
/// A failing write is reported as a `tracing` warning and the record is dropped.
///
/// ```rust
/// use veecle_logr::{Sink, WriterSink};
///
/// let sink = WriterSink::new(Vec::new());
/// sink.log(&["MyName", r#""msg"="hi""#]);
/// assert_eq!(sink.into_inner(), b"MyName \"msg\"=\"hi\"\n");
/// ```
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: Mutex<W>,
}

impl<W> WriterSink<W>
where
    W: Write,
{
    /// Creates a sink writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W> Sink for WriterSink<W>
where
    W: Write + core::fmt::Debug,
{
    fn log(&self, segments: &[&str]) {
        let line = render_line(segments);
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(error) = writeln!(writer, "{line}").and_then(|()| writer.flush()) {
            tracing::warn!(%error, "failed to write log record");
        }
    }
}
