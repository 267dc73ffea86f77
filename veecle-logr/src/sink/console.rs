use super::{Sink, render_line};

/// Sink that prints one line per record.
///
/// Lines go through [`std::println`]/[`std::eprintln`], so the test harness captures them per test and only shows
/// them for failing tests.
/// This makes it the natural sink for loggers handed to code under test.
///
/// # Examples
///
/// ```rust
/// use veecle_logr::{ConsoleSink, Logger, values};
///
/// let logger = Logger::new(ConsoleSink::STDOUT).with_name("test");
/// logger.info("starting", values!("attempt", 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleSink {
    stream: Stream,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
}

impl ConsoleSink {
    /// Prints records to stdout.
    pub const STDOUT: Self = Self {
        stream: Stream::Stdout,
    };

    /// Prints records to stderr.
    pub const STDERR: Self = Self {
        stream: Stream::Stderr,
    };
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::STDOUT
    }
}

impl Sink for ConsoleSink {
    fn log(&self, segments: &[&str]) {
        let line = render_line(segments);
        match self.stream {
            Stream::Stdout => std::println!("{line}"),
            Stream::Stderr => std::eprintln!("{line}"),
        }
    }
}
