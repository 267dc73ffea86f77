use std::sync::{Arc, Mutex, PoisonError};

use super::{Sink, render_line};

/// A single record captured by a [`MemorySink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// The segments the logger passed to the sink, in order.
    pub segments: Vec<String>,
}

impl Record {
    /// The logger name, the first segment.
    pub fn name(&self) -> &str {
        self.segments.first().map_or("", String::as_str)
    }

    /// The record rendered as by the line-oriented sinks.
    pub fn line(&self) -> String {
        let segments: Vec<&str> = self.segments.iter().map(String::as_str).collect();
        render_line(&segments)
    }
}

/// A sink for testing that stores all records in memory.
///
/// This sink is useful for unit tests and integration tests where you need to verify that specific records were
/// emitted.
#[derive(Debug)]
pub struct MemorySink {
    /// Shared vector storing all records.
    pub records: Arc<Mutex<Vec<Record>>>,
}

impl MemorySink {
    /// Creates a new memory sink and returns both the sink and a handle to the record storage.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use veecle_logr::{Logger, MemorySink, values};
    /// use veecle_logr::verbosity::Verbosity;
    ///
    /// let (sink, records) = MemorySink::new();
    /// let logger = Logger::with_verbosity(sink, Verbosity::new(0).into());
    /// logger.info("hello", values!());
    ///
    /// assert_eq!(records.lock().unwrap()[0].line(), r#""level"=0 "msg"="hello""#);
    /// ```
    pub fn new() -> (Self, Arc<Mutex<Vec<Record>>>) {
        let records = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                records: records.clone(),
            },
            records,
        )
    }
}

impl Sink for MemorySink {
    fn log(&self, segments: &[&str]) {
        let record = Record {
            segments: segments.iter().map(|segment| (*segment).to_owned()).collect(),
        };
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record);
    }
}
