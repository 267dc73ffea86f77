//! The leveled, structured [`Logger`].
//!
//! A [`Logger`] is an immutable value.
//! [`with_name`][Logger::with_name], [`with_values`][Logger::with_values] and [`at_level`][Logger::at_level] return
//! derived loggers and leave the receiver untouched, so every logger can be handed to other threads and further
//! derived without coordination.
//!
//! # Examples
//!
//! ```rust
//! use veecle_logr::verbosity::Verbosity;
//! use veecle_logr::{Logger, MemorySink, values};
//!
//! let (sink, records) = MemorySink::new();
//! let logger = Logger::with_verbosity(sink, Verbosity::new(1).into())
//!     .with_name("MyName")
//!     .with_values(values!("user", "you"));
//!
//! logger.info("hello", values!("val1", 1));
//! logger.at_level(3).info("you should NOT see this", values!());
//! logger.error(None, "uh oh", values!("trouble", true));
//!
//! let records = records.lock().unwrap();
//! assert_eq!(records.len(), 2);
//! assert_eq!(
//!     records[0].line(),
//!     r#"MyName "level"=0 "msg"="hello" "user"="you" "val1"=1"#
//! );
//! assert_eq!(
//!     records[1].line(),
//!     r#"MyName "error"=null "msg"="uh oh" "user"="you" "trouble"=true"#
//! );
//! ```

use std::error::Error;
use std::sync::Arc;

use crate::flatten::flatten;
use crate::sink::Sink;
use crate::value::Value;
use crate::verbosity::{self, Verbosity};

/// Separator between the segments of a logger name.
pub const NAME_SEPARATOR: char = '/';

/// A leveled, structured logger writing to a [`Sink`].
///
/// Cloning is cheap apart from the bound values, which every clone and every derived logger owns separately.
#[derive(Clone, Debug)]
pub struct Logger {
    sink: Arc<dyn Sink + Send + Sync>,
    verbosity: Arc<Verbosity>,
    level: i32,
    name: String,
    values: Vec<Value>,
}

impl Logger {
    /// Creates a root logger writing to `sink`, gated by the process-wide threshold.
    ///
    /// The root logger has level `0`, an empty name and no bound values.
    pub fn new<S>(sink: S) -> Self
    where
        S: Sink + Send + Sync + 'static,
    {
        Self::from_shared(Arc::new(sink), verbosity::global())
    }

    /// Creates a root logger writing to `sink`, gated by `verbosity` instead of the process-wide threshold.
    pub fn with_verbosity<S>(sink: S, verbosity: Arc<Verbosity>) -> Self
    where
        S: Sink + Send + Sync + 'static,
    {
        Self::from_shared(Arc::new(sink), verbosity)
    }

    /// Creates a root logger from an already shared sink.
    pub fn from_shared(sink: Arc<dyn Sink + Send + Sync>, verbosity: Arc<Verbosity>) -> Self {
        Self {
            sink,
            verbosity,
            level: 0,
            name: String::new(),
            values: Vec::new(),
        }
    }

    /// The `/`-separated name of this logger.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The level this logger's info records are emitted at.
    pub fn level(&self) -> i32 {
        self.level
    }

    /// The key-value sequence bound to this logger, in the order it was added.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Returns a logger with `name` appended to this logger's name.
    ///
    /// Name segments are separated by [`NAME_SEPARATOR`].
    /// `name` should not contain the separator itself; this is not enforced.
    ///
    /// ```rust
    /// use veecle_logr::{ConsoleSink, Logger};
    ///
    /// let logger = Logger::new(ConsoleSink::STDOUT);
    /// assert_eq!(logger.with_name("Y").name(), "Y");
    /// assert_eq!(logger.with_name("X").with_name("Y").name(), "X/Y");
    /// ```
    pub fn with_name(&self, name: &str) -> Self {
        let mut derived = self.clone();
        if !derived.name.is_empty() {
            derived.name.push(NAME_SEPARATOR);
        }
        derived.name.push_str(name);
        derived
    }

    /// Returns a logger with `kv_list` appended to the bound key-value sequence.
    ///
    /// Bound values are included in every record of the returned logger and the loggers derived from it.
    /// Duplicate keys are resolved per record, the last value wins.
    pub fn with_values(&self, kv_list: &[Value]) -> Self {
        let mut derived = self.clone();
        derived.values.extend_from_slice(kv_list);
        derived
    }

    /// Returns a logger whose info records are emitted at `level`.
    ///
    /// The level replaces the current one, it is not added to it.
    pub fn at_level(&self, level: i32) -> Self {
        Self {
            level,
            ..self.clone()
        }
    }

    /// Returns whether info records of this logger are currently emitted.
    pub fn enabled(&self) -> bool {
        self.verbosity.is_enabled(self.level)
    }

    /// Emits an info record if this logger is [enabled][Self::enabled].
    ///
    /// Nothing is rendered for disabled loggers, use the [`info!`][crate::info] macro to also skip building the values.
    ///
    /// # Panics
    ///
    /// If a key in the bound values or `kv_list` is not a string.
    #[track_caller]
    pub fn info(&self, msg: &str, kv_list: &[Value]) {
        if !self.enabled() {
            return;
        }

        let level = flatten(&[Value::from("level"), Value::from(self.level)]);
        let msg = flatten(&[Value::from("msg"), Value::from(msg)]);
        let fixed = flatten(&self.values);
        let user = flatten(kv_list);
        self.sink.log(&[
            self.name.as_str(),
            level.as_str(),
            msg.as_str(),
            fixed.as_str(),
            user.as_str(),
        ]);
    }

    /// Emits an error record, regardless of the verbosity threshold.
    ///
    /// A missing `error` is rendered as `null`.
    ///
    /// # Panics
    ///
    /// If a key in the bound values or `kv_list` is not a string.
    #[track_caller]
    pub fn error(&self, error: Option<&dyn Error>, msg: &str, kv_list: &[Value]) {
        let msg = flatten(&[Value::from("msg"), Value::from(msg)]);
        let error = flatten(&[
            Value::from("error"),
            Value::from(error.map(|error| error.to_string())),
        ]);
        let fixed = flatten(&self.values);
        let user = flatten(kv_list);
        self.sink.log(&[
            self.name.as_str(),
            error.as_str(),
            msg.as_str(),
            fixed.as_str(),
            user.as_str(),
        ]);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::{Arc, Mutex};

    use pretty_assertions::assert_eq;

    use super::Logger;
    use crate::sink::{MemorySink, Record};
    use crate::values;
    use crate::verbosity::Verbosity;

    fn logger(threshold: i32) -> (Logger, Arc<Verbosity>, Arc<Mutex<Vec<Record>>>) {
        let (sink, records) = MemorySink::new();
        let verbosity = Arc::new(Verbosity::new(threshold));
        (
            Logger::with_verbosity(sink, verbosity.clone()),
            verbosity,
            records,
        )
    }

    fn take(records: &Mutex<Vec<Record>>) -> Vec<Vec<String>> {
        records
            .lock()
            .unwrap()
            .drain(..)
            .map(|record| record.segments)
            .collect()
    }

    #[test]
    fn root_logger() {
        let (logger, _, _) = logger(0);
        assert_eq!(logger.name(), "");
        assert_eq!(logger.level(), 0);
        assert!(logger.values().is_empty());
    }

    #[test]
    fn info_passes_five_segments() {
        let (logger, _, records) = logger(1);
        logger
            .with_name("MyName")
            .with_values(values!("user", "you"))
            .info("hello", values!("val1", 1, "val2", BTreeMap::from([("k", 1)])));

        assert_eq!(
            take(&records),
            [[
                "MyName",
                r#""level"=0"#,
                r#""msg"="hello""#,
                r#""user"="you""#,
                r#""val1"=1 "val2"={"k":1}"#,
            ]]
        );
    }

    #[test]
    fn verbosity_gate() {
        let (logger, verbosity, records) = logger(1);

        logger.at_level(1).info("shown", values!());
        logger.at_level(3).info("hidden", values!());
        assert_eq!(take(&records).len(), 1);

        verbosity.set(3);
        logger.at_level(3).info("now shown", values!());
        assert_eq!(take(&records)[0][1], r#""level"=3"#);
    }

    #[test]
    fn disabled_info_does_not_render() {
        let (logger, _, records) = logger(0);
        // A malformed key would panic if anything was flattened.
        logger.at_level(1).info("hidden", values!(1, 2));
        assert!(take(&records).is_empty());
    }

    #[test]
    fn error_ignores_verbosity() {
        let (logger, _, records) = logger(-1000);
        logger.error(None, "oops", values!());

        assert_eq!(
            take(&records),
            [["", r#""error"=null"#, r#""msg"="oops""#, "", ""]]
        );
    }

    #[test]
    fn error_renders_error_text() {
        #[derive(Debug, thiserror::Error)]
        #[error("an error occurred")]
        struct Failure;

        let (logger, _, records) = logger(0);
        logger.error(Some(&Failure), "goodbye", values!("code", -1));

        assert_eq!(
            take(&records),
            [[
                "",
                r#""error"="an error occurred""#,
                r#""msg"="goodbye""#,
                "",
                r#""code"=-1"#,
            ]]
        );
    }

    #[test]
    fn derivations_do_not_mutate_receiver() {
        let (parent, _, records) = logger(0);
        let child = parent.with_values(values!("a", 1));
        let grandchild = child.with_values(values!("b", 2));
        let sibling = child.with_values(values!("c", 3));

        parent.info("parent", values!());
        child.info("child", values!());
        grandchild.info("grandchild", values!());
        sibling.info("sibling", values!());

        let fixed: Vec<_> = take(&records)
            .into_iter()
            .map(|segments| segments[3].clone())
            .collect();
        assert_eq!(fixed, ["", r#""a"=1"#, r#""a"=1 "b"=2"#, r#""a"=1 "c"=3"#]);
    }

    #[test]
    fn at_level_copies_name_and_values() {
        let (logger, _, _) = logger(0);
        let logger = logger.with_name("n").with_values(values!("k", "v"));
        let leveled = logger.at_level(2);

        assert_eq!(leveled.level(), 2);
        assert_eq!(leveled.name(), "n");
        assert_eq!(leveled.values(), logger.values());
        assert_eq!(logger.level(), 0);
    }

    #[test]
    fn bound_duplicates_resolve_per_record() {
        let (logger, _, records) = logger(0);
        logger
            .with_values(values!("k", 1))
            .with_values(values!("k", 2))
            .info("dup", values!("k", 3));

        let segments = take(&records).remove(0);
        assert_eq!(segments[3], r#""k"=2"#);
        assert_eq!(segments[4], r#""k"=3"#);
    }

    #[test]
    fn names_join_with_separator() {
        let (logger, _, _) = logger(0);
        assert_eq!(logger.with_name("X").with_name("Y").name(), "X/Y");
        assert_eq!(logger.with_name("Y").name(), "Y");
        // Embedded separators are passed through as-is.
        assert_eq!(logger.with_name("a/b").with_name("c").name(), "a/b/c");
    }

    #[test]
    #[should_panic(expected = "key at index 0 is not a string: 42")]
    fn malformed_bound_key_panics_on_emission() {
        let (logger, _, _) = logger(0);
        logger.with_values(values!(42, "value")).info("boom", values!());
    }

    #[test]
    fn loggers_are_usable_across_threads() {
        let (logger, _, records) = logger(0);

        std::thread::scope(|scope| {
            for worker in 0..4 {
                let logger = logger.with_name("worker").with_values(values!("id", worker));
                scope.spawn(move || logger.info("done", values!()));
            }
        });

        let mut fixed: Vec<_> = take(&records)
            .into_iter()
            .map(|segments| segments[3].clone())
            .collect();
        fixed.sort();
        assert_eq!(fixed, [r#""id"=0"#, r#""id"=1"#, r#""id"=2"#, r#""id"=3"#]);
    }
}
