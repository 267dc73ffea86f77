//! # `veecle-logr`
//!
//! A leveled, structured logger on top of any sink that can write a line.
//!
//! Application code emits records consisting of a message and key-value context.
//! The logger takes care of verbosity filtering, hierarchical names, bound context values and deterministic
//! rendering, the [`Sink`] only has to write the rendered segments somewhere.
//!
//! ## Features
//!
//! - **Immutable loggers**: Deriving named, valued or leveled loggers never affects the original
//! - **Verbosity gate**: Info records are filtered by a threshold before anything is rendered
//! - **Deterministic rendering**: Key-value pairs are sorted and JSON-encoded, independent of input order
//! - **Sinks**: Console, writer, in-memory and `tracing` sinks are included
//!
//! ## Basic Usage
//!
//! ```rust
//! use veecle_logr::{ConsoleSink, Logger, values};
//!
//! veecle_logr::set_verbosity(1);
//!
//! let logger = Logger::new(ConsoleSink::STDOUT)
//!     .with_name("MyName")
//!     .with_values(values!("user", "you"));
//!
//! // MyName "level"=0 "msg"="hello" "user"="you" "val1"=1
//! logger.info("hello", values!("val1", 1));
//! // Not emitted, the threshold is below 3.
//! logger.at_level(3).info("you should NOT see this", values!());
//! // Always emitted: MyName "error"=null "msg"="uh oh" "user"="you"
//! logger.error(None, "uh oh", values!());
//! ```
//!
//! ## Rendering
//!
//! Every record is passed to the sink as separate segments, see [`sink`].
//! Each key-value segment is produced by [`flatten`][flatten::flatten]: pairs sorted by key, rendered as
//! `"key"=value` with JSON-encoded keys and values, separated by single spaces.
//!
//! A key that is not a string is a bug at the call site and panics on emission.
//! A value that cannot be encoded (e.g. `f64::NAN`) renders as an empty string instead.

pub mod flatten;
pub mod logger;
mod macros;
pub mod sink;
pub mod value;
pub mod verbosity;

pub use logger::Logger;
pub use sink::{ConsoleSink, MemorySink, Sink, TracingSink, WriterSink};
pub use value::{KeyValue, Value};
pub use verbosity::set_verbosity;
