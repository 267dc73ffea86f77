//! Macros for building key-value sequences and emitting records.
//!
//! - `values!`: Creates a `&[Value]` key-value sequence
//! - `info!`: Emits an info record, skipping all work for disabled loggers
//! - `error!`: Emits an error record

/// Constructs a `&[Value]` key-value sequence.
///
/// # Syntax
///
/// The macro accepts a comma separated list of:
/// - `identifier = value` - Uses the identifier as the key
/// - `"literal" = value` - Uses the literal string as the key
/// - `expression` - Appended as-is, so keys and values can also be given alternately
///
/// Every element is converted with [`Value::from`][crate::Value].
///
/// # Examples
///
/// ```rust
/// use veecle_logr::{Value, values};
///
/// let user = "you";
/// assert_eq!(
///     values!(user = user, "val1" = 1),
///     &[Value::from("user"), Value::from("you"), Value::from("val1"), Value::from(1)],
/// );
/// assert_eq!(values!("user", user, "val1", 1), values!(user = user, "val1" = 1));
///
/// let empty: &[Value] = values!();
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! values {
    ($($kvs:tt)*) => {
        $crate::values_inner!(@ { }, { $($kvs)* })
    };
}

/// The actual implementation of `values!`, separated out to avoid accidentally recursing into the `$($tt)*` case
/// from the inner cases.
#[doc(hidden)]
#[macro_export]
macro_rules! values_inner {
    // Base case, remaining tokens is empty.
    (@ { $($val:expr,)* }, { } ) => {
        &[ $($val,)* ]
    };

    // Recursive cases, take one key-value pair or a single element, add it to the output, and recurse on the
    // remaining tokens.
    (@ { $($out:expr,)* }, { $key:ident = $value:expr $(, $($rest:tt)*)? }) => {
        $crate::values_inner!(
            @ {
                $($out,)*
                $crate::Value::from(::core::stringify!($key)),
                $crate::Value::from($value),
            },
            { $($($rest)*)? }
        )
    };
    (@ { $($out:expr,)* }, { $key:literal = $value:expr $(, $($rest:tt)*)? }) => {
        $crate::values_inner!(
            @ { $($out,)* $crate::Value::from($key), $crate::Value::from($value), },
            { $($($rest)*)? }
        )
    };
    (@ { $($out:expr,)* }, { $element:expr $(, $($rest:tt)*)? }) => {
        $crate::values_inner!(
            @ { $($out,)* $crate::Value::from($element), },
            { $($($rest)*)? }
        )
    };
}

/// Emits an info record.
///
/// Unlike calling [`Logger::info`][crate::Logger::info] directly, the values are neither evaluated nor converted
/// when the logger is disabled.
///
/// # Examples
///
/// ```rust
/// use veecle_logr::{ConsoleSink, Logger, info};
///
/// let logger = Logger::new(ConsoleSink::STDOUT);
/// let port = 8080;
/// info!(logger, "Server listening", port = port, "protocol" = "HTTP");
/// info!(logger.at_level(5), "Expensive details", state = format!("{:?}", [1, 2, 3]));
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $msg:expr $(, $($kvs:tt)*)?) => {{
        let logger: &$crate::Logger = &$logger;
        if logger.enabled() {
            logger.info($msg, $crate::values!($($($kvs)*)?));
        }
    }};
}

/// Emits an error record.
///
/// The error is an `Option<&dyn Error>`, `None` is rendered as `null`.
///
/// # Examples
///
/// ```rust
/// use veecle_logr::{ConsoleSink, Logger, error};
///
/// let logger = Logger::new(ConsoleSink::STDERR);
/// let failure = std::io::Error::other("disk full");
/// error!(logger, Some(&failure), "Write failed", path = "/tmp/out");
/// error!(logger, None, "Something odd happened");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $error:expr, $msg:expr $(, $($kvs:tt)*)?) => {
        $crate::Logger::error(&$logger, $error, $msg, $crate::values!($($($kvs)*)?))
    };
}
