//! Replays a short logging session through `veecle-logr`.
//!
//! Useful to see how records render and how the verbosity threshold filters them.

#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use veecle_logr::verbosity::VERBOSITY_ENV_VAR;
use veecle_logr::{ConsoleSink, Logger, TracingSink, values};

#[derive(Parser, Debug)]
#[command(version)]
struct Arguments {
    /// Threshold info records are compared against, higher values show more records.
    #[arg(
        long,
        env = VERBOSITY_ENV_VAR,
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    verbosity: i32,

    /// Name of the logger the session is recorded with.
    #[arg(long, default_value = "MyName")]
    name: String,

    /// Where records are written to.
    #[arg(long, value_enum, default_value_t = SinkKind::Stdout)]
    sink: SinkKind,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum SinkKind {
    /// One line per record on stdout.
    Stdout,
    /// One line per record on stderr.
    Stderr,
    /// `tracing` events, subject to `VEECLE_LOGR_LOG` filtering.
    Tracing,
}

#[derive(thiserror::Error, Debug)]
#[error("{0}")]
struct SessionError(&'static str);

fn main() -> eyre::Result<()> {
    let args = Arguments::parse();

    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::builder()
                    .with_default_directive(LevelFilter::INFO.into())
                    .with_env_var("VEECLE_LOGR_LOG")
                    .from_env()?,
            )
            .with_writer(std::io::stderr)
            .compact()
            .finish(),
    )?;

    let previous = veecle_logr::set_verbosity(args.verbosity);
    tracing::debug!(verbosity = args.verbosity, previous, sink = ?args.sink, "configured logger");

    let root = match args.sink {
        SinkKind::Stdout => Logger::new(ConsoleSink::STDOUT),
        SinkKind::Stderr => Logger::new(ConsoleSink::STDERR),
        SinkKind::Tracing => Logger::new(TracingSink::DEFAULT),
    };
    replay_session(&root.with_name(&args.name));

    Ok(())
}

fn replay_session(logger: &Logger) {
    let logger = logger.with_values(values!("user", "you"));

    logger.info(
        "hello",
        values!("val1", 1, "val2", BTreeMap::from([("k", 1)])),
    );
    logger.at_level(1).info("you should see this", values!());
    logger.at_level(3).info("you should NOT see this", values!());
    logger.error(
        None,
        "uh oh",
        values!("trouble", true, "reasons", [0.1, 0.11, 2.5]),
    );
    logger.error(
        Some(&SessionError("an error occurred")),
        "goodbye",
        values!("code", -1),
    );
}
