#![expect(missing_docs, reason = "tests")]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use indoc::indoc;
use pretty_assertions::assert_eq;
use serial_test::serial;
use veecle_logr::sink::Record;
use veecle_logr::{Logger, MemorySink, WriterSink, info, set_verbosity, values};

#[derive(Debug, thiserror::Error)]
#[error("an error occurred")]
struct Failure;

fn memory_logger() -> (Logger, Arc<Mutex<Vec<Record>>>) {
    let (sink, records) = MemorySink::new();
    (Logger::new(sink), records)
}

fn take_lines(records: &Mutex<Vec<Record>>) -> Vec<String> {
    records
        .lock()
        .unwrap()
        .drain(..)
        .map(|record| record.line())
        .collect()
}

/// Restores the process-wide threshold when dropped.
struct VerbosityGuard(i32);

impl VerbosityGuard {
    fn set(threshold: i32) -> Self {
        Self(set_verbosity(threshold))
    }
}

impl Drop for VerbosityGuard {
    fn drop(&mut self) {
        set_verbosity(self.0);
    }
}

#[test]
#[serial]
fn end_to_end() {
    let _guard = VerbosityGuard::set(1);
    let (root, records) = memory_logger();

    let logger = root.with_name("MyName").with_values(values!("user", "you"));
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
    logger.error(Some(&Failure), "goodbye", values!("code", -1));

    let segments: Vec<Vec<String>> = records
        .lock()
        .unwrap()
        .iter()
        .map(|record| record.segments.clone())
        .collect();
    assert_eq!(segments[0][3], r#""user"="you""#);
    assert_eq!(segments[0][4], r#""val1"=1 "val2"={"k":1}"#);
    assert_eq!(segments[2][1], r#""error"=null"#);

    assert_eq!(
        take_lines(&records).join("\n"),
        indoc! { r#"
            MyName "level"=0 "msg"="hello" "user"="you" "val1"=1 "val2"={"k":1}
            MyName "level"=1 "msg"="you should see this" "user"="you"
            MyName "error"=null "msg"="uh oh" "user"="you" "reasons"=[0.1,0.11,2.5] "trouble"=true
            MyName "error"="an error occurred" "msg"="goodbye" "user"="you" "code"=-1"# }
    );
}

#[test]
#[serial]
fn verbosity_changes_apply_to_existing_loggers() {
    let _guard = VerbosityGuard::set(1);
    let (root, records) = memory_logger();
    let detailed = root.at_level(3);

    root.at_level(1).info("level one", values!());
    detailed.info("level three", values!());
    assert_eq!(take_lines(&records), [r#""level"=1 "msg"="level one""#]);

    assert_eq!(set_verbosity(3), 1);
    detailed.info("level three", values!());
    assert_eq!(take_lines(&records), [r#""level"=3 "msg"="level three""#]);
}

#[test]
#[serial]
fn errors_always_emit() {
    let _guard = VerbosityGuard::set(-1000);
    let (root, records) = memory_logger();

    root.info("hidden", values!());
    root.at_level(-999).error(None, "visible", values!());

    assert_eq!(take_lines(&records), [r#""error"=null "msg"="visible""#]);
}

#[test]
#[serial]
fn info_macro_respects_global_threshold() {
    let _guard = VerbosityGuard::set(0);
    let (root, records) = memory_logger();

    info!(root.at_level(2), "hidden", answer = 42);
    info!(root, "shown", answer = 42);

    assert_eq!(
        take_lines(&records),
        [r#""level"=0 "msg"="shown" "answer"=42"#]
    );
}

#[test]
#[serial]
fn writer_sink_renders_lines() {
    let _guard = VerbosityGuard::set(0);
    let sink = Arc::new(WriterSink::new(Vec::new()));
    let logger = Logger::from_shared(sink.clone(), veecle_logr::verbosity::global())
        .with_name("a")
        .with_name("b");

    logger.info("first", values!("z", 1, "a", 2));
    logger.with_values(values!("bound", "x")).error(None, "second", values!());
    drop(logger);

    let sink = Arc::into_inner(sink).expect("logger was dropped");
    assert_eq!(
        String::from_utf8(sink.into_inner()).unwrap(),
        indoc! { r#"
            a/b "level"=0 "msg"="first" "a"=2 "z"=1
            a/b "error"=null "msg"="second" "bound"="x"
        "# }
    );
}
