#![expect(missing_docs, reason = "example")]

use std::collections::BTreeMap;

use veecle_logr::{ConsoleSink, Logger, values};

fn main() {
    veecle_logr::set_verbosity(1);

    let logger = Logger::new(ConsoleSink::STDOUT)
        .with_name("MyName")
        .with_values(values!("user", "you"));

    logger.info("hello", values!("val1", 1, "val2", BTreeMap::from([("k", 1)])));
    logger.at_level(1).info("you should see this", values!());
    logger.at_level(3).info("you should NOT see this", values!());
    logger.error(
        None,
        "uh oh",
        values!("trouble", true, "reasons", [0.1, 0.11, 2.5]),
    );
}
