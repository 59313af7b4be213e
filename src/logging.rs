//! Plain stdout logging for the lobby controller and demo binary. The lobby
//! runs as short-lived glue between bus callbacks, so a line-per-record
//! logger is all it needs; level comes from the environment.

use log::{self, LevelFilter, Metadata, Record};
use std::env;

struct StdoutLogger;

impl log::Log for StdoutLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!("{} {} - {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StdoutLogger = StdoutLogger;

/// Initialize logging at the level named by the `LOBBY_LOG` environment
/// variable, defaulting to `info` when unset or unparseable. Safe to call
/// more than once; later calls keep the first registration.
pub fn init_logging() {
    let level = env::var("LOBBY_LOG")
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
