//! A [log::Log] which keeps the records of each test thread to itself, so
//! tests can look at the warnings the code under test emitted.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::{cell::RefCell, sync::Once};

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = RefCell::new(Vec::new());
}

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.with(|r| {
            r.borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

/// Install the logger if needed and forget whatever this thread logged so far.
pub fn start() {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).expect("Another logger is already installed");
        log::set_max_level(LevelFilter::Debug);
    });
    RECORDS.with(|r| r.borrow_mut().clear());
}

/// Warnings logged on this thread since [start].
pub fn warnings() -> Vec<String> {
    RECORDS.with(|r| {
        r.borrow()
            .iter()
            .filter(|(level, _)| *level == Level::Warn)
            .map(|(_, message)| message.clone())
            .collect()
    })
}

pub fn warned_about_clamping() -> bool {
    warnings().iter().any(|w| w.contains("clamping"))
}
