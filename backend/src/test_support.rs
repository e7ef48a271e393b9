//! Captures log records emitted on the current thread so tests can assert on
//! levels and structured properties.

use log::kv::{self, Source as _};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::sync::Once;

#[derive(Debug, Clone)]
pub struct CapturedEvent {
    pub level: Level,
    pub message: String,
    pub properties: BTreeMap<String, String>,
}

thread_local! {
    static EVENTS: RefCell<Vec<CapturedEvent>> = const { RefCell::new(Vec::new()) };
}

static INSTALL: Once = Once::new();
static LOGGER: CaptureLogger = CaptureLogger;

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        let mut properties = Properties::default();
        let _ = record.key_values().visit(&mut properties);
        EVENTS.with(|events| {
            events.borrow_mut().push(CapturedEvent {
                level: record.level(),
                message: record.args().to_string(),
                properties: properties.0,
            })
        });
    }

    fn flush(&self) {}
}

#[derive(Default)]
struct Properties(BTreeMap<String, String>);

impl<'kvs> kv::VisitSource<'kvs> for Properties {
    fn visit_pair(&mut self, key: kv::Key<'kvs>, value: kv::Value<'kvs>) -> Result<(), kv::Error> {
        self.0.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Installs the capturing logger (once per process) and clears this thread's buffer.
pub fn start_capture() {
    INSTALL.call_once(|| {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(LevelFilter::Trace);
    });
    EVENTS.with(|events| events.borrow_mut().clear());
}

/// Drains the events recorded on this thread since `start_capture`.
pub fn take_events() -> Vec<CapturedEvent> {
    EVENTS.with(|events| events.borrow_mut().drain(..).collect())
}

pub fn capture<T>(f: impl FnOnce() -> T) -> (T, Vec<CapturedEvent>) {
    start_capture();
    let value = f();
    (value, take_events())
}
