//! `log` backend writing to the browser console.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::str::FromStr;
use std::sync::OnceLock;
use wasm_bindgen::JsValue;

static LOGGER: ConsoleLogger = ConsoleLogger;
static ACTIVE_LEVEL: OnceLock<LevelFilter> = OnceLock::new();

struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format!("[{}] {}", record.level(), record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Installs the console logger once.
///
/// Repeating the call with the same level is a no-op; a different level is
/// rejected.
pub fn init_console_logging(level: &str) -> Result<(), String> {
    let requested = LevelFilter::from_str(level.trim())
        .map_err(|_| format!("unsupported log level `{}`", level.trim()))?;

    let active = *ACTIVE_LEVEL.get_or_init(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(requested);
        }
        requested
    });

    if active != requested {
        return Err(format!(
            "console logging already runs at `{active}`; refusing to switch to `{requested}`"
        ));
    }
    Ok(())
}
