//! Console Logger
//!
//! `log` backend for the web client. Lines go to the browser console on
//! wasm32 and to stderr elsewhere.

use std::sync::OnceLock;

use log::{Level, LevelFilter, Log, Metadata, Record};
use thiserror::Error;

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

#[derive(Debug, Error)]
pub enum InitError {
    #[error("a logger is already installed")]
    AlreadyInitialized,
}

pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }
}

/// `LEVEL target: message`, without the timestamp
pub fn format_record(record: &Record) -> String {
    format!("{:<5} {}: {}", record.level(), record.target(), record.args())
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "[{}] {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            format_record(record)
        );
        write_line(record.level(), &line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the global logger.
pub fn init(level: LevelFilter) -> Result<(), InitError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(level));
    log::set_logger(logger).map_err(|_| InitError::AlreadyInitialized)?;
    log::set_max_level(level);
    Ok(())
}
