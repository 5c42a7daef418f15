use crate::domain::logging::{LogEntry, LogLevel, Logger, TimeProvider, get_time_provider};
use wasm_bindgen::JsValue;

/// Logger implementation writing to the browser console
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new_development() -> Self {
        Self { min_level: LogLevel::Debug }
    }

    pub fn new_production() -> Self {
        Self { min_level: LogLevel::Info }
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, entry: LogEntry) {
        if entry.level < self.min_level {
            return;
        }
        let formatted = format!(
            "[{}] {} {}: {}",
            get_time_provider().format_timestamp(entry.timestamp),
            entry.level,
            entry.component,
            entry.message
        );
        let value = JsValue::from_str(&formatted);
        match entry.level {
            LogLevel::Error => web_sys::console::error_1(&value),
            LogLevel::Warn => web_sys::console::warn_1(&value),
            _ => web_sys::console::log_1(&value),
        }
    }
}

/// Time provider backed by the browser clock
pub struct BrowserTimeProvider;

impl BrowserTimeProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BrowserTimeProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeProvider for BrowserTimeProvider {
    fn current_timestamp(&self) -> u64 {
        js_sys::Date::now() as u64
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        let ms_of_day = timestamp % 86_400_000;
        let hours = ms_of_day / 3_600_000;
        let minutes = (ms_of_day % 3_600_000) / 60_000;
        let seconds = (ms_of_day % 60_000) / 1_000;
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}
