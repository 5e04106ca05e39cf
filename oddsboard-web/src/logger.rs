use gloo_console::{debug, error, info, trace, warn};
use log::{set_max_level, Level, LevelFilter, Log, Metadata, Record};

static LOGGER: Logger = Logger;

/// Initializes the logger, discarding all records above `level`.
///
/// Calling this function again only updates the maximum level.
pub fn init(level: LevelFilter) {
    let _ = log::set_logger(&LOGGER);
    set_max_level(level);
}

/// A [`Log`] implementation writing to the browser console.
#[derive(Copy, Clone, Debug)]
pub struct Logger;

impl Log for Logger {
    #[inline]
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = format!("[{}] {}", record.target(), record.args());

        match record.level() {
            Level::Error => error!(message),
            Level::Warn => warn!(message),
            Level::Info => info!(message),
            Level::Debug => debug!(message),
            Level::Trace => trace!(message),
        }
    }

    #[inline]
    fn flush(&self) {}
}
