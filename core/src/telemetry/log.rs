use log::debug;

/// Thin facade over the `log` crate. Records at debug level only, so the
/// stdout sample stream stays the sole output under the default filter.
pub struct LogManager;

impl LogManager {
    pub fn new() -> Self {
        Self
    }

    pub fn record(&self, message: &str) {
        debug!("{}", message);
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}
