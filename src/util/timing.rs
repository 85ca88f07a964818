//! Scoped duration logging.

use std::time::{Duration, Instant};

/// Logs the time elapsed between its creation and its drop at debug level.
#[derive(Debug)]
pub struct ScopedTimer {
    label: String,
    start: Instant,
}

impl ScopedTimer {
    pub fn new(label: impl Into<String>) -> Self {
        ScopedTimer {
            label: label.into(),
            start: Instant::now(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        log::debug!("{}: {} ms", self.label, self.start.elapsed().as_millis());
    }
}
