use std::sync::Mutex;

/// Internal counters for the emit loop. Never written to the sample
/// stream.
pub struct MetricsRecorder {
    inner: Mutex<Metrics>,
}

struct Metrics {
    batches: usize,
    errors: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Metrics {
                batches: 0,
                errors: 0,
            }),
        }
    }

    pub fn record_batch(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.batches += 1;
        }
    }

    pub fn record_error(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.errors += 1;
        }
    }

    /// `(batches emitted, sink errors)`.
    pub fn snapshot(&self) -> (usize, usize) {
        if let Ok(metrics) = self.inner.lock() {
            (metrics.batches, metrics.errors)
        } else {
            (0, 0)
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_counts_batches_and_errors() {
        let recorder = MetricsRecorder::new();
        recorder.record_batch();
        recorder.record_batch();
        recorder.record_error();
        assert_eq!(recorder.snapshot(), (2, 1));
    }
}
