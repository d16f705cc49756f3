use std::io::Write;
use std::time::Duration;

use crate::emit::clock::TickClock;
use crate::prelude::EmitResult;
use crate::signal::bank::ChannelBank;
use crate::telemetry::log::LogManager;
use crate::telemetry::metrics::MetricsRecorder;

/// Cadence the downstream grapher expects.
pub const TICK_PERIOD: Duration = Duration::from_millis(200);

const COUNTER_START: f64 = 3.0;
const COUNTER_STEP: f64 = 0.001;

/// Drives a channel bank at a fixed cadence, writing one batch of
/// `label=value` lines per tick and flushing so a piped consumer sees each
/// batch immediately.
pub struct Emitter<C, W> {
    bank: ChannelBank,
    clock: C,
    sink: W,
    counter: f64,
    period: Duration,
    logger: LogManager,
    metrics: MetricsRecorder,
}

impl<C: TickClock, W: Write> Emitter<C, W> {
    pub fn new(bank: ChannelBank, clock: C, sink: W) -> Self {
        Self {
            bank,
            clock,
            sink,
            counter: COUNTER_START,
            period: TICK_PERIOD,
            logger: LogManager::new(),
            metrics: MetricsRecorder::new(),
        }
    }

    /// Counter position the next batch will be evaluated at. At tick `n`
    /// this is `3.0 + 0.001 * n`.
    pub fn counter(&self) -> f64 {
        self.counter
    }

    pub fn metrics(&self) -> &MetricsRecorder {
        &self.metrics
    }

    /// One iteration: pause a period, evaluate the bank at the current
    /// counter, write and flush the batch, then advance the counter.
    pub fn tick(&mut self) -> EmitResult<()> {
        self.clock.pause(self.period);
        match self.write_batch() {
            Ok(()) => {
                self.metrics.record_batch();
                self.counter += COUNTER_STEP;
                Ok(())
            }
            Err(err) => {
                self.metrics.record_error();
                self.logger
                    .record(&format!("sink failure, stopping feed: {}", err));
                Err(err)
            }
        }
    }

    fn write_batch(&mut self) -> EmitResult<()> {
        for sample in self.bank.sample(self.counter) {
            writeln!(self.sink, "{}", sample)?;
        }
        self.sink.flush()?;
        Ok(())
    }

    /// Runs forever under normal operation; returns only when the sink
    /// fails. The counter is never reset, so the sequence is not
    /// restartable.
    pub fn run(&mut self) -> EmitResult<()> {
        self.logger.record("emitter running");
        loop {
            self.tick()?;
        }
    }

    /// Bounded variant for tests and scripted captures.
    pub fn run_ticks(&mut self, ticks: usize) -> EmitResult<()> {
        for _ in 0..ticks {
            self.tick()?;
        }
        Ok(())
    }
}
