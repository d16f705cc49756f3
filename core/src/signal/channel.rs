use crate::prelude::Sample;

/// Waveform shape backing a channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// `sin((counter * time_scale + phase_offset) / period) * amplitude`.
    Sine {
        time_scale: f64,
        phase_offset: f64,
        period: f64,
        amplitude: f64,
    },
    /// Fixed value, independent of the counter.
    Constant(f64),
}

/// A fixed label plus the shape that produces its value each tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Channel {
    label: &'static str,
    shape: Shape,
}

impl Channel {
    pub const fn sine(
        label: &'static str,
        time_scale: f64,
        phase_offset: f64,
        period: f64,
        amplitude: f64,
    ) -> Self {
        Self {
            label,
            shape: Shape::Sine {
                time_scale,
                phase_offset,
                period,
                amplitude,
            },
        }
    }

    pub const fn constant(label: &'static str, value: f64) -> Self {
        Self {
            label,
            shape: Shape::Constant(value),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Evaluates the channel at the given counter position. Pure.
    pub fn value(&self, counter: f64) -> f64 {
        match self.shape {
            Shape::Sine {
                time_scale,
                phase_offset,
                period,
                amplitude,
            } => ((counter * time_scale + phase_offset) / period).sin() * amplitude,
            Shape::Constant(value) => value,
        }
    }

    pub fn sample(&self, counter: f64) -> Sample {
        Sample::new(self.label, self.value(counter))
    }
}
