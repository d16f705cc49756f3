use std::fmt;
use std::io;

/// One `label=value` pair produced by a tick. Ephemeral; samples are not
/// retained after being written.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub label: &'static str,
    pub value: f64,
}

impl Sample {
    pub fn new(label: &'static str, value: f64) -> Self {
        Self { label, value }
    }
}

impl fmt::Display for Sample {
    /// The wire format. `f64` Display is the shortest round-trip decimal,
    /// so integral constants render without a fractional part (`10`, `0`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.label, self.value)
    }
}

/// Common error type for the emit loop.
#[derive(thiserror::Error, Debug)]
pub enum EmitError {
    #[error("writing sample batch: {0}")]
    Sink(#[from] io::Error),
}

pub type EmitResult<T> = Result<T, EmitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_renders_wire_format() {
        assert_eq!(Sample::new("yconst-1", 10.0).to_string(), "yconst-1=10");
        assert_eq!(Sample::new("yconst-4", 0.0).to_string(), "yconst-4=0");
        assert_eq!(Sample::new("line1", -2.5).to_string(), "line1=-2.5");
    }

    #[test]
    fn emit_error_wraps_io_error() {
        let err = EmitError::from(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        assert!(err.to_string().contains("pipe closed"));
    }
}
