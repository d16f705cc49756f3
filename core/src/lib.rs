//! Signal model and emit loop for the sigfeed demo data source.
//!
//! The crate evaluates a fixed bank of synthetic channels against a single
//! monotonic counter and writes the result to a byte sink as `label=value`
//! lines, one batch per 200 ms tick. The binary crate wires the standard
//! bank to stdout; everything here is sink-agnostic so tests can capture
//! the stream.

pub mod emit;
pub mod prelude;
pub mod signal;
pub mod telemetry;

pub use prelude::{EmitError, EmitResult, Sample};
