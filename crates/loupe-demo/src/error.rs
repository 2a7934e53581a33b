//! Error type for the demo layer.
//!
//! The simulation cores never fail (misses are `Option`/`bool` results and
//! cursor overruns are `false` returns); errors only exist at the input
//! boundary where a scenario is selected by name.

use thiserror::Error;

/// Errors from the demo layer.
#[derive(Debug, Error)]
pub enum DemoError {
    /// A scenario name did not match any known scenario of its family.
    #[error("unknown {family} scenario '{name}' (expected one of: {expected})")]
    UnknownScenario {
        family: &'static str,
        name: String,
        expected: &'static str,
    },
}

/// Result type alias for demo operations.
pub type DemoResult<T> = Result<T, DemoError>;
