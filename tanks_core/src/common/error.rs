use std::io;

use thiserror::Error;

/// Errors raised while advancing a [`Tank`](super::tank::Tank)
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum TankError {
    /// Elapsed time has to be finite and not negative
    #[error("invalid elapsed time: {0}s")]
    InvalidElapsedTime(f64),
    /// Elapsed time is too long to integrate in one call
    #[error("elapsed time of {elapsed_time}s needs {substeps} sub-steps, over the limit")]
    TooManySubsteps { elapsed_time: f64, substeps: f64 },
}

/// Errors raised while loading a [`TankTuning`](super::tuning::TankTuning)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Io(io::Error),
    #[error(transparent)]
    Toml(toml::de::Error),
    #[error("invalid value for `{field}`: {value}")]
    Invalid { field: &'static str, value: f64 },
}
