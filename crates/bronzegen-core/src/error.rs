use thiserror::Error;

/// Core error type shared across bronzegen crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A timestamp did not match `YYYY-MM-DD HH:MM:SS`.
    #[error("invalid timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },
    /// The timestamp window ends before it starts.
    #[error("timestamp window start {start} is after end {end}")]
    InvalidWindow { start: String, end: String },
}

/// Convenience alias for results returned by bronzegen crates.
pub type Result<T> = std::result::Result<T, Error>;
