//! Error types for slot-engine operations.

use thiserror::Error;

/// Errors that can occur while constructing scheduling inputs.
///
/// The query pipeline itself is a total function over validated values;
/// construction is the only fail-fast point.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    /// A time range violated `0 <= start <= end <= 1440`.
    #[error("invalid time range [{start}, {end}): minutes must satisfy 0 <= start <= end <= 1440")]
    InvalidRange { start: u32, end: u32 },
}

/// Convenience alias used throughout slot-engine.
pub type Result<T> = std::result::Result<T, SlotError>;
