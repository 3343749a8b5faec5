//! Workspace error type.
//!
//! Only structural contract violations are errors.  Individual enter/leave
//! pairs that are inverted or fall outside the lesson window are dropped by
//! the normalizer and never surface here.

use thiserror::Error;

use crate::{Instant, Participant};

/// Why a set of inputs was rejected before any computation started.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("{participant} interval list has odd length {len}: expected (enter, leave) pairs")]
    OddLength { participant: Participant, len: usize },

    #[error("lesson window is inverted: start {start} > end {end}")]
    InvertedWindow { start: Instant, end: Instant },
}

/// The top-level error type for the `lp-*` crates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LpError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}

/// Shorthand result type for all `lp-*` crates.
pub type LpResult<T> = Result<T, LpError>;
