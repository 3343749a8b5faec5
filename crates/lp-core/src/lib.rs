//! `lp-core` — foundational types for the `lesson_presence` workspace.
//!
//! This crate is a dependency of every other `lp-*` crate.  It has no `lp-*`
//! dependencies and a single external one (`thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module            | Contents                                            |
//! |-------------------|-----------------------------------------------------|
//! | [`time`]          | `Instant`, `TimeWindow`, `NormalizedInterval`       |
//! | [`participant`]   | `Participant` enum                                  |
//! | [`error`]         | `LpError`, `InvalidInput`, `LpResult`               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod participant;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{InvalidInput, LpError, LpResult};
pub use participant::Participant;
pub use time::{Instant, NormalizedInterval, TimeWindow};
