//! Lesson time model.
//!
//! # Design
//!
//! Time is an integer [`Instant`] in whatever unit the caller records
//! (typically Unix seconds).  No unit conversion happens anywhere in the
//! workspace, so all overlap arithmetic is exact.
//!
//! A [`TimeWindow`] is the lesson: a closed range `[start, end]` with
//! `start <= end`.  Raw presence pairs are clipped against it to produce
//! [`NormalizedInterval`]s, which are guaranteed to have positive length.

use std::fmt;

use crate::{InvalidInput, LpError, LpResult};

/// An integer time instant (e.g. seconds since the Unix epoch).
pub type Instant = i64;

// ── TimeWindow ───────────────────────────────────────────────────────────────

/// The lesson boundaries.
///
/// Fields are private so that the `start <= end` invariant holds for every
/// value in circulation; build one with [`TimeWindow::new`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "(Instant, Instant)", into = "(Instant, Instant)")
)]
pub struct TimeWindow {
    start: Instant,
    end:   Instant,
}

impl TimeWindow {
    /// Create a window, rejecting `start > end`.
    ///
    /// A zero-length window (`start == end`) is valid; every interval clips
    /// to nothing against it.
    pub fn new(start: Instant, end: Instant) -> LpResult<Self> {
        if start > end {
            return Err(InvalidInput::InvertedWindow { start, end }.into());
        }
        Ok(Self { start, end })
    }

    #[inline]
    pub fn start(&self) -> Instant {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Instant {
        self.end
    }

    /// Length of the lesson, `end - start`.  Upper bound for any overlap.
    ///
    /// Unsigned so that windows spanning more than `i64::MAX` still fit.
    #[inline]
    pub fn duration(&self) -> u64 {
        self.end.abs_diff(self.start)
    }

    /// Clip a raw `(enter, leave)` pair to this window.
    ///
    /// Returns `None` when the clipped span is empty: the pair lies outside
    /// the window, is inverted (`enter > leave`), or only touches a boundary.
    #[inline]
    pub fn clip(&self, enter: Instant, leave: Instant) -> Option<NormalizedInterval> {
        let start = enter.max(self.start);
        let end = leave.min(self.end);
        (start < end).then_some(NormalizedInterval { start, end })
    }
}

impl TryFrom<(Instant, Instant)> for TimeWindow {
    type Error = LpError;

    fn try_from((start, end): (Instant, Instant)) -> LpResult<Self> {
        TimeWindow::new(start, end)
    }
}

impl From<TimeWindow> for (Instant, Instant) {
    fn from(w: TimeWindow) -> Self {
        (w.start, w.end)
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

// ── NormalizedInterval ───────────────────────────────────────────────────────

/// A presence interval clipped to a lesson window.
///
/// Invariant: `start < end`.  Only [`TimeWindow::clip`] constructs these, so
/// degenerate intervals are never materialized.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NormalizedInterval {
    start: Instant,
    end:   Instant,
}

impl NormalizedInterval {
    #[inline]
    pub fn start(&self) -> Instant {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Instant {
        self.end
    }

    /// Always positive.
    #[inline]
    pub fn duration(&self) -> u64 {
        self.end.abs_diff(self.start)
    }
}

impl fmt::Display for NormalizedInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}
