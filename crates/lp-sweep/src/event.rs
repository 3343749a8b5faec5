//! Presence-change events and their sweep ordering.
//!
//! # Ordering
//!
//! Events sort by `(time, delta, participant)`, ascending, with
//! [`Delta::End`] before [`Delta::Start`].  At a shared instant every ending
//! presence is retired before any new presence is counted, so an interval
//! ending at `t` and another starting at `t` never overlap at `t`.

use std::cmp::Ordering;

use lp_core::{Instant, NormalizedInterval, Participant};

// ── Delta ─────────────────────────────────────────────────────────────────────

/// Direction of a presence change.  `End < Start`, matching `-1 < +1`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Delta {
    /// Presence ends (`-1`).
    End,
    /// Presence begins (`+1`).
    Start,
}

impl Delta {
    /// Signed counter adjustment.
    #[inline]
    pub fn value(self) -> i32 {
        match self {
            Delta::End => -1,
            Delta::Start => 1,
        }
    }
}

impl Ord for Delta {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value().cmp(&other.value())
    }
}

impl PartialOrd for Delta {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ── Event ─────────────────────────────────────────────────────────────────────

/// One presence change of one participant.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    pub time:        Instant,
    pub delta:       Delta,
    pub participant: Participant,
}

impl Ord for Event {
    fn cmp(&self, other: &Self) -> Ordering {
        self.time
            .cmp(&other.time)
            .then_with(|| self.delta.cmp(&other.delta))
            .then_with(|| self.participant.cmp(&other.participant))
    }
}

impl PartialOrd for Event {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Emit a `Start` event at each interval's start and an `End` event at its end.
pub fn build_events(participant: Participant, intervals: &[NormalizedInterval]) -> Vec<Event> {
    let mut events = Vec::with_capacity(intervals.len() * 2);
    extend_events(&mut events, participant, intervals);
    events
}

/// Like [`build_events`] but appends into an existing buffer, so both
/// participants' events can share one allocation.
pub fn extend_events(
    events:      &mut Vec<Event>,
    participant: Participant,
    intervals:   &[NormalizedInterval],
) {
    events.reserve(intervals.len() * 2);
    for iv in intervals {
        events.push(Event { time: iv.start(), delta: Delta::Start, participant });
        events.push(Event { time: iv.end(), delta: Delta::End, participant });
    }
}
