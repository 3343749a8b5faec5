//! Sweep engine: ordered presence events → total mutual presence.
//!
//! # Algorithm
//!
//! ```text
//! sort events by (time, delta, participant)     End before Start at equal times
//! pupil = tutor = total = 0; last = window.start
//! for e in events:
//!     if pupil > 0 && tutor > 0: total += e.time - last
//!     counter[e.participant] += e.delta
//!     last = e.time
//! ```
//!
//! Counters rather than booleans let several open intervals of the same
//! participant stack: presence only lapses once all of them have closed.
//!
//! Spans are measured with `abs_diff` into a `u64` total, which holds the
//! length of any window over `i64` instants.

use lp_core::{Instant, Participant, TimeWindow};

use crate::{Delta, Event, NoopObserver, SweepObserver};

// ── PresenceState ─────────────────────────────────────────────────────────────

/// Running accumulator owned by a single sweep.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PresenceState {
    /// Open pupil intervals at `last_time`.
    pub pupil_count: u32,
    /// Open tutor intervals at `last_time`.
    pub tutor_count: u32,
    /// Time of the most recently applied event (the window start initially).
    pub last_time:   Instant,
    /// Mutual presence credited so far.
    pub total:       u64,
}

impl PresenceState {
    pub fn new(window: TimeWindow) -> Self {
        Self { pupil_count: 0, tutor_count: 0, last_time: window.start(), total: 0 }
    }

    /// Number of open intervals for `participant`.
    #[inline]
    pub fn count(&self, participant: Participant) -> u32 {
        match participant {
            Participant::Pupil => self.pupil_count,
            Participant::Tutor => self.tutor_count,
        }
    }

    #[inline]
    pub fn both_present(&self) -> bool {
        self.pupil_count > 0 && self.tutor_count > 0
    }

    /// Apply one event.  Returns the span `[last_time, event.time)` if it was
    /// credited as mutual presence and is non-empty.
    pub fn apply(&mut self, event: &Event) -> Option<(Instant, Instant)> {
        let credited = if self.both_present() && event.time > self.last_time {
            self.total += event.time.abs_diff(self.last_time);
            Some((self.last_time, event.time))
        } else {
            None
        };

        let counter = match event.participant {
            Participant::Pupil => &mut self.pupil_count,
            Participant::Tutor => &mut self.tutor_count,
        };
        match event.delta {
            Delta::Start => *counter += 1,
            Delta::End => {
                debug_assert!(*counter > 0, "{} counter underflow at {}", event.participant, event.time);
                *counter -= 1;
            }
        }

        self.last_time = event.time;
        credited
    }
}

// ── Sweep ─────────────────────────────────────────────────────────────────────

/// Total time within `window` during which both participants are present.
///
/// `events` must come from [`build_events`][crate::build_events] over
/// intervals normalized against the same `window`.
pub fn sweep(window: TimeWindow, events: Vec<Event>) -> u64 {
    sweep_with(window, events, &mut NoopObserver)
}

/// Like [`sweep`] but reports progress to `observer`.
pub fn sweep_with<O: SweepObserver>(window: TimeWindow, mut events: Vec<Event>, observer: &mut O) -> u64 {
    // Equal events are indistinguishable, so an unstable sort is enough.
    events.sort_unstable();
    observer.on_sweep_start(window, events.len());

    let mut state = PresenceState::new(window);
    for event in &events {
        if let Some((from, to)) = state.apply(event) {
            tracing::trace!(from, to, "mutual presence");
            observer.on_overlap(from, to);
        }
        observer.on_event(event, &state);
    }

    debug_assert_eq!((state.pupil_count, state.tutor_count), (0, 0));
    observer.on_sweep_end(state.total);
    state.total
}
