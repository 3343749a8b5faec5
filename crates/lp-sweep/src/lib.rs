//! `lp-sweep` — mutual-presence computation for a single lesson.
//!
//! # Pipeline
//!
//! ```text
//! raw pupil / tutor lists + window
//!   ① Normalize  — clip each (enter, leave) pair to the window, drop empties
//!   ② Events     — one Start and one End event per surviving interval
//!   ③ Sweep      — order events, track presence counters, sum the time
//!                  during which both counters are positive
//! ```
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`normalize`]  | `normalize`, `validate_pairs`                             |
//! | [`event`]      | `Delta`, `Event`, `build_events`, `extend_events`         |
//! | [`sweep`]      | `PresenceState`, `sweep`, `sweep_with`                    |
//! | [`observer`]   | `SweepObserver`, `NoopObserver`, `OverlapCollector`       |
//! | [`lesson`]     | `Lesson` record with `appearance` / `overlap_spans`       |
//!
//! # Quick-start
//!
//! ```rust
//! let total = lp_sweep::compute_overlap(
//!     1594692000, 1594695600,
//!     &[1594692033, 1594696347],
//!     &[1594692017, 1594692066, 1594692068, 1594696341],
//! )?;
//! assert_eq!(total, 3565);
//! # Ok::<(), lp_sweep::LpError>(())
//! ```

pub mod event;
pub mod lesson;
pub mod normalize;
pub mod observer;
pub mod sweep;


pub use lp_core::{Instant, InvalidInput, LpError, LpResult, Participant, TimeWindow};

pub use event::{Delta, Event, build_events, extend_events};
pub use lesson::Lesson;
pub use normalize::{normalize, validate_pairs};
pub use observer::{NoopObserver, OverlapCollector, SweepObserver};
pub use sweep::{PresenceState, sweep, sweep_with};

/// Total time within `[lesson_start, lesson_end]` during which both the pupil
/// and the tutor were present.
///
/// Fails with `InvalidInput` if `lesson_start > lesson_end` or either raw list
/// has odd length.  All checks run before any computation.
pub fn compute_overlap(
    lesson_start: Instant,
    lesson_end:   Instant,
    pupil_raw:    &[Instant],
    tutor_raw:    &[Instant],
) -> LpResult<u64> {
    compute_overlap_with(lesson_start, lesson_end, pupil_raw, tutor_raw, &mut NoopObserver)
}

/// Like [`compute_overlap`] but reports sweep progress to `observer`.
pub fn compute_overlap_with<O: SweepObserver>(
    lesson_start: Instant,
    lesson_end:   Instant,
    pupil_raw:    &[Instant],
    tutor_raw:    &[Instant],
    observer:     &mut O,
) -> LpResult<u64> {
    let window = TimeWindow::new(lesson_start, lesson_end)?;
    validate_pairs(Participant::Pupil, pupil_raw)?;
    validate_pairs(Participant::Tutor, tutor_raw)?;

    let pupil = normalize::clip_pairs(window, Participant::Pupil, pupil_raw);
    let tutor = normalize::clip_pairs(window, Participant::Tutor, tutor_raw);

    let mut events = Vec::with_capacity(2 * (pupil.len() + tutor.len()));
    extend_events(&mut events, Participant::Pupil, &pupil);
    extend_events(&mut events, Participant::Tutor, &tutor);

    let total = sweep_with(window, events, observer);
    tracing::debug!(
        %window,
        pupil_intervals = pupil.len(),
        tutor_intervals = tutor.len(),
        total,
        "computed lesson overlap"
    );
    Ok(total)
}
