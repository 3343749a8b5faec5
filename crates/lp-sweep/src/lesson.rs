//! Record-shaped entry point.
//!
//! A [`Lesson`] bundles the window and both raw presence lists the way
//! callers usually store them:
//!
//! ```json
//! {
//!   "lesson": [1594692000, 1594695600],
//!   "pupil":  [1594692033, 1594696347],
//!   "tutor":  [1594692017, 1594692066, 1594692068, 1594696341]
//! }
//! ```
//!
//! Deserialization requires the `serde` feature.  No validation happens at
//! construction; every method re-checks the window and list lengths.

use lp_core::{Instant, LpResult, TimeWindow};

use crate::{OverlapCollector, SweepObserver, compute_overlap_with};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lesson {
    /// `[start, end]` of the lesson.
    pub lesson: [Instant; 2],
    /// Raw pupil `(enter, leave)` pairs, flattened.
    pub pupil:  Vec<Instant>,
    /// Raw tutor `(enter, leave)` pairs, flattened.
    pub tutor:  Vec<Instant>,
}

impl Lesson {
    pub fn new(start: Instant, end: Instant, pupil: Vec<Instant>, tutor: Vec<Instant>) -> Self {
        Self { lesson: [start, end], pupil, tutor }
    }

    /// The validated lesson window.
    pub fn window(&self) -> LpResult<TimeWindow> {
        TimeWindow::new(self.lesson[0], self.lesson[1])
    }

    /// Total time both pupil and tutor were present during the lesson.
    pub fn appearance(&self) -> LpResult<u64> {
        self.appearance_with(&mut crate::NoopObserver)
    }

    /// Like [`appearance`][Self::appearance] but reports to `observer`.
    pub fn appearance_with<O: SweepObserver>(&self, observer: &mut O) -> LpResult<u64> {
        let [start, end] = self.lesson;
        compute_overlap_with(start, end, &self.pupil, &self.tutor, observer)
    }

    /// Maximal half-open spans during which both were present.
    pub fn overlap_spans(&self) -> LpResult<Vec<(Instant, Instant)>> {
        let mut collector = OverlapCollector::new();
        self.appearance_with(&mut collector)?;
        Ok(collector.into_spans())
    }
}
