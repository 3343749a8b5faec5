//! Sweep observer trait for tracing and span collection.

use lp_core::{Instant, TimeWindow};

use crate::{Event, PresenceState};

/// Callbacks invoked by [`sweep_with`][crate::sweep_with] as it walks the
/// ordered event stream.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — span printer
///
/// ```rust,ignore
/// struct SpanPrinter;
///
/// impl SweepObserver for SpanPrinter {
///     fn on_overlap(&mut self, from: Instant, to: Instant) {
///         println!("both present {from}..{to}");
///     }
/// }
/// ```
pub trait SweepObserver {
    /// Called once before the first event, after sorting.
    fn on_sweep_start(&mut self, _window: TimeWindow, _event_count: usize) {}

    /// Called after `event` has been applied to `state`.
    fn on_event(&mut self, _event: &Event, _state: &PresenceState) {}

    /// Called for each non-empty span `[from, to)` credited as mutual presence.
    fn on_overlap(&mut self, _from: Instant, _to: Instant) {}

    /// Called once after the last event with the final total.
    fn on_sweep_end(&mut self, _total: u64) {}
}

/// A [`SweepObserver`] that does nothing.
pub struct NoopObserver;

impl SweepObserver for NoopObserver {}

/// Records every credited span, merging spans that touch end-to-start.
///
/// The resulting spans are sorted, non-empty, and pairwise separated by a
/// gap; their lengths sum to the sweep total.
#[derive(Default, Debug, Clone)]
pub struct OverlapCollector {
    spans: Vec<(Instant, Instant)>,
}

impl OverlapCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutual-presence spans as half-open `(from, to)` pairs.
    pub fn spans(&self) -> &[(Instant, Instant)] {
        &self.spans
    }

    pub fn into_spans(self) -> Vec<(Instant, Instant)> {
        self.spans
    }

    /// Sum of span lengths.
    pub fn total(&self) -> u64 {
        self.spans.iter().map(|(from, to)| to.abs_diff(*from)).sum()
    }
}

impl SweepObserver for OverlapCollector {
    fn on_sweep_start(&mut self, _window: TimeWindow, _event_count: usize) {
        self.spans.clear();
    }

    fn on_overlap(&mut self, from: Instant, to: Instant) {
        match self.spans.last_mut() {
            Some(last) if last.1 == from => last.1 = to,
            _ => self.spans.push((from, to)),
        }
    }
}
