//! Interval normalizer: raw enter/leave lists → clipped, non-degenerate intervals.
//!
//! A raw list is a flat sequence `[enter₀, leave₀, enter₁, leave₁, …]`.  Pairs
//! are taken in input order; they are neither sorted nor checked for
//! `enter <= leave`.  Each pair is clipped to the lesson window and kept only
//! if the clipped span has positive length.
//!
//! Overlapping or nested pairs of the same participant are *not* merged.
//! Each survivor becomes its own interval and the sweep's presence counters
//! compose them.

use lp_core::{Instant, InvalidInput, LpResult, NormalizedInterval, Participant, TimeWindow};

/// Reject a raw list that cannot be read as `(enter, leave)` pairs.
pub fn validate_pairs(participant: Participant, raw: &[Instant]) -> LpResult<()> {
    if raw.len() % 2 != 0 {
        return Err(InvalidInput::OddLength { participant, len: raw.len() }.into());
    }
    Ok(())
}

/// Clip `participant`'s raw pairs to `window`, dropping empty results.
///
/// Fails with `InvalidInput` if `raw` has odd length.  The window itself is
/// already known to satisfy `start <= end` (see [`TimeWindow::new`]).
pub fn normalize(
    window:      TimeWindow,
    participant: Participant,
    raw:         &[Instant],
) -> LpResult<Vec<NormalizedInterval>> {
    validate_pairs(participant, raw)?;
    Ok(clip_pairs(window, participant, raw))
}

/// The clipping half of [`normalize`], for callers that have already run
/// [`validate_pairs`] on `raw`.
pub(crate) fn clip_pairs(
    window:      TimeWindow,
    participant: Participant,
    raw:         &[Instant],
) -> Vec<NormalizedInterval> {
    debug_assert!(raw.len() % 2 == 0, "clip_pairs requires validated input");
    let intervals: Vec<NormalizedInterval> = raw
        .chunks_exact(2)
        .filter_map(|pair| window.clip(pair[0], pair[1]))
        .collect();

    tracing::trace!(
        %participant,
        raw_pairs = raw.len() / 2,
        kept = intervals.len(),
        "normalized presence intervals"
    );
    intervals
}
