//! lessons — runs the recorded reference lessons through the overlap pipeline.
//!
//! Each case pairs a lesson record with its known mutual-presence total.  The
//! binary prints the computed total, the number of distinct overlap spans,
//! and fails if any total disagrees with the recorded answer.
//!
//! Set `RUST_LOG=lp_sweep=trace` to see every credited span.

use std::time::Instant;

use anyhow::{Result, bail};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use lp_core::TimeWindow;
use lp_sweep::{Lesson, OverlapCollector};

// ── Cases ─────────────────────────────────────────────────────────────────────

const CASES_JSON: &str = r#"[
  {
    "intervals": {
      "lesson": [1594663200, 1594666800],
      "pupil":  [1594663340, 1594663389, 1594663390, 1594663395, 1594663396, 1594666472],
      "tutor":  [1594663290, 1594663430, 1594663443, 1594666473]
    },
    "answer": 3117
  },
  {
    "intervals": {
      "lesson": [1594702800, 1594706400],
      "pupil":  [1594702789, 1594704500, 1594702807, 1594704542, 1594704512, 1594704513,
                 1594704564, 1594705150, 1594704581, 1594704582, 1594704734, 1594705009,
                 1594705095, 1594705096, 1594705106, 1594706480, 1594705158, 1594705773,
                 1594705849, 1594706480, 1594706500, 1594706875, 1594706502, 1594706503,
                 1594706524, 1594706524, 1594706579, 1594706641],
      "tutor":  [1594700035, 1594700364, 1594702749, 1594705148, 1594705149, 1594706463]
    },
    "answer": 3577
  },
  {
    "intervals": {
      "lesson": [1594692000, 1594695600],
      "pupil":  [1594692033, 1594696347],
      "tutor":  [1594692017, 1594692066, 1594692068, 1594696341]
    },
    "answer": 3565
  }
]"#;

#[derive(Deserialize)]
struct Case {
    intervals: Lesson,
    answer:    u64,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cases: Vec<Case> = serde_json::from_str(CASES_JSON)?;
    println!("=== lessons — pupil/tutor mutual presence ===");
    println!();
    println!("{:<6} {:<26} {:>8} {:>8} {:>6}", "Case", "Window", "Total", "Answer", "Spans");
    println!("{}", "-".repeat(58));

    let t0 = Instant::now();
    let mut failures = 0usize;
    for (i, case) in cases.iter().enumerate() {
        let window: TimeWindow = case.intervals.window()?;
        let mut collector = OverlapCollector::new();
        let total = case.intervals.appearance_with(&mut collector)?;

        let mark = if total == case.answer { "" } else { "  MISMATCH" };
        println!(
            "{:<6} {:<26} {:>8} {:>8} {:>6}{mark}",
            i,
            window.to_string(),
            total,
            case.answer,
            collector.spans().len(),
        );
        if total != case.answer {
            tracing::error!(case = i, total, answer = case.answer, "overlap total mismatch");
            failures += 1;
        }
    }

    println!();
    tracing::info!(cases = cases.len(), elapsed_us = t0.elapsed().as_micros() as u64, "done");
    if failures > 0 {
        bail!("{failures} of {} cases disagreed with the recorded answer", cases.len());
    }
    Ok(())
}
