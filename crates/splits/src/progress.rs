//! Segment lookup and progress metrics for a point in elapsed race time.
//!
//! Every function here is pure. An absent segment (before the start, after the
//! finish, or in a gap between splits) is `None` and propagates as "no data"
//! rather than an error.

use serde::Serialize;

use crate::models::Segment;

/// Lap and distance progress within the active segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LapProgress {
    /// 1-based, never zero and never above `total_laps`
    pub current_lap: u32,
    pub total_laps: u32,
    pub distance_covered_km: f64,
    pub total_distance_km: f64,
}

/// Returns the first segment whose inclusive `[start, end]` range contains `t`.
///
/// Overlapping segments resolve to the earliest one in sequence order, so a
/// boundary shared by two adjacent segments belongs to the first.
pub fn find_segment_at(segments: &[Segment], t: f64) -> Option<&Segment> {
    segments.iter().find(|s| s.contains(t))
}

/// Completion fraction of `segment` at time `t`, in `[0, 1]`.
///
/// `t` is clamped to the segment bounds first. Absent and zero-length
/// segments report zero.
pub fn segment_progress(segment: Option<&Segment>, t: f64) -> f64 {
    let Some(segment) = segment else {
        return 0.0;
    };
    let duration = segment.duration();
    if duration == 0.0 {
        return 0.0;
    }
    let clamped = t.max(segment.start).min(segment.end);
    (clamped - segment.start) / duration
}

/// Derives the current lap and distance covered from segment progress.
pub fn lap_and_distance(segment: Option<&Segment>, t: f64) -> Option<LapProgress> {
    let segment = segment?;
    let progress = segment_progress(Some(segment), t);
    let total_laps = segment.lap_count();
    let total_distance_km = segment.distance_km();

    let lap_float = f64::from(total_laps) * progress;
    let current_lap = if lap_float <= 0.0 {
        1
    } else {
        // lap_float is bounded by total_laps, so the cast cannot truncate
        (lap_float.ceil() as u32).min(total_laps)
    };

    Some(LapProgress {
        current_lap,
        total_laps,
        distance_covered_km: total_distance_km * progress,
        total_distance_km,
    })
}

/// Seconds left until the athlete's final segment ends, never negative.
pub fn remaining(segments: &[Segment], t: f64) -> f64 {
    segments
        .last()
        .map_or(0.0, |last| (last.end - t).max(0.0))
}

/// Fraction of the whole race clock elapsed at `t`, capped at 1.
pub fn overall_progress(t: f64, max_time: f64) -> f64 {
    if max_time <= 0.0 || t <= 0.0 {
        return 0.0;
    }
    (t / max_time).min(1.0)
}
