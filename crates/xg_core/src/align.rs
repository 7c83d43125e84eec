//! Temporal alignment of a shot timestamp to the tracking-frame sequence.

/// Index of the frame timestamp closest to `shot_ts`.
///
/// Single linear scan; ties resolve to the lowest index. `frame_times` must
/// be non-empty; the match processor guarantees this by skipping matches
/// with zero frames before any shot is aligned.
pub fn nearest_frame_index(frame_times: &[f64], shot_ts: f64) -> usize {
    debug_assert!(!frame_times.is_empty(), "alignment requires at least one frame");

    let mut best_idx = 0;
    let mut best_diff = f64::INFINITY;
    for (idx, &ts) in frame_times.iter().enumerate() {
        let diff = (ts - shot_ts).abs();
        if diff < best_diff {
            best_idx = idx;
            best_diff = diff;
        }
    }
    best_idx
}
