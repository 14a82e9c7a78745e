//! Reveal emphasis curve.
//!
//! Scale keyframes `0.9 -> 1.12 -> 1.0` with the peak at 55% of the run,
//! eased out over the whole animation.

/// `(offset, scale)` pairs, offsets ascending from 0 to 1.
const KEYFRAMES: [(f32, f32); 3] = [(0.0, 0.9), (0.55, 1.12), (1.0, 1.0)];

/// Display scale `elapsed_ms` into a pulse lasting `duration_ms`.
///
/// Outside the animation the scale is 1.0.
pub fn pulse_scale(elapsed_ms: u64, duration_ms: u64) -> f32 {
    if duration_ms == 0 || elapsed_ms >= duration_ms {
        return 1.0;
    }

    let t = ease_out(elapsed_ms as f32 / duration_ms as f32);
    for pair in KEYFRAMES.windows(2) {
        let (o0, s0) = pair[0];
        let (o1, s1) = pair[1];
        if t <= o1 {
            let local = (t - o0) / (o1 - o0);
            return s0 + (s1 - s0) * local;
        }
    }
    1.0
}

fn ease_out(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}
