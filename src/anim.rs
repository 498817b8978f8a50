//! Frame-driven animation primitives.
//!
//! Both primitives are pure functions of the frame counter: sampling the same
//! frame twice yields the same value, which is what lets a host evaluate
//! frames in any order (or in parallel) without coordination.

use crate::core::Fps;

/// Behavior outside an interpolation input range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    /// Hold the endpoint value.
    Clamp,
    /// Continue the line past the endpoint.
    Extend,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Extrapolate {
    pub left: Edge,
    pub right: Edge,
}

impl Extrapolate {
    pub const fn clamp() -> Self {
        Self {
            left: Edge::Clamp,
            right: Edge::Clamp,
        }
    }

    pub const fn extend() -> Self {
        Self {
            left: Edge::Extend,
            right: Edge::Extend,
        }
    }
}

/// Maps `frame` from `input` to `output` linearly.
///
/// Total over all inputs: a degenerate input range (end <= start) yields the
/// output start rather than dividing by zero.
pub fn interpolate(frame: f64, input: [f64; 2], output: [f64; 2], extrapolate: Extrapolate) -> f64 {
    let [i0, i1] = input;
    let [o0, o1] = output;
    if !(i1 > i0) {
        return o0;
    }

    let mut t = (frame - i0) / (i1 - i0);
    if t < 0.0 && extrapolate.left == Edge::Clamp {
        t = 0.0;
    }
    if t > 1.0 && extrapolate.right == Edge::Clamp {
        t = 1.0;
    }
    o0 + (o1 - o0) * t
}

/// A spring ease between two values over a bounded number of frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    pub from: f64,
    pub to: f64,
    pub duration_frames: u64,
}

// Shape constant for the critically-damped response. The raw step
// 1 - e^(-k)(1 + k) at k=8 is within 0.4% of settled; the remainder is
// normalized away so the curve lands on `to` exactly at the duration.
const SPRING_SHAPE: f64 = 8.0;

/// Samples a critically-damped spring step response.
///
/// `frame` is the elapsed local frame count since the spring started; negative
/// elapsed frames hold `from`, and frames at or past the duration hold `to`
/// (terminal-state clamping). The curve is a monotonic ease-out with no
/// overshoot: value(0) = from, value(duration) = to.
pub fn spring(frame: f64, fps: Fps, params: Spring) -> f64 {
    let Spring {
        from,
        to,
        duration_frames,
    } = params;
    if duration_frames == 0 {
        return to;
    }

    let dur_secs = fps.frames_to_secs(duration_frames as f64);
    let t = fps.frames_to_secs(frame.max(0.0)).min(dur_secs);

    let step = |x: f64| 1.0 - (-x).exp() * (1.0 + x);
    let progress = step(SPRING_SHAPE * (t / dur_secs)) / step(SPRING_SHAPE);
    from + (to - from) * progress
}
