//! Movement domain: normalised jump curves.
//!
//! A jump curve maps the elapsed fraction of a jump (0..=1) to the fraction of
//! the jump height reached at that moment. The vertical motion model turns it
//! into per-tick velocity by differencing consecutive samples.

use bevy::math::curve::{Curve, EaseFunction};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// A single control point of a keyframed curve.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, Reflect)]
pub struct Keyframe {
    pub time: f32,
    pub value: f32,
}

impl Keyframe {
    pub fn new(time: f32, value: f32) -> Self {
        Self { time, value }
    }
}

/// Named easing shapes for a jump rise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Reflect)]
pub enum JumpEase {
    QuadraticOut,
    CubicOut,
    SineOut,
    CircularOut,
}

impl JumpEase {
    fn ease_function(self) -> EaseFunction {
        match self {
            JumpEase::QuadraticOut => EaseFunction::QuadraticOut,
            JumpEase::CubicOut => EaseFunction::CubicOut,
            JumpEase::SineOut => EaseFunction::SineOut,
            JumpEase::CircularOut => EaseFunction::CircularOut,
        }
    }
}

/// Time-fraction to height-fraction sample function over [0, 1].
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize, Reflect)]
pub enum JumpCurve {
    /// Constant rise: `f(t) = t`.
    #[default]
    Linear,
    /// One of Bevy's easing functions.
    Eased(JumpEase),
    /// Piecewise linear through the keyframes, flat outside their range.
    /// Keyframes must be sorted by time; [`JumpCurve::keyframes`] sorts them.
    Keyframes(Vec<Keyframe>),
}

impl JumpCurve {
    /// Build a keyframed curve, sorting the points by time.
    pub fn keyframes(mut points: Vec<Keyframe>) -> Self {
        points.sort_by(|a, b| a.time.total_cmp(&b.time));
        JumpCurve::Keyframes(points)
    }

    /// Sample the curve. `t` is clamped to [0, 1].
    pub fn sample(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            JumpCurve::Linear => t,
            JumpCurve::Eased(ease) => ease.ease_function().sample_clamped(t),
            JumpCurve::Keyframes(points) => sample_keyframes(points, t),
        }
    }
}

fn sample_keyframes(points: &[Keyframe], t: f32) -> f32 {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return 0.0;
    };

    if t <= first.time {
        return first.value;
    }
    if t >= last.time {
        return last.value;
    }

    // First keyframe strictly after t; t is inside the range so it exists and
    // has a predecessor.
    let upper = points.partition_point(|k| k.time <= t);
    let a = points[upper - 1];
    let b = points[upper];
    let span = b.time - a.time;
    if span <= f32::EPSILON {
        return b.value;
    }
    a.value + (b.value - a.value) * ((t - a.time) / span)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn linear_curve_is_identity_on_domain() {
        let curve = JumpCurve::Linear;
        assert!(approx(curve.sample(0.0), 0.0));
        assert!(approx(curve.sample(0.25), 0.25));
        assert!(approx(curve.sample(1.0), 1.0));
    }

    #[test]
    fn samples_outside_domain_are_clamped() {
        let curve = JumpCurve::Linear;
        assert!(approx(curve.sample(-0.5), 0.0));
        assert!(approx(curve.sample(2.0), 1.0));
    }

    #[test]
    fn eased_curve_hits_endpoints_and_rises_early() {
        let curve = JumpCurve::Eased(JumpEase::QuadraticOut);
        assert!(approx(curve.sample(0.0), 0.0));
        assert!(approx(curve.sample(1.0), 1.0));
        // Ease-out spends more of the rise in the first half
        assert!(curve.sample(0.5) > 0.5);
    }

    #[test]
    fn keyframes_interpolate_between_points() {
        let curve = JumpCurve::keyframes(vec![
            Keyframe::new(1.0, 1.0),
            Keyframe::new(0.0, 0.0),
            Keyframe::new(0.5, 0.8),
        ]);
        assert!(approx(curve.sample(0.25), 0.4));
        assert!(approx(curve.sample(0.5), 0.8));
        assert!(approx(curve.sample(0.75), 0.9));
    }

    #[test]
    fn keyframes_hold_end_values() {
        let curve = JumpCurve::keyframes(vec![Keyframe::new(0.2, 0.1), Keyframe::new(0.8, 0.9)]);
        assert!(approx(curve.sample(0.0), 0.1));
        assert!(approx(curve.sample(1.0), 0.9));
    }

    #[test]
    fn empty_keyframes_sample_zero() {
        let curve = JumpCurve::Keyframes(Vec::new());
        assert_eq!(curve.sample(0.5), 0.0);
    }
}
