// SPDX-License-Identifier: MPL-2.0
//! Cosine ease-in-out used by every camera phase.

use std::f64::consts::PI;
use std::time::Duration;

/// Completion fraction of a phase: elapsed time over duration, clamped to
/// `[0, 1]`. A zero duration is complete immediately.
#[must_use]
pub fn progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

/// Interpolation weight `w(p) = 0.5 - cos(p * PI) / 2`.
///
/// `w(0) == 0.0` and `w(1) == 1.0` exactly; input outside `[0, 1]` is clamped.
#[must_use]
pub fn ease_in_out(p: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    0.5 - (p * PI).cos() / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn boundaries_are_exact() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
    }

    #[test]
    fn midpoint_is_half() {
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn curve_is_symmetric() {
        for i in 0..=20 {
            let p = f64::from(i) / 20.0;
            assert!((ease_in_out(p) + ease_in_out(1.0 - p) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn progress_clamps_past_duration() {
        let d = Duration::from_millis(700);
        assert_eq!(progress(Duration::ZERO, d), 0.0);
        assert_eq!(progress(Duration::from_millis(350), d), 0.5);
        assert_eq!(progress(Duration::from_millis(700), d), 1.0);
        assert_eq!(progress(Duration::from_secs(5), d), 1.0);
    }

    #[test]
    fn zero_duration_is_complete() {
        assert_eq!(progress(Duration::ZERO, Duration::ZERO), 1.0);
    }

    proptest! {
        #[test]
        fn weight_stays_in_unit_interval(p in 0.0f64..=1.0) {
            let w = ease_in_out(p);
            prop_assert!((0.0..=1.0).contains(&w));
        }

        #[test]
        fn weight_is_monotonic(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(ease_in_out(lo) <= ease_in_out(hi));
        }
    }
}
