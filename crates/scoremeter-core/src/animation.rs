//! Easing curves and time-driven eased values.
//!
//! The host render loop advances values with `update(dt)`; nothing here
//! reads a clock.

// =============================================================================
// CubicBezier - CSS-style timing curves
// =============================================================================

/// A cubic Bézier timing curve through (0, 0), (x1, y1), (x2, y2), (1, 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    /// First control point x (must lie in [0, 1])
    pub x1: f64,
    /// First control point y
    pub y1: f64,
    /// Second control point x (must lie in [0, 1])
    pub x2: f64,
    /// Second control point y
    pub y2: f64,
}

impl CubicBezier {
    /// The standard ease-in curve used by platform UI toolkits.
    pub const EASE_IN: Self = Self::new(0.42, 0.0, 1.0, 1.0);

    /// The standard ease-out curve.
    pub const EASE_OUT: Self = Self::new(0.0, 0.0, 0.58, 1.0);

    /// The standard ease-in-out curve.
    pub const EASE_IN_OUT: Self = Self::new(0.42, 0.0, 0.58, 1.0);

    const EPSILON: f64 = 1e-7;

    /// Create a curve from its two control points.
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Evaluate the curve: map normalized time `x` to eased progress.
    #[must_use]
    pub fn apply(&self, x: f64) -> f64 {
        let x = x.clamp(0.0, 1.0);
        if x == 0.0 || x == 1.0 {
            return x;
        }
        let t = self.solve_t(x);
        Self::sample(self.y1, self.y2, t)
    }

    // Polynomial form of one bezier axis: ((a*t + b)*t + c)*t
    fn coefficients(p1: f64, p2: f64) -> (f64, f64, f64) {
        let c = 3.0 * p1;
        let b = 3.0f64.mul_add(p2 - p1, -c);
        let a = 1.0 - c - b;
        (a, b, c)
    }

    fn sample(p1: f64, p2: f64, t: f64) -> f64 {
        let (a, b, c) = Self::coefficients(p1, p2);
        a.mul_add(t, b).mul_add(t, c) * t
    }

    fn sample_derivative(p1: f64, p2: f64, t: f64) -> f64 {
        let (a, b, c) = Self::coefficients(p1, p2);
        (3.0 * a).mul_add(t, 2.0 * b).mul_add(t, c)
    }

    fn solve_t(&self, x: f64) -> f64 {
        // Newton-Raphson first, it converges in a few steps for sane curves.
        let mut t = x;
        for _ in 0..8 {
            let err = Self::sample(self.x1, self.x2, t) - x;
            if err.abs() < Self::EPSILON {
                return t;
            }
            let d = Self::sample_derivative(self.x1, self.x2, t);
            if d.abs() < 1e-6 {
                break;
            }
            t -= err / d;
            if !(0.0..=1.0).contains(&t) {
                break;
            }
        }

        // Bisection fallback; x(t) is monotonic for x1, x2 in [0, 1].
        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        for _ in 0..64 {
            let sx = Self::sample(self.x1, self.x2, t);
            if (sx - x).abs() < Self::EPSILON {
                break;
            }
            if x > sx {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        t
    }
}

// =============================================================================
// Easing Functions
// =============================================================================

/// Standard easing functions for animations.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    /// Linear interpolation (no easing)
    #[default]
    Linear,
    /// Quadratic ease in (slow start)
    EaseIn,
    /// Quadratic ease out (slow end)
    EaseOut,
    /// Quadratic ease in and out
    EaseInOut,
    /// Cubic ease in
    CubicIn,
    /// Arbitrary cubic Bézier timing curve
    Bezier(CubicBezier),
}

impl Easing {
    /// Platform ease-in, `cubic-bezier(0.42, 0, 1, 1)`.
    pub const STANDARD_EASE_IN: Self = Self::Bezier(CubicBezier::EASE_IN);

    /// Apply easing function to a normalized time value (0.0 to 1.0).
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => (1.0 - t).mul_add(-(1.0 - t), 1.0),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0f64).mul_add(t, 2.0).powi(2) / 2.0
                }
            }
            Self::CubicIn => t * t * t,
            Self::Bezier(curve) => curve.apply(t),
        }
    }
}

// =============================================================================
// EasedValue - Duration-based animated value
// =============================================================================

/// An easing-based animated value.
#[derive(Debug, Clone, PartialEq)]
pub struct EasedValue {
    /// Start value
    pub from: f64,
    /// End value
    pub to: f64,
    /// Total duration in seconds
    pub duration: f64,
    /// Elapsed time
    pub elapsed: f64,
    /// Easing function
    pub easing: Easing,
}

impl EasedValue {
    /// Create new eased animation.
    #[must_use]
    pub fn new(from: f64, to: f64, duration: f64) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
            easing: Easing::EaseInOut,
        }
    }

    /// Set easing function.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Get current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value_at(self.progress())
    }

    /// Value at a normalized time, independent of `elapsed`.
    #[must_use]
    pub fn value_at(&self, t: f64) -> f64 {
        let eased = self.easing.apply(t);
        (self.to - self.from).mul_add(eased, self.from)
    }

    /// Whether animation is complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Update animation.
    pub fn update(&mut self, dt: f64) {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed = (self.elapsed + dt).min(self.duration);
        }
    }

    /// Progress from 0.0 to 1.0.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration > 0.0 {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // -------------------------------------------------------------------------
    // Easing tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_easing_linear() {
        assert!((Easing::Linear.apply(0.0) - 0.0).abs() < 0.001);
        assert!((Easing::Linear.apply(0.5) - 0.5).abs() < 0.001);
        assert!((Easing::Linear.apply(1.0) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_easing_clamps_input() {
        assert!((Easing::Linear.apply(-0.5) - 0.0).abs() < 0.001);
        assert!((Easing::Linear.apply(1.5) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_easing_ease_in() {
        assert!(Easing::EaseIn.apply(0.5) < 0.5);
        assert!(Easing::EaseOut.apply(0.5) > 0.5);
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 0.01);
        assert!((Easing::CubicIn.apply(0.5) - 0.125).abs() < 1e-9);
    }

    #[test]
    fn test_standard_ease_in_endpoints_exact() {
        assert_eq!(Easing::STANDARD_EASE_IN.apply(0.0), 0.0);
        assert_eq!(Easing::STANDARD_EASE_IN.apply(1.0), 1.0);
    }

    #[test]
    fn test_standard_ease_in_is_slow_start() {
        let early = Easing::STANDARD_EASE_IN.apply(0.25);
        let mid = Easing::STANDARD_EASE_IN.apply(0.5);
        assert!(early < 0.25);
        assert!(mid < 0.5);
        // Known value of cubic-bezier(0.42, 0, 1, 1) at x = 0.5
        assert!((mid - 0.3153).abs() < 0.001, "got {mid}");
    }

    #[test]
    fn test_linear_bezier_is_identity() {
        let linear = CubicBezier::new(0.0, 0.0, 1.0, 1.0);
        for i in 0..=10 {
            let x = f64::from(i) / 10.0;
            assert!((linear.apply(x) - x).abs() < 1e-6);
        }
    }

    #[test]
    fn test_ease_out_and_in_out_curves() {
        assert!(CubicBezier::EASE_OUT.apply(0.5) > 0.5);
        assert!((CubicBezier::EASE_IN_OUT.apply(0.5) - 0.5).abs() < 1e-6);
    }

    // -------------------------------------------------------------------------
    // EasedValue tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_eased_value_runs_to_target() {
        let mut v = EasedValue::new(0.0, -500.0, 4.0).with_easing(Easing::STANDARD_EASE_IN);
        assert_eq!(v.value(), 0.0);
        assert!(!v.is_complete());

        v.update(2.0);
        assert!(v.value() < 0.0 && v.value() > -250.0);

        v.update(10.0);
        assert!(v.is_complete());
        assert_eq!(v.elapsed, 4.0);
        assert_eq!(v.value(), -500.0);
    }

    #[test]
    fn test_eased_value_ignores_bad_dt() {
        let mut v = EasedValue::new(0.0, 1.0, 1.0);
        v.update(-1.0);
        v.update(f64::NAN);
        assert_eq!(v.elapsed, 0.0);
    }

    #[test]
    fn test_eased_value_zero_duration() {
        let v = EasedValue::new(0.0, 10.0, 0.0);
        assert_eq!(v.progress(), 1.0);
        assert_eq!(v.value(), 10.0);
        assert!(v.is_complete());
    }

    proptest! {
        #[test]
        fn prop_standard_ease_in_stays_in_unit_range(t in 0.0f64..=1.0) {
            let y = Easing::STANDARD_EASE_IN.apply(t);
            prop_assert!((0.0..=1.0).contains(&y));
            prop_assert!(y <= t + 1e-6);
        }

        #[test]
        fn prop_standard_ease_in_monotonic(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(
                Easing::STANDARD_EASE_IN.apply(lo) <= Easing::STANDARD_EASE_IN.apply(hi) + 1e-6
            );
        }
    }
}
