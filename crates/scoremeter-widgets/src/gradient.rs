//! Fill gradient: red at the bottom, a score-dependent hue at the top.

use scoremeter_core::{Color, GradientDirection, LinearGradient};
use serde::{Deserialize, Serialize};

/// Hue reached by a full meter (green).
pub const FULL_HUE_DEGREES: f64 = 120.0;

/// Saturation of the end color.
pub const END_SATURATION: f32 = 0.8;

/// Brightness of the end color.
pub const END_BRIGHTNESS: f32 = 0.9;

/// Hue of the end color in degrees, linear in the fill fraction.
#[must_use]
pub fn end_hue_degrees(fraction: f64) -> f64 {
    fraction * FULL_HUE_DEGREES
}

/// End color for a fill fraction.
///
/// ```
/// use scoremeter_widgets::compute_end_color;
///
/// let green = compute_end_color(1.0);
/// assert!((green.hue_degrees() - 120.0).abs() < 0.01);
/// ```
#[must_use]
pub fn compute_end_color(fraction: f64) -> Color {
    let hue = end_hue_degrees(fraction) / 360.0;
    Color::from_hsb(hue as f32, END_SATURATION, END_BRIGHTNESS)
}

/// The two gradient endpoints for one meter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientSpec {
    /// Bottom color
    pub start: Color,
    /// Top color
    pub end: Color,
    /// Hue of `end` in degrees, kept exact for inspection
    pub end_hue_degrees: f64,
    /// Always bottom to top for the meter
    pub direction: GradientDirection,
}

impl GradientSpec {
    /// Gradient for a fill fraction.
    #[must_use]
    pub fn for_fraction(fraction: f64) -> Self {
        Self {
            start: Color::RED,
            end: compute_end_color(fraction),
            end_hue_degrees: end_hue_degrees(fraction),
            direction: GradientDirection::BottomToTop,
        }
    }

    /// The paintable gradient.
    #[must_use]
    pub const fn linear(&self) -> LinearGradient {
        LinearGradient::new(self.start, self.end, self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_end_hue_scenarios() {
        assert_eq!(end_hue_degrees(0.0), 0.0);
        assert_eq!(end_hue_degrees(0.7), 84.0);
        assert_eq!(end_hue_degrees(1.0), 120.0);
    }

    #[test]
    fn test_end_color_empty_meter_is_red() {
        let c = compute_end_color(0.0);
        assert!(close(c.r, 0.9));
        assert!(close(c.g, 0.18));
        assert!(close(c.b, 0.18));
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_end_color_full_meter_is_green() {
        let c = compute_end_color(1.0);
        assert!(close(c.r, 0.18));
        assert!(close(c.g, 0.9));
        assert!(close(c.b, 0.18));
        let (h, s, b) = c.to_hsb();
        assert!(close(h * 360.0, 120.0));
        assert!(close(s, 0.8));
        assert!(close(b, 0.9));
    }

    #[test]
    fn test_end_color_seventy_percent() {
        let c = compute_end_color(0.7);
        assert!((c.hue_degrees() - 84.0).abs() < 0.01);
    }

    #[test]
    fn test_unclamped_fraction_passes_green() {
        assert_eq!(end_hue_degrees(1.5), 180.0);
        assert!((compute_end_color(1.5).hue_degrees() - 180.0).abs() < 0.01);
    }

    #[test]
    fn test_gradient_spec() {
        let spec = GradientSpec::for_fraction(0.7);
        assert_eq!(spec.start, Color::RED);
        assert_eq!(spec.end, compute_end_color(0.7));
        assert_eq!(spec.end_hue_degrees, 84.0);
        assert_eq!(spec.direction, GradientDirection::BottomToTop);

        let linear = spec.linear();
        assert_eq!(linear.start, spec.start);
        assert_eq!(linear.end, spec.end);
    }

    proptest! {
        #[test]
        fn prop_hue_is_linear(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
            let mid = (a + b) / 2.0;
            let expected = (end_hue_degrees(a) + end_hue_degrees(b)) / 2.0;
            prop_assert!((end_hue_degrees(mid) - expected).abs() < 1e-9);
        }

        #[test]
        fn prop_end_color_keeps_saturation_and_brightness(f in 0.0f64..=1.0) {
            let (_, s, b) = compute_end_color(f).to_hsb();
            prop_assert!((s - END_SATURATION).abs() < 1e-3);
            prop_assert!((b - END_BRIGHTNESS).abs() < 1e-3);
        }
    }
}
