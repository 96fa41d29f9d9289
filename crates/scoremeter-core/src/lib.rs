//! Core types and traits for the Scoremeter progress meter.
//!
//! This crate provides foundational types used throughout Scoremeter:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`] with HSB conversion
//! - Layout constraints: [`Constraints`]
//! - Drawing: [`DrawCommand`], the [`Canvas`] trait and [`RecordingCanvas`]
//! - Animation: [`Easing`], [`CubicBezier`], [`EasedValue`]

mod animation;
mod canvas;
mod color;
mod constraints;
pub mod draw;
mod geometry;
pub mod widget;

pub use animation::{CubicBezier, EasedValue, Easing};
pub use canvas::RecordingCanvas;
pub use color::Color;
pub use constraints::Constraints;
pub use draw::{BoxStyle, DrawCommand, GradientDirection, LinearGradient, StrokeStyle};
pub use geometry::{Point, Rect, Size};
pub use widget::{AccessibleRole, Canvas, LayoutResult, Widget};

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // COLOR TESTS
    // ==========================================================================

    mod color_tests {
        use super::*;
        use proptest::prelude::*;

        #[test]
        fn test_color_new_clamps_values() {
            let c = Color::new(1.5, -0.5, 0.5, 2.0);
            assert_eq!(c.r, 1.0);
            assert_eq!(c.g, 0.0);
            assert_eq!(c.b, 0.5);
            assert_eq!(c.a, 1.0);
        }

        #[test]
        fn test_color_from_rgb() {
            let c = Color::rgb(0.5, 0.5, 0.5);
            assert_eq!(c.r, 0.5);
            assert_eq!(c.a, 1.0);
        }

        #[test]
        fn test_color_lerp() {
            let mid = Color::BLACK.lerp(&Color::WHITE, 0.5);
            assert!((mid.r - 0.5).abs() < 0.001);
            assert!((mid.g - 0.5).abs() < 0.001);
            assert!((mid.b - 0.5).abs() < 0.001);
        }

        proptest! {
            #[test]
            fn prop_color_clamps_to_valid_range(r in -1.0f32..2.0, g in -1.0f32..2.0, b in -1.0f32..2.0, a in -1.0f32..2.0) {
                let c = Color::new(r, g, b, a);
                prop_assert!(c.r >= 0.0 && c.r <= 1.0);
                prop_assert!(c.g >= 0.0 && c.g <= 1.0);
                prop_assert!(c.b >= 0.0 && c.b <= 1.0);
                prop_assert!(c.a >= 0.0 && c.a <= 1.0);
            }

            #[test]
            fn prop_hsb_components_in_range(h in -2.0f32..2.0, s in -1.0f32..2.0, v in -1.0f32..2.0) {
                let c = Color::from_hsb(h, s, v);
                prop_assert!(c.r >= 0.0 && c.r <= 1.0);
                prop_assert!(c.g >= 0.0 && c.g <= 1.0);
                prop_assert!(c.b >= 0.0 && c.b <= 1.0);
                prop_assert_eq!(c.a, 1.0);
            }

            #[test]
            fn prop_hsb_brightness_is_max_channel(h in 0.0f32..1.0, s in 0.0f32..=1.0, v in 0.0f32..=1.0) {
                let c = Color::from_hsb(h, s, v);
                let max = c.r.max(c.g).max(c.b);
                prop_assert!((max - v).abs() < 1e-5);
            }

            #[test]
            fn prop_hsb_hue_round_trips(h in 0.0f32..0.999, s in 0.2f32..=1.0, v in 0.2f32..=1.0) {
                let (h2, s2, v2) = Color::from_hsb(h, s, v).to_hsb();
                prop_assert!((h - h2).abs() < 1e-3 || (h - h2).abs() > 0.999);
                prop_assert!((s - s2).abs() < 1e-3);
                prop_assert!((v - v2).abs() < 1e-3);
            }
        }
    }

    // ==========================================================================
    // GEOMETRY TESTS
    // ==========================================================================

    mod geometry_tests {
        use super::*;
        use proptest::prelude::*;

        #[test]
        fn test_rect_new() {
            let r = Rect::new(10.0, 20.0, 100.0, 200.0);
            assert_eq!(r.x, 10.0);
            assert_eq!(r.y, 20.0);
            assert_eq!(r.width, 100.0);
            assert_eq!(r.height, 200.0);
        }

        #[test]
        fn test_rect_from_size() {
            let r = Rect::from_size(Size::new(100.0, 200.0));
            assert_eq!(r.origin(), Point::ORIGIN);
            assert_eq!(r.size(), Size::new(100.0, 200.0));
        }

        proptest! {
            #[test]
            fn prop_rect_area_non_negative(x in -1000.0f32..1000.0, y in -1000.0f32..1000.0, w in 0.0f32..1000.0, h in 0.0f32..1000.0) {
                let r = Rect::new(x, y, w, h);
                prop_assert!(r.area() >= 0.0);
            }

            #[test]
            fn prop_rect_centered_keeps_center(cx in -1000.0f32..1000.0, cy in -1000.0f32..1000.0, w in 0.0f32..1000.0, h in 0.0f32..1000.0) {
                let r = Rect::centered(Point::new(cx, cy), Size::new(w, h));
                let c = r.center();
                prop_assert!((c.x - cx).abs() < 1e-3);
                prop_assert!((c.y - cy).abs() < 1e-3);
            }
        }
    }

    // ==========================================================================
    // CONSTRAINTS TESTS
    // ==========================================================================

    mod constraints_tests {
        use super::*;

        #[test]
        fn test_constraints_loose() {
            let c = Constraints::loose(Size::new(100.0, 200.0));
            assert_eq!(c.min_width, 0.0);
            assert_eq!(c.max_width, 100.0);
            assert_eq!(c.min_height, 0.0);
            assert_eq!(c.max_height, 200.0);
        }

        #[test]
        fn test_constraints_unbounded() {
            let c = Constraints::unbounded();
            assert!(!c.has_bounded_width());
            assert!(!c.has_bounded_height());
        }
    }
}
