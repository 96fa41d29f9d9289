//! Fill fraction and meter geometry.

use crate::config::{MeterConfig, OverflowPolicy};
use scoremeter_core::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Ratio of correct responses to questions.
///
/// In [0, 1] unless the config uses [`OverflowPolicy::Unclamped`] with more
/// correct responses than questions.
#[must_use]
pub fn compute_fraction(config: &MeterConfig) -> f64 {
    let raw = f64::from(config.correct_responses()) / f64::from(config.question_count());
    match config.overflow() {
        OverflowPolicy::Clamp => raw.min(1.0),
        OverflowPolicy::Reject | OverflowPolicy::Unclamped => raw,
    }
}

/// Vertical track measurement derived from config and viewport height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutGeometry {
    /// Fixed meter width
    pub meter_width: f32,
    /// Border stroke width
    pub border_width: f32,
    /// Viewport height minus padding, never negative
    pub track_height: f32,
    /// Height of the gradient fill
    pub fill_height: f32,
    /// Height of the empty space above the fill, never negative
    pub empty_height: f32,
}

/// Compute the track geometry for a measured viewport height.
#[must_use]
pub fn compute_layout(config: &MeterConfig, viewport_height: f32) -> LayoutGeometry {
    LayoutGeometry::new(config, compute_fraction(config), viewport_height)
}

impl LayoutGeometry {
    /// Geometry for an already computed fill fraction.
    #[must_use]
    pub fn new(config: &MeterConfig, fraction: f64, viewport_height: f32) -> Self {
        let track_height = track_height(viewport_height, config.vertical_padding());
        let raw_fill = (fraction * f64::from(track_height)) as f32;
        let empty_height = (track_height - raw_fill).max(0.0);
        // Both parts derive from the same subtraction so they sum to the track exactly.
        let fill_height = if empty_height > 0.0 {
            track_height - empty_height
        } else {
            raw_fill
        };

        Self {
            meter_width: config.meter_width(),
            border_width: config.border_width(),
            track_height,
            fill_height,
            empty_height,
        }
    }

    /// Outer size of the border frame.
    #[must_use]
    pub fn frame_size(&self) -> Size {
        Size::new(
            self.meter_width + self.border_width,
            self.track_height + self.border_width,
        )
    }

    /// Center the meter inside `container` and resolve concrete rectangles.
    #[must_use]
    pub fn place(&self, container: Rect) -> MeterFrame {
        let center = container.center();
        let track = Rect::centered(center, Size::new(self.meter_width, self.track_height));

        MeterFrame {
            container,
            border: Rect::centered(center, self.frame_size()),
            empty: Rect::new(track.x, track.y, self.meter_width, self.empty_height),
            // Anchored to the track bottom so an unclamped fill grows upward.
            fill: Rect::new(
                track.x,
                track.bottom() - self.fill_height,
                self.meter_width,
                self.fill_height,
            ),
            track,
        }
    }
}

fn track_height(viewport_height: f32, vertical_padding: f32) -> f32 {
    let raw = viewport_height - vertical_padding;
    if raw.is_finite() && raw >= 0.0 {
        raw
    } else {
        log::warn!(
            "vertical padding {vertical_padding} leaves no room in a {viewport_height} high viewport, clamping track to 0"
        );
        0.0
    }
}

/// Concrete rectangles for one placement of the meter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeterFrame {
    /// Space the host gave the meter
    pub container: Rect,
    /// Full track, also the mask's resting position
    pub track: Rect,
    /// Background-colored space above the fill
    pub empty: Rect,
    /// Gradient fill, bottom-aligned within the track
    pub fill: Rect,
    /// Outline frame, `border_width` larger than the track on each axis
    pub border: Rect,
}

impl MeterFrame {
    /// Center shared by the track and border.
    #[must_use]
    pub fn center(&self) -> Point {
        self.track.center()
    }
}
