//! Draw commands handed to the host rendering surface.
//!
//! All meter rendering reduces to these primitives.

use crate::{Color, Point, Rect};
use serde::{Deserialize, Serialize};

/// Stroke style for outlines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Stroke color
    pub color: Color,
    /// Stroke width in pixels, centered on the outline
    pub width: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

/// Box style for rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxStyle {
    /// Fill color (None = no fill)
    pub fill: Option<Color>,
    /// Stroke style (None = no stroke)
    pub stroke: Option<StrokeStyle>,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            fill: Some(Color::WHITE),
            stroke: None,
        }
    }
}

impl BoxStyle {
    /// Create a box with only fill color.
    #[must_use]
    pub fn fill(color: Color) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
        }
    }

    /// Create a box with only stroke.
    #[must_use]
    pub fn stroke(style: StrokeStyle) -> Self {
        Self {
            fill: None,
            stroke: Some(style),
        }
    }
}

/// Direction a linear gradient travels across its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientDirection {
    /// Start color at the bottom edge, end color at the top edge
    #[default]
    BottomToTop,
    /// Start color at the top edge, end color at the bottom edge
    TopToBottom,
}

impl GradientDirection {
    /// Start and end points of the gradient axis within `bounds`.
    #[must_use]
    pub fn endpoints(self, bounds: Rect) -> (Point, Point) {
        let x = bounds.center().x;
        let top = Point::new(x, bounds.y);
        let bottom = Point::new(x, bounds.bottom());
        match self {
            Self::BottomToTop => (bottom, top),
            Self::TopToBottom => (top, bottom),
        }
    }
}

/// Two-stop linear gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearGradient {
    /// Color at the start of the axis
    pub start: Color,
    /// Color at the end of the axis
    pub end: Color,
    /// Axis direction
    pub direction: GradientDirection,
}

impl LinearGradient {
    /// Create a gradient along `direction`.
    #[must_use]
    pub const fn new(start: Color, end: Color, direction: GradientDirection) -> Self {
        Self {
            start,
            end,
            direction,
        }
    }

    /// Color at normalized position `t` along the axis.
    #[must_use]
    pub fn color_at(&self, t: f32) -> Color {
        self.start.lerp(&self.end, t)
    }
}

/// Drawing primitive - all rendering reduces to these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Draw a rectangle with solid fill and/or stroke
    Rect {
        /// Rectangle bounds
        bounds: Rect,
        /// Box style
        style: BoxStyle,
    },

    /// Fill a rectangle with a linear gradient
    Gradient {
        /// Rectangle bounds
        bounds: Rect,
        /// Gradient to fill with
        gradient: LinearGradient,
    },
}

impl DrawCommand {
    /// Create a filled rectangle.
    #[must_use]
    pub fn filled_rect(bounds: Rect, color: Color) -> Self {
        Self::Rect {
            bounds,
            style: BoxStyle::fill(color),
        }
    }

    /// Create a stroked rectangle.
    #[must_use]
    pub fn stroked_rect(bounds: Rect, stroke: StrokeStyle) -> Self {
        Self::Rect {
            bounds,
            style: BoxStyle::stroke(stroke),
        }
    }

    /// Create a gradient-filled rectangle.
    #[must_use]
    pub fn gradient_rect(bounds: Rect, gradient: LinearGradient) -> Self {
        Self::Gradient { bounds, gradient }
    }

    /// Bounds covered by this command.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        match self {
            Self::Rect { bounds, .. } | Self::Gradient { bounds, .. } => *bounds,
        }
    }
}
