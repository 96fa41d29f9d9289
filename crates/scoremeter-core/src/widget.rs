//! Widget trait and the drawable-primitive `Canvas` seam.
//!
//! # Widget Lifecycle
//!
//! Widgets follow a measure-layout-paint cycle driven by the host:
//!
//! 1. **Measure**: Compute the desired size given constraints
//! 2. **Layout**: Accept the allocated bounds and cache derived geometry
//! 3. **Paint**: Emit primitives onto a [`Canvas`]
//!
//! Painting never allocates widget state; everything it needs was computed
//! during layout.
//!
//! # Examples
//!
//! ```
//! use scoremeter_core::{Canvas, Color, Rect, RecordingCanvas};
//!
//! let mut canvas = RecordingCanvas::new();
//! canvas.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
//! assert_eq!(canvas.command_count(), 1);
//! ```

use crate::constraints::Constraints;
use crate::draw::LinearGradient;
use crate::geometry::{Rect, Size};
use crate::Color;
use serde::{Deserialize, Serialize};

/// Result of laying out a widget.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayoutResult {
    /// Computed size after layout
    pub size: Size,
}

/// Core widget trait that all UI elements implement.
pub trait Widget: Send + Sync {
    /// Compute the desired size given constraints.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Accept allocated bounds.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Generate draw commands for rendering.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Get the accessible name for screen readers.
    fn accessible_name(&self) -> Option<&str> {
        None
    }

    /// Get the accessible role.
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Generic
    }

    /// Get the test ID for this widget (if any).
    fn test_id(&self) -> Option<&str> {
        None
    }

    /// Get the current bounds of this widget.
    fn bounds(&self) -> Rect {
        Rect::default()
    }
}

/// Canvas trait for paint operations.
///
/// This is the minimal abstraction a target platform implements to paint a
/// meter: solid rectangles, gradient rectangles and stroked outlines.
pub trait Canvas {
    /// Draw a filled rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw a rectangle filled with a linear gradient.
    fn fill_gradient(&mut self, rect: Rect, gradient: &LinearGradient);

    /// Draw a stroked rectangle outline.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32);
}

/// Accessible role for screen readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccessibleRole {
    /// Generic element
    #[default]
    Generic,
    /// Progress bar or meter
    ProgressBar,
}
