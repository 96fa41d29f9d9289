//! Scoremeter: a vertical progress meter for quiz results.
//!
//! The meter shows `correct / questions` as a bottom-anchored fill whose
//! gradient runs from red to a hue between red and green, revealed once by a
//! slide-up mask. Output is a list of [`DrawCommand`]s any backend can paint
//! through the [`Canvas`] trait.
//!
//! ```
//! use scoremeter::prelude::*;
//!
//! let config = MeterConfig::builder().score(7, 10).build().expect("valid");
//! let frame = render_frame(&config, Rect::new(0.0, 0.0, 400.0, 600.0), 1.0);
//! assert_eq!(frame.len(), 4);
//! ```

pub use scoremeter_core::*;
pub use scoremeter_widgets as widgets;

/// Everything needed to configure, lay out and paint a meter.
pub mod prelude {
    pub use scoremeter_core::{
        Canvas, Color, Constraints, DrawCommand, RecordingCanvas, Rect, Size, Widget,
    };
    pub use scoremeter_widgets::{
        compute_end_color, compute_fraction, compute_layout, produce_layers, render_frame,
        AnimationHandle, ColorScheme, MeterConfig, MeterError, MeterRenderer, MeterSettings,
        OverflowPolicy, ProgressMeter, RevealPhase, RevealTimeline,
    };
}
