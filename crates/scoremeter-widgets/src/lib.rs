//! Progress meter widget for Scoremeter.
//!
//! A vertical meter whose fill height and color track the ratio of correct
//! responses to questions. The fill runs from red at the bottom to a hue that
//! moves toward green as the score rises, and is revealed once by a mask that
//! slides off the track.
//!
//! ```
//! use scoremeter_core::{RecordingCanvas, Rect, Widget};
//! use scoremeter_widgets::ProgressMeter;
//!
//! let mut meter = ProgressMeter::from_counts(7, 10).expect("valid score");
//! meter.layout(Rect::new(0.0, 0.0, 400.0, 600.0));
//! let handle = meter.start().expect("laid out");
//! meter.tick(4.0);
//!
//! let mut canvas = RecordingCanvas::new();
//! meter.paint(&mut canvas);
//! assert_eq!(meter.mask_offset(), -500.0);
//! assert!(!handle.is_cancelled());
//! ```

pub mod config;
pub mod error;
pub mod gradient;
pub mod layers;
pub mod layout;
pub mod progress_meter;
pub mod renderer;
pub mod reveal;

pub use config::{ColorScheme, MeterConfig, MeterSettings, OverflowPolicy};
pub use error::{ConfigIssue, MeterError};
pub use gradient::{compute_end_color, end_hue_degrees, GradientSpec};
pub use layers::{produce_layers, render_frame, Layer, LayerStack};
pub use layout::{compute_fraction, compute_layout, LayoutGeometry, MeterFrame};
pub use progress_meter::ProgressMeter;
pub use renderer::MeterRenderer;
pub use reveal::{
    reveal_offset, AnimationHandle, AnimationState, RevealPhase, RevealSample, RevealTimeline,
    MAX_SAMPLE_FPS, REVEAL_DURATION_SECS, REVEAL_EASING,
};
