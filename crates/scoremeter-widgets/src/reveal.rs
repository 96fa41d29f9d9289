//! One-shot reveal animation.
//!
//! The mask starts over the track (offset 0) and slides to `-track_height`
//! over [`REVEAL_DURATION_SECS`] with the platform ease-in curve. The host
//! calls [`AnimationState::start`] once after layout and then advances time
//! with [`AnimationState::tick`] from its render loop.

use crate::error::MeterError;
use scoremeter_core::{EasedValue, Easing};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Length of the reveal in seconds.
pub const REVEAL_DURATION_SECS: f64 = 4.0;

/// Timing curve of the reveal.
pub const REVEAL_EASING: Easing = Easing::STANDARD_EASE_IN;

/// Highest sampling rate [`RevealTimeline::sample`] honors.
pub const MAX_SAMPLE_FPS: u32 = 1000;

/// Mask offset for a normalized reveal time `progress` in [0, 1].
#[must_use]
pub fn reveal_offset(track_height: f32, progress: f64) -> f32 {
    let eased = REVEAL_EASING.apply(progress);
    (-f64::from(track_height)).mul_add(eased, 0.0) as f32
}

/// Handle to a running reveal.
///
/// Cancelling freezes the mask where it is. Dropping the handle does not
/// cancel anything.
#[derive(Debug, Clone, Default)]
pub struct AnimationHandle {
    cancelled: Arc<AtomicBool>,
}

impl AnimationHandle {
    /// Stop the reveal at its current offset.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Whether [`cancel`](Self::cancel) was called.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// Lifecycle of the reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealPhase {
    /// Not started; mask covers the track
    Idle,
    /// Mask is sliding
    Running,
    /// Mask reached `-track_height`; terminal
    Finished,
    /// Cancelled mid-flight; terminal
    Cancelled,
}

impl RevealPhase {
    /// Whether no further movement will happen.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Finished | Self::Cancelled)
    }
}

/// The widget's only mutable state: the mask offset transition.
///
/// Cloning copies the current cancel flag into a fresh handle, so each clone
/// is cancelled independently.
#[derive(Debug, Default)]
pub struct AnimationState {
    transition: Option<EasedValue>,
    handle: AnimationHandle,
}

impl Clone for AnimationState {
    fn clone(&self) -> Self {
        Self {
            transition: self.transition.clone(),
            handle: AnimationHandle {
                cancelled: Arc::new(AtomicBool::new(self.handle.is_cancelled())),
            },
        }
    }
}

impl AnimationState {
    /// Idle state with the mask at rest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin the reveal toward `-track_height`.
    ///
    /// The target is captured here; later layout passes do not move it.
    pub fn start(&mut self, track_height: f32) -> Result<AnimationHandle, MeterError> {
        if self.transition.is_some() {
            return Err(MeterError::AlreadyStarted);
        }

        let target = -f64::from(track_height.max(0.0));
        self.transition = Some(
            EasedValue::new(0.0, target, REVEAL_DURATION_SECS).with_easing(REVEAL_EASING),
        );
        log::debug!("reveal started toward offset {target} over {REVEAL_DURATION_SECS}s");

        Ok(self.handle.clone())
    }

    /// Advance by `dt` seconds and report the resulting phase.
    pub fn tick(&mut self, dt: f64) -> RevealPhase {
        let phase = self.phase();
        if phase != RevealPhase::Running {
            return phase;
        }

        if let Some(transition) = self.transition.as_mut() {
            transition.update(dt);
            if transition.is_complete() {
                log::debug!("reveal finished at offset {}", transition.value());
            }
        }
        self.phase()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> RevealPhase {
        match &self.transition {
            None => RevealPhase::Idle,
            Some(t) if t.is_complete() => RevealPhase::Finished,
            Some(_) if self.handle.is_cancelled() => RevealPhase::Cancelled,
            Some(_) => RevealPhase::Running,
        }
    }

    /// Current vertical offset of the mask.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.transition
            .as_ref()
            .map_or(0.0, |t| t.value() as f32)
    }

    /// Offset the mask is heading to, once started.
    #[must_use]
    pub fn target(&self) -> Option<f32> {
        self.transition.as_ref().map(|t| t.to as f32)
    }

    /// Normalized elapsed time in [0, 1].
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.transition.as_ref().map_or(0.0, EasedValue::progress)
    }
}

/// One sample of the reveal timeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevealSample {
    /// Seconds since start
    pub time: f64,
    /// Mask offset at that time
    pub offset: f32,
}

/// Pre-computed reveal for a given track height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealTimeline {
    track_height: f32,
}

impl RevealTimeline {
    /// Timeline for a track of the given height.
    #[must_use]
    pub fn new(track_height: f32) -> Self {
        Self {
            track_height: track_height.max(0.0),
        }
    }

    /// Offset at `time` seconds after start.
    #[must_use]
    pub fn offset_at(&self, time: f64) -> f32 {
        reveal_offset(self.track_height, time / REVEAL_DURATION_SECS)
    }

    /// Sample the whole reveal at `fps` frames per second, both ends included.
    ///
    /// `fps` is clamped to `1..=MAX_SAMPLE_FPS`.
    #[must_use]
    pub fn sample(&self, fps: u32) -> Vec<RevealSample> {
        let fps = fps.clamp(1, MAX_SAMPLE_FPS);
        let frames = (REVEAL_DURATION_SECS * f64::from(fps)).ceil() as u32;
        (0..=frames)
            .map(|frame| {
                let time = (REVEAL_DURATION_SECS * f64::from(frame) / f64::from(frames))
                    .min(REVEAL_DURATION_SECS);
                RevealSample {
                    time,
                    offset: self.offset_at(time),
                }
            })
            .collect()
    }
}
