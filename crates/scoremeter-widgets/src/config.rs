//! Meter configuration and validation.
//!
//! [`MeterSettings`] is the raw, deserializable input (from code, TOML or
//! CLI flags). [`MeterConfig`] is the validated, immutable value every
//! computation takes; holding one means `question_count > 0` and all
//! dimensions are finite and in range.

use crate::error::{ConfigIssue, MeterError};
use scoremeter_core::Color;
use serde::{Deserialize, Serialize};

/// What to do when correct responses exceed the question count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Fail construction with [`ConfigIssue::ResponsesExceedQuestions`].
    #[default]
    Reject,
    /// Accept the config and clamp the fill fraction to 1.0.
    Clamp,
    /// Accept the config and let the fraction exceed 1.0 (fill overflows the
    /// track upward, hue passes 120°).
    Unclamped,
}

/// Adaptive surface colors: the mask matches the background, the border
/// uses the foreground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    /// White background, black border
    #[default]
    Light,
    /// Black background, white border
    Dark,
}

impl ColorScheme {
    /// Background color, used by the empty track space and the reveal mask.
    #[must_use]
    pub const fn background(self) -> Color {
        match self {
            Self::Light => Color::WHITE,
            Self::Dark => Color::BLACK,
        }
    }

    /// Foreground color, used by the border stroke.
    #[must_use]
    pub const fn foreground(self) -> Color {
        match self {
            Self::Light => Color::BLACK,
            Self::Dark => Color::WHITE,
        }
    }
}

/// Unvalidated meter settings.
///
/// Defaults reproduce the stock demo meter: 100 wide, 2 px border, 100 px of
/// vertical padding, 7 of 10 correct.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MeterSettings {
    /// Width of the meter
    pub meter_width: f32,
    /// Thickness of the border stroke
    pub border_width: f32,
    /// Space subtracted from the viewport height, split above and below
    pub vertical_padding: f32,
    /// Correct responses
    pub correct_responses: u32,
    /// Total questions
    pub question_count: u32,
    /// Out-of-range ratio handling
    pub overflow: OverflowPolicy,
    /// Surface colors
    pub scheme: ColorScheme,
}

impl Default for MeterSettings {
    fn default() -> Self {
        Self {
            meter_width: 100.0,
            border_width: 2.0,
            vertical_padding: 100.0,
            correct_responses: 7,
            question_count: 10,
            overflow: OverflowPolicy::Reject,
            scheme: ColorScheme::Light,
        }
    }
}

impl MeterSettings {
    /// Set the meter width.
    #[must_use]
    pub fn meter_width(mut self, width: f32) -> Self {
        self.meter_width = width;
        self
    }

    /// Set the border width.
    #[must_use]
    pub fn border_width(mut self, width: f32) -> Self {
        self.border_width = width;
        self
    }

    /// Set the vertical padding.
    #[must_use]
    pub fn vertical_padding(mut self, padding: f32) -> Self {
        self.vertical_padding = padding;
        self
    }

    /// Set correct responses and question count together.
    #[must_use]
    pub fn score(mut self, correct_responses: u32, question_count: u32) -> Self {
        self.correct_responses = correct_responses;
        self.question_count = question_count;
        self
    }

    /// Set the overflow policy.
    #[must_use]
    pub fn overflow(mut self, policy: OverflowPolicy) -> Self {
        self.overflow = policy;
        self
    }

    /// Set the color scheme.
    #[must_use]
    pub fn scheme(mut self, scheme: ColorScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Validate into an immutable [`MeterConfig`].
    pub fn build(self) -> Result<MeterConfig, MeterError> {
        self.validate()?;

        if self.correct_responses > self.question_count {
            match self.overflow {
                OverflowPolicy::Clamp => log::warn!(
                    "{} of {} correct, clamping fill fraction to 1",
                    self.correct_responses,
                    self.question_count
                ),
                OverflowPolicy::Reject | OverflowPolicy::Unclamped => log::debug!(
                    "{} of {} correct, fill fraction left unclamped",
                    self.correct_responses,
                    self.question_count
                ),
            }
        }

        Ok(MeterConfig {
            meter_width: self.meter_width,
            border_width: self.border_width,
            vertical_padding: self.vertical_padding,
            correct_responses: self.correct_responses,
            question_count: self.question_count,
            overflow: self.overflow,
            scheme: self.scheme,
        })
    }

    fn validate(&self) -> Result<(), ConfigIssue> {
        for (name, value) in [
            ("meter_width", self.meter_width),
            ("border_width", self.border_width),
            ("vertical_padding", self.vertical_padding),
        ] {
            if !value.is_finite() {
                return Err(ConfigIssue::NonFinite(name));
            }
        }
        if self.meter_width <= 0.0 {
            return Err(ConfigIssue::NonPositiveWidth(self.meter_width));
        }
        if self.border_width < 0.0 {
            return Err(ConfigIssue::NegativeBorder(self.border_width));
        }
        if self.vertical_padding < 0.0 {
            return Err(ConfigIssue::NegativePadding(self.vertical_padding));
        }
        if self.question_count == 0 {
            return Err(ConfigIssue::NoQuestions);
        }
        if self.overflow == OverflowPolicy::Reject && self.correct_responses > self.question_count
        {
            return Err(ConfigIssue::ResponsesExceedQuestions {
                correct: self.correct_responses,
                questions: self.question_count,
            });
        }
        Ok(())
    }
}

/// Validated, immutable meter configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MeterSettings", into = "MeterSettings")]
pub struct MeterConfig {
    meter_width: f32,
    border_width: f32,
    vertical_padding: f32,
    correct_responses: u32,
    question_count: u32,
    overflow: OverflowPolicy,
    scheme: ColorScheme,
}

impl MeterConfig {
    /// Build a light-scheme config that rejects out-of-range ratios.
    pub fn new(
        meter_width: f32,
        border_width: f32,
        vertical_padding: f32,
        correct_responses: u32,
        question_count: u32,
    ) -> Result<Self, MeterError> {
        MeterSettings::default()
            .meter_width(meter_width)
            .border_width(border_width)
            .vertical_padding(vertical_padding)
            .score(correct_responses, question_count)
            .build()
    }

    /// Start from the default settings.
    #[must_use]
    pub fn builder() -> MeterSettings {
        MeterSettings::default()
    }

    /// Width of the meter.
    #[must_use]
    pub const fn meter_width(&self) -> f32 {
        self.meter_width
    }

    /// Thickness of the border stroke.
    #[must_use]
    pub const fn border_width(&self) -> f32 {
        self.border_width
    }

    /// Padding subtracted from the viewport height.
    #[must_use]
    pub const fn vertical_padding(&self) -> f32 {
        self.vertical_padding
    }

    /// Correct responses.
    #[must_use]
    pub const fn correct_responses(&self) -> u32 {
        self.correct_responses
    }

    /// Total questions, always greater than zero.
    #[must_use]
    pub const fn question_count(&self) -> u32 {
        self.question_count
    }

    /// Out-of-range ratio handling.
    #[must_use]
    pub const fn overflow(&self) -> OverflowPolicy {
        self.overflow
    }

    /// Surface colors.
    #[must_use]
    pub const fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    /// Back to raw settings, e.g. to tweak one field and rebuild.
    #[must_use]
    pub const fn to_settings(&self) -> MeterSettings {
        MeterSettings {
            meter_width: self.meter_width,
            border_width: self.border_width,
            vertical_padding: self.vertical_padding,
            correct_responses: self.correct_responses,
            question_count: self.question_count,
            overflow: self.overflow,
            scheme: self.scheme,
        }
    }
}

impl Default for MeterConfig {
    fn default() -> Self {
        let settings = MeterSettings::default();
        Self {
            meter_width: settings.meter_width,
            border_width: settings.border_width,
            vertical_padding: settings.vertical_padding,
            correct_responses: settings.correct_responses,
            question_count: settings.question_count,
            overflow: settings.overflow,
            scheme: settings.scheme,
        }
    }
}

impl TryFrom<MeterSettings> for MeterConfig {
    type Error = MeterError;

    fn try_from(settings: MeterSettings) -> Result<Self, Self::Error> {
        settings.build()
    }
}

impl From<MeterConfig> for MeterSettings {
    fn from(config: MeterConfig) -> Self {
        config.to_settings()
    }
}
