//! Error types for scoremeter-widgets.

use thiserror::Error;

/// Errors raised while building or driving a progress meter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeterError {
    /// The meter configuration was rejected before any computation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigIssue),

    /// The reveal animation runs once per meter instance.
    #[error("reveal animation already started")]
    AlreadyStarted,

    /// The reveal target depends on the measured track height.
    #[error("meter must be laid out before the reveal animation starts")]
    NotLaidOut,
}

/// Specific reason a configuration was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigIssue {
    /// Division by zero when computing the fill fraction.
    #[error("question count must be greater than zero")]
    NoQuestions,

    /// More correct responses than questions under the reject policy.
    #[error("{correct} correct responses exceed {questions} questions")]
    ResponsesExceedQuestions {
        /// Correct responses supplied
        correct: u32,
        /// Question count supplied
        questions: u32,
    },

    /// Meter width must be strictly positive.
    #[error("meter width must be positive, got {0}")]
    NonPositiveWidth(f32),

    /// Border width must not be negative.
    #[error("border width must not be negative, got {0}")]
    NegativeBorder(f32),

    /// Vertical padding must not be negative.
    #[error("vertical padding must not be negative, got {0}")]
    NegativePadding(f32),

    /// A dimension was NaN or infinite.
    #[error("{0} must be a finite number")]
    NonFinite(&'static str),
}
