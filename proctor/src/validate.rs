//! Per-question answer validation.
//!
//! Validation is pure and cheap enough to run on every keystroke. It
//! never blocks rendering: an error is attached to the one question it
//! belongs to and the rest of the form renders normally.

use crate::{Answer, Question, QuestionKind};

/// Why an answer is not acceptable yet.
///
/// These are user-correctable and surfaced inline next to the field;
/// the display strings are the exact messages shown to candidates.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// The question is required and has no usable answer.
    #[error("This field is required")]
    Required,
    /// A numeric answer is below the allowed minimum.
    #[error("Minimum value is {0}")]
    BelowMinimum(i64),
    /// A numeric answer is above the allowed maximum.
    #[error("Maximum value is {0}")]
    AboveMaximum(i64),
    /// A text answer exceeds the length limit.
    #[error("Maximum {0} characters allowed")]
    TooLong(usize),
}

/// Validate one answer against its question.
///
/// Checks run in a fixed precedence and the first failure wins:
/// required, then numeric range, then text length. A question whose
/// answer passes every applicable check gets `None`.
///
/// Range checks only apply to input that has a numeric form; text
/// without one is not rejected here, it simply has nothing to compare.
pub fn validate(question: &Question, answer: Option<&Answer>) -> Option<ValidationError> {
    if question.required() && answer.is_none_or(Answer::is_empty) {
        return Some(ValidationError::Required);
    }

    if let QuestionKind::Numeric(constraints) = question.kind()
        && let Some(answer) = answer
        && !answer.is_empty()
        && let Some(value) = answer.coerce_number()
    {
        if let Some(min) = constraints.min
            && value < min as f64
        {
            return Some(ValidationError::BelowMinimum(min));
        }
        if let Some(max) = constraints.max
            && value > max as f64
        {
            return Some(ValidationError::AboveMaximum(max));
        }
    }

    if let Some(constraints) = question.kind().text_constraints()
        && let Some(text) = answer.and_then(Answer::as_text)
        && let Some(max_length) = constraints.max_length
        && text.chars().count() > max_length
    {
        return Some(ValidationError::TooLong(max_length));
    }

    None
}
