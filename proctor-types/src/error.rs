use crate::QuestionType;

/// Errors from structural edits to an assessment document.
///
/// Every edit operation is pure: on error the original document is
/// untouched and no partial edit is observable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    /// A section index pointed past the end of the section list.
    #[error("section index {index} is out of range ({count} sections)")]
    SectionOutOfRange { index: usize, count: usize },

    /// A question index pointed past the end of a section's question list.
    #[error("question index {index} is out of range in section {section} ({count} questions)")]
    QuestionOutOfRange {
        section: usize,
        index: usize,
        count: usize,
    },

    /// A patch carried constraints for a different question type.
    ///
    /// The type of a question is fixed at creation; constraints can only
    /// be replaced with constraints of the same shape.
    #[error("expected {expected} constraints, got {found}")]
    KindMismatch {
        expected: QuestionType,
        found: QuestionType,
    },
}
