use crate::QuestionType;

/// Display metadata for one question type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuestionTypeInfo {
    pub question_type: QuestionType,
    /// Human-readable name shown in pickers, e.g. "Short Text".
    pub label: &'static str,
    /// Small pictogram shown next to the label.
    pub glyph: &'static str,
}

/// The one table of supported question types.
///
/// Editors build their type pickers from this table and renderers take
/// labels from it, so adding a type here is the single registration step.
pub const QUESTION_TYPES: [QuestionTypeInfo; 6] = [
    QuestionTypeInfo {
        question_type: QuestionType::ShortText,
        label: "Short Text",
        glyph: "📝",
    },
    QuestionTypeInfo {
        question_type: QuestionType::LongText,
        label: "Long Text",
        glyph: "📄",
    },
    QuestionTypeInfo {
        question_type: QuestionType::Numeric,
        label: "Numeric",
        glyph: "🔢",
    },
    QuestionTypeInfo {
        question_type: QuestionType::SingleChoice,
        label: "Single Choice",
        glyph: "☑️",
    },
    QuestionTypeInfo {
        question_type: QuestionType::MultiChoice,
        label: "Multiple Choice",
        glyph: "✅",
    },
    QuestionTypeInfo {
        question_type: QuestionType::FileUpload,
        label: "File Upload",
        glyph: "📎",
    },
];

/// Look up the registry entry for a question type.
pub fn type_info(question_type: QuestionType) -> &'static QuestionTypeInfo {
    // The table is ordered like the enum; the tests below pin that.
    &QUESTION_TYPES[question_type as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_type_has_an_entry() {
        for question_type in QuestionType::ALL {
            let info = type_info(question_type);
            assert_eq!(info.question_type, question_type);
            assert!(!info.label.is_empty());
            assert!(!info.glyph.is_empty());
        }
    }

    #[test]
    fn labels() {
        assert_eq!(type_info(QuestionType::ShortText).label, "Short Text");
        assert_eq!(type_info(QuestionType::MultiChoice).label, "Multiple Choice");
    }
}
