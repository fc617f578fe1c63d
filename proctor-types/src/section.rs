use crate::{Question, SectionId};
use serde::{Deserialize, Serialize};

/// An ordered group of questions within an assessment.
///
/// Section order is significant: it drives display order and, together
/// with question order, defines which questions count as "earlier" for
/// conditional rules.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Section {
    id: SectionId,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    questions: Vec<Question>,
}

impl Section {
    /// Create an empty section with a fresh id.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: SectionId::generate(),
            title: title.into(),
            description: String::new(),
            questions: Vec::new(),
        }
    }

    /// Replace the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append a question, giving it the next order index.
    pub fn with_question(mut self, mut question: Question) -> Self {
        question.set_order(self.questions.len());
        self.questions.push(question);
        self
    }

    /// Stable identifier.
    pub fn id(&self) -> &SectionId {
        &self.id
    }

    /// Heading shown above the section's questions.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Optional blurb under the heading.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The questions, in display order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub(crate) fn questions_mut(&mut self) -> &mut Vec<Question> {
        &mut self.questions
    }

    /// Number of questions in the section.
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// True if the section has no questions at all.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Produce an updated copy with the patch applied.
    pub fn apply(&self, patch: SectionPatch) -> Section {
        let mut updated = self.clone();
        if let Some(title) = patch.title {
            updated.title = title;
        }
        if let Some(description) = patch.description {
            updated.description = description;
        }
        updated
    }
}

/// Partial update to a section; `None` fields are left unchanged.
#[derive(Clone, Debug, Default)]
pub struct SectionPatch {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl SectionPatch {
    /// Patch that only replaces the title.
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Patch that only replaces the description.
    pub fn description(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QuestionType;

    #[test]
    fn with_question_assigns_order() {
        let section = Section::new("Background")
            .with_question(Question::new(QuestionType::ShortText))
            .with_question(Question::new(QuestionType::Numeric));
        assert_eq!(section.question_count(), 2);
        assert_eq!(section.questions()[0].order(), 0);
        assert_eq!(section.questions()[1].order(), 1);
    }

    #[test]
    fn apply_patch_leaves_original_untouched() {
        let original = Section::new("Skills");
        let updated = original.apply(SectionPatch::title("Technical Skills"));
        assert_eq!(original.title(), "Skills");
        assert_eq!(updated.title(), "Technical Skills");
        assert_eq!(updated.id(), original.id());
    }
}
