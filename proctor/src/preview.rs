//! Live preview: turn a document plus the answers so far into a view
//! model for one section.
//!
//! Rendering is a pure read. Every response change re-renders the whole
//! section, because one answer can flip the visibility of any number of
//! downstream questions. The renderer never fails: malformed documents
//! degrade to explicit empty states and integrity warnings.

use crate::{
    Answer, Assessment, DependencyIssue, Question, QuestionId, ResponseSet, Section,
    ValidationError, Visibility, validate,
};

/// View model for the currently selected section.
#[derive(Clone, Debug, PartialEq)]
pub enum SectionPreview<'a> {
    /// The assessment has no sections yet; there is nothing to preview.
    NoSections,
    /// The requested section index is out of range.
    SectionMissing {
        requested: usize,
        section_count: usize,
    },
    /// The section resolved; its body says what to show.
    Section(SectionView<'a>),
}

impl<'a> SectionPreview<'a> {
    /// The section view, if one resolved.
    pub fn as_section(&self) -> Option<&SectionView<'a>> {
        match self {
            SectionPreview::Section(view) => Some(view),
            _ => None,
        }
    }
}

/// A resolved section plus everything the presentation needs to draw it.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionView<'a> {
    pub section: &'a Section,
    pub section_index: usize,
    pub section_count: usize,
    pub body: SectionBody<'a>,
    /// Broken conditional rules found while rendering. Non-fatal: the
    /// affected questions are hidden and the rest renders normally.
    pub warnings: Vec<DependencyIssue>,
}

/// What the section shows below its heading.
///
/// The two empty bodies are distinct on purpose: "this section has no
/// questions" asks the author to add some, "all hidden" tells them the
/// conditions just are not met yet.
#[derive(Clone, Debug, PartialEq)]
pub enum SectionBody<'a> {
    /// The section has no questions at all.
    NoQuestions,
    /// Every question is currently hidden by conditional logic.
    AllHidden,
    /// The visible questions, in section order.
    Questions(Vec<QuestionView<'a>>),
}

/// Render descriptor for one visible question.
#[derive(Clone, Debug, PartialEq)]
pub struct QuestionView<'a> {
    pub question: &'a Question,
    /// Position in the full section, counting hidden questions too, so
    /// numbering stays stable as conditions toggle.
    pub index: usize,
    /// Validation verdict for the current answer, if it failed.
    pub validation_error: Option<ValidationError>,
    /// True if a conditional rule gates this question; previews badge these.
    pub is_conditional: bool,
}

/// Render one section of an assessment against the answers so far.
pub fn render_section<'a>(
    assessment: &'a Assessment,
    responses: &ResponseSet,
    section_index: usize,
) -> SectionPreview<'a> {
    if assessment.sections().is_empty() {
        return SectionPreview::NoSections;
    }
    let Some(section) = assessment.section(section_index) else {
        return SectionPreview::SectionMissing {
            requested: section_index,
            section_count: assessment.section_count(),
        };
    };

    let order = assessment.flattened_order();
    let mut warnings = Vec::new();
    let mut visible = Vec::new();
    for (index, question) in section.questions().iter().enumerate() {
        match Visibility::evaluate(question, responses, &order) {
            Visibility::Visible => visible.push(QuestionView {
                question,
                index,
                validation_error: validate(question, responses.get(question.id())),
                is_conditional: question.is_conditional(),
            }),
            Visibility::BrokenRule(issue) => warnings.push(issue),
            Visibility::AwaitingAnswer { .. } | Visibility::RuleNotMet => {}
        }
    }

    let body = if section.is_empty() {
        SectionBody::NoQuestions
    } else if visible.is_empty() {
        SectionBody::AllHidden
    } else {
        SectionBody::Questions(visible)
    };
    SectionPreview::Section(SectionView {
        section,
        section_index,
        section_count: assessment.section_count(),
        body,
        warnings,
    })
}

/// One author's preview of one assessment: the current section plus the
/// answers typed in so far.
///
/// The session is single-actor and synchronous. Responses accumulate
/// for the whole assessment and survive both section navigation and
/// document edits; they are dropped only when the session is.
#[derive(Clone, Debug)]
pub struct PreviewSession {
    assessment: Assessment,
    section_index: usize,
    responses: ResponseSet,
}

impl PreviewSession {
    /// Start a session on the first section with nothing answered.
    pub fn new(assessment: Assessment) -> Self {
        Self {
            assessment,
            section_index: 0,
            responses: ResponseSet::new(),
        }
    }

    /// The document being previewed.
    pub fn assessment(&self) -> &Assessment {
        &self.assessment
    }

    /// The currently selected section index.
    pub fn section_index(&self) -> usize {
        self.section_index
    }

    /// The answers given so far.
    pub fn responses(&self) -> &ResponseSet {
        &self.responses
    }

    /// Record an answer. The next render re-evaluates the whole section.
    pub fn respond(&mut self, id: impl Into<QuestionId>, answer: impl Into<Answer>) {
        self.responses = self.responses.with_answer(id, answer);
    }

    /// Forget the answer to one question.
    pub fn clear_answer(&mut self, id: &QuestionId) {
        self.responses = self.responses.without_answer(id);
    }

    /// Switch to another section. Answers are kept; an out-of-range
    /// index renders as a missing section rather than failing.
    pub fn goto_section(&mut self, index: usize) {
        self.section_index = index;
    }

    /// Swap in an edited document, keeping the answers given so far.
    /// This is what makes the preview live while the builder edits.
    pub fn update_assessment(&mut self, assessment: Assessment) {
        self.assessment = assessment;
    }

    /// View model for the current section.
    pub fn render(&self) -> SectionPreview<'_> {
        render_section(&self.assessment, &self.responses, self.section_index)
    }
}
