use crate::{ConditionalRule, DocumentError, QuestionId, registry};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminant for the six supported question types.
///
/// The type is fixed when a question is created; edits may change its
/// constraints but never the type itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    ShortText,
    LongText,
    Numeric,
    SingleChoice,
    MultiChoice,
    FileUpload,
}

impl QuestionType {
    /// All supported types, in picker order.
    pub const ALL: [QuestionType; 6] = [
        QuestionType::ShortText,
        QuestionType::LongText,
        QuestionType::Numeric,
        QuestionType::SingleChoice,
        QuestionType::MultiChoice,
        QuestionType::FileUpload,
    ];

    /// Human-readable name from the type registry, e.g. "Short Text".
    pub fn label(self) -> &'static str {
        registry::type_info(self).label
    }

    /// Pictogram from the type registry.
    pub fn glyph(self) -> &'static str {
        registry::type_info(self).glyph
    }

    /// The constraints a freshly created question of this type carries.
    pub fn default_kind(self) -> QuestionKind {
        match self {
            QuestionType::ShortText => QuestionKind::ShortText(TextConstraints {
                min_length: None,
                max_length: Some(250),
            }),
            QuestionType::LongText => QuestionKind::LongText(TextConstraints {
                min_length: None,
                max_length: Some(2000),
            }),
            QuestionType::Numeric => QuestionKind::Numeric(NumericConstraints {
                min: Some(0),
                max: Some(100),
                step: None,
            }),
            QuestionType::SingleChoice => QuestionKind::SingleChoice(ChoiceConstraints {
                options: vec!["Option 1".to_string(), "Option 2".to_string()],
            }),
            QuestionType::MultiChoice => QuestionKind::MultiChoice(ChoiceConstraints {
                options: vec!["Option 1".to_string(), "Option 2".to_string()],
            }),
            QuestionType::FileUpload => QuestionKind::FileUpload(UploadConstraints {
                accepted_formats: vec![".pdf".to_string(), ".doc".to_string(), ".docx".to_string()],
                max_size_mb: Some(10),
                max_files: Some(1),
            }),
        }
    }

    /// True for the two free-text types.
    pub fn is_text(self) -> bool {
        matches!(self, QuestionType::ShortText | QuestionType::LongText)
    }

    /// True for the two option-picking types.
    pub fn is_choice(self) -> bool {
        matches!(self, QuestionType::SingleChoice | QuestionType::MultiChoice)
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QuestionType::ShortText => "short-text",
            QuestionType::LongText => "long-text",
            QuestionType::Numeric => "numeric",
            QuestionType::SingleChoice => "single-choice",
            QuestionType::MultiChoice => "multi-choice",
            QuestionType::FileUpload => "file-upload",
        };
        write!(f, "{name}")
    }
}

/// Length bounds for text answers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextConstraints {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

impl TextConstraints {
    /// Constraints with only an upper length bound.
    pub fn with_max_length(max_length: usize) -> Self {
        Self {
            min_length: None,
            max_length: Some(max_length),
        }
    }
}

/// Value bounds for numeric answers.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumericConstraints {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
}

impl NumericConstraints {
    /// Constraints with inclusive lower and upper bounds.
    pub fn with_bounds(min: i64, max: i64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            step: None,
        }
    }
}

/// The options a choice question offers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceConstraints {
    #[serde(default)]
    pub options: Vec<String>,
}

impl ChoiceConstraints {
    /// Constraints offering the given options, in order.
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// True if at least one option is non-empty after trimming.
    pub fn has_usable_option(&self) -> bool {
        self.options.iter().any(|option| !option.trim().is_empty())
    }
}

/// Limits for file-upload answers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadConstraints {
    #[serde(default)]
    pub accepted_formats: Vec<String>,
    #[serde(default, rename = "maxSizeMB", skip_serializing_if = "Option::is_none")]
    pub max_size_mb: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_files: Option<u32>,
}

/// A question's type together with the constraints meaningful for it.
///
/// Serialized with an inline `type` tag so a short-text question reads
/// as `{"type": "short-text", "maxLength": 250, ...}` on the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum QuestionKind {
    ShortText(TextConstraints),
    LongText(TextConstraints),
    Numeric(NumericConstraints),
    SingleChoice(ChoiceConstraints),
    MultiChoice(ChoiceConstraints),
    FileUpload(UploadConstraints),
}

impl QuestionKind {
    /// The discriminant for this kind.
    pub fn question_type(&self) -> QuestionType {
        match self {
            QuestionKind::ShortText(_) => QuestionType::ShortText,
            QuestionKind::LongText(_) => QuestionType::LongText,
            QuestionKind::Numeric(_) => QuestionType::Numeric,
            QuestionKind::SingleChoice(_) => QuestionType::SingleChoice,
            QuestionKind::MultiChoice(_) => QuestionType::MultiChoice,
            QuestionKind::FileUpload(_) => QuestionType::FileUpload,
        }
    }

    /// Text length bounds, for the two text kinds.
    pub fn text_constraints(&self) -> Option<&TextConstraints> {
        match self {
            QuestionKind::ShortText(constraints) | QuestionKind::LongText(constraints) => {
                Some(constraints)
            }
            _ => None,
        }
    }

    /// Numeric bounds, for the numeric kind.
    pub fn numeric_constraints(&self) -> Option<&NumericConstraints> {
        match self {
            QuestionKind::Numeric(constraints) => Some(constraints),
            _ => None,
        }
    }

    /// Offered options, for the two choice kinds.
    pub fn choice_constraints(&self) -> Option<&ChoiceConstraints> {
        match self {
            QuestionKind::SingleChoice(constraints) | QuestionKind::MultiChoice(constraints) => {
                Some(constraints)
            }
            _ => None,
        }
    }

    /// Upload limits, for the file-upload kind.
    pub fn upload_constraints(&self) -> Option<&UploadConstraints> {
        match self {
            QuestionKind::FileUpload(constraints) => Some(constraints),
            _ => None,
        }
    }
}

/// One question in an assessment section.
///
/// Questions are immutable values: edits go through [`Question::apply`],
/// which returns an updated copy and leaves the original untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    id: QuestionId,
    #[serde(flatten)]
    kind: QuestionKind,
    #[serde(default)]
    text: String,
    #[serde(default)]
    required: bool,
    #[serde(default)]
    order: usize,
    #[serde(
        rename = "conditionalLogic",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    rule: Option<ConditionalRule>,
}

impl Question {
    /// Create a question of the given type with its default constraints,
    /// a fresh id, empty text, and no rule.
    pub fn new(question_type: QuestionType) -> Self {
        Self::of_kind(question_type.default_kind())
    }

    /// Create a question with explicit constraints.
    pub fn of_kind(kind: QuestionKind) -> Self {
        Self {
            id: QuestionId::generate(),
            kind,
            text: String::new(),
            required: false,
            order: 0,
            rule: None,
        }
    }

    /// Replace the prompt text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Mark the question as required.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Attach a conditional visibility rule.
    pub fn with_rule(mut self, rule: ConditionalRule) -> Self {
        self.rule = Some(rule);
        self
    }

    /// Stable identifier, the join key for rules and responses.
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    /// The question's type and constraints.
    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    /// The question's type discriminant.
    pub fn question_type(&self) -> QuestionType {
        self.kind.question_type()
    }

    /// Prompt shown to the candidate; may be empty while editing.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether an empty answer fails validation.
    pub fn required(&self) -> bool {
        self.required
    }

    /// Position within the owning section.
    pub fn order(&self) -> usize {
        self.order
    }

    /// The visibility rule, if the question has one.
    pub fn rule(&self) -> Option<&ConditionalRule> {
        self.rule.as_ref()
    }

    /// True if a conditional rule gates this question.
    pub fn is_conditional(&self) -> bool {
        self.rule.is_some()
    }

    pub(crate) fn set_order(&mut self, order: usize) {
        self.order = order;
    }

    /// Produce an updated copy with the patch applied.
    ///
    /// Fails with [`DocumentError::KindMismatch`] if the patch carries
    /// constraints for a different question type.
    pub fn apply(&self, patch: QuestionPatch) -> Result<Question, DocumentError> {
        let mut updated = self.clone();
        if let Some(kind) = patch.constraints {
            if kind.question_type() != self.question_type() {
                return Err(DocumentError::KindMismatch {
                    expected: self.question_type(),
                    found: kind.question_type(),
                });
            }
            updated.kind = kind;
        }
        if let Some(text) = patch.text {
            updated.text = text;
        }
        if let Some(required) = patch.required {
            updated.required = required;
        }
        match patch.rule {
            Some(RuleChange::Set(rule)) => updated.rule = Some(rule),
            Some(RuleChange::Clear) => updated.rule = None,
            None => {}
        }
        Ok(updated)
    }

    /// Non-fatal authoring problems with this question.
    ///
    /// Warnings never block saving; they flag content an author probably
    /// wants to fix before publishing.
    pub fn authoring_warnings(&self) -> Vec<AuthoringWarning> {
        let mut warnings = Vec::new();
        if self.text.trim().is_empty() {
            warnings.push(AuthoringWarning::UntitledQuestion {
                id: self.id.clone(),
            });
        }
        if let Some(choices) = self.kind.choice_constraints()
            && !choices.has_usable_option()
        {
            warnings.push(AuthoringWarning::NoUsableOptions {
                id: self.id.clone(),
            });
        }
        warnings
    }
}

/// Partial update to a question; `None` fields are left unchanged.
#[derive(Clone, Debug, Default)]
pub struct QuestionPatch {
    pub text: Option<String>,
    pub required: Option<bool>,
    /// Replacement constraints; must match the question's type.
    pub constraints: Option<QuestionKind>,
    pub rule: Option<RuleChange>,
}

impl QuestionPatch {
    /// Patch that only replaces the prompt text.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Patch that only toggles the required flag.
    pub fn required(required: bool) -> Self {
        Self {
            required: Some(required),
            ..Self::default()
        }
    }

    /// Patch that only replaces the constraints.
    pub fn constraints(kind: QuestionKind) -> Self {
        Self {
            constraints: Some(kind),
            ..Self::default()
        }
    }

    /// Patch that only attaches a rule.
    pub fn rule(rule: ConditionalRule) -> Self {
        Self {
            rule: Some(RuleChange::Set(rule)),
            ..Self::default()
        }
    }

    /// Patch that only removes the rule.
    pub fn clear_rule() -> Self {
        Self {
            rule: Some(RuleChange::Clear),
            ..Self::default()
        }
    }
}

/// Whether a patch sets or removes the conditional rule.
#[derive(Clone, Debug)]
pub enum RuleChange {
    Set(ConditionalRule),
    Clear,
}

/// Authoring problem worth surfacing in an editor, never a hard error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthoringWarning {
    /// The question has no prompt text yet.
    UntitledQuestion { id: QuestionId },
    /// A choice question offers no non-empty option.
    NoUsableOptions { id: QuestionId },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Condition;

    #[test]
    fn new_question_gets_type_defaults() {
        let question = Question::new(QuestionType::Numeric);
        assert_eq!(question.question_type(), QuestionType::Numeric);
        assert_eq!(
            question.kind().numeric_constraints(),
            Some(&NumericConstraints::with_bounds(0, 100))
        );
        assert!(!question.required());
        assert!(question.text().is_empty());
        assert!(question.rule().is_none());
    }

    #[test]
    fn short_and_long_text_defaults_differ() {
        let short = Question::new(QuestionType::ShortText);
        let long = Question::new(QuestionType::LongText);
        assert_eq!(
            short.kind().text_constraints().unwrap().max_length,
            Some(250)
        );
        assert_eq!(
            long.kind().text_constraints().unwrap().max_length,
            Some(2000)
        );
    }

    #[test]
    fn upload_defaults() {
        let question = Question::new(QuestionType::FileUpload);
        let upload = question.kind().upload_constraints().unwrap();
        assert_eq!(upload.accepted_formats, vec![".pdf", ".doc", ".docx"]);
        assert_eq!(upload.max_size_mb, Some(10));
        assert_eq!(upload.max_files, Some(1));
    }

    #[test]
    fn apply_patch_leaves_original_untouched() {
        let original = Question::new(QuestionType::ShortText).with_text("Name?");
        let updated = original
            .apply(QuestionPatch::text("Full name?"))
            .unwrap();
        assert_eq!(original.text(), "Name?");
        assert_eq!(updated.text(), "Full name?");
        assert_eq!(updated.id(), original.id());
    }

    #[test]
    fn apply_rejects_constraints_of_another_type() {
        let question = Question::new(QuestionType::ShortText);
        let err = question
            .apply(QuestionPatch::constraints(QuestionKind::Numeric(
                NumericConstraints::default(),
            )))
            .unwrap_err();
        assert_eq!(
            err,
            DocumentError::KindMismatch {
                expected: QuestionType::ShortText,
                found: QuestionType::Numeric,
            }
        );
    }

    #[test]
    fn apply_sets_and_clears_rule() {
        let question = Question::new(QuestionType::ShortText);
        let rule = ConditionalRule::new("q-prev", Condition::Equals, "Yes");
        let gated = question.apply(QuestionPatch::rule(rule.clone())).unwrap();
        assert_eq!(gated.rule(), Some(&rule));
        assert!(gated.is_conditional());

        let ungated = gated.apply(QuestionPatch::clear_rule()).unwrap();
        assert!(ungated.rule().is_none());
    }

    #[test]
    fn warnings_for_untitled_and_optionless() {
        let question = Question::of_kind(QuestionKind::SingleChoice(ChoiceConstraints::new([
            "", "  ",
        ])));
        let warnings = question.authoring_warnings();
        assert_eq!(warnings.len(), 2);
        assert!(matches!(
            warnings[0],
            AuthoringWarning::UntitledQuestion { .. }
        ));
        assert!(matches!(
            warnings[1],
            AuthoringWarning::NoUsableOptions { .. }
        ));

        let fine = Question::new(QuestionType::SingleChoice).with_text("Pick one");
        assert!(fine.authoring_warnings().is_empty());
    }

    #[test]
    fn labels_come_from_the_registry() {
        assert_eq!(QuestionType::LongText.label(), "Long Text");
        assert_eq!(QuestionType::FileUpload.glyph(), "📎");
    }
}
