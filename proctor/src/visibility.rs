//! Conditional visibility: which questions are currently shown.
//!
//! A question with no rule is always visible. A question with a rule is
//! hidden until its prerequisite is answered, then shown or hidden by
//! the rule's comparison. Rules that reference missing, later, or own
//! questions are modeling errors; the question stays hidden and the
//! problem is reported as a warning, never a panic.

use crate::{
    Answer, Condition, ConditionalRule, Question, QuestionId, ResponseSet, Section, coerce_number,
};
use tracing::warn;

/// Outcome of evaluating one question's visibility.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Visibility {
    /// Shown: no rule, the rule holds, or the rule is unknown (fail-open).
    Visible,
    /// Hidden because the prerequisite has no answer yet.
    ///
    /// An absent answer and an empty text answer both count as
    /// unanswered; an empty selection does not, it evaluates normally.
    AwaitingAnswer { depends_on: QuestionId },
    /// Hidden because the prerequisite is answered and the rule does not hold.
    RuleNotMet,
    /// Hidden because the rule itself is broken.
    BrokenRule(DependencyIssue),
}

impl Visibility {
    /// Evaluate a question against the answers given so far.
    ///
    /// `order` is the assessment's flattened question order; it defines
    /// which questions count as earlier than this one. Evaluation is
    /// pure: identical inputs always produce the identical outcome.
    pub fn evaluate(question: &Question, responses: &ResponseSet, order: &[QuestionId]) -> Self {
        let Some(rule) = question.rule() else {
            return Visibility::Visible;
        };
        if let Some(issue) = check_dependency(question, rule, order) {
            warn!("{issue}");
            return Visibility::BrokenRule(issue);
        }
        match responses.get(rule.depends_on()) {
            // Absent and empty-text answers both mean "not answered yet".
            // An empty selection is an answer and falls through.
            None => Visibility::AwaitingAnswer {
                depends_on: rule.depends_on().clone(),
            },
            Some(answer) if answer.as_text().is_some_and(str::is_empty) => {
                Visibility::AwaitingAnswer {
                    depends_on: rule.depends_on().clone(),
                }
            }
            Some(answer) => {
                if condition_holds(rule.condition(), answer, rule.value()) {
                    Visibility::Visible
                } else {
                    Visibility::RuleNotMet
                }
            }
        }
    }

    /// True only for [`Visibility::Visible`].
    pub fn is_visible(&self) -> bool {
        matches!(self, Visibility::Visible)
    }

    /// The integrity problem, if the rule is broken.
    pub fn integrity_issue(&self) -> Option<&DependencyIssue> {
        match self {
            Visibility::BrokenRule(issue) => Some(issue),
            _ => None,
        }
    }
}

/// Convenience form of [`Visibility::evaluate`] collapsed to a boolean.
pub fn is_visible(question: &Question, responses: &ResponseSet, order: &[QuestionId]) -> bool {
    Visibility::evaluate(question, responses, order).is_visible()
}

/// Why a conditional rule cannot be evaluated.
///
/// These come from malformed documents, not from candidate input, so
/// they are surfaced as data-integrity warnings while the affected
/// question simply stays hidden.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DependencyIssue {
    /// The rule references a question that does not exist.
    #[error("question {question} depends on {depends_on}, which does not exist")]
    Dangling {
        question: QuestionId,
        depends_on: QuestionId,
    },
    /// The rule references a question that comes later in the form.
    #[error("question {question} depends on {depends_on}, which comes later in the form")]
    Forward {
        question: QuestionId,
        depends_on: QuestionId,
    },
    /// The rule references its own question.
    #[error("question {question} depends on itself")]
    SelfReference { question: QuestionId },
    /// The question itself is missing from the flattened order it was
    /// evaluated against, so "earlier" is undefined.
    #[error("question {question} is not part of the question order")]
    Unanchored { question: QuestionId },
}

fn check_dependency(
    question: &Question,
    rule: &ConditionalRule,
    order: &[QuestionId],
) -> Option<DependencyIssue> {
    let id = question.id();
    let depends_on = rule.depends_on();
    if depends_on == id {
        return Some(DependencyIssue::SelfReference {
            question: id.clone(),
        });
    }
    let Some(own_position) = order.iter().position(|other| other == id) else {
        return Some(DependencyIssue::Unanchored {
            question: id.clone(),
        });
    };
    let Some(dependency_position) = order.iter().position(|other| other == depends_on) else {
        return Some(DependencyIssue::Dangling {
            question: id.clone(),
            depends_on: depends_on.clone(),
        });
    };
    if dependency_position >= own_position {
        return Some(DependencyIssue::Forward {
            question: id.clone(),
            depends_on: depends_on.clone(),
        });
    }
    None
}

/// Does the answered prerequisite satisfy the rule?
///
/// Unknown conditions always do: a document written by a newer tool
/// should degrade to showing the question, not to hiding it.
fn condition_holds(condition: &Condition, answer: &Answer, expected: &str) -> bool {
    match condition {
        Condition::Equals => answer.as_text() == Some(expected),
        Condition::NotEquals => answer.as_text() != Some(expected),
        Condition::Contains => match answer {
            Answer::Text(text) => text.contains(expected),
            Answer::Selection(items) => items.iter().any(|item| item == expected),
            Answer::File(file) => file.name.contains(expected),
        },
        Condition::GreaterThan => match (answer.coerce_number(), coerce_number(expected)) {
            (Some(given), Some(bound)) => given > bound,
            _ => false,
        },
        Condition::LessThan => match (answer.coerce_number(), coerce_number(expected)) {
            (Some(given), Some(bound)) => given < bound,
            _ => false,
        },
        Condition::Other(_) => true,
    }
}

/// The questions of a section that are currently visible, in order.
pub fn visible_questions<'a>(
    section: &'a Section,
    responses: &ResponseSet,
    order: &[QuestionId],
) -> Vec<&'a Question> {
    section
        .questions()
        .iter()
        .filter(|question| is_visible(question, responses, order))
        .collect()
}

/// How a section presents once visibility is applied.
///
/// "No questions at all" and "every question currently hidden" are
/// different situations for an author; renderers must keep them apart.
#[derive(Clone, Debug, PartialEq)]
pub enum SectionVisibility<'a> {
    /// The section has no questions.
    NoQuestions,
    /// Every question is hidden by its rule right now.
    AllHidden,
    /// At least one question shows.
    Showing(Vec<&'a Question>),
}

impl<'a> SectionVisibility<'a> {
    /// Classify a section against the answers given so far.
    pub fn of(section: &'a Section, responses: &ResponseSet, order: &[QuestionId]) -> Self {
        if section.is_empty() {
            return SectionVisibility::NoQuestions;
        }
        let visible = visible_questions(section, responses, order);
        if visible.is_empty() {
            SectionVisibility::AllHidden
        } else {
            SectionVisibility::Showing(visible)
        }
    }
}
