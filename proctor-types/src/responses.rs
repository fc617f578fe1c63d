use crate::{Answer, QuestionId};
use std::collections::HashMap;

/// Answers collected during a preview or fill-out session, keyed by
/// question id.
///
/// The set is session-local and rebuilt from scratch each session; it is
/// never persisted alongside the assessment document. Entries survive
/// section navigation, so answers given on one section keep driving
/// conditional visibility on every other section.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResponseSet {
    values: HashMap<QuestionId, Answer>,
}

impl ResponseSet {
    /// Create an empty response set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, replacing any previous answer to the question.
    pub fn insert(&mut self, id: impl Into<QuestionId>, answer: impl Into<Answer>) {
        self.values.insert(id.into(), answer.into());
    }

    /// Copy of this set with one answer recorded.
    pub fn with_answer(&self, id: impl Into<QuestionId>, answer: impl Into<Answer>) -> Self {
        let mut next = self.clone();
        next.insert(id, answer);
        next
    }

    /// Copy of this set with one answer removed.
    pub fn without_answer(&self, id: &QuestionId) -> Self {
        let mut next = self.clone();
        next.values.remove(id);
        next
    }

    /// Get the answer to a question, if any.
    pub fn get(&self, id: &QuestionId) -> Option<&Answer> {
        self.values.get(id)
    }

    /// True if the question has any recorded answer, even an empty one.
    pub fn contains(&self, id: &QuestionId) -> bool {
        self.values.contains_key(id)
    }

    /// Remove and return the answer to a question.
    pub fn remove(&mut self, id: &QuestionId) -> Option<Answer> {
        self.values.remove(id)
    }

    /// Iterate over all recorded answers.
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &Answer)> {
        self.values.iter()
    }

    /// Number of recorded answers.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if nothing has been answered yet.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut responses = ResponseSet::new();
        responses.insert("q-1", "Yes");
        assert_eq!(
            responses.get(&"q-1".into()),
            Some(&Answer::Text("Yes".into()))
        );
        assert!(responses.get(&"q-2".into()).is_none());
    }

    #[test]
    fn with_answer_leaves_original_untouched() {
        let empty = ResponseSet::new();
        let answered = empty.with_answer("q-1", "Yes");
        assert!(empty.is_empty());
        assert_eq!(answered.len(), 1);
    }

    #[test]
    fn without_answer_removes_only_that_entry() {
        let responses = ResponseSet::new()
            .with_answer("q-1", "Yes")
            .with_answer("q-2", vec!["Rust"]);
        let cleared = responses.without_answer(&"q-1".into());
        assert!(!cleared.contains(&"q-1".into()));
        assert!(cleared.contains(&"q-2".into()));
        assert_eq!(responses.len(), 2);
    }

    #[test]
    fn insert_replaces_previous_answer() {
        let mut responses = ResponseSet::new();
        responses.insert("q-1", "first");
        responses.insert("q-1", "second");
        assert_eq!(responses.len(), 1);
        assert_eq!(
            responses.get(&"q-1".into()).and_then(Answer::as_text),
            Some("second")
        );
    }
}
