use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for an assessment document.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssessmentId(String);

impl AssessmentId {
    /// Create an identifier from an existing string, e.g. one read back from a store.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssessmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AssessmentId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for AssessmentId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Unique identifier for a section within an assessment.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    /// Create an identifier from an existing string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SectionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for SectionId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Unique identifier for a question.
///
/// Conditional rules reference their prerequisite by this id, and the
/// response set is keyed by it, so it must stay stable across edits.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(String);

impl QuestionId {
    /// Create an identifier from an existing string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for QuestionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for QuestionId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Identifier of the job an assessment belongs to.
///
/// Jobs live in a separate system; this crate never generates job ids,
/// it only carries them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    /// Create an identifier from an existing string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for JobId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for JobId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(QuestionId::generate(), QuestionId::generate());
        assert_ne!(SectionId::generate(), SectionId::generate());
        assert_ne!(AssessmentId::generate(), AssessmentId::generate());
    }

    #[test]
    fn from_str() {
        let id: QuestionId = "q-experience".into();
        assert_eq!(id.as_str(), "q-experience");
    }

    #[test]
    fn display() {
        let id = JobId::new("job-42");
        assert_eq!(format!("{id}"), "job-42");
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = QuestionId::new("q-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"q-1\"");
    }
}
