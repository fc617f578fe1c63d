use crate::QuestionId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison applied to the prerequisite's answer by a [`ConditionalRule`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Condition {
    /// Answer text is exactly the rule value.
    Equals,
    /// Answer text differs from the rule value (or is not text at all).
    NotEquals,
    /// Selections contain the rule value; text answers contain it as a substring.
    Contains,
    /// Both sides coerce to numbers and the answer is strictly greater.
    GreaterThan,
    /// Both sides coerce to numbers and the answer is strictly less.
    LessThan,
    /// A condition this crate does not recognize.
    ///
    /// Unknown conditions are preserved verbatim so documents round-trip
    /// losslessly; evaluation treats them as always satisfied.
    #[serde(untagged)]
    Other(String),
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Equals => write!(f, "equals"),
            Condition::NotEquals => write!(f, "notEquals"),
            Condition::Contains => write!(f, "contains"),
            Condition::GreaterThan => write!(f, "greaterThan"),
            Condition::LessThan => write!(f, "lessThan"),
            Condition::Other(name) => write!(f, "{name}"),
        }
    }
}

/// Visibility rule attached to a question.
///
/// A question with a rule stays hidden until the question it depends on
/// has been answered and the comparison holds. Each question carries at
/// most one rule, and the rule names exactly one prerequisite.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalRule {
    depends_on: QuestionId,
    condition: Condition,
    value: String,
}

impl ConditionalRule {
    /// Create a rule comparing the prerequisite's answer against `value`.
    pub fn new(
        depends_on: impl Into<QuestionId>,
        condition: Condition,
        value: impl Into<String>,
    ) -> Self {
        Self {
            depends_on: depends_on.into(),
            condition,
            value: value.into(),
        }
    }

    /// Id of the question whose answer this rule inspects.
    pub fn depends_on(&self) -> &QuestionId {
        &self.depends_on
    }

    /// The comparison to apply.
    pub fn condition(&self) -> &Condition {
        &self.condition
    }

    /// The value the answer is compared against, always stored as text.
    pub fn value(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_conditions_serialize_camel_case() {
        let json = serde_json::to_string(&Condition::GreaterThan).unwrap();
        assert_eq!(json, "\"greaterThan\"");
        let back: Condition = serde_json::from_str("\"notEquals\"").unwrap();
        assert_eq!(back, Condition::NotEquals);
    }

    #[test]
    fn unknown_condition_round_trips() {
        let condition: Condition = serde_json::from_str("\"matchesRegex\"").unwrap();
        assert_eq!(condition, Condition::Other("matchesRegex".into()));
        assert_eq!(
            serde_json::to_string(&condition).unwrap(),
            "\"matchesRegex\""
        );
    }

    #[test]
    fn rule_wire_shape() {
        let rule = ConditionalRule::new("q-1", Condition::Equals, "Yes");
        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(json["dependsOn"], "q-1");
        assert_eq!(json["condition"], "equals");
        assert_eq!(json["value"], "Yes");
    }
}
