use serde::{Deserialize, Serialize};

/// A candidate's answer to a single question.
///
/// Text questions and numeric questions both carry their raw input as
/// text; numeric coercion happens only where a rule or validation needs
/// a number. Choice questions carry the selected option labels and
/// file uploads carry a reference to the chosen file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    /// Free text, including the raw text typed into a numeric field.
    Text(String),
    /// Selected option labels. Single-choice answers hold one entry.
    Selection(Vec<String>),
    /// An uploaded file.
    File(FileRef),
}

/// Reference to a file chosen for a file-upload question.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_mb: Option<f64>,
}

impl FileRef {
    /// Reference a file by name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size_mb: None,
        }
    }

    /// Attach the file size in megabytes.
    pub fn with_size_mb(mut self, size_mb: f64) -> Self {
        self.size_mb = Some(size_mb);
        self
    }
}

impl Answer {
    /// Get the text, if this answer is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Answer::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Get the selected option labels, if this answer is a selection.
    pub fn as_selection(&self) -> Option<&[String]> {
        match self {
            Answer::Selection(items) => Some(items),
            _ => None,
        }
    }

    /// Get the file reference, if this answer is a file.
    pub fn as_file(&self) -> Option<&FileRef> {
        match self {
            Answer::File(file) => Some(file),
            _ => None,
        }
    }

    /// True for empty text and empty selections.
    ///
    /// This is what "the candidate left it blank" means to required-field
    /// validation. A file answer is never empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Answer::Text(text) => text.is_empty(),
            Answer::Selection(items) => items.is_empty(),
            Answer::File(_) => false,
        }
    }

    /// Numeric form of this answer, if it has one.
    ///
    /// Only text coerces; selections and files have no numeric form.
    pub fn coerce_number(&self) -> Option<f64> {
        self.as_text().and_then(coerce_number)
    }

    /// Name of the answer shape, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Answer::Text(_) => "text",
            Answer::Selection(_) => "selection",
            Answer::File(_) => "file",
        }
    }
}

impl From<String> for Answer {
    fn from(text: String) -> Self {
        Answer::Text(text)
    }
}

impl From<&str> for Answer {
    fn from(text: &str) -> Self {
        Answer::Text(text.to_string())
    }
}

impl From<Vec<String>> for Answer {
    fn from(items: Vec<String>) -> Self {
        Answer::Selection(items)
    }
}

impl From<Vec<&str>> for Answer {
    fn from(items: Vec<&str>) -> Self {
        Answer::Selection(items.into_iter().map(str::to_string).collect())
    }
}

impl From<FileRef> for Answer {
    fn from(file: FileRef) -> Self {
        Answer::File(file)
    }
}

/// Coerce rule values and raw numeric input to a number.
///
/// Mirrors lenient form-input parsing: surrounding whitespace is ignored
/// and anything unparseable has no numeric form. NaN never compares, so
/// it is treated as non-numeric too.
pub fn coerce_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|n| !n.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_match_shape() {
        let text = Answer::from("hello");
        assert_eq!(text.as_text(), Some("hello"));
        assert_eq!(text.as_selection(), None);

        let selection = Answer::from(vec!["Rust", "Go"]);
        assert_eq!(selection.as_selection().map(<[String]>::len), Some(2));
        assert_eq!(selection.as_text(), None);

        let file = Answer::from(FileRef::new("resume.pdf"));
        assert_eq!(file.as_file().map(|f| f.name.as_str()), Some("resume.pdf"));
    }

    #[test]
    fn empty_means_blank_text_or_no_picks() {
        assert!(Answer::from("").is_empty());
        assert!(Answer::from(Vec::<String>::new()).is_empty());
        assert!(!Answer::from("0").is_empty());
        assert!(!Answer::from(vec!["Option 1"]).is_empty());
        assert!(!Answer::from(FileRef::new("cv.pdf")).is_empty());
    }

    #[test]
    fn numeric_coercion() {
        assert_eq!(Answer::from("42").coerce_number(), Some(42.0));
        assert_eq!(Answer::from(" 3.5 ").coerce_number(), Some(3.5));
        assert_eq!(Answer::from("-7").coerce_number(), Some(-7.0));
        assert_eq!(Answer::from("seven").coerce_number(), None);
        assert_eq!(Answer::from("NaN").coerce_number(), None);
        assert_eq!(Answer::from(vec!["5"]).coerce_number(), None);
    }

    #[test]
    fn untagged_wire_shapes() {
        assert_eq!(
            serde_json::to_string(&Answer::from("yes")).unwrap(),
            "\"yes\""
        );
        assert_eq!(
            serde_json::to_string(&Answer::from(vec!["a", "b"])).unwrap(),
            "[\"a\",\"b\"]"
        );
        let file: Answer = serde_json::from_str(r#"{"name":"cv.pdf","sizeMb":1.2}"#).unwrap();
        assert_eq!(
            file,
            Answer::File(FileRef::new("cv.pdf").with_size_mb(1.2))
        );
    }
}
