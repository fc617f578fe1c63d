//! Core types for the proctor crate.
//!
//! This crate provides the foundational types for defining assessments:
//! - `Assessment` and `Section` - The document a builder edits
//! - `Question` and `QuestionKind` - Individual questions and their types
//! - `ConditionalRule` and `Condition` - Visibility rules between questions
//! - `ResponseSet` and `Answer` - Answers collected during preview/fill-out
//!
//! Everything here is presentation-agnostic and side-effect free: edits
//! are pure old-value-plus-patch functions, and nothing does I/O.

mod id;
pub use id::{AssessmentId, JobId, QuestionId, SectionId};

mod answer;
pub use answer::{Answer, FileRef, coerce_number};

mod condition;
pub use condition::{Condition, ConditionalRule};

mod question;
pub use question::{
    AuthoringWarning, ChoiceConstraints, NumericConstraints, Question, QuestionKind,
    QuestionPatch, QuestionType, RuleChange, TextConstraints, UploadConstraints,
};

mod registry;
pub use registry::{QUESTION_TYPES, QuestionTypeInfo, type_info};

mod responses;
pub use responses::ResponseSet;

mod section;
pub use section::{Section, SectionPatch};

mod assessment;
pub use assessment::{Assessment, AssessmentPatch};

mod error;
pub use error::DocumentError;
