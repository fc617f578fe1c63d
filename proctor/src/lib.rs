//! # proctor
//!
//! Conditional-logic engine and live preview for job assessments.
//!
//! An assessment is a plain document: sections of typed questions, some
//! gated by conditional rules on earlier answers. This crate evaluates
//! those rules, validates answers, and renders a per-section view model
//! so a builder can preview the form exactly as a candidate will see it.
//! Storage is behind the [`AssessmentStore`] seam; everything in the
//! core is pure and synchronous.
//!
//! ```
//! use proctor::{
//!     Assessment, Condition, ConditionalRule, PreviewSession, Question, QuestionType, Section,
//!     SectionBody,
//! };
//!
//! let experience = Question::new(QuestionType::Numeric).with_text("Years of Rust?");
//! let details = Question::new(QuestionType::LongText)
//!     .with_text("What did you build with it?")
//!     .with_rule(ConditionalRule::new(
//!         experience.id().clone(),
//!         Condition::GreaterThan,
//!         "2",
//!     ));
//! let experience_id = experience.id().clone();
//!
//! let assessment = Assessment::draft("job-rust-engineer")
//!     .with_title("Rust Screen")
//!     .with_section(
//!         Section::new("Experience")
//!             .with_question(experience)
//!             .with_question(details),
//!     );
//!
//! let mut session = PreviewSession::new(assessment);
//!
//! // The follow-up stays hidden until its prerequisite is answered.
//! let preview = session.render();
//! let view = preview.as_section().unwrap();
//! assert!(matches!(&view.body, SectionBody::Questions(shown) if shown.len() == 1));
//!
//! session.respond(experience_id, "5");
//! let preview = session.render();
//! let view = preview.as_section().unwrap();
//! assert!(matches!(&view.body, SectionBody::Questions(shown) if shown.len() == 2));
//! ```

// Re-export all types from proctor-types
pub use proctor_types::*;

mod visibility;
pub use visibility::{DependencyIssue, SectionVisibility, Visibility, is_visible, visible_questions};

mod validate;
pub use validate::{ValidationError, validate};

mod preview;
pub use preview::{
    PreviewSession, QuestionView, SectionBody, SectionPreview, SectionView, render_section,
};

mod store;
pub use store::{AssessmentStore, MemoryStore, StoreError};
