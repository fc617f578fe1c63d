use crate::{
    AssessmentId, AuthoringWarning, DocumentError, JobId, Question, QuestionId, QuestionPatch,
    QuestionType, Section, SectionPatch,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An assessment document: the form one job's candidates fill out.
///
/// The document is an immutable value. Every structural edit is a pure
/// function from the old document and the requested change to a new
/// document; an out-of-range index returns an error and the original is
/// unchanged. A builder session owns its copy until it saves; after that
/// the store's copy is the durable one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    id: AssessmentId,
    job_id: JobId,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    sections: Vec<Section>,
    /// Time limit in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    time_limit: Option<u32>,
    /// Passing score in percent, 0 to 100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    passing_score: Option<u32>,
    #[serde(default = "Utc::now")]
    created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    updated_at: DateTime<Utc>,
}

impl Assessment {
    /// Start a blank assessment for a job.
    ///
    /// This is the shape a builder opens when the store has nothing for
    /// the job yet: no sections, a 60 minute time limit, and a passing
    /// score of 70 percent.
    pub fn draft(job_id: impl Into<JobId>) -> Self {
        let now = Utc::now();
        Self {
            id: AssessmentId::generate(),
            job_id: job_id.into(),
            title: String::new(),
            description: String::new(),
            sections: Vec::new(),
            time_limit: Some(60),
            passing_score: Some(70),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Replace the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append a section.
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Replace the time limit, in minutes.
    pub fn with_time_limit(mut self, minutes: u32) -> Self {
        self.time_limit = Some(minutes);
        self
    }

    /// Replace the passing score, in percent.
    pub fn with_passing_score(mut self, percent: u32) -> Self {
        self.passing_score = Some(percent);
        self
    }

    /// Replace the creation timestamp. Stores stamp this on first save.
    pub fn with_created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at;
        self
    }

    /// Replace the update timestamp. Stores stamp this on every save.
    pub fn with_updated_at(mut self, at: DateTime<Utc>) -> Self {
        self.updated_at = at;
        self
    }

    /// Stable identifier.
    pub fn id(&self) -> &AssessmentId {
        &self.id
    }

    /// The job this assessment screens for; at most one assessment per job.
    pub fn job_id(&self) -> &JobId {
        &self.job_id
    }

    /// Assessment title; must be non-empty to save.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Optional summary shown before the first section.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The sections, in display order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Time limit in minutes, if one is set.
    pub fn time_limit(&self) -> Option<u32> {
        self.time_limit
    }

    /// Passing score in percent, if one is set.
    pub fn passing_score(&self) -> Option<u32> {
        self.passing_score
    }

    /// When the document was first saved (or drafted).
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// When the document last changed at the store.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// The section at `index`, if it exists.
    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    /// The question at `index` within section `section`, if it exists.
    pub fn question(&self, section: usize, index: usize) -> Option<&Question> {
        self.sections.get(section)?.questions().get(index)
    }

    /// Number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Total number of questions across all sections.
    pub fn question_count(&self) -> usize {
        self.sections.iter().map(Section::question_count).sum()
    }

    /// Every question id in flattened order: all of section 0's questions,
    /// then section 1's, and so on.
    ///
    /// This sequence defines what "earlier" means when the evaluator
    /// checks that a conditional rule points backwards.
    pub fn flattened_order(&self) -> Vec<QuestionId> {
        self.sections
            .iter()
            .flat_map(|section| section.questions().iter().map(|q| q.id().clone()))
            .collect()
    }

    /// Copy of this document with a section appended.
    pub fn add_section(&self, section: Section) -> Assessment {
        let mut updated = self.clone();
        updated.sections.push(section);
        updated
    }

    /// Copy of this document with the section at `index` patched.
    pub fn update_section(
        &self,
        index: usize,
        patch: SectionPatch,
    ) -> Result<Assessment, DocumentError> {
        let section = self.section_checked(index)?;
        let mut updated = self.clone();
        updated.sections[index] = section.apply(patch);
        Ok(updated)
    }

    /// Copy of this document with the section at `index` removed.
    pub fn delete_section(&self, index: usize) -> Result<Assessment, DocumentError> {
        self.section_checked(index)?;
        let mut updated = self.clone();
        updated.sections.remove(index);
        Ok(updated)
    }

    /// Copy of this document with a fresh question of the given type
    /// appended to the section at `section_index`.
    ///
    /// The new question takes the next order index in its section.
    pub fn add_question(
        &self,
        section_index: usize,
        question_type: QuestionType,
    ) -> Result<Assessment, DocumentError> {
        self.section_checked(section_index)?;
        let mut updated = self.clone();
        let questions = updated.sections[section_index].questions_mut();
        let mut question = Question::new(question_type);
        question.set_order(questions.len());
        questions.push(question);
        Ok(updated)
    }

    /// Copy of this document with one question patched.
    pub fn update_question(
        &self,
        section_index: usize,
        question_index: usize,
        patch: QuestionPatch,
    ) -> Result<Assessment, DocumentError> {
        let question = self.question_checked(section_index, question_index)?;
        let patched = question.apply(patch)?;
        let mut updated = self.clone();
        updated.sections[section_index].questions_mut()[question_index] = patched;
        Ok(updated)
    }

    /// Copy of this document with one question removed.
    ///
    /// Remaining questions keep their order values; gaps are tolerated
    /// everywhere order is read, and the next move repairs them.
    pub fn delete_question(
        &self,
        section_index: usize,
        question_index: usize,
    ) -> Result<Assessment, DocumentError> {
        self.question_checked(section_index, question_index)?;
        let mut updated = self.clone();
        updated.sections[section_index]
            .questions_mut()
            .remove(question_index);
        Ok(updated)
    }

    /// Copy of this document with one question moved within its section.
    ///
    /// After the move, every question in the section has its order field
    /// re-derived from its new position. This is the one edit that
    /// actively repairs order integrity.
    pub fn move_question(
        &self,
        section_index: usize,
        from: usize,
        to: usize,
    ) -> Result<Assessment, DocumentError> {
        let count = self.section_checked(section_index)?.question_count();
        for index in [from, to] {
            if index >= count {
                return Err(DocumentError::QuestionOutOfRange {
                    section: section_index,
                    index,
                    count,
                });
            }
        }
        let mut updated = self.clone();
        let questions = updated.sections[section_index].questions_mut();
        let question = questions.remove(from);
        questions.insert(to, question);
        for (index, question) in questions.iter_mut().enumerate() {
            question.set_order(index);
        }
        Ok(updated)
    }

    /// Copy of this document with top-level settings patched.
    pub fn apply(&self, patch: AssessmentPatch) -> Assessment {
        let mut updated = self.clone();
        if let Some(title) = patch.title {
            updated.title = title;
        }
        if let Some(description) = patch.description {
            updated.description = description;
        }
        if let Some(minutes) = patch.time_limit {
            updated.time_limit = Some(minutes);
        }
        if let Some(percent) = patch.passing_score {
            updated.passing_score = Some(percent);
        }
        updated
    }

    /// Authoring warnings across every question in the document.
    pub fn authoring_warnings(&self) -> Vec<AuthoringWarning> {
        self.sections
            .iter()
            .flat_map(|section| section.questions())
            .flat_map(Question::authoring_warnings)
            .collect()
    }

    fn section_checked(&self, index: usize) -> Result<&Section, DocumentError> {
        self.sections
            .get(index)
            .ok_or(DocumentError::SectionOutOfRange {
                index,
                count: self.sections.len(),
            })
    }

    fn question_checked(
        &self,
        section_index: usize,
        question_index: usize,
    ) -> Result<&Question, DocumentError> {
        let section = self.section_checked(section_index)?;
        section
            .questions()
            .get(question_index)
            .ok_or(DocumentError::QuestionOutOfRange {
                section: section_index,
                index: question_index,
                count: section.question_count(),
            })
    }
}

/// Partial update to assessment settings; `None` fields are left unchanged.
#[derive(Clone, Debug, Default)]
pub struct AssessmentPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    /// New time limit in minutes.
    pub time_limit: Option<u32>,
    /// New passing score in percent.
    pub passing_score: Option<u32>,
}

impl AssessmentPatch {
    /// Patch that only replaces the title.
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}
