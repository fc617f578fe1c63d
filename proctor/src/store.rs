//! The assessment store seam.
//!
//! Durable storage is a collaborator, not part of this core: the trait
//! below is what the builder calls, and any backend that can speak it
//! works. [`MemoryStore`] is the in-process implementation used by
//! tests and demos; it enforces the same rules a server would.

use crate::{Assessment, AssessmentId, JobId};
use chrono::Utc;
use tracing::debug;

/// Where assessment documents live between builder sessions.
///
/// One job has at most one assessment; the store owns that rule and the
/// save-time timestamps. Everything is request/response: callers retry
/// or surface failures, the core never assumes success.
pub trait AssessmentStore {
    type Error: Into<anyhow::Error>;

    /// The assessment for a job, or `None` if the job has none yet.
    ///
    /// Absence is not an error here: a builder opening a job without an
    /// assessment starts a fresh draft.
    fn fetch_by_job(&self, job_id: &JobId) -> Result<Option<Assessment>, Self::Error>;

    /// All stored assessments, optionally narrowed to one job.
    fn list(&self, job_id: Option<&JobId>) -> Result<Vec<Assessment>, Self::Error>;

    /// Store a new assessment. The title must be non-empty and the job
    /// must not already have one; both timestamps are stamped on success.
    fn create(&mut self, assessment: Assessment) -> Result<Assessment, Self::Error>;

    /// Replace a job's assessment wholesale. The update timestamp is
    /// stamped on success.
    fn replace_for_job(
        &mut self,
        job_id: &JobId,
        assessment: Assessment,
    ) -> Result<Assessment, Self::Error>;

    /// Remove an assessment by its own id.
    fn delete(&mut self, id: &AssessmentId) -> Result<(), Self::Error>;
}

/// Ways a store request can be refused.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No assessment with this id exists.
    #[error("Assessment not found")]
    NotFound { id: AssessmentId },
    /// The job has no assessment to replace.
    #[error("Assessment not found for this job")]
    NotFoundForJob { job_id: JobId },
    /// The job already has an assessment; there can be only one.
    #[error("Assessment already exists for this job")]
    Conflict { job_id: JobId },
    /// Saving requires a non-empty title.
    #[error("Assessment title is required")]
    TitleRequired,
}

/// In-memory store, insertion-ordered.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    assessments: Vec<Assessment>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an assessment directly, bypassing create-time checks, the
    /// way fixtures are loaded straight into a database.
    pub fn with_assessment(mut self, assessment: Assessment) -> Self {
        self.assessments.push(assessment);
        self
    }

    /// Number of stored assessments.
    pub fn len(&self) -> usize {
        self.assessments.len()
    }

    /// True if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.assessments.is_empty()
    }
}

impl AssessmentStore for MemoryStore {
    type Error = StoreError;

    fn fetch_by_job(&self, job_id: &JobId) -> Result<Option<Assessment>, StoreError> {
        Ok(self
            .assessments
            .iter()
            .find(|assessment| assessment.job_id() == job_id)
            .cloned())
    }

    fn list(&self, job_id: Option<&JobId>) -> Result<Vec<Assessment>, StoreError> {
        Ok(self
            .assessments
            .iter()
            .filter(|assessment| job_id.is_none_or(|job| assessment.job_id() == job))
            .cloned()
            .collect())
    }

    fn create(&mut self, assessment: Assessment) -> Result<Assessment, StoreError> {
        if assessment.title().is_empty() {
            return Err(StoreError::TitleRequired);
        }
        if self
            .assessments
            .iter()
            .any(|existing| existing.job_id() == assessment.job_id())
        {
            return Err(StoreError::Conflict {
                job_id: assessment.job_id().clone(),
            });
        }
        let now = Utc::now();
        let stored = assessment.with_created_at(now).with_updated_at(now);
        debug!("created assessment {} for job {}", stored.id(), stored.job_id());
        self.assessments.push(stored.clone());
        Ok(stored)
    }

    fn replace_for_job(
        &mut self,
        job_id: &JobId,
        assessment: Assessment,
    ) -> Result<Assessment, StoreError> {
        let Some(index) = self
            .assessments
            .iter()
            .position(|existing| existing.job_id() == job_id)
        else {
            return Err(StoreError::NotFoundForJob {
                job_id: job_id.clone(),
            });
        };
        if assessment.title().is_empty() {
            return Err(StoreError::TitleRequired);
        }
        let stored = assessment.with_updated_at(Utc::now());
        debug!("replaced assessment for job {job_id}");
        self.assessments[index] = stored.clone();
        Ok(stored)
    }

    fn delete(&mut self, id: &AssessmentId) -> Result<(), StoreError> {
        let Some(index) = self
            .assessments
            .iter()
            .position(|existing| existing.id() == id)
        else {
            return Err(StoreError::NotFound { id: id.clone() });
        };
        self.assessments.remove(index);
        debug!("deleted assessment {id}");
        Ok(())
    }
}
