//! Authoritative flat record store.
//!
//! # Responsibility
//! - Hold the canonical ordered list of job-application records.
//! - Enforce id uniqueness and record validation on every write.
//!
//! # Invariants
//! - Record ids are unique within the store.
//! - List order is significant: it is the order serialized for the
//!   persistence collaborator and the order the partitioner consumes.
//! - Category and order mutations outside add/update are reserved for the
//!   board commit path.

use crate::model::job::{Category, JobApplication, JobId, JobValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from record store write operations.
#[derive(Debug)]
pub enum StoreError {
    /// A record with the same id already exists. Store unchanged.
    DuplicateId(JobId),
    /// No record with the given id exists. Store unchanged.
    NotFound(JobId),
    /// Record failed local invariant checks. Store unchanged.
    Validation(JobValidationError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "job record already exists: {id}"),
            Self::NotFound(id) => write!(f, "job record not found: {id}"),
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DuplicateId(_) | Self::NotFound(_) => None,
        }
    }
}

impl From<JobValidationError> for StoreError {
    fn from(value: JobValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Canonical ordered collection of job-application records.
#[derive(Debug, Default, Clone)]
pub struct JobStore {
    jobs: Vec<JobApplication>,
}

impl JobStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from an already-ordered record list.
    ///
    /// Reload path for snapshots written by the persistence collaborator.
    ///
    /// # Errors
    /// - `DuplicateId` when the list contains a repeated id.
    /// - `Validation` when any record fails invariant checks.
    pub fn from_jobs(jobs: Vec<JobApplication>) -> StoreResult<Self> {
        let mut store = Self::new();
        for job in jobs {
            store.add_job(job)?;
        }
        Ok(store)
    }

    /// Appends a record.
    ///
    /// Returns the stored record.
    ///
    /// # Errors
    /// - `DuplicateId` when the id is already present; the store is left
    ///   unchanged.
    /// - `Validation` when the record fails invariant checks.
    pub fn add_job(&mut self, job: JobApplication) -> StoreResult<JobApplication> {
        job.validate()?;
        if self.contains(job.id) {
            return Err(StoreError::DuplicateId(job.id));
        }
        self.jobs.push(job.clone());
        Ok(job)
    }

    /// Replaces the record with a matching id.
    ///
    /// Position in the flat list is preserved. Returns the stored record.
    ///
    /// # Errors
    /// - `NotFound` when no record matches; the store is left unchanged.
    /// - `Validation` when the record fails invariant checks.
    pub fn update_job(&mut self, job: JobApplication) -> StoreResult<JobApplication> {
        job.validate()?;
        let slot = self
            .jobs
            .iter_mut()
            .find(|existing| existing.id == job.id)
            .ok_or(StoreError::NotFound(job.id))?;
        *slot = job.clone();
        Ok(job)
    }

    /// Looks up one record by id.
    pub fn get_job(&self, id: JobId) -> Option<&JobApplication> {
        self.jobs.iter().find(|job| job.id == id)
    }

    /// Whether a record with the given id exists.
    pub fn contains(&self, id: JobId) -> bool {
        self.get_job(id).is_some()
    }

    /// The canonical ordered record list.
    pub fn jobs(&self) -> &[JobApplication] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Reassigns a record's category. Commit-path use only.
    pub(crate) fn set_category(&mut self, id: JobId, category: Category) -> bool {
        match self.jobs.iter_mut().find(|job| job.id == id) {
            Some(job) => {
                job.category = category;
                true
            }
            None => false,
        }
    }

    /// Reorders the flat list to match the given id sequence.
    ///
    /// Ids missing from `order` keep their records at the tail in prior
    /// relative order; unknown ids are ignored. Commit-path use only.
    pub(crate) fn reorder(&mut self, order: &[JobId]) {
        let mut reordered = Vec::with_capacity(self.jobs.len());
        for id in order {
            if let Some(index) = self.jobs.iter().position(|job| job.id == *id) {
                reordered.push(self.jobs.remove(index));
            }
        }
        reordered.append(&mut self.jobs);
        self.jobs = reordered;
    }
}
