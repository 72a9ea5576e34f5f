//! Job application domain model.
//!
//! # Responsibility
//! - Define the canonical job-application record and the fixed stage set.
//! - Provide lightweight validation used by store write paths.
//!
//! # Invariants
//! - `id` is stable and never reused for another record.
//! - `Category::ALL` is the single declared column order; consumers must not
//!   invent their own iteration order.
//! - Status payload is discriminated by an explicit tagged variant, not by
//!   runtime shape inspection.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a job-application record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type JobId = Uuid;

/// Fixed board stage a job application can occupy.
///
/// The derived `Ord` follows declaration order, which is also the rendered
/// column order. Stages are static and never created or destroyed at
/// runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Bookmarked but not yet applied.
    Interested,
    /// Application submitted.
    Applied,
    /// Interview loop in progress.
    Interview,
    /// Terminal stage awaiting or holding an outcome.
    Decision,
}

impl Category {
    /// All stages in declared column order.
    pub const ALL: [Category; 4] = [
        Category::Interested,
        Category::Applied,
        Category::Interview,
        Category::Decision,
    ];

    /// Stable lowercase label used in logs and the CLI probe.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Interested => "interested",
            Category::Applied => "applied",
            Category::Interview => "interview",
            Category::Decision => "decision",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome recorded once an application reaches the decision stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionOutcome {
    Accepted,
    Denied,
    Offer,
}

/// Stage-specific status payload.
///
/// Explicitly tagged so the variant in use never depends on which fields
/// happen to be populated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Status {
    /// No stage-specific data (interested/applied records).
    #[default]
    Unset,
    /// Interview progress for records in the interview stage.
    Interview {
        /// 1-based interview round.
        round: u32,
        /// Optional round label, e.g. "Technical".
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    /// Final outcome for records in the decision stage.
    Decision { outcome: DecisionOutcome },
}

/// Employer details carried on a record. Opaque to board logic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub size: String,
    pub industry: String,
}

/// Validation failures for job-application records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobValidationError {
    /// Role is empty or whitespace-only.
    BlankRole,
    /// Interview round must be at least 1.
    InvalidInterviewRound(u32),
    /// Match percentage must be within 0..=100.
    InvalidPercentage(u8),
}

impl Display for JobValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankRole => write!(f, "job role must not be blank"),
            Self::InvalidInterviewRound(round) => {
                write!(f, "interview round must be >= 1, got {round}")
            }
            Self::InvalidPercentage(value) => {
                write!(f, "match percentage must be <= 100, got {value}")
            }
        }
    }
}

impl Error for JobValidationError {}

/// Canonical job-application record.
///
/// Board logic only reads `id` and `category`; every other field is payload
/// that travels with the record through partition and drag operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobApplication {
    /// Stable record id used for drag targeting and store lookups.
    pub id: JobId,
    /// Position title.
    pub role: String,
    /// Owning board stage. Mutated only by the commit path.
    pub category: Category,
    /// Stage-specific status payload.
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub company: Company,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub on_site: bool,
    #[serde(default)]
    pub hybrid: bool,
    #[serde(default)]
    pub remote: bool,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Self-assessed fit, 0..=100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<u8>,
}

impl JobApplication {
    /// Creates a new record with a generated stable id.
    ///
    /// Payload fields start empty and `status` starts as `Unset`.
    pub fn new(role: impl Into<String>, category: Category) -> Self {
        Self::with_id(Uuid::new_v4(), role, category)
    }

    /// Creates a new record with a caller-provided stable id.
    ///
    /// Used by import/reload paths where identity already exists externally.
    pub fn with_id(id: JobId, role: impl Into<String>, category: Category) -> Self {
        Self {
            id,
            role: role.into(),
            category,
            status: Status::Unset,
            company: Company::default(),
            location: String::new(),
            on_site: false,
            hybrid: false,
            remote: false,
            skills: Vec::new(),
            percentage: None,
        }
    }

    /// Checks record-local invariants.
    ///
    /// # Errors
    /// - `BlankRole` when `role` trims to empty.
    /// - `InvalidInterviewRound` when an interview status has round 0.
    /// - `InvalidPercentage` when `percentage` exceeds 100.
    pub fn validate(&self) -> Result<(), JobValidationError> {
        if self.role.trim().is_empty() {
            return Err(JobValidationError::BlankRole);
        }
        if let Status::Interview { round, .. } = self.status {
            if round == 0 {
                return Err(JobValidationError::InvalidInterviewRound(round));
            }
        }
        if let Some(value) = self.percentage {
            if value > 100 {
                return Err(JobValidationError::InvalidPercentage(value));
            }
        }
        Ok(())
    }
}
