//! Drag session state and live cross-column preview.
//!
//! # Responsibility
//! - Track which record is being dragged across one gesture.
//! - Resolve hover targets to their owning column.
//! - Apply the cross-column preview mutation while the pointer moves.
//!
//! # Invariants
//! - Session state is `Idle` or `Dragging`; a new start while dragging
//!   simply replaces the active id (last start wins).
//! - Unresolvable targets never mutate anything; the prior preview state is
//!   retained.
//! - Same-column hovering is a deliberate no-op: same-column reordering only
//!   settles on drop.

use crate::board::partition::BoardSections;
use crate::model::job::{Category, JobId};

/// Hover target of an in-progress drag: another record or a column surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    /// Hovering over another record's card.
    Job(JobId),
    /// Hovering over a column (its empty area or header).
    Column(Category),
}

/// Transient per-gesture state. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragSession {
    active: Option<JobId>,
}

impl DragSession {
    /// Begins a gesture for the given record.
    ///
    /// Replaces any previous active id, so an abandoned gesture (no end
    /// event delivered) is implicitly reset by the next start.
    pub fn start(&mut self, id: JobId) {
        self.active = Some(id);
    }

    /// Returns to idle. Called on every gesture end, success or discard.
    pub fn clear(&mut self) {
        self.active = None;
    }

    /// The record currently being dragged, if any.
    pub fn active(&self) -> Option<JobId> {
        self.active
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }
}

/// Resolves a drag target to its owning column.
///
/// Column targets resolve directly; record targets are located by scanning
/// every column sequence. Returns `None` for ids not present anywhere,
/// which callers treat as a recoverable no-op.
pub fn resolve_container(sections: &BoardSections, target: &DragTarget) -> Option<Category> {
    match target {
        DragTarget::Column(category) => Some(*category),
        DragTarget::Job(id) => sections.locate(*id).map(|(category, _)| category),
    }
}

/// Applies the live cross-column preview for one hover event.
///
/// When the active record and the hover target sit in different columns, the
/// active record is removed from its source column and inserted into the
/// target column immediately before the first record whose id differs from
/// the hover id. When the target column is empty, or holds only the hover
/// record itself, the active record lands at the front.
///
/// Same-column hovers and unresolvable targets leave the preview untouched.
/// Returns whether a mutation was applied.
pub fn preview_over(sections: &mut BoardSections, active: JobId, over: &DragTarget) -> bool {
    let Some(active_container) = resolve_container(sections, &DragTarget::Job(active)) else {
        return false;
    };
    let Some(over_container) = resolve_container(sections, over) else {
        return false;
    };
    if active_container == over_container {
        return false;
    }

    let insert_at = {
        let over_jobs = sections.section(over_container);
        let hover_id = match over {
            DragTarget::Job(id) => Some(*id),
            DragTarget::Column(_) => None,
        };
        over_jobs
            .iter()
            .position(|job| Some(job.id) != hover_id)
            .unwrap_or(0)
    };

    match sections.take_job(active_container, active) {
        Some(job) => {
            sections.insert_job(over_container, insert_at, job);
            true
        }
        None => false,
    }
}
