//! Board use-case service.
//!
//! # Responsibility
//! - Own all mutable board state: the flat store, the derived/preview
//!   partition and the drag session.
//! - Expose the inbound contract (add/edit/drag lifecycle) and the outbound
//!   read views (sections, active record, flat snapshot).
//!
//! # Invariants
//! - Every store change recomputes the canonical partition.
//! - Only the commit path writes category/order back to the store; only the
//!   drag hover path mutates the preview partition.
//! - Drag events run to completion synchronously; the host delivers them in
//!   start -> over* -> end order.

use crate::board::commit::commit;
use crate::board::partition::{partition, BoardSections};
use crate::board::session::{preview_over, DragSession, DragTarget};
use crate::model::job::{JobApplication, JobId};
use crate::store::{JobStore, StoreResult};
use log::{debug, info, warn};

/// Single owner of board state and the only mutation entry point.
#[derive(Debug, Default)]
pub struct BoardService {
    store: JobStore,
    sections: BoardSections,
    session: DragSession,
}

impl BoardService {
    /// Creates an empty board.
    pub fn new() -> Self {
        let store = JobStore::new();
        let sections = partition(store.jobs());
        Self {
            store,
            sections,
            session: DragSession::default(),
        }
    }

    /// Restores a board from an ordered record snapshot.
    ///
    /// # Errors
    /// Propagates store errors for duplicate ids or invalid records.
    pub fn from_jobs(jobs: Vec<JobApplication>) -> StoreResult<Self> {
        let store = JobStore::from_jobs(jobs)?;
        let sections = partition(store.jobs());
        Ok(Self {
            store,
            sections,
            session: DragSession::default(),
        })
    }

    /// Appends a record and recomputes the partition.
    ///
    /// # Errors
    /// - `DuplicateId` when the id already exists; board unchanged.
    /// - `Validation` when the record fails invariant checks.
    pub fn add_job(&mut self, job: JobApplication) -> StoreResult<JobApplication> {
        let added = self.store.add_job(job)?;
        self.sections = partition(self.store.jobs());
        info!(
            "event=job_add module=board status=ok id={} category={}",
            added.id, added.category
        );
        Ok(added)
    }

    /// Replaces a record by id and recomputes the partition.
    ///
    /// # Errors
    /// - `NotFound` when no record matches; board unchanged.
    /// - `Validation` when the record fails invariant checks.
    pub fn edit_job(&mut self, job: JobApplication) -> StoreResult<JobApplication> {
        let updated = self.store.update_job(job)?;
        self.sections = partition(self.store.jobs());
        info!(
            "event=job_edit module=board status=ok id={} category={}",
            updated.id, updated.category
        );
        Ok(updated)
    }

    /// Begins a drag gesture for the given record.
    ///
    /// A start while another gesture is active replaces it.
    pub fn drag_start(&mut self, id: JobId) {
        self.session.start(id);
        debug!("event=drag_start module=board status=ok id={id}");
    }

    /// Processes one hover event of the active gesture.
    ///
    /// Cross-column hovers relocate the record in the preview partition;
    /// same-column hovers and unresolvable targets are silent no-ops.
    pub fn drag_over(&mut self, active: JobId, over: &DragTarget) {
        if preview_over(&mut self.sections, active, over) {
            debug!("event=drag_over module=board status=previewed id={active}");
        }
    }

    /// Ends the gesture and commits its effect, if any.
    ///
    /// On a resolved same-container drop the record's category is written to
    /// the store, the flat order is resynced to the flattened sections, and
    /// the canonical partition is recomputed. Discarded commits leave the
    /// store untouched. The session always returns to idle.
    pub fn drag_end(&mut self, active: JobId, over: &DragTarget) {
        match commit(&mut self.sections, active, over) {
            Some(target) => {
                if self.store.set_category(active, target) {
                    let order = self.sections.flattened_ids();
                    self.store.reorder(&order);
                    self.sections = partition(self.store.jobs());
                    info!(
                        "event=drag_commit module=board status=ok id={active} category={target}"
                    );
                } else {
                    // Preview held a record the store does not know; drop the
                    // preview back to canonical state.
                    self.sections = partition(self.store.jobs());
                    warn!(
                        "event=drag_commit module=board status=stale_preview id={active}"
                    );
                }
            }
            None => {
                debug!("event=drag_commit module=board status=discarded id={active}");
            }
        }
        self.session.clear();
    }

    /// Current per-column view for rendering.
    pub fn sections(&self) -> &BoardSections {
        &self.sections
    }

    /// The record under drag, for rendering a floating preview.
    pub fn active_job(&self) -> Option<&JobApplication> {
        self.session.active().and_then(|id| self.store.get_job(id))
    }

    /// Ordered flat snapshot for the persistence collaborator.
    pub fn jobs(&self) -> &[JobApplication] {
        self.store.jobs()
    }

    /// Looks up one record by id.
    pub fn get_job(&self, id: JobId) -> Option<&JobApplication> {
        self.store.get_job(id)
    }
}
