//! Drop commit resolution.
//!
//! # Responsibility
//! - Reconcile the previewed partition into a final intra-column order on
//!   gesture end.
//! - Report the resolved target column so the caller can write it back to
//!   the authoritative store.
//!
//! # Invariants
//! - Unresolvable or mismatched containers discard the commit: no store
//!   write, preview left as-is.
//! - Reordering is a stable single-element move, never a swap.

use crate::board::partition::BoardSections;
use crate::board::session::{resolve_container, DragTarget};
use crate::model::job::{Category, JobId};

/// Resolves a drag-end event against the previewed partition.
///
/// The cross-column relocation, if any, already happened during the hover
/// phase, so the common case here is a drop within the column the record
/// currently occupies: the record is moved from its current index to the
/// drop target's index. A `Column` drop target carries no index, so only
/// the category result applies.
///
/// Returns the resolved target category when the commit applies, or `None`
/// when it is discarded (unknown ids, or containers that differ at commit
/// time).
pub fn commit(sections: &mut BoardSections, active: JobId, over: &DragTarget) -> Option<Category> {
    let active_container = resolve_container(sections, &DragTarget::Job(active))?;
    let over_container = resolve_container(sections, over)?;
    if active_container != over_container {
        return None;
    }

    let (_, active_index) = sections.locate(active)?;
    let over_index = match over {
        DragTarget::Job(id) => sections.locate(*id).map(|(_, index)| index),
        DragTarget::Column(_) => None,
    };

    if let Some(over_index) = over_index {
        if active_index != over_index {
            sections.move_within(over_container, active_index, over_index);
        }
    }

    Some(over_container)
}
