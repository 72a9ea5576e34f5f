//! Stable partition of the flat record list into board columns.
//!
//! # Responsibility
//! - Compute the category -> ordered records mapping consumed by rendering.
//! - Provide lookup helpers used by the drag engine.
//!
//! # Invariants
//! - Every category in `Category::ALL` is present as a key, empty or not.
//! - Relative record order within a column matches the flat input order
//!   (stable partition).
//! - Column iteration follows `Category::ALL` declared order, never map or
//!   insertion order.

use crate::model::job::{Category, JobApplication, JobId};
use std::collections::BTreeMap;

/// Derived per-column view of the board.
///
/// The canonical instance is always recomputed from the store via
/// [`partition`]; during a drag gesture the session code mutates a preview
/// copy through the crate-internal helpers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardSections {
    sections: BTreeMap<Category, Vec<JobApplication>>,
}

/// Splits `jobs` into per-category ordered sequences.
///
/// Pure and deterministic: calling it twice on the same input yields the
/// same output, and no input order information is lost within a column.
pub fn partition(jobs: &[JobApplication]) -> BoardSections {
    let mut sections: BTreeMap<Category, Vec<JobApplication>> = Category::ALL
        .iter()
        .map(|category| (*category, Vec::new()))
        .collect();

    for job in jobs {
        sections.entry(job.category).or_default().push(job.clone());
    }

    BoardSections { sections }
}

impl BoardSections {
    /// Ordered records currently shown in one column.
    pub fn section(&self, category: Category) -> &[JobApplication] {
        self.sections
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Columns in declared order with their record sequences.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[JobApplication])> + '_ {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.section(category)))
    }

    /// Finds the column and index currently holding the given record.
    pub fn locate(&self, id: JobId) -> Option<(Category, usize)> {
        for (category, jobs) in self.iter() {
            if let Some(index) = jobs.iter().position(|job| job.id == id) {
                return Some((category, index));
            }
        }
        None
    }

    /// Total records across all columns.
    pub fn job_count(&self) -> usize {
        self.sections.values().map(Vec::len).sum()
    }

    /// Record ids flattened in declared column order.
    ///
    /// This is the order written back to the flat store after a commit.
    pub fn flattened_ids(&self) -> Vec<JobId> {
        self.iter()
            .flat_map(|(_, jobs)| jobs.iter().map(|job| job.id))
            .collect()
    }

    /// Removes and returns a record from one column's sequence.
    pub(crate) fn take_job(&mut self, category: Category, id: JobId) -> Option<JobApplication> {
        let jobs = self.sections.get_mut(&category)?;
        let index = jobs.iter().position(|job| job.id == id)?;
        Some(jobs.remove(index))
    }

    /// Inserts a record into one column's sequence at the given index.
    ///
    /// The index is clamped to the sequence length.
    pub(crate) fn insert_job(&mut self, category: Category, index: usize, job: JobApplication) {
        let jobs = self.sections.entry(category).or_default();
        let index = index.min(jobs.len());
        jobs.insert(index, job);
    }

    /// Stable single-element reposition within one column.
    ///
    /// Removes the record at `from` and reinserts it at `to` (counted on the
    /// shortened sequence, clamped), shifting intermediate records by one.
    pub(crate) fn move_within(&mut self, category: Category, from: usize, to: usize) {
        let Some(jobs) = self.sections.get_mut(&category) else {
            return;
        };
        if from == to || from >= jobs.len() {
            return;
        }
        let job = jobs.remove(from);
        let to = to.min(jobs.len());
        jobs.insert(to, job);
    }
}

#[cfg(test)]
mod tests {
    use super::{partition, BoardSections};
    use crate::model::job::{Category, JobApplication};

    fn jobs_abc() -> Vec<JobApplication> {
        vec![
            JobApplication::new("A", Category::Applied),
            JobApplication::new("B", Category::Applied),
            JobApplication::new("C", Category::Applied),
        ]
    }

    #[test]
    fn empty_input_still_yields_every_column() {
        let sections = partition(&[]);
        for category in Category::ALL {
            assert!(sections.section(category).is_empty());
        }
        assert_eq!(sections.job_count(), 0);
    }

    #[test]
    fn move_within_matches_standard_array_move() {
        let jobs = jobs_abc();
        let ids: Vec<_> = jobs.iter().map(|job| job.id).collect();
        let mut sections = partition(&jobs);

        sections.move_within(Category::Applied, 0, 2);

        let moved: Vec<_> = sections
            .section(Category::Applied)
            .iter()
            .map(|job| job.id)
            .collect();
        assert_eq!(moved, vec![ids[1], ids[2], ids[0]]);
    }

    #[test]
    fn move_within_clamps_target_index() {
        let jobs = jobs_abc();
        let mut sections = partition(&jobs);
        sections.move_within(Category::Applied, 1, 99);
        assert_eq!(sections.section(Category::Applied).len(), 3);
    }

    #[test]
    fn default_sections_have_no_columns_but_safe_reads() {
        let sections = BoardSections::default();
        assert!(sections.section(Category::Decision).is_empty());
        assert_eq!(sections.locate(uuid::Uuid::new_v4()), None);
    }
}
