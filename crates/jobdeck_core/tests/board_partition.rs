use jobdeck_core::{partition, Category, JobApplication};
use std::collections::HashSet;

fn mixed_jobs() -> Vec<JobApplication> {
    vec![
        JobApplication::new("Backend Developer", Category::Interested),
        JobApplication::new("Senior TypeScript Developer", Category::Applied),
        JobApplication::new("Senior FE Developer", Category::Interview),
        JobApplication::new("Next.js FE Developer", Category::Interview),
        JobApplication::new("Full Stack Engineer", Category::Decision),
    ]
}

#[test]
fn every_category_key_is_present_even_when_empty() {
    let jobs = vec![JobApplication::new("Only one", Category::Applied)];
    let sections = partition(&jobs);

    for category in Category::ALL {
        // Access must succeed for all columns, not just populated ones.
        let _ = sections.section(category);
    }
    assert_eq!(sections.iter().count(), Category::ALL.len());
    assert!(sections.section(Category::Decision).is_empty());
}

#[test]
fn flattened_sections_equal_input_as_a_set() {
    let jobs = mixed_jobs();
    let sections = partition(&jobs);

    let input_ids: HashSet<_> = jobs.iter().map(|job| job.id).collect();
    let section_ids: HashSet<_> = sections.flattened_ids().into_iter().collect();
    assert_eq!(input_ids, section_ids);
    assert_eq!(sections.job_count(), jobs.len());
}

#[test]
fn relative_order_within_a_category_is_preserved() {
    let jobs = mixed_jobs();
    let sections = partition(&jobs);

    let interview_ids: Vec<_> = sections
        .section(Category::Interview)
        .iter()
        .map(|job| job.id)
        .collect();
    assert_eq!(interview_ids, vec![jobs[2].id, jobs[3].id]);
}

#[test]
fn partition_is_pure_and_idempotent() {
    let jobs = mixed_jobs();
    assert_eq!(partition(&jobs), partition(&jobs));
}

#[test]
fn iteration_follows_declared_column_order() {
    let sections = partition(&mixed_jobs());
    let order: Vec<_> = sections.iter().map(|(category, _)| category).collect();
    assert_eq!(order, Category::ALL.to_vec());
}

#[test]
fn locate_reports_owning_column_and_index() {
    let jobs = mixed_jobs();
    let sections = partition(&jobs);

    assert_eq!(sections.locate(jobs[3].id), Some((Category::Interview, 1)));
    assert_eq!(sections.locate(uuid::Uuid::new_v4()), None);
}
