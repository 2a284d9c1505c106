use std::collections::BTreeSet;

use crate::board::models::Job;

/// Unique category tags across all jobs, sorted lexicographically.
pub fn extract_categories(jobs: &[Job]) -> Vec<String> {
    jobs.iter()
        .flat_map(|job| job.categories.iter())
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
