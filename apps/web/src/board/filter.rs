//! Filter Engine — pure selection of jobs matching a set of search criteria.

use chrono::{DateTime, Local};
use serde::Deserialize;
use thiserror::Error;

use crate::board::dates::days_since;
use crate::board::models::Job;

/// A search form value that cannot become a criterion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CriteriaError {
    #[error("date_posted must be a whole number of days, got '{0}'")]
    InvalidRecency(String),
}

/// Raw search form values, exactly as submitted. Empty strings mean "not set".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub keyword: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub category: String,
    /// Recency window in whole days.
    #[serde(default)]
    pub date_posted: String,
}

/// Validated criteria for one search action. `None` imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria {
    /// Stored lowercased.
    pub keyword: Option<String>,
    /// Stored lowercased.
    pub location: Option<String>,
    pub company: Option<String>,
    pub category: Option<String>,
    pub posted_within_days: Option<u32>,
}

impl Criteria {
    pub fn from_params(params: &SearchParams) -> Result<Self, CriteriaError> {
        let posted_within_days = match non_empty(&params.date_posted) {
            None => None,
            Some(raw) => Some(
                raw.trim()
                    .parse::<u32>()
                    .map_err(|_| CriteriaError::InvalidRecency(raw.to_string()))?,
            ),
        };

        Ok(Criteria {
            keyword: non_empty(&params.keyword).map(str::to_lowercase),
            location: non_empty(&params.location).map(str::to_lowercase),
            company: non_empty(&params.company).map(str::to_string),
            category: non_empty(&params.category).map(str::to_string),
            posted_within_days,
        })
    }

    pub fn is_empty(&self) -> bool {
        *self == Criteria::default()
    }

    /// True when `job` satisfies every active criterion.
    pub fn matches(&self, job: &Job, now: DateTime<Local>) -> bool {
        if let Some(keyword) = &self.keyword {
            let in_title = contains_lowercase(job.title.as_deref(), keyword);
            let in_description = contains_lowercase(job.description.as_deref(), keyword);
            if !in_title && !in_description {
                return false;
            }
        }

        if let Some(location) = &self.location {
            if !contains_lowercase(job.location.as_deref(), location) {
                return false;
            }
        }

        if let Some(company) = &self.company {
            if job.company.as_deref() != Some(company.as_str()) {
                return false;
            }
        }

        if let Some(category) = &self.category {
            if !job.categories.iter().any(|c| c == category) {
                return false;
            }
        }

        if let Some(window) = self.posted_within_days {
            match job.posted_at() {
                Some(posted) if days_since(posted, now) <= i64::from(window) => {}
                _ => return false,
            }
        }

        true
    }
}

/// Returns the jobs matching `criteria`, in their original order.
/// Always scans the full set; never narrows a previous result.
pub fn filter_jobs<'a>(jobs: &'a [Job], criteria: &Criteria, now: DateTime<Local>) -> Vec<&'a Job> {
    jobs.iter().filter(|job| criteria.matches(job, now)).collect()
}

fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}

// `needle` is already lowercased.
fn contains_lowercase(haystack: Option<&str>, needle: &str) -> bool {
    haystack.is_some_and(|h| h.to_lowercase().contains(needle))
}
