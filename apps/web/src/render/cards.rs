//! Job cards and the results fragment (cards, empty state, or error block).

use askama::Template;

use crate::board::dates::format_short;
use crate::board::models::Job;

const UNTITLED: &str = "Untitled Position";
const UNKNOWN_COMPANY: &str = "Unknown Company";
const UNKNOWN_SOURCE: &str = "Unknown Source";

/// Display values for one job, fallbacks already applied.
#[derive(Debug, Clone, PartialEq)]
pub struct JobCard {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    /// Short form ("Jan 5, 2025"). Absent when the date is missing or unparseable.
    pub posted: Option<String>,
    pub categories: Vec<String>,
    /// Absent when the job has no http(s) link; the card then shows no "View Job" button.
    pub url: Option<String>,
    pub source: String,
}

impl JobCard {
    pub fn from_job(job: &Job) -> Self {
        JobCard {
            title: job.title.clone().unwrap_or_else(|| UNTITLED.to_string()),
            company: job
                .company
                .clone()
                .unwrap_or_else(|| UNKNOWN_COMPANY.to_string()),
            location: job.location.clone(),
            posted: job.posted_at().map(format_short),
            categories: job.categories.clone(),
            url: job.url.as_deref().filter(|u| is_web_link(u)).map(str::to_string),
            source: job
                .source_website
                .clone()
                .unwrap_or_else(|| UNKNOWN_SOURCE.to_string()),
        }
    }
}

// Only http(s) targets become links; `javascript:`, `data:` and relative values are dropped.
fn is_web_link(url: &str) -> bool {
    let url = url.trim_start().to_ascii_lowercase();
    url.starts_with("http://") || url.starts_with("https://")
}

#[derive(Template)]
#[template(path = "results.html")]
pub struct ResultsTemplate {
    pub error: Option<String>,
    pub cards: Vec<JobCard>,
}

/// One card per job in input order, or the empty-state block when there are none.
pub fn render_jobs(jobs: &[&Job]) -> Result<String, askama::Error> {
    ResultsTemplate {
        error: None,
        cards: jobs.iter().map(|job| JobCard::from_job(job)).collect(),
    }
    .render()
}

/// A single error block carrying `message`, in place of any results.
pub fn render_error(message: &str) -> Result<String, askama::Error> {
    ResultsTemplate {
        error: Some(message.to_string()),
        cards: Vec::new(),
    }
    .render()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_job() -> Job {
        Job {
            title: Some("Engineer A".to_string()),
            company: Some("Acme".to_string()),
            location: Some("Jakarta".to_string()),
            categories: vec!["Eng".to_string(), "Backend".to_string()],
            date_posted: Some("2025-01-05".to_string()),
            url: Some("https://acme.example/jobs/1".to_string()),
            source_website: Some("acme.example".to_string()),
            ..Job::default()
        }
    }

    #[test]
    fn test_card_uses_fallbacks() {
        let card = JobCard::from_job(&Job::default());
        assert_eq!(card.title, "Untitled Position");
        assert_eq!(card.company, "Unknown Company");
        assert_eq!(card.source, "Unknown Source");
        assert!(card.location.is_none());
        assert!(card.posted.is_none());
        assert!(card.url.is_none());
        assert!(card.categories.is_empty());
    }

    #[test]
    fn test_card_formats_short_date() {
        let card = JobCard::from_job(&full_job());
        assert_eq!(card.posted.as_deref(), Some("Jan 5, 2025"));
    }

    #[test]
    fn test_unparseable_date_is_omitted() {
        let job = Job {
            date_posted: Some("sometime".to_string()),
            ..Job::default()
        };
        assert!(JobCard::from_job(&job).posted.is_none());
    }

    #[test]
    fn test_non_web_url_gets_no_link() {
        for url in ["javascript:alert(1)", "JavaScript:alert(1)", "data:text/html,hi", "/jobs/1"] {
            let job = Job {
                url: Some(url.to_string()),
                ..Job::default()
            };
            assert!(JobCard::from_job(&job).url.is_none(), "{url}");
            let html = render_jobs(&[&job]).unwrap();
            assert!(!html.contains("job-link"), "{url}");
            assert!(!html.to_ascii_lowercase().contains("javascript:"), "{url}");
        }

        let upper = Job {
            url: Some("HTTPS://acme.example/jobs/1".to_string()),
            ..Job::default()
        };
        assert!(JobCard::from_job(&upper).url.is_some());
    }

    #[test]
    fn test_render_full_card() {
        let job = full_job();
        let html = render_jobs(&[&job]).unwrap();
        assert_eq!(html.matches("class=\"job-card\"").count(), 1);
        assert!(html.contains("Engineer A"));
        assert!(html.contains("Acme"));
        assert!(html.contains("Jakarta"));
        assert!(html.contains("Jan 5, 2025"));
        assert_eq!(html.matches("class=\"job-category\"").count(), 2);
        assert!(html.contains("class=\"job-link\""));
        assert!(html.contains("href=\"https:"));
        assert!(html.contains("Source: acme.example"));
        assert!(!html.contains("No jobs found"));
    }

    #[test]
    fn test_render_omits_absent_blocks() {
        let job = Job::default();
        let html = render_jobs(&[&job]).unwrap();
        assert!(html.contains("Untitled Position"));
        assert!(!html.contains("job-location"));
        assert!(!html.contains("job-date"));
        assert!(!html.contains("job-categories"));
        assert!(!html.contains("job-link"));
        assert!(html.contains("Source: Unknown Source"));
    }

    #[test]
    fn test_render_preserves_input_order() {
        let first = Job {
            title: Some("Zebra Keeper".to_string()),
            ..Job::default()
        };
        let second = Job {
            title: Some("Aardvark Groomer".to_string()),
            ..Job::default()
        };
        let html = render_jobs(&[&first, &second]).unwrap();
        let zebra = html.find("Zebra Keeper").unwrap();
        let aardvark = html.find("Aardvark Groomer").unwrap();
        assert!(zebra < aardvark);
    }

    #[test]
    fn test_render_empty_state() {
        let html = render_jobs(&[]).unwrap();
        assert!(html.contains("No jobs found"));
        assert!(!html.contains("job-card"));
    }

    #[test]
    fn test_render_error_block() {
        let html = render_error("Failed to load job data").unwrap();
        assert!(html.contains("Error"));
        assert!(html.contains("Failed to load job data"));
        assert!(!html.contains("job-card"));
        assert!(!html.contains("No jobs found"));
    }

    #[test]
    fn test_render_escapes_markup() {
        let job = Job {
            title: Some("<script>alert(1)</script>".to_string()),
            ..Job::default()
        };
        let html = render_jobs(&[&job]).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
