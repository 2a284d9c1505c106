use chrono::{DateTime, Local};
use serde::Serialize;

use crate::board::dates::is_on_or_after_today;
use crate::board::models::Job;

/// Summary figures computed once after load. Filtering never changes them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BoardStats {
    pub total_jobs: usize,
    /// Jobs posted at or after local midnight of the load day.
    pub new_today: usize,
}

pub fn compute_stats(jobs: &[Job], now: DateTime<Local>) -> BoardStats {
    let new_today = jobs
        .iter()
        .filter_map(Job::posted_at)
        .filter(|posted| is_on_or_after_today(*posted, now))
        .count();

    BoardStats {
        total_jobs: jobs.len(),
        new_today,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn job_posted(date_posted: Option<String>) -> Job {
        Job {
            date_posted,
            ..Job::default()
        }
    }

    #[test]
    fn test_stats_count_today_only() {
        let now = Local::now();
        let jobs = vec![
            job_posted(Some(now.to_rfc3339())),
            job_posted(Some((now - Duration::days(10)).to_rfc3339())),
            job_posted(None),
            job_posted(Some("not a date".to_string())),
        ];
        let stats = compute_stats(&jobs, now);
        assert_eq!(stats.total_jobs, 4);
        assert_eq!(stats.new_today, 1);
    }

    #[test]
    fn test_today_date_without_time_counts() {
        let now = Local::now();
        let jobs = vec![job_posted(Some(now.format("%Y-%m-%d").to_string()))];
        assert_eq!(compute_stats(&jobs, now).new_today, 1);
    }

    #[test]
    fn test_empty_board_stats() {
        let stats = compute_stats(&[], Local::now());
        assert_eq!(stats.total_jobs, 0);
        assert_eq!(stats.new_today, 0);
    }
}
