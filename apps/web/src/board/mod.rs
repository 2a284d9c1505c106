// Job board core: loading, derived state, filtering.
// Everything here is pure data; presentation lives in `render`.

pub mod categories;
pub mod dates;
pub mod filter;
pub mod loader;
pub mod models;
pub mod stats;

use chrono::{DateTime, Local};
use tracing::{error, info};

pub use filter::{Criteria, SearchParams};
pub use loader::{JobSource, LoadError};
pub use models::Job;
pub use stats::BoardStats;

/// The application state produced by the loader. Immutable once built.
///
/// A failed load yields an empty board carrying the error: no jobs,
/// no categories, no stats.
#[derive(Debug, Clone, Default)]
pub struct Board {
    jobs: Vec<Job>,
    categories: Vec<String>,
    stats: Option<BoardStats>,
    load_error: Option<LoadError>,
}

impl Board {
    pub fn from_jobs(jobs: Vec<Job>, now: DateTime<Local>) -> Self {
        let categories = categories::extract_categories(&jobs);
        let stats = stats::compute_stats(&jobs, now);
        Board {
            jobs,
            categories,
            stats: Some(stats),
            load_error: None,
        }
    }

    pub fn failed(error: LoadError) -> Self {
        Board {
            load_error: Some(error),
            ..Board::default()
        }
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn stats(&self) -> Option<BoardStats> {
        self.stats
    }

    pub fn load_error(&self) -> Option<&LoadError> {
        self.load_error.as_ref()
    }

    /// Runs a search over the full job set. Fails only if the board never loaded.
    pub fn search(&self, criteria: &Criteria, now: DateTime<Local>) -> Result<Vec<&Job>, &LoadError> {
        match &self.load_error {
            Some(e) => Err(e),
            None if criteria.is_empty() => Ok(self.jobs.iter().collect()),
            None => Ok(filter::filter_jobs(&self.jobs, criteria, now)),
        }
    }
}

/// Loads the board from `source`. Load failures are logged and captured in
/// the returned board; they never propagate.
pub async fn load_board(source: &dyn JobSource, now: DateTime<Local>) -> Board {
    info!("Loading job data from {}", source.describe());

    match loader::fetch_jobs(source).await {
        Ok(jobs) => {
            let board = Board::from_jobs(jobs, now);
            info!(
                "Loaded {} jobs across {} categories",
                board.jobs.len(),
                board.categories.len()
            );
            board
        }
        Err(e) => {
            error!("Error fetching jobs: {e}");
            Board::failed(e)
        }
    }
}
