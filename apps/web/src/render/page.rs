//! Full page: search form, summary stats and the results fragment.

use askama::Template;
use chrono::{DateTime, Local};

use crate::board::dates::format_long;
use crate::board::{Board, Criteria, SearchParams};
use crate::render::cards::{render_error, render_jobs};

/// (value, label) pairs for the recency selector. Values are day-count windows.
/// Day counts are floored, so window "1" admits anything under 48 hours old.
const RECENCY_WINDOWS: &[(&str, &str)] = &[
    ("", "Any time"),
    ("1", "Past day"),
    ("7", "Past week"),
    ("30", "Past month"),
];

#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    fn new(value: &str, label: &str, current: &str) -> Self {
        SelectOption {
            value: value.to_string(),
            label: label.to_string(),
            selected: value == current,
        }
    }
}

#[derive(Template)]
#[template(path = "page.html")]
pub struct PageTemplate<'a> {
    pub keyword: &'a str,
    pub location: &'a str,
    pub company_options: Vec<SelectOption>,
    pub category_options: Vec<SelectOption>,
    pub recency_options: Vec<SelectOption>,
    pub total_jobs: usize,
    pub new_today: usize,
    /// Empty when the data failed to load.
    pub last_updated: String,
    /// Pre-rendered results fragment.
    pub results: String,
}

/// The results fragment for a search: the load error if the board failed,
/// a validation error for bad parameters, otherwise cards or the empty state.
pub fn render_results(
    board: &Board,
    params: &SearchParams,
    now: DateTime<Local>,
) -> Result<String, askama::Error> {
    if let Some(load_error) = board.load_error() {
        return render_error(load_error.user_message());
    }

    match Criteria::from_params(params) {
        Ok(criteria) => match board.search(&criteria, now) {
            Ok(jobs) => render_jobs(&jobs),
            Err(load_error) => render_error(load_error.user_message()),
        },
        Err(e) => render_error(&e.to_string()),
    }
}

pub fn render_page(
    board: &Board,
    params: &SearchParams,
    company_options: &[String],
    now: DateTime<Local>,
) -> Result<String, askama::Error> {
    let stats = board.stats();

    PageTemplate {
        keyword: &params.keyword,
        location: &params.location,
        company_options: options_with_all(company_options, "All companies", &params.company),
        category_options: options_with_all(board.categories(), "All categories", &params.category),
        recency_options: recency_options(&params.date_posted),
        total_jobs: stats.map_or(0, |s| s.total_jobs),
        new_today: stats.map_or(0, |s| s.new_today),
        last_updated: stats.map(|_| format_long(now)).unwrap_or_default(),
        results: render_results(board, params, now)?,
    }
    .render()
}

// A valid window outside the presets (from a shared link) gets its own
// selected entry so the selector reflects the active filter.
fn recency_options(current: &str) -> Vec<SelectOption> {
    let mut options: Vec<SelectOption> = RECENCY_WINDOWS
        .iter()
        .map(|(value, label)| SelectOption::new(value, label, current))
        .collect();
    if !options.iter().any(|o| o.selected) {
        if let Ok(days) = current.trim().parse::<u32>() {
            let label = format!("Past {days} days");
            options.push(SelectOption::new(current, &label, current));
        }
    }
    options
}

// Leading "all" option carries the empty value, which imposes no constraint.
fn options_with_all(values: &[String], all_label: &str, current: &str) -> Vec<SelectOption> {
    std::iter::once(SelectOption::new("", all_label, current))
        .chain(values.iter().map(|v| SelectOption::new(v, v, current)))
        .collect()
}
