//! Job record as it appears in the data file.
//!
//! Decoding is lenient: a record is never rejected. Text fields keep strings
//! (numbers and booleans as their textual form); anything else, including
//! empty strings, decodes as absent.

use chrono::{DateTime, Local};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::board::dates::parse_posted;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Sequential number assigned by the scraper. Passed through, never used for identity.
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_tags")]
    pub categories: Vec<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub date_posted: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub source_website: Option<String>,
}

impl Job {
    /// Decodes one element of the data array. Non-objects become an empty record.
    pub fn from_value(value: Value) -> Self {
        if !value.is_object() {
            warn!("Job record is not a JSON object; treating every field as absent");
            return Job::default();
        }
        serde_json::from_value(value).unwrap_or_else(|e| {
            warn!("Job record could not be decoded ({e}); treating every field as absent");
            Job::default()
        })
    }

    /// Posting time in local time, if `date_posted` is present and parseable.
    pub fn posted_at(&self) -> Option<DateTime<Local>> {
        self.date_posted.as_deref().and_then(parse_posted)
    }
}

fn text_from_value(value: Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => return None,
    };
    (!text.is_empty()).then_some(text)
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text_from_value(Value::deserialize(deserializer)?))
}

fn lenient_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let tags = match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) if !s.is_empty() => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };
    Ok(tags)
}

fn lenient_id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let id = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_record_decodes() {
        let job = Job::from_value(json!({
            "id": 3,
            "title": "Backend Engineer",
            "company": "Acme",
            "location": "Jakarta",
            "description": "Build services",
            "categories": ["Engineering", "Backend"],
            "date_posted": "2025-01-05",
            "url": "https://acme.example/jobs/3",
            "source_website": "acme.example"
        }));
        assert_eq!(job.id, Some(3));
        assert_eq!(job.title.as_deref(), Some("Backend Engineer"));
        assert_eq!(job.categories, vec!["Engineering", "Backend"]);
        assert_eq!(job.date_posted.as_deref(), Some("2025-01-05"));
        assert_eq!(job.source_website.as_deref(), Some("acme.example"));
    }

    #[test]
    fn test_missing_fields_are_absent() {
        let job = Job::from_value(json!({ "title": "Clerk" }));
        assert_eq!(job.title.as_deref(), Some("Clerk"));
        assert!(job.company.is_none());
        assert!(job.categories.is_empty());
        assert!(job.posted_at().is_none());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let job = Job::from_value(json!({ "title": "Clerk", "salary": 1000, "remote": true }));
        assert_eq!(job.title.as_deref(), Some("Clerk"));
    }

    #[test]
    fn test_non_object_element_becomes_empty_record() {
        assert_eq!(Job::from_value(json!("just a string")), Job::default());
        assert_eq!(Job::from_value(json!(42)), Job::default());
    }

    #[test]
    fn test_lenient_text_fields() {
        let job = Job::from_value(json!({
            "title": "",
            "company": 7,
            "location": null,
            "description": ["not", "text"],
            "url": true
        }));
        assert!(job.title.is_none());
        assert_eq!(job.company.as_deref(), Some("7"));
        assert!(job.location.is_none());
        assert!(job.description.is_none());
        assert_eq!(job.url.as_deref(), Some("true"));
    }

    #[test]
    fn test_categories_keep_only_non_empty_strings() {
        let job = Job::from_value(json!({ "categories": ["Ops", 3, null, "", "Eng"] }));
        assert_eq!(job.categories, vec!["Ops", "Eng"]);

        let job = Job::from_value(json!({ "categories": "Ops" }));
        assert!(job.categories.is_empty());
    }

    #[test]
    fn test_id_accepts_numeric_string() {
        let job = Job::from_value(json!({ "id": "12" }));
        assert_eq!(job.id, Some(12));
        let job = Job::from_value(json!({ "id": "twelve" }));
        assert_eq!(job.id, None);
    }
}
