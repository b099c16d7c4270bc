//! Normalized job postings built from untyped JSON records.

pub mod posted;

pub use posted::{parse_posted_minutes, PostedTime};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::Placeholders;

/// Record keys read by the normalizer.
pub mod keys {
    pub const TITLE: &str = "Title";
    pub const POSTED: &str = "Posted";
    pub const TYPE: &str = "Type";
    pub const LEVEL: &str = "Level";
    pub const SKILL: &str = "Skill";
    pub const DETAIL: &str = "Detail";
}

/// One job posting. Every field is always populated; absent record fields
/// hold their placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    title: String,
    posted_time_raw: String,
    job_type: String,
    level: String,
    skill: String,
    detail: String,
}

/// Full view of a job as shown in the detail panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDetails {
    pub title: String,
    pub posted_time: PostedTime,
    #[serde(rename = "type")]
    pub job_type: String,
    pub level: String,
    pub skill: String,
    pub detail: String,
}

/// Summary of a job as shown in the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobCard {
    /// Position of the job in the loaded collection.
    pub index: usize,
    pub title: String,
    /// Posted text as it appeared in the record.
    pub posted: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub level: String,
}

/// Returns the field as a string when it is a non-empty JSON string.
fn string_field(record: &Value, key: &str) -> Option<String> {
    match record.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

impl Job {
    /// Normalizes a record using the default placeholders.
    pub fn from_record(record: &Value) -> Self {
        Self::from_record_with(record, &Placeholders::default())
    }

    /// Normalizes a record. Never fails: a non-object record, missing keys,
    /// nulls, empty strings and non-string values all resolve to placeholders.
    pub fn from_record_with(record: &Value, placeholders: &Placeholders) -> Self {
        let field = |key: &str, default: &str| {
            string_field(record, key).unwrap_or_else(|| default.to_string())
        };

        Self {
            title: field(keys::TITLE, &placeholders.title),
            posted_time_raw: field(keys::POSTED, &placeholders.posted),
            job_type: field(keys::TYPE, &placeholders.category),
            level: field(keys::LEVEL, &placeholders.category),
            skill: field(keys::SKILL, &placeholders.category),
            detail: field(keys::DETAIL, &placeholders.detail),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn posted_time_raw(&self) -> &str {
        &self.posted_time_raw
    }

    pub fn job_type(&self) -> &str {
        &self.job_type
    }

    pub fn level(&self) -> &str {
        &self.level
    }

    pub fn skill(&self) -> &str {
        &self.skill
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }

    /// Posted time converted to minutes ago, computed on each call.
    pub fn formatted_posted_minutes(&self) -> PostedTime {
        parse_posted_minutes(&self.posted_time_raw)
    }

    pub fn details(&self) -> JobDetails {
        JobDetails {
            title: self.title.clone(),
            posted_time: self.formatted_posted_minutes(),
            job_type: self.job_type.clone(),
            level: self.level.clone(),
            skill: self.skill.clone(),
            detail: self.detail.clone(),
        }
    }

    pub fn card(&self, index: usize) -> JobCard {
        JobCard {
            index,
            title: self.title.clone(),
            posted: self.posted_time_raw.clone(),
            job_type: self.job_type.clone(),
            level: self.level.clone(),
        }
    }
}
