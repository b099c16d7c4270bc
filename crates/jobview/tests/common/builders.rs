//! Builder patterns for creating test records programmatically.

#![allow(dead_code)]

use serde_json::{Map, Value};

/// Builder for raw job records as they appear in an uploaded file.
#[derive(Default)]
pub struct RecordBuilder {
    fields: Map<String, Value>,
}

impl RecordBuilder {
    /// Create a builder with no fields set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with a title already set.
    pub fn titled(title: &str) -> Self {
        Self::new().title(title)
    }

    pub fn title(self, title: &str) -> Self {
        self.field("Title", title)
    }

    pub fn posted(self, posted: &str) -> Self {
        self.field("Posted", posted)
    }

    pub fn job_type(self, job_type: &str) -> Self {
        self.field("Type", job_type)
    }

    pub fn level(self, level: &str) -> Self {
        self.field("Level", level)
    }

    pub fn skill(self, skill: &str) -> Self {
        self.field("Skill", skill)
    }

    pub fn detail(self, detail: &str) -> Self {
        self.field("Detail", detail)
    }

    /// Set an arbitrary key to a string value.
    pub fn field(self, key: &str, value: &str) -> Self {
        self.raw(key, Value::String(value.to_string()))
    }

    /// Set an arbitrary key to any JSON value.
    pub fn raw(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}

/// A small listing covering every filter dimension.
pub fn sample_listing() -> Vec<Value> {
    vec![
        RecordBuilder::titled("Data Engineer")
            .posted("2 hours ago")
            .job_type("Full-time")
            .level("Senior")
            .skill("Data Jobs")
            .detail("Pipelines")
            .build(),
        RecordBuilder::titled("Backend Developer")
            .posted("5 minutes ago")
            .job_type("Contract")
            .level("Mid")
            .skill("Rust")
            .build(),
        RecordBuilder::titled("analyst")
            .posted("1 day ago")
            .job_type("Full-time")
            .level("Junior")
            .skill("Data Science")
            .build(),
        RecordBuilder::titled("Designer")
            .posted("recently")
            .job_type("Part-time")
            .level("Mid")
            .build(),
    ]
}

/// Serialize records into the text of an uploaded file.
pub fn listing_json(records: &[Value]) -> String {
    serde_json::to_string(records).unwrap()
}
