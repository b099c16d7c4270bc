//! Selectable values for each filter dimension.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::job::Job;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterDimension {
    Level,
    Type,
    Skill,
}

impl FilterDimension {
    pub const ALL: [FilterDimension; 3] = [
        FilterDimension::Level,
        FilterDimension::Type,
        FilterDimension::Skill,
    ];
}

impl fmt::Display for FilterDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterDimension::Level => write!(f, "Level"),
            FilterDimension::Type => write!(f, "Type"),
            FilterDimension::Skill => write!(f, "Skill"),
        }
    }
}

/// Distinct values seen in the loaded collection, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub levels: Vec<String>,
    pub types: Vec<String>,
    pub skills: Vec<String>,
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

impl FilterOptions {
    /// Collects options from `jobs`. Skills equal to `skill_placeholder` are
    /// left out so there is no option for "no skill given".
    pub fn from_jobs(jobs: &[Job], skill_placeholder: &str) -> Self {
        Self {
            levels: distinct(jobs.iter().map(Job::level)),
            types: distinct(jobs.iter().map(Job::job_type)),
            skills: distinct(
                jobs.iter()
                    .map(Job::skill)
                    .filter(|skill| *skill != skill_placeholder),
            ),
        }
    }

    pub fn get(&self, dimension: FilterDimension) -> &[String] {
        match dimension {
            FilterDimension::Level => &self.levels,
            FilterDimension::Type => &self.types,
            FilterDimension::Skill => &self.skills,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty() && self.types.is_empty() && self.skills.is_empty()
    }
}
