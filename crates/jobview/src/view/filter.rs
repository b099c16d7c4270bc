//! Conjunctive filtering over level, type and skill.

use serde::{Deserialize, Serialize};

use crate::job::Job;

/// Suffix stripped from skills before the lenient containment check.
pub const DEFAULT_SKILL_SUFFIX: &str = " Jobs";

/// A constraint on one filter dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    #[default]
    Any,
    Exact(String),
}

impl Selection {
    /// Maps a dropdown value to a selection. The empty string is the "All"
    /// entry.
    pub fn from_option_value(value: &str) -> Self {
        if value.is_empty() {
            Selection::Any
        } else {
            Selection::Exact(value.to_string())
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Selection::Any)
    }

    fn matches_exact(&self, candidate: &str) -> bool {
        match self {
            Selection::Any => true,
            Selection::Exact(value) => candidate == value,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub level: Selection,
    #[serde(default)]
    pub job_type: Selection,
    #[serde(default)]
    pub skill: Selection,
}

impl FilterCriteria {
    pub fn new(level: Selection, job_type: Selection, skill: Selection) -> Self {
        Self {
            level,
            job_type,
            skill,
        }
    }

    pub fn is_unconstrained(&self) -> bool {
        self.level.is_any() && self.job_type.is_any() && self.skill.is_any()
    }

    pub fn matches(&self, job: &Job, skill_suffix: &str) -> bool {
        self.level.matches_exact(job.level())
            && self.job_type.matches_exact(job.job_type())
            && skill_matches(&self.skill, job.skill(), skill_suffix)
    }
}

/// Exact match, or containment once the first occurrence of `suffix` is
/// removed from both sides ("Data Jobs" matches "Data").
pub fn skill_matches(selection: &Selection, candidate: &str, suffix: &str) -> bool {
    match selection {
        Selection::Any => true,
        Selection::Exact(value) => {
            candidate == value
                || strip_suffix_once(candidate, suffix).contains(&strip_suffix_once(value, suffix))
        }
    }
}

fn strip_suffix_once(value: &str, suffix: &str) -> String {
    if suffix.is_empty() {
        return value.to_string();
    }
    value.replacen(suffix, "", 1)
}

/// Positions of the jobs that satisfy every dimension, in collection order.
pub fn filter_indices(jobs: &[Job], criteria: &FilterCriteria, skill_suffix: &str) -> Vec<usize> {
    jobs.iter()
        .enumerate()
        .filter(|(_, job)| criteria.matches(job, skill_suffix))
        .map(|(index, _)| index)
        .collect()
}

pub fn filter_jobs<'a>(
    jobs: &'a [Job],
    criteria: &FilterCriteria,
    skill_suffix: &str,
) -> Vec<&'a Job> {
    jobs.iter()
        .filter(|job| criteria.matches(job, skill_suffix))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn job(level: &str, job_type: &str, skill: &str) -> Job {
        Job::from_record(&json!({
            "Title": format!("{} {} {}", level, job_type, skill),
            "Level": level,
            "Type": job_type,
            "Skill": skill,
        }))
    }

    fn exact(value: &str) -> Selection {
        Selection::Exact(value.to_string())
    }

    #[test]
    fn test_unconstrained_returns_everything_in_order() {
        let jobs = vec![
            job("Senior", "Full-time", "Rust"),
            job("Junior", "Contract", "Go"),
            job("Mid", "Part-time", "N/A"),
        ];
        let criteria = FilterCriteria::default();
        assert!(criteria.is_unconstrained());

        let result = filter_jobs(&jobs, &criteria, DEFAULT_SKILL_SUFFIX);
        assert_eq!(result.len(), 3);
        for (got, want) in result.iter().zip(jobs.iter()) {
            assert_eq!(*got, want);
        }
    }

    #[test]
    fn test_dimensions_are_conjunctive() {
        let jobs = vec![
            job("Senior", "Full-time", "Rust"),
            job("Senior", "Contract", "Rust"),
            job("Junior", "Full-time", "Rust"),
        ];
        let criteria = FilterCriteria::new(exact("Senior"), exact("Full-time"), Selection::Any);
        assert_eq!(filter_indices(&jobs, &criteria, DEFAULT_SKILL_SUFFIX), vec![0]);
    }

    #[test]
    fn test_level_is_exact() {
        let jobs = vec![job("Senior", "Full-time", "Rust")];
        let criteria = FilterCriteria::new(exact("Sen"), Selection::Any, Selection::Any);
        assert!(filter_jobs(&jobs, &criteria, DEFAULT_SKILL_SUFFIX).is_empty());
    }

    #[test]
    fn test_skill_suffix_is_lenient() {
        assert!(skill_matches(&exact("Data"), "Data Jobs", DEFAULT_SKILL_SUFFIX));
        assert!(skill_matches(&exact("Data Jobs"), "Data Jobs", DEFAULT_SKILL_SUFFIX));
        assert!(skill_matches(&exact("Data Jobs"), "Big Data", DEFAULT_SKILL_SUFFIX));
        assert!(skill_matches(&exact("Data"), "Data Science Jobs", DEFAULT_SKILL_SUFFIX));
        assert!(!skill_matches(&exact("Design"), "Data Jobs", DEFAULT_SKILL_SUFFIX));
        // Containment is one-directional
        assert!(!skill_matches(&exact("Data Science"), "Data Jobs", DEFAULT_SKILL_SUFFIX));
    }

    #[test]
    fn test_skill_match_is_case_sensitive() {
        assert!(!skill_matches(&exact("data"), "Data Jobs", DEFAULT_SKILL_SUFFIX));
    }

    #[test]
    fn test_filter_preserves_relative_order() {
        let jobs = vec![
            job("Senior", "Full-time", "Data Jobs"),
            job("Junior", "Full-time", "Web Jobs"),
            job("Mid", "Full-time", "Data Engineering"),
            job("Senior", "Full-time", "Data"),
        ];
        let criteria = FilterCriteria::new(Selection::Any, Selection::Any, exact("Data"));
        assert_eq!(filter_indices(&jobs, &criteria, DEFAULT_SKILL_SUFFIX), vec![0, 2, 3]);
    }

    #[test]
    fn test_from_option_value() {
        assert_eq!(Selection::from_option_value(""), Selection::Any);
        assert_eq!(Selection::from_option_value("Senior"), exact("Senior"));
    }
}
