//! Title and posted-time ordering.
//!
//! The two orderings are applied one after the other rather than combined:
//! the title sort runs first, then the time sort re-sorts the whole result.
//! Both sorts are stable, so title order only survives among jobs posted at
//! the same time.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::job::Job;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleOrder {
    #[default]
    None,
    Ascending,
    Descending,
}

impl TitleOrder {
    pub fn from_option_value(value: &str) -> Self {
        match value {
            "asc" => TitleOrder::Ascending,
            "desc" => TitleOrder::Descending,
            _ => TitleOrder::None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOrder {
    #[default]
    None,
    /// Largest minutes-ago value first.
    NewestFirst,
    /// Smallest minutes-ago value first.
    OldestFirst,
}

impl TimeOrder {
    pub fn from_option_value(value: &str) -> Self {
        match value {
            "newest" => TimeOrder::NewestFirst,
            "oldest" => TimeOrder::OldestFirst,
            _ => TimeOrder::None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOrder {
    #[serde(default)]
    pub title: TitleOrder,
    #[serde(default)]
    pub time: TimeOrder,
}

impl SortOrder {
    pub fn new(title: TitleOrder, time: TimeOrder) -> Self {
        Self { title, time }
    }
}

/// Case-insensitive comparison with a code-point tiebreak so the order is
/// total.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Returns collection positions in sorted order.
///
/// Jobs whose posted time could not be converted to minutes are placed after
/// all others for either time direction, keeping their relative order.
pub fn sort_indices(jobs: &[Job], order: &SortOrder) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..jobs.len()).collect();

    match order.title {
        TitleOrder::Ascending => {
            indices.sort_by(|&a, &b| compare_titles(jobs[a].title(), jobs[b].title()))
        }
        TitleOrder::Descending => {
            indices.sort_by(|&a, &b| compare_titles(jobs[b].title(), jobs[a].title()))
        }
        TitleOrder::None => {}
    }

    if order.time != TimeOrder::None {
        let posted: Vec<_> = jobs.iter().map(Job::formatted_posted_minutes).collect();
        let raw_count = posted.iter().filter(|p| p.is_raw()).count();
        if raw_count > 0 {
            log::debug!(
                "{} of {} jobs have an unrecognized posted time, placing them last",
                raw_count,
                jobs.len()
            );
        }

        indices.sort_by(|&a, &b| match (posted[a].minutes(), posted[b].minutes()) {
            (Some(x), Some(y)) if order.time == TimeOrder::NewestFirst => y.cmp(&x),
            _ => posted[a].cmp_minutes(&posted[b]),
        });
    }

    indices
}

pub fn sort_jobs<'a>(jobs: &'a [Job], order: &SortOrder) -> Vec<&'a Job> {
    sort_indices(jobs, order)
        .into_iter()
        .map(|index| &jobs[index])
        .collect()
}
