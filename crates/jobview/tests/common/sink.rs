//! A sink that records what would have been rendered.

#![allow(dead_code)]

use jobview::{FilterDimension, JobCard, JobDetails, ViewSink, ViewUpdate};

#[derive(Default)]
pub struct RecordingSink {
    pub updates: Vec<ViewUpdate>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards of the most recent non-empty listing, or an empty vec when the
    /// last listing update was cleared or empty.
    pub fn last_cards(&self) -> Vec<JobCard> {
        self.updates
            .iter()
            .rev()
            .find_map(|u| match u {
                ViewUpdate::Jobs { cards } => Some(cards.clone()),
                ViewUpdate::Empty => Some(vec![]),
                _ => None,
            })
            .unwrap_or_default()
    }

    pub fn last_titles(&self) -> Vec<String> {
        self.last_cards().into_iter().map(|c| c.title).collect()
    }

    pub fn options(&self, dimension: FilterDimension) -> Option<Vec<String>> {
        self.updates.iter().rev().find_map(|u| match u {
            ViewUpdate::Options {
                dimension: d,
                options,
            } if *d == dimension => Some(options.clone()),
            _ => None,
        })
    }

    pub fn errors(&self) -> Vec<String> {
        self.updates
            .iter()
            .filter_map(|u| match u {
                ViewUpdate::Error { message } => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.updates.clear();
    }
}

impl ViewSink for RecordingSink {
    fn render_jobs(&mut self, cards: &[JobCard]) {
        self.updates.push(ViewUpdate::Jobs {
            cards: cards.to_vec(),
        });
    }

    fn render_empty(&mut self) {
        self.updates.push(ViewUpdate::Empty);
    }

    fn render_options(&mut self, dimension: FilterDimension, options: &[String]) {
        self.updates.push(ViewUpdate::Options {
            dimension,
            options: options.to_vec(),
        });
    }

    fn show_error(&mut self, message: &str) {
        self.updates.push(ViewUpdate::Error {
            message: message.to_string(),
        });
    }

    fn clear_error(&mut self) {
        self.updates.push(ViewUpdate::ClearError);
    }

    fn show_details(&mut self, details: &JobDetails) {
        self.updates.push(ViewUpdate::Details {
            details: details.clone(),
        });
    }

    fn hide_details(&mut self) {
        self.updates.push(ViewUpdate::HideDetails);
    }
}
