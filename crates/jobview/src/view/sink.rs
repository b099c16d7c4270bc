//! Rendering surfaces the controller pushes views to.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::job::{JobCard, JobDetails};
use crate::view::options::FilterDimension;

/// A rendering surface for listings, filter options and job details.
pub trait ViewSink {
    /// Replaces the listing. An empty slice clears it.
    fn render_jobs(&mut self, cards: &[JobCard]);

    /// Called instead of `render_jobs` when a derived view has no jobs.
    fn render_empty(&mut self);

    fn render_options(&mut self, dimension: FilterDimension, options: &[String]);

    fn show_error(&mut self, message: &str);

    fn clear_error(&mut self);

    fn show_details(&mut self, details: &JobDetails);

    fn hide_details(&mut self);
}

/// A surface that renders nothing, for controllers running headless.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl ViewSink for NoopSink {
    fn render_jobs(&mut self, _cards: &[JobCard]) {}

    fn render_empty(&mut self) {}

    fn render_options(&mut self, _dimension: FilterDimension, _options: &[String]) {}

    fn show_error(&mut self, _message: &str) {}

    fn clear_error(&mut self) {}

    fn show_details(&mut self, _details: &JobDetails) {}

    fn hide_details(&mut self) {}
}

/// A single update pushed to a rendering surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewUpdate {
    Jobs { cards: Vec<JobCard> },
    Empty,
    Options {
        dimension: FilterDimension,
        options: Vec<String>,
    },
    Error { message: String },
    ClearError,
    Details { details: JobDetails },
    HideDetails,
}

/// Publishes every update on a broadcast channel so several surfaces can
/// follow the same controller.
#[derive(Clone)]
pub struct BroadcastSink {
    sender: broadcast::Sender<ViewUpdate>,
}

impl BroadcastSink {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ViewUpdate> {
        self.sender.subscribe()
    }

    pub fn send(&self, update: ViewUpdate) {
        // No subscribers is fine
        let _ = self.sender.send(update);
    }
}

impl Default for BroadcastSink {
    fn default() -> Self {
        Self::new(256)
    }
}

impl ViewSink for BroadcastSink {
    fn render_jobs(&mut self, cards: &[JobCard]) {
        self.send(ViewUpdate::Jobs {
            cards: cards.to_vec(),
        });
    }

    fn render_empty(&mut self) {
        self.send(ViewUpdate::Empty);
    }

    fn render_options(&mut self, dimension: FilterDimension, options: &[String]) {
        self.send(ViewUpdate::Options {
            dimension,
            options: options.to_vec(),
        });
    }

    fn show_error(&mut self, message: &str) {
        self.send(ViewUpdate::Error {
            message: message.to_string(),
        });
    }

    fn clear_error(&mut self) {
        self.send(ViewUpdate::ClearError);
    }

    fn show_details(&mut self, details: &JobDetails) {
        self.send(ViewUpdate::Details {
            details: details.clone(),
        });
    }

    fn hide_details(&mut self) {
        self.send(ViewUpdate::HideDetails);
    }
}
