//! Collection view controller.
//!
//! Owns the loaded jobs and turns host events into derived views that are
//! pushed to an optional [`ViewSink`]. Filtering and sorting always start
//! from the full collection; neither keeps the other's effect.

use std::path::Path;

use serde_json::Value;

use crate::config::ViewerConfig;
use crate::error::{json_type_name, JobViewError, Result};
use crate::job::{Job, JobCard, JobDetails};
use crate::view::{
    filter_indices, sort_indices, FilterCriteria, FilterDimension, FilterOptions, NoopSink,
    Selection, SortOrder, TimeOrder, TitleOrder, ViewSink,
};

/// Message shown when an uploaded file cannot be loaded.
pub const PARSE_ERROR_MESSAGE: &str = "Error parsing JSON file. Please check the file format.";

/// Message shown when an uploaded file cannot be read.
pub const READ_ERROR_MESSAGE: &str = "Error reading job file. Please check that the file exists.";

/// The loaded collection and the filter options derived from it.
#[derive(Debug, Clone, Default)]
pub struct ControllerState {
    jobs: Vec<Job>,
    options: FilterOptions,
}

impl ControllerState {
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }
}

/// An event raised by the host surface.
///
/// Filter and sort values are the raw dropdown values: an empty string means
/// "All" for filters, and `asc`/`desc`/`newest`/`oldest` select a sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    FileLoaded(String),
    FilterChanged {
        level: String,
        job_type: String,
        skill: String,
    },
    SortChanged {
        title: String,
        time: String,
    },
    CardSelected(usize),
    DetailsClosed,
}

pub struct JobViewController<S = NoopSink> {
    state: ControllerState,
    config: ViewerConfig,
    sink: Option<S>,
}

impl JobViewController {
    /// Creates a controller with no rendering surface. Every render is a
    /// no-op.
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            state: ControllerState::default(),
            config,
            sink: None,
        }
    }
}

impl<S: ViewSink> JobViewController<S> {
    pub fn with_sink(config: ViewerConfig, sink: S) -> Self {
        Self {
            state: ControllerState::default(),
            config,
            sink: Some(sink),
        }
    }

    pub fn sink(&self) -> Option<&S> {
        self.sink.as_ref()
    }

    pub fn sink_mut(&mut self) -> Option<&mut S> {
        self.sink.as_mut()
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    pub fn jobs(&self) -> &[Job] {
        &self.state.jobs
    }

    pub fn filter_options(&self) -> &FilterOptions {
        &self.state.options
    }

    /// Replaces the collection with normalized `records`, then renders the
    /// filter options and the full listing.
    pub fn load(&mut self, records: &[Value]) -> usize {
        let _span = tracing::info_span!("controller.load", records = records.len()).entered();

        let jobs: Vec<Job> = records
            .iter()
            .map(|record| Job::from_record_with(record, &self.config.placeholders))
            .collect();
        let options = FilterOptions::from_jobs(&jobs, &self.config.placeholders.category);

        self.state = ControllerState { jobs, options };

        log::info!(
            "Loaded {} jobs ({} levels, {} types, {} skills)",
            self.state.jobs.len(),
            self.state.options.levels.len(),
            self.state.options.types.len(),
            self.state.options.skills.len()
        );

        self.render_options();
        let all: Vec<usize> = (0..self.state.jobs.len()).collect();
        self.render_listing(&all);

        self.state.jobs.len()
    }

    /// Parses an uploaded JSON document and loads it.
    ///
    /// On failure the listing is cleared, an error message is shown, and the
    /// held collection stays as it was.
    pub fn load_json(&mut self, content: &str) -> Result<usize> {
        if let Some(sink) = self.sink.as_mut() {
            sink.clear_error();
            sink.render_jobs(&[]);
        }

        match parse_records(content) {
            Ok(records) => Ok(self.load(&records)),
            Err(e) => {
                log::error!("Failed to load job listing: {}", e);
                if let Some(sink) = self.sink.as_mut() {
                    sink.show_error(PARSE_ERROR_MESSAGE);
                }
                Err(e)
            }
        }
    }

    /// Reads a job listing file and loads it.
    ///
    /// The listing and any previous error are cleared before reading starts.
    pub async fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let path = path.as_ref();
        log::debug!("Reading job listing from {:?}", path);

        if let Some(sink) = self.sink.as_mut() {
            sink.clear_error();
            sink.render_jobs(&[]);
        }

        let content = match tokio::fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) => {
                log::error!("Failed to read {:?}: {}", path, e);
                if let Some(sink) = self.sink.as_mut() {
                    sink.show_error(READ_ERROR_MESSAGE);
                }
                return Err(JobViewError::ReadFile {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        };

        self.load_json(&content)
    }

    /// Renders the jobs matching `criteria` and returns their cards.
    pub fn apply_filters(&mut self, criteria: &FilterCriteria) -> Vec<JobCard> {
        let _span = tracing::info_span!("controller.filter").entered();

        let indices = filter_indices(&self.state.jobs, criteria, &self.config.skill_suffix);
        log::debug!(
            "Filter {:?} matched {} of {} jobs",
            criteria,
            indices.len(),
            self.state.jobs.len()
        );

        self.render_listing(&indices)
    }

    /// Renders the full collection in `order` and returns the cards.
    pub fn apply_sort(&mut self, order: &SortOrder) -> Vec<JobCard> {
        let _span = tracing::info_span!("controller.sort").entered();

        let indices = sort_indices(&self.state.jobs, order);
        log::debug!("Sorted {} jobs by {:?}", indices.len(), order);

        self.render_listing(&indices)
    }

    pub fn job_details(&self, index: usize) -> Option<JobDetails> {
        self.state.jobs.get(index).map(Job::details)
    }

    /// Shows the detail view for the job at `index`. Unknown indices are
    /// ignored.
    pub fn show_details(&mut self, index: usize) -> Option<JobDetails> {
        let Some(details) = self.job_details(index) else {
            log::warn!("No job at index {} to show", index);
            return None;
        };

        if let Some(sink) = self.sink.as_mut() {
            sink.show_details(&details);
        }
        Some(details)
    }

    pub fn close_details(&mut self) {
        if let Some(sink) = self.sink.as_mut() {
            sink.hide_details();
        }
    }

    /// Dispatches a host event. Only file loads can fail.
    pub fn handle(&mut self, event: ViewEvent) -> Result<()> {
        match event {
            ViewEvent::FileLoaded(content) => {
                self.load_json(&content)?;
            }
            ViewEvent::FilterChanged {
                level,
                job_type,
                skill,
            } => {
                let criteria = FilterCriteria::new(
                    Selection::from_option_value(&level),
                    Selection::from_option_value(&job_type),
                    Selection::from_option_value(&skill),
                );
                self.apply_filters(&criteria);
            }
            ViewEvent::SortChanged { title, time } => {
                let order = SortOrder::new(
                    TitleOrder::from_option_value(&title),
                    TimeOrder::from_option_value(&time),
                );
                self.apply_sort(&order);
            }
            ViewEvent::CardSelected(index) => {
                self.show_details(index);
            }
            ViewEvent::DetailsClosed => self.close_details(),
        }
        Ok(())
    }

    fn render_options(&mut self) {
        let Some(sink) = self.sink.as_mut() else {
            return;
        };
        for dimension in FilterDimension::ALL {
            sink.render_options(dimension, self.state.options.get(dimension));
        }
    }

    fn render_listing(&mut self, indices: &[usize]) -> Vec<JobCard> {
        let cards: Vec<JobCard> = indices
            .iter()
            .map(|&index| self.state.jobs[index].card(index))
            .collect();

        if let Some(sink) = self.sink.as_mut() {
            if cards.is_empty() {
                sink.render_empty();
            } else {
                sink.render_jobs(&cards);
            }
        }

        cards
    }
}

/// Parses a JSON document whose top level must be an array of records.
pub fn parse_records(content: &str) -> Result<Vec<Value>> {
    match serde_json::from_str::<Value>(content)? {
        Value::Array(records) => Ok(records),
        other => Err(JobViewError::NotAnArray {
            found: json_type_name(&other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::BroadcastSink;
    use serde_json::json;

    fn sample_records() -> Vec<Value> {
        vec![
            json!({"Title": "B", "Posted": "1 hour ago", "Level": "Senior", "Skill": "Data Jobs"}),
            json!({"Title": "A", "Posted": "5 minutes ago", "Level": "Junior"}),
        ]
    }

    #[test]
    fn test_controller_without_sink() {
        let mut controller = JobViewController::new(ViewerConfig::default());

        assert_eq!(controller.load(&sample_records()), 2);
        let cards = controller.apply_sort(&SortOrder::new(TitleOrder::Ascending, TimeOrder::None));
        assert_eq!(cards[0].title, "A");
        assert_eq!(cards[0].index, 1);
        assert!(controller.show_details(1).is_some());
        controller.close_details();
    }

    #[test]
    fn test_load_replaces_collection() {
        let mut controller = JobViewController::new(ViewerConfig::default());
        controller.load(&sample_records());
        controller.load(&[json!({"Title": "Only"})]);

        assert_eq!(controller.jobs().len(), 1);
        assert_eq!(controller.jobs()[0].title(), "Only");
        assert!(controller.filter_options().skills.is_empty());
    }

    #[test]
    fn test_parse_records_rejects_non_array() {
        assert!(matches!(
            parse_records(r#"{"Title": "x"}"#),
            Err(JobViewError::NotAnArray { found: "an object" })
        ));
        assert!(matches!(
            parse_records("[{"),
            Err(JobViewError::ParseJson(_))
        ));
        assert_eq!(parse_records("[]").unwrap().len(), 0);
    }

    #[test]
    fn test_show_details_unknown_index() {
        let mut controller =
            JobViewController::with_sink(ViewerConfig::default(), BroadcastSink::new(8));
        controller.load(&sample_records());

        let mut receiver = controller.sink().unwrap().subscribe();
        assert!(controller.show_details(7).is_none());
        assert!(receiver.try_recv().is_err());
    }
}
