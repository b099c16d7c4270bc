pub mod config;
pub mod controller;
pub mod error;
pub mod job;
pub mod logging;
pub mod view;

pub use config::{load_config, Placeholders, ViewerConfig};
pub use controller::{parse_records, ControllerState, JobViewController, ViewEvent};
pub use error::{ConfigError, JobViewError, Result};
pub use job::{parse_posted_minutes, Job, JobCard, JobDetails, PostedTime};
pub use view::{
    filter_jobs, sort_jobs, BroadcastSink, FilterCriteria, FilterDimension, FilterOptions,
    NoopSink, Selection, SortOrder, TimeOrder, TitleOrder, ViewSink, ViewUpdate,
};
