//! Derived views over a loaded job collection.

pub mod filter;
pub mod options;
pub mod sink;
pub mod sort;

pub use filter::{filter_indices, filter_jobs, FilterCriteria, Selection, DEFAULT_SKILL_SUFFIX};
pub use options::{FilterDimension, FilterOptions};
pub use sink::{BroadcastSink, NoopSink, ViewSink, ViewUpdate};
pub use sort::{sort_indices, sort_jobs, SortOrder, TimeOrder, TitleOrder};
