//! Shared test utilities for jobview integration tests.
//!
//! This module provides:
//! - `RecordBuilder` for creating raw job records programmatically
//! - `RecordingSink` capturing every update a controller renders

pub mod builders;
pub mod sink;

pub use builders::*;
pub use sink::RecordingSink;
