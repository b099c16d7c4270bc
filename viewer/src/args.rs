use clap::Parser;
use std::path::PathBuf;

/// Terminal viewer for job listing files
#[derive(Parser, Debug)]
#[command(name = "jobview-viewer")]
#[command(version)]
#[command(about = "Filter, sort and inspect a JSON job listing", long_about = None)]
pub struct Cli {
    /// JSON file containing an array of job records
    pub file: PathBuf,

    /// Only show jobs at this level
    #[arg(long = "level", default_value = "")]
    pub level: String,

    /// Only show jobs of this type
    #[arg(long = "type", default_value = "")]
    pub job_type: String,

    /// Only show jobs matching this skill ("Data" also matches "Data Jobs")
    #[arg(long = "skill", default_value = "")]
    pub skill: String,

    /// Sort by title: asc or desc
    #[arg(long = "sort-title", default_value = "")]
    pub sort_title: String,

    /// Sort by posted time: newest or oldest
    #[arg(long = "sort-time", default_value = "")]
    pub sort_time: String,

    /// Show details of the job at this position in the file
    #[arg(long = "details")]
    pub details: Option<usize>,

    /// Viewer config file (YAML or JSON)
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Print view updates as JSON lines
    #[arg(long = "json")]
    pub json: bool,
}

impl Cli {
    pub fn has_filter(&self) -> bool {
        !self.level.is_empty() || !self.job_type.is_empty() || !self.skill.is_empty()
    }

    pub fn has_sort(&self) -> bool {
        !self.sort_title.is_empty() || !self.sort_time.is_empty()
    }
}
