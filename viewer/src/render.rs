//! Plain-text rendering of listings and job details.

use std::io::{self, Write};

use jobview::{FilterDimension, JobCard, JobDetails, PostedTime, ViewSink};

pub struct TerminalSink<W: Write> {
    out: W,
}

impl TerminalSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            log::warn!("Failed to write to terminal: {}", e);
        }
    }
}

fn format_card(card: &JobCard) -> String {
    format!(
        "[{}] {}\n    Posted: {}\n    Type: {} | Level: {}",
        card.index, card.title, card.posted, card.job_type, card.level
    )
}

fn format_details(details: &JobDetails) -> String {
    let posted = match &details.posted_time {
        PostedTime::Minutes(m) => format!("{} minutes ago", m),
        PostedTime::Raw(raw) => raw.clone(),
    };
    format!(
        "== {} ==\nPosted: {}\nType: {}\nLevel: {}\nSkills: {}\nDetails: {}",
        details.title, posted, details.job_type, details.level, details.skill, details.detail
    )
}

impl<W: Write> ViewSink for TerminalSink<W> {
    fn render_jobs(&mut self, cards: &[JobCard]) {
        for card in cards {
            let text = format_card(card);
            self.emit(&text);
        }
    }

    fn render_empty(&mut self) {
        self.emit("No jobs available matching your current filters.");
        self.emit("Try adjusting your search criteria or uploading a different job file.");
    }

    fn render_options(&mut self, dimension: FilterDimension, options: &[String]) {
        let mut all = vec!["All".to_string()];
        all.extend(options.iter().cloned());
        let text = format!("{}: {}", dimension, all.join(", "));
        self.emit(&text);
    }

    fn show_error(&mut self, message: &str) {
        eprintln!("Error: {}", message);
    }

    fn clear_error(&mut self) {}

    fn show_details(&mut self, details: &JobDetails) {
        let text = format_details(details);
        self.emit(&text);
    }

    fn hide_details(&mut self) {}
}
