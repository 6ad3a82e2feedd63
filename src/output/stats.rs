//! Crawl report and end-of-run summary

use crate::state::CrawlState;
use chrono::{DateTime, Utc};
use std::fmt::Write;

/// Counters and timestamps collected over one crawl session
#[derive(Debug, Clone)]
pub struct CrawlReport {
    /// Final lifecycle state of the session
    pub state: CrawlState,

    /// Pages fetched, converted, and saved
    pub pages_processed: u32,

    /// URLs whose fetch or write failed
    pub pages_failed: u32,

    /// Dequeued URLs dropped because they were already visited
    pub duplicates_skipped: u32,

    /// In-scope links returned by the link extractor, before queue filtering
    pub links_discovered: usize,

    /// URLs left in the queue when the loop stopped
    pub queue_remaining: usize,

    /// Page budget the session ran with
    pub max_pages: u32,

    /// Files written, in crawl order
    pub saved_files: Vec<String>,

    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl CrawlReport {
    /// Creates an empty report for a session with the given page budget
    pub fn new(max_pages: u32) -> Self {
        Self {
            state: CrawlState::Idle,
            pages_processed: 0,
            pages_failed: 0,
            duplicates_skipped: 0,
            links_discovered: 0,
            queue_remaining: 0,
            max_pages,
            saved_files: Vec::new(),
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    /// True when the crawl stopped on the page budget with work still queued
    pub fn limit_reached(&self) -> bool {
        self.pages_processed >= self.max_pages && self.queue_remaining > 0
    }

    /// Elapsed time, once the crawl has finished
    pub fn duration(&self) -> Option<chrono::Duration> {
        self.finished_at.map(|finished| finished - self.started_at)
    }
}

/// Formats the end-of-run summary
pub fn format_report(report: &CrawlReport) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Crawling {}. Processed {} pages.",
        report.state, report.pages_processed
    );
    let _ = writeln!(out, "Failed: {}", report.pages_failed);
    let _ = writeln!(out, "Duplicates skipped: {}", report.duplicates_skipped);
    let _ = writeln!(out, "Links discovered: {}", report.links_discovered);
    let _ = writeln!(out, "URLs remaining in queue: {}", report.queue_remaining);

    if let Some(duration) = report.duration() {
        let _ = writeln!(
            out,
            "Duration: {:.2}s",
            duration.num_milliseconds() as f64 / 1000.0
        );
    }

    if report.limit_reached() {
        let _ = writeln!(
            out,
            "Note: Maximum page limit ({}) reached. Increase the limit to crawl more pages.",
            report.max_pages
        );
    }

    out
}

/// Prints the end-of-run summary to stdout
pub fn print_report(report: &CrawlReport) {
    print!("{}", format_report(report));
}
