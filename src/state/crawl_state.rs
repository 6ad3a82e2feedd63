//! Crawl session lifecycle
//!
//! A session moves `Idle → Running` when the loop starts and ends in either
//! `Completed` (queue drained or page limit reached) or `Interrupted`
//! (cancellation observed between iterations).
use std::fmt;

/// Represents the lifecycle state of a crawl session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CrawlState {
    /// Session created, nothing fetched yet
    #[default]
    Idle,

    /// The crawl loop is running
    Running,

    /// The queue emptied or the page limit was reached
    Completed,

    /// Cancellation was requested before the loop finished
    Interrupted,
}

impl CrawlState {
    /// Returns true if moving from `self` to `next` is a legal transition
    pub fn can_transition_to(&self, next: CrawlState) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::Running)
                | (Self::Running, Self::Completed)
                | (Self::Running, Self::Interrupted)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Completed => "completed",
            Self::Interrupted => "interrupted",
        }
    }
}

impl fmt::Display for CrawlState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
