//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the main crawl loop that coordinates all aspects of
//! the crawling process, including:
//! - Preparing the output directory
//! - Managing the frontier queue and visited set
//! - Coordinating fetching, conversion, saving, and link extraction
//! - Handling cancellation
//! - Collecting the final report

use crate::config::UserAgentConfig;
use crate::crawler::fetcher::{FetchError, Fetcher, HttpFetcher};
use crate::crawler::parser::{extract_links, HtmlParser, ScraperParser};
use crate::crawler::scheduler::{Frontier, Pacer};
use crate::output::{
    prepare_output_dir, save_page, CrawlReport, FileSystem, LocalFileSystem, MarkdownConverter,
};
use crate::state::{CrawlSession, CrawlState};
use crate::ScribeError;
use chrono::Utc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Pages between progress log lines
const PROGRESS_INTERVAL: u32 = 10;

/// Shared flag used to stop a crawl between iterations
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation; the crawl stops before its next URL
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Main crawler coordinator structure
///
/// The collaborators default to the real HTTP client, the `scraper` based
/// anchor parser, and the local filesystem.
pub struct Coordinator<F = HttpFetcher, P = ScraperParser, S = LocalFileSystem> {
    session: CrawlSession,
    frontier: Frontier,
    pacer: Pacer,
    fetcher: F,
    parser: P,
    converter: MarkdownConverter,
    fs: S,
    state: CrawlState,
    report: CrawlReport,
    cancel: CancelFlag,
}

impl Coordinator {
    /// Creates a coordinator that fetches over HTTP
    ///
    /// # Arguments
    ///
    /// * `session` - Settings for this crawl
    /// * `user_agent` - Client identity and request timeout
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(ScribeError)` - The HTTP client could not be built
    pub fn new(session: CrawlSession, user_agent: &UserAgentConfig) -> Result<Self, ScribeError> {
        let fetcher = HttpFetcher::from_config(user_agent)?;
        Ok(Self::with_parts(
            session,
            fetcher,
            ScraperParser,
            LocalFileSystem,
        ))
    }
}

impl<F, P, S> Coordinator<F, P, S>
where
    F: Fetcher,
    P: HtmlParser,
    S: FileSystem,
{
    /// Creates a coordinator from explicit collaborators
    pub fn with_parts(session: CrawlSession, fetcher: F, parser: P, fs: S) -> Self {
        let frontier = Frontier::new(session.seed_url(), session.enqueue_policy());
        let pacer = Pacer::new(session.delay());
        let report = CrawlReport::new(session.max_pages());

        Self {
            session,
            frontier,
            pacer,
            fetcher,
            parser,
            converter: MarkdownConverter::new(),
            fs,
            state: CrawlState::Idle,
            report,
            cancel: CancelFlag::new(),
        }
    }

    /// Returns a handle that stops this crawl when cancelled
    pub fn cancel_flag(&self) -> CancelFlag {
        self.cancel.clone()
    }

    pub fn state(&self) -> CrawlState {
        self.state
    }

    pub fn session(&self) -> &CrawlSession {
        &self.session
    }

    fn check_transition(&self, next: CrawlState) -> Result<(), ScribeError> {
        if !self.state.can_transition_to(next) {
            return Err(ScribeError::InvalidTransition {
                from: self.state,
                to: next,
            });
        }
        Ok(())
    }

    fn transition(&mut self, next: CrawlState) -> Result<(), ScribeError> {
        self.check_transition(next)?;
        tracing::debug!("Crawl state: {} -> {}", self.state, next);
        self.state = next;
        Ok(())
    }

    /// Runs the main crawl loop
    ///
    /// Each iteration:
    /// 1. Pops the queue head; already visited URLs are dropped without delay
    /// 2. Marks the URL visited, then fetches it
    /// 3. Converts and saves the page, then queues its unvisited links
    /// 4. Waits for the configured delay
    ///
    /// Fetch and write failures are logged and counted; they never abort the
    /// crawl. The loop ends when the queue is empty, the page limit is
    /// reached, or the cancel flag is set.
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlReport)` - The crawl finished or was interrupted
    /// * `Err(ScribeError)` - The output directory could not be created, or
    ///   this coordinator has already run
    pub async fn run(&mut self) -> Result<CrawlReport, ScribeError> {
        // a finished coordinator must not touch the output directory again
        self.check_transition(CrawlState::Running)?;
        prepare_output_dir(&self.fs, self.session.output_dir())?;
        self.transition(CrawlState::Running)?;

        self.report.started_at = Utc::now();
        let max_pages = self.session.max_pages();
        let mut interrupted = false;

        while !self.frontier.is_empty() && self.report.pages_processed < max_pages {
            if self.cancel.is_cancelled() {
                tracing::info!("Cancellation requested, stopping crawl");
                interrupted = true;
                break;
            }

            let Some(url) = self.frontier.pop() else {
                break;
            };

            if !self.frontier.mark_visited(&url) {
                tracing::debug!("Skipping already visited: {}", url);
                self.report.duplicates_skipped += 1;
                continue;
            }

            tracing::info!("Crawling: {} ({} queued)", url, self.frontier.len());

            match self.process_url(&url).await {
                Ok(queued) => {
                    self.report.pages_processed += 1;
                    tracing::debug!("Queued {} new links from {}", queued, url);

                    if self.report.pages_processed % PROGRESS_INTERVAL == 0 {
                        tracing::info!(
                            "Progress: {} pages processed, {} in queue",
                            self.report.pages_processed,
                            self.frontier.len()
                        );
                    }
                }
                Err(e) => {
                    tracing::warn!("Error processing {}: {}", url, e);
                    self.report.pages_failed += 1;
                }
            }

            self.pacer.pause().await;
        }

        self.transition(if interrupted {
            CrawlState::Interrupted
        } else {
            CrawlState::Completed
        })?;

        self.report.state = self.state;
        self.report.queue_remaining = self.frontier.len();
        self.report.finished_at = Some(Utc::now());

        if self.report.limit_reached() {
            tracing::info!(
                "Maximum page limit ({}) reached with {} URLs remaining in queue",
                max_pages,
                self.report.queue_remaining
            );
        }

        tracing::info!(
            "Crawl {}: {} pages processed, {} failed",
            self.state,
            self.report.pages_processed,
            self.report.pages_failed
        );
        tracing::debug!(
            "Paused {} times at {}ms",
            self.pacer.pauses(),
            self.pacer.delay().as_millis()
        );

        Ok(self.report.clone())
    }

    /// Fetches, converts, and saves one page, then queues its links
    ///
    /// Returns the number of links added to the queue.
    async fn process_url(&mut self, url: &str) -> Result<usize, ScribeError> {
        let html = self
            .fetcher
            .fetch(url)
            .await
            .map_err(|source| fetch_error(url, source))?;

        let markdown = self.converter.convert(&html);
        let page = save_page(&self.fs, self.session.output_dir(), url, markdown)?;
        self.report.saved_files.push(page.saved_filename);

        let links = extract_links(&self.parser, &html, url, &self.session);
        self.report.links_discovered += links.len();

        let mut queued = 0;
        for link in links {
            if self.frontier.enqueue(link) {
                queued += 1;
            }
        }

        Ok(queued)
    }
}

fn fetch_error(url: &str, source: FetchError) -> ScribeError {
    ScribeError::Fetch {
        url: url.to_string(),
        source,
    }
}

/// Fetches a single page and returns it as Markdown, without crawling
///
/// Unlike the crawl loop, a fetch failure is returned as an error.
///
/// # Example
///
/// ```no_run
/// use doc_scribe::config::UserAgentConfig;
/// use doc_scribe::crawler::{scrape, HttpFetcher};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let fetcher = HttpFetcher::from_config(&UserAgentConfig::default())?;
/// let markdown = scrape(&fetcher, "https://example.com/docs").await?;
/// println!("{}", markdown);
/// # Ok(())
/// # }
/// ```
pub async fn scrape<F: Fetcher + ?Sized>(fetcher: &F, url: &str) -> Result<String, ScribeError> {
    let html = fetcher
        .fetch(url)
        .await
        .map_err(|source| fetch_error(url, source))?;

    Ok(MarkdownConverter::new().convert(&html))
}
