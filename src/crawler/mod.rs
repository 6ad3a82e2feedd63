//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with a single attempt per URL
//! - HTML parsing and link extraction
//! - Queue management and request pacing
//! - Overall crawl coordination

mod coordinator;
mod fetcher;
mod parser;
mod scheduler;

pub use coordinator::{scrape, CancelFlag, Coordinator};
pub use fetcher::{build_http_client, user_agent_string, FetchError, Fetcher, HttpFetcher};
pub use parser::{extract_links, Anchor, HtmlParser, ScraperParser};
pub use scheduler::{Frontier, Pacer};

use crate::config::Config;
use crate::output::CrawlReport;
use crate::state::CrawlSession;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Validate the seed URL and build the session
/// 2. Build the HTTP client
/// 3. Crawl until the queue is empty or the page limit is reached
/// 4. Return the crawl report
///
/// # Arguments
///
/// * `config` - The crawler configuration
/// * `seed_url` - The first URL to crawl
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Crawl completed successfully
/// * `Err(ScribeError)` - Setup failed
///
/// # Example
///
/// ```no_run
/// use doc_scribe::config::Config;
/// use doc_scribe::crawler::crawl;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let report = crawl(&Config::default(), "https://example.com/docs/").await?;
/// println!("Saved {} pages", report.pages_processed);
/// # Ok(())
/// # }
/// ```
pub async fn crawl(config: &Config, seed_url: &str) -> crate::Result<CrawlReport> {
    let session = CrawlSession::from_config(seed_url, config)?;
    let mut coordinator = Coordinator::new(session, &config.user_agent)?;
    coordinator.run().await
}
