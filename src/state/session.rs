use crate::config::{validate_seed_url, Config, CrawlerConfig, EnqueuePolicy};
use crate::url::{extract_domain, origin_of, ChildScope};
use crate::{ScribeError, UrlError};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Immutable settings for one crawl invocation
///
/// The seed URL is kept exactly as given: the child page test compares
/// discovered links against this literal string. The base URL is the seed's
/// own `scheme://authority` text, so root-relative links keep the seed's
/// spelling of the host.
#[derive(Debug, Clone)]
pub struct CrawlSession {
    seed_url: String,
    base_url: String,
    base_domain: String,
    output_dir: PathBuf,
    child_pages_only: bool,
    child_scope: ChildScope,
    max_pages: u32,
    delay: Duration,
    enqueue_policy: EnqueuePolicy,
}

impl CrawlSession {
    /// Creates a session for `seed_url`, writing pages into `output_dir`
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlSession)` - The seed is a valid HTTP(S) URL with a host
    /// * `Err(ScribeError)` - The seed could not be used
    pub fn new(
        seed_url: &str,
        output_dir: impl Into<PathBuf>,
        crawler: &CrawlerConfig,
    ) -> Result<Self, ScribeError> {
        let parsed = validate_seed_url(seed_url)?;
        let base_url = origin_of(seed_url)?.to_string();
        let base_domain = extract_domain(&parsed).ok_or(UrlError::MissingDomain)?;

        Ok(Self {
            seed_url: seed_url.to_string(),
            base_url,
            base_domain,
            output_dir: output_dir.into(),
            child_pages_only: crawler.child_pages_only,
            child_scope: crawler.child_scope,
            max_pages: crawler.max_pages,
            delay: Duration::from_millis(crawler.delay_ms),
            enqueue_policy: crawler.enqueue_policy,
        })
    }

    /// Creates a session from a full configuration
    pub fn from_config(seed_url: &str, config: &Config) -> Result<Self, ScribeError> {
        Self::new(seed_url, &config.output.directory, &config.crawler)
    }

    pub fn seed_url(&self) -> &str {
        &self.seed_url
    }

    /// `scheme://host[:port]` of the seed
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Lowercase host of the seed
    pub fn base_domain(&self) -> &str {
        &self.base_domain
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn child_pages_only(&self) -> bool {
        self.child_pages_only
    }

    pub fn child_scope(&self) -> ChildScope {
        self.child_scope
    }

    pub fn max_pages(&self) -> u32 {
        self.max_pages
    }

    /// Pause applied after every processed URL
    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn enqueue_policy(&self) -> EnqueuePolicy {
        self.enqueue_policy
    }
}
