use serde::Deserialize;

use crate::url::ChildScope;

/// Main configuration structure for doc-scribe
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Maximum number of pages to save
    #[serde(rename = "max-pages")]
    pub max_pages: u32,

    /// Only follow links that start with the seed URL
    #[serde(rename = "child-pages-only")]
    pub child_pages_only: bool,

    /// How the child page test compares against the seed URL
    #[serde(rename = "child-scope")]
    pub child_scope: ChildScope,

    /// Fixed pause after every processed URL (milliseconds)
    #[serde(rename = "delay-ms")]
    pub delay_ms: u64,

    /// Whether URLs already pending are appended to the queue again
    #[serde(rename = "enqueue-policy")]
    pub enqueue_policy: EnqueuePolicy,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_pages: 100,
            child_pages_only: false,
            child_scope: ChildScope::default(),
            delay_ms: 1000,
            enqueue_policy: EnqueuePolicy::default(),
        }
    }
}

/// Queue admission policy for newly extracted links
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EnqueuePolicy {
    /// Append every unvisited link; duplicates are dropped at dequeue time
    #[default]
    AllowDuplicates,
    /// Also reject links that are already waiting in the queue
    DedupOnEnqueue,
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// Per-request timeout enforced by the HTTP client (seconds)
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: "doc-scribe".to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory that receives the Markdown files
    pub directory: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: "output".to_string(),
        }
    }
}
